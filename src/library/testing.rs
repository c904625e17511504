// SPDX-License-Identifier: GPL-3.0-only

//! Deterministic in-memory media library for tests
//!
//! Never touches the filesystem: saved assets are recorded as-is and stamped
//! with a monotonic fake clock, so recency ordering is exact and repeatable.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::capture::{MediaFile, MediaKind, PermissionStatus};
use crate::errors::{LibraryError, LibraryResult};
use crate::library::{Asset, AssetQuery, MediaLibrary};

/// In-memory media library
pub struct MemoryLibrary {
    permission: PermissionStatus,
    fail_saves: bool,
    assets: Mutex<Vec<Asset>>,
    clock: AtomicU64,
    saves_attempted: AtomicU64,
}

impl MemoryLibrary {
    /// Library that grants access and accepts saves
    pub fn new() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            fail_saves: false,
            assets: Mutex::new(Vec::new()),
            clock: AtomicU64::new(0),
            saves_attempted: AtomicU64::new(0),
        }
    }

    /// Library that denies access
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            ..Self::new()
        }
    }

    /// Library that rejects every save
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// Pre-populate `count` assets of the given kind, oldest first
    pub fn seed(&self, kind: MediaKind, count: usize) {
        for i in 0..count {
            let stamp = self.next_stamp();
            let ext = match kind {
                MediaKind::Photo => "png",
                MediaKind::Video => "gif",
            };
            self.assets.lock().unwrap().push(Asset {
                path: PathBuf::from(format!("memory/{}_{:04}.{}", kind.display_name(), i, ext)),
                kind,
                created_at: stamp,
            });
        }
    }

    /// Snapshot of everything stored, in insertion order
    pub fn stored(&self) -> Vec<Asset> {
        self.assets.lock().unwrap().clone()
    }

    /// Number of save attempts, including rejected ones
    pub fn saves_attempted(&self) -> u64 {
        self.saves_attempted.load(Ordering::SeqCst)
    }

    fn next_stamp(&self) -> SystemTime {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        UNIX_EPOCH + Duration::from_secs(tick)
    }
}

impl Default for MemoryLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaLibrary for MemoryLibrary {
    fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    fn save(&self, media: &MediaFile) -> LibraryResult<Asset> {
        self.saves_attempted.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(LibraryError::Io("scripted save failure".into()));
        }

        let asset = Asset {
            path: PathBuf::from("memory").join(
                media
                    .path
                    .file_name()
                    .ok_or_else(|| LibraryError::NotFound(media.path.display().to_string()))?,
            ),
            kind: media.kind,
            created_at: self.next_stamp(),
        };
        self.assets.lock().unwrap().push(asset.clone());
        Ok(asset)
    }

    fn recent(&self, query: &AssetQuery) -> LibraryResult<Vec<Asset>> {
        let mut assets: Vec<Asset> = self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|asset| query.matches(asset.kind))
            .cloned()
            .collect();

        assets.sort_by_key(|asset| std::cmp::Reverse(asset.created_at));
        assets.truncate(query.limit);
        Ok(assets)
    }
}
