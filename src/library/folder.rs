// SPDX-License-Identifier: GPL-3.0-only

//! Folder-backed media library over the XDG user directories
//!
//! Photos land under `~/Pictures/<folder>`, videos under `~/Videos/<folder>`.
//! Access is probed by creating the directories and verifying writability;
//! a failed probe maps to a denied permission for the session.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::capture::{MediaFile, MediaKind, PermissionStatus};
use crate::errors::{LibraryError, LibraryResult};
use crate::library::{Asset, AssetQuery, MediaLibrary};

/// Media library rooted in the user's Pictures and Videos directories
pub struct FolderLibrary {
    photo_dir: PathBuf,
    video_dir: PathBuf,
}

impl FolderLibrary {
    /// Create a library under the XDG user dirs with the given folder name
    pub fn new(folder_name: &str) -> Self {
        let photo_dir = dirs::picture_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join(folder_name);
        let video_dir = dirs::video_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join(folder_name);
        Self {
            photo_dir,
            video_dir,
        }
    }

    /// Create a library over explicit directories
    pub fn with_dirs(photo_dir: PathBuf, video_dir: PathBuf) -> Self {
        Self {
            photo_dir,
            video_dir,
        }
    }

    /// Directory that photo assets land in
    pub fn photo_dir(&self) -> &Path {
        &self.photo_dir
    }

    /// Directory that video assets land in
    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    fn dir_for(&self, kind: MediaKind) -> &Path {
        match kind {
            MediaKind::Photo => &self.photo_dir,
            MediaKind::Video => &self.video_dir,
        }
    }

    /// Verify a directory exists and is writable
    fn probe_dir(dir: &Path) -> bool {
        if let Err(err) = fs::create_dir_all(dir) {
            warn!(dir = %dir.display(), error = %err, "Cannot create library directory");
            return false;
        }

        let probe = dir.join(format!(".probe-{}", uuid::Uuid::new_v4()));
        match fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&probe)
        {
            Ok(_) => {
                if let Err(err) = fs::remove_file(&probe) {
                    warn!(path = %probe.display(), error = %err, "Failed to remove probe file");
                }
                true
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Library directory not writable");
                false
            }
        }
    }

    fn scan_dir(dir: &Path, query: &AssetQuery, out: &mut Vec<Asset>) -> LibraryResult<()> {
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(kind) = MediaKind::from_path(&path) else {
                continue;
            };
            if !query.matches(kind) {
                continue;
            }
            let created_at = entry
                .metadata()
                .map(|meta| asset_time(&meta))
                .unwrap_or(UNIX_EPOCH);
            out.push(Asset {
                path,
                kind,
                created_at,
            });
        }

        Ok(())
    }
}

impl MediaLibrary for FolderLibrary {
    fn request_permission(&self) -> PermissionStatus {
        let ok = Self::probe_dir(&self.photo_dir) && Self::probe_dir(&self.video_dir);
        if ok {
            debug!(
                photos = %self.photo_dir.display(),
                videos = %self.video_dir.display(),
                "Library directories ready"
            );
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn save(&self, media: &MediaFile) -> LibraryResult<Asset> {
        if !media.path.exists() {
            return Err(LibraryError::NotFound(media.path.display().to_string()));
        }

        let dir = self.dir_for(media.kind);
        fs::create_dir_all(dir)?;

        let file_name = media
            .path
            .file_name()
            .ok_or_else(|| LibraryError::NotFound(media.path.display().to_string()))?;
        let dest = dir.join(file_name);

        // Rename within a filesystem, copy+remove across
        if fs::rename(&media.path, &dest).is_err() {
            fs::copy(&media.path, &dest)?;
            if let Err(err) = fs::remove_file(&media.path) {
                warn!(path = %media.path.display(), error = %err, "Failed to clean spool file");
            }
        }

        let created_at = fs::metadata(&dest)
            .map(|meta| asset_time(&meta))
            .unwrap_or_else(|_| SystemTime::now());

        info!(path = %dest.display(), kind = media.kind.display_name(), "Saved to library");
        Ok(Asset {
            path: dest,
            kind: media.kind,
            created_at,
        })
    }

    fn recent(&self, query: &AssetQuery) -> LibraryResult<Vec<Asset>> {
        let mut assets = Vec::new();
        Self::scan_dir(&self.photo_dir, query, &mut assets)?;
        // The two dirs coincide when XDG lookup fell back to $HOME
        if self.video_dir != self.photo_dir {
            Self::scan_dir(&self.video_dir, query, &mut assets)?;
        }

        assets.sort_by_key(|asset| std::cmp::Reverse(asset.created_at));
        assets.truncate(query.limit);

        debug!(count = assets.len(), "Scanned recent assets");
        Ok(assets)
    }

    fn open_target(&self) -> Option<PathBuf> {
        Some(self.photo_dir.clone())
    }
}

/// Creation time where the filesystem records it, else modification time
fn asset_time(meta: &fs::Metadata) -> SystemTime {
    meta.created()
        .or_else(|_| meta.modified())
        .unwrap_or(UNIX_EPOCH)
}
