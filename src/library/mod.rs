// SPDX-License-Identifier: GPL-3.0-only

//! Media library abstraction
//!
//! The library owns permission to, and persistence in, the user's photo and
//! video collection. The app ships a folder-backed provider over the XDG
//! Pictures/Videos directories; tests substitute an in-memory one.

pub mod folder;
pub mod testing;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use crate::capture::{MediaFile, MediaKind, PermissionStatus};
use crate::constants::gallery;
use crate::errors::LibraryResult;

/// A stored photo or video managed by the library
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Location in the library (doubles as the asset identifier)
    pub path: PathBuf,
    /// Photo or video
    pub kind: MediaKind,
    /// Creation time, best effort (falls back to modification time)
    pub created_at: SystemTime,
}

impl Asset {
    /// File name component, lossily decoded
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Query for the most recent library assets
#[derive(Debug, Clone, PartialEq)]
pub struct AssetQuery {
    /// Kinds to include
    pub kinds: Vec<MediaKind>,
    /// Maximum number of assets returned
    pub limit: usize,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            kinds: vec![MediaKind::Photo, MediaKind::Video],
            limit: gallery::RECENT_LIMIT,
        }
    }
}

impl AssetQuery {
    /// Whether the query includes the given kind
    pub fn matches(&self, kind: MediaKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Media library trait
///
/// Providers must be shareable across tasks; all methods may block on I/O,
/// so callers on the UI runtime route them through `spawn_blocking`.
pub trait MediaLibrary: Send + Sync {
    /// Probe for library access
    ///
    /// Resolves once per session; `Denied` is terminal until restart.
    fn request_permission(&self) -> PermissionStatus;

    /// Persist a spooled media file into the library
    ///
    /// Consumes the spool file on success (move semantics).
    fn save(&self, media: &MediaFile) -> LibraryResult<Asset>;

    /// The most recent assets matching the query, newest first
    ///
    /// Ties on identical timestamps keep the provider's scan order.
    fn recent(&self, query: &AssetQuery) -> LibraryResult<Vec<Asset>>;

    /// Directory to reveal when the user opens the library externally
    fn open_target(&self) -> Option<PathBuf> {
        None
    }
}

/// Get the folder-backed library for the configured folder name
pub fn default_library(folder_name: &str) -> Arc<dyn MediaLibrary> {
    Arc::new(folder::FolderLibrary::new(folder_name))
}
