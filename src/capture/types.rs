// SPDX-License-Identifier: GPL-3.0-only

//! Shared capture types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{file_formats, zoom};

/// Outcome of an access request, tri-state
///
/// `Unknown` covers the window between startup and resolution; a session
/// never moves out of `Denied` without an app restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Not yet resolved
    #[default]
    Unknown,
    /// Access granted
    Granted,
    /// Access denied
    Denied,
}

impl PermissionStatus {
    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }

    /// Whether access was denied
    pub fn is_denied(&self) -> bool {
        matches!(self, PermissionStatus::Denied)
    }
}

/// Which conceptual camera sensor is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    /// User-facing (selfie) sensor
    Front,
    /// World-facing sensor
    #[default]
    Back,
}

impl CameraFacing {
    /// Both facings for UI iteration
    pub const ALL: [CameraFacing; 2] = [CameraFacing::Front, CameraFacing::Back];

    /// The other facing
    pub fn flipped(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }

    /// Get display name for the facing
    pub fn display_name(&self) -> &'static str {
        match self {
            CameraFacing::Front => "Front",
            CameraFacing::Back => "Back",
        }
    }
}

/// Whether the capture flash fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlashMode {
    /// Flash stays off
    #[default]
    Off,
    /// Flash fires during capture
    On,
}

impl FlashMode {
    /// The other mode (no auto state supported)
    pub fn toggled(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Off,
        }
    }

    /// Whether the flash fires
    pub fn is_on(&self) -> bool {
        matches!(self, FlashMode::On)
    }
}

/// Kind of a media file or library asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image
    Photo,
    /// Video clip
    Video,
}

impl MediaKind {
    /// Classify a path by its extension, if recognized
    pub fn from_path(path: &Path) -> Option<MediaKind> {
        let ext = path.extension()?.to_str()?;
        if file_formats::is_photo_extension(ext) {
            Some(MediaKind::Photo)
        } else if file_formats::is_video_extension(ext) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Get display name for the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Photo",
            MediaKind::Video => "Video",
        }
    }
}

/// Settings snapshot handed to the device for one capture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaptureSettings {
    /// Active sensor
    pub facing: CameraFacing,
    /// Flash behavior
    pub flash: FlashMode,
    /// Normalized zoom in [0.0, 1.0]
    pub zoom: f32,
}

impl CaptureSettings {
    /// Swap between the front and back sensors
    pub fn flip_facing(&mut self) {
        self.facing = self.facing.flipped();
    }

    /// Toggle the flash on or off
    pub fn toggle_flash(&mut self) {
        self.flash = self.flash.toggled();
    }

    /// Step zoom up by one increment, clamped to the upper bound.
    ///
    /// Returns whether the level actually changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.zoom + zoom::STEP).min(zoom::MAX);
        if (next - self.zoom).abs() > zoom::CHANGE_EPSILON {
            self.zoom = next;
            return true;
        }
        false
    }

    /// Step zoom down by one increment, clamped to the lower bound.
    ///
    /// Returns whether the level actually changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = (self.zoom - zoom::STEP).max(zoom::MIN);
        if (next - self.zoom).abs() > zoom::CHANGE_EPSILON {
            self.zoom = next;
            return true;
        }
        false
    }
}

/// A device-produced media file spooled on disk, awaiting library persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Location in the spool directory
    pub path: PathBuf,
    /// Photo or video
    pub kind: MediaKind,
}

impl MediaFile {
    /// File name component, lossily decoded
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut settings = CaptureSettings::default();

        for _ in 0..10 {
            assert!(settings.zoom_in());
        }
        assert_eq!(settings.zoom, zoom::MAX);

        // Already at the top, a further press changes nothing
        assert!(!settings.zoom_in());
        assert_eq!(settings.zoom, zoom::MAX);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut settings = CaptureSettings::default();
        assert_eq!(settings.zoom, zoom::MIN);

        assert!(!settings.zoom_out());
        assert_eq!(settings.zoom, zoom::MIN);

        settings.zoom = 0.25;
        assert!(settings.zoom_out());
        assert!((settings.zoom - 0.15).abs() < zoom::CHANGE_EPSILON);
    }

    #[test]
    fn test_zoom_round_trip_returns_to_start() {
        let mut settings = CaptureSettings {
            zoom: 0.5,
            ..Default::default()
        };
        assert!(settings.zoom_in());
        assert!(settings.zoom_out());
        assert!((settings.zoom - 0.5).abs() < zoom::CHANGE_EPSILON);
    }

    #[test]
    fn test_flip_facing_twice_is_identity() {
        let mut settings = CaptureSettings::default();
        let start = settings.facing;

        settings.flip_facing();
        assert_ne!(settings.facing, start);

        settings.flip_facing();
        assert_eq!(settings.facing, start);
    }

    #[test]
    fn test_toggle_flash_twice_is_identity() {
        let mut settings = CaptureSettings::default();
        assert!(!settings.flash.is_on());

        settings.toggle_flash();
        assert!(settings.flash.is_on());

        settings.toggle_flash();
        assert!(!settings.flash.is_on());
    }

    #[test]
    fn test_media_kind_from_path() {
        assert_eq!(
            MediaKind::from_path(Path::new("/tmp/IMG_1.png")),
            Some(MediaKind::Photo)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("/tmp/VID_1.gif")),
            Some(MediaKind::Video)
        );
        assert_eq!(MediaKind::from_path(Path::new("/tmp/notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("/tmp/no_extension")), None);
    }
}
