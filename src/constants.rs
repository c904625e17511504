// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Zoom reducer constants
pub mod zoom {
    /// Fixed step applied by the zoom-in/zoom-out buttons
    pub const STEP: f32 = 0.1;

    /// Lower bound of the normalized zoom range
    pub const MIN: f32 = 0.0;

    /// Upper bound of the normalized zoom range
    pub const MAX: f32 = 1.0;

    /// Changes smaller than this are treated as no-ops
    ///
    /// Repeated presses at a bound would otherwise emit redundant state
    /// updates from float rounding noise.
    pub const CHANGE_EPSILON: f32 = 0.001;
}

/// Gallery constants
pub mod gallery {
    /// Number of most-recent assets fetched from the library
    pub const RECENT_LIMIT: usize = 20;

    /// Edge length of the square thumbnails decoded for the strip
    pub const THUMBNAIL_EDGE: u32 = 96;
}

/// Timing constants
pub mod timing {
    /// Duration of the white shutter overlay after a photo press
    pub const SHUTTER_OVERLAY_MS: u64 = 150;

    /// How long a confirmation/failure notice stays on screen
    pub const NOTICE_DISMISS_MS: u64 = 2500;
}

/// Built-in synthetic capture device constants
pub mod synthetic {
    use super::Duration;

    /// Width of synthesized frames
    pub const FRAME_WIDTH: u32 = 1280;

    /// Height of synthesized frames
    pub const FRAME_HEIGHT: u32 = 720;

    /// Interval between recorded clip frames (10 fps keeps clips small)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

    /// Edge length of the moving checker tile in the test pattern
    pub const PATTERN_TILE: u32 = 80;

    /// Brightness boost applied to the pattern when flash is on
    pub const FLASH_BOOST: u8 = 72;
}

/// Media library constants
pub mod library {
    /// Default folder name under the XDG Pictures/Videos directories
    pub const DEFAULT_FOLDER: &str = "Viewfinder";
}

/// Spool directory for device-produced files awaiting library persistence
pub mod spool {
    /// Subdirectory of the user cache dir
    pub const DIR_NAME: &str = "viewfinder";
}

/// UI Constants
pub mod ui {
    /// Capture button size (outer)
    pub const CAPTURE_BUTTON_OUTER: f32 = 60.0;

    /// Capture button size (inner)
    pub const CAPTURE_BUTTON_INNER: f32 = 50.0;

    /// Capture button border radius
    pub const CAPTURE_BUTTON_RADIUS: f32 = 25.0;

    /// Overlay button/container background transparency (0.0 = transparent, 1.0 = opaque)
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;

    /// Facing flip button edge length
    pub const FLIP_BUTTON_EDGE: f32 = 52.0;

    /// Edge length of gallery strip thumbnails
    pub const STRIP_THUMB_EDGE: f32 = 64.0;

    /// Width reserved for the zoom readout between the zoom buttons
    pub const ZOOM_LABEL_WIDTH: f32 = 32.0;

    /// Zoom readout text size
    pub const ZOOM_LABEL_TEXT_SIZE: u16 = 12;

    /// Notice banner text size
    pub const NOTICE_TEXT_SIZE: u16 = 14;
}

/// Supported file formats for library classification
pub mod file_formats {
    /// Photo file extensions
    pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

    /// Video file extensions (animated GIF is what the built-in device records)
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "mov", "gif"];

    /// Check if a file extension is a recognized photo format
    pub fn is_photo_extension(ext: &str) -> bool {
        PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str())
    }

    /// Check if a file extension is a recognized video format
    pub fn is_video_extension(ext: &str) -> bool {
        VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str())
    }
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }

    /// Get the runtime environment string (e.g., "Flatpak" or "Native")
    pub fn runtime_environment() -> &'static str {
        if is_flatpak() { "Flatpak" } else { "Native" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_classification() {
        assert!(file_formats::is_photo_extension("PNG"));
        assert!(file_formats::is_photo_extension("jpeg"));
        assert!(!file_formats::is_photo_extension("gif"));
        assert!(file_formats::is_video_extension("gif"));
        assert!(file_formats::is_video_extension("mp4"));
        assert!(!file_formats::is_video_extension("txt"));
    }
}
