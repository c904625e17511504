// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use cosmic::cosmic_config;
use cosmic::widget::about::About;

use crate::capture::{CaptureDevice, CaptureSettings, PermissionStatus};
use crate::config::Config;
use crate::library::{Asset, MediaLibrary};
use crate::pipelines::video::RecordingOutcome;

/// Combined access state for the capture device and the media library
///
/// The capture surface is reachable only once both grants landed. A grant
/// that resolves to `Denied` stays denied for the rest of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessGate {
    /// Camera device access
    pub camera: PermissionStatus,
    /// Media library access
    pub library: PermissionStatus,
}

impl AccessGate {
    /// Record the resolution of both access requests
    pub fn resolve(&mut self, camera: PermissionStatus, library: PermissionStatus) {
        self.camera = camera;
        self.library = library;
    }

    /// The combined status both views and capture paths key off.
    ///
    /// Denied dominates: one refusal blocks the whole surface. Otherwise the
    /// gate stays unknown until both requests resolved.
    pub fn overall(&self) -> PermissionStatus {
        if self.camera.is_denied() || self.library.is_denied() {
            PermissionStatus::Denied
        } else if self.camera.is_granted() && self.library.is_granted() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Unknown
        }
    }
}

/// Recording state machine
///
/// Simple two-state design: either recording or not.
#[derive(Debug, Default)]
pub enum RecordingState {
    /// Not recording
    #[default]
    Idle,
    /// Actively recording
    Recording {
        /// When recording started
        started_at: Instant,
        /// Channel to signal stop
        stop: Option<tokio::sync::oneshot::Sender<()>>,
    },
}

impl RecordingState {
    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Get the elapsed recording duration in seconds
    pub fn elapsed_secs(&self) -> u64 {
        match self {
            RecordingState::Idle => 0,
            RecordingState::Recording { started_at, .. } => started_at.elapsed().as_secs(),
        }
    }

    /// Take the stop sender (consumes it)
    pub fn take_stop(&mut self) -> Option<tokio::sync::oneshot::Sender<()>> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { stop, .. } => stop.take(),
        }
    }

    /// Start recording
    pub fn start(stop: tokio::sync::oneshot::Sender<()>) -> Self {
        RecordingState::Recording {
            started_at: Instant::now(),
            stop: Some(stop),
        }
    }
}

/// Transient confirmation or failure banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Localized banner text
    pub text: String,
    /// Failure notices render in the error style
    pub is_error: bool,
}

impl Notice {
    /// A confirmation notice
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// A failure notice
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Capture device behind the trait seam
    pub device: Arc<dyn CaptureDevice>,
    /// Media library behind the trait seam
    pub library: Arc<dyn MediaLibrary>,
    /// Access gate resolved once during startup
    pub access: AccessGate,
    /// Live capture settings (facing, flash, zoom)
    pub settings: CaptureSettings,
    /// Recording state (idle or recording)
    pub recording: RecordingState,
    /// Whether the white shutter overlay is showing
    pub shutter_active: bool,
    /// Most recent library assets, newest first
    pub assets: Vec<Asset>,
    /// Decoded gallery thumbnails keyed by asset path
    pub thumbnails: HashMap<PathBuf, cosmic::widget::image::Handle>,
    /// Latest viewfinder frame
    pub preview: Option<cosmic::widget::image::Handle>,
    /// Transient confirmation/failure banner
    pub notice: Option<Notice>,
    /// Stamp guarding the banner against stale auto-dismiss timers
    pub notice_seq: u64,
    /// Path of the last generated diagnostics report
    pub last_report_path: Option<PathBuf>,
    /// Draft value of the library folder text input
    pub folder_name_input: String,
    /// Theme dropdown options (cached for UI)
    pub app_theme_options: Vec<String>,
    /// Startup facing dropdown options (cached for UI)
    pub facing_options: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Startup & Access =====
    /// Both access requests resolved during startup
    AccessResolved {
        camera: PermissionStatus,
        library: PermissionStatus,
    },

    // ===== Viewfinder =====
    /// New viewfinder frame rendered by the preview stream
    PreviewRendered(cosmic::widget::image::Handle),

    // ===== Capture Operations =====
    /// Capture photo
    CapturePhoto,
    /// Clear the shutter overlay after its brief flash
    ClearShutterOverlay,
    /// Photo persisted to the library, or failed with a message
    PhotoStored(Result<Asset, String>),
    /// Toggle video recording
    ToggleRecording,
    /// Recording resolved with its terminal outcome
    RecordingFinished(RecordingOutcome),

    // ===== Capture Settings =====
    /// Swap front/back sensor
    FlipFacing,
    /// Toggle the flash
    ToggleFlash,
    /// Step zoom up
    ZoomIn,
    /// Step zoom down
    ZoomOut,

    // ===== Gallery =====
    /// Re-fetch the recent assets from the library
    ReloadGallery,
    /// Recent assets loaded
    GalleryLoaded(Result<Vec<Asset>, String>),
    /// Thumbnails decoded for a batch of assets
    ThumbnailsLoaded(Vec<(PathBuf, cosmic::widget::image::Handle)>),
    /// Open an asset with the default application
    OpenAsset(PathBuf),
    /// Open the library folder in the file manager
    OpenLibraryFolder,

    // ===== Notices =====
    /// Auto-dismiss timer for the banner with the given stamp fired
    DismissNotice(u64),

    // ===== Settings =====
    /// Configuration updated
    UpdateConfig(Config),
    /// Select application theme by dropdown index
    SetAppTheme(usize),
    /// Select startup camera facing by dropdown index
    SetDefaultFacing(usize),
    /// Library folder text input edited
    FolderNameEdited(String),
    /// Apply the edited library folder name
    ApplyFolderName,

    // ===== Diagnostics =====
    /// Generate a diagnostics report
    GenerateReport,
    /// Diagnostics report written, or failed with a message
    ReportGenerated(Result<PathBuf, String>),
    /// Open the last generated report externally
    ShowReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_unknown() {
        let gate = AccessGate::default();
        assert_eq!(gate.overall(), PermissionStatus::Unknown);
    }

    #[test]
    fn test_gate_requires_both_grants() {
        let mut gate = AccessGate::default();
        gate.resolve(PermissionStatus::Granted, PermissionStatus::Unknown);
        assert_eq!(gate.overall(), PermissionStatus::Unknown);

        gate.resolve(PermissionStatus::Granted, PermissionStatus::Granted);
        assert_eq!(gate.overall(), PermissionStatus::Granted);
    }

    #[test]
    fn test_gate_denied_dominates() {
        let mut gate = AccessGate::default();
        gate.resolve(PermissionStatus::Denied, PermissionStatus::Unknown);
        assert_eq!(gate.overall(), PermissionStatus::Denied);

        gate.resolve(PermissionStatus::Granted, PermissionStatus::Denied);
        assert_eq!(gate.overall(), PermissionStatus::Denied);

        gate.resolve(PermissionStatus::Denied, PermissionStatus::Denied);
        assert_eq!(gate.overall(), PermissionStatus::Denied);
    }

    #[test]
    fn test_recording_state_take_stop_consumes_sender() {
        let (stop_tx, mut stop_rx) = tokio::sync::oneshot::channel();
        let mut recording = RecordingState::start(stop_tx);
        assert!(recording.is_recording());

        let sender = recording.take_stop();
        assert!(sender.is_some());
        // Still recording until the state is replaced; the sender is gone
        assert!(recording.is_recording());
        assert!(recording.take_stop().is_none());

        sender
            .and_then(|tx| tx.send(()).ok())
            .expect("stop signal should deliver");
        assert!(stop_rx.try_recv().is_ok());
    }

    #[test]
    fn test_recording_state_idle_has_no_sender() {
        let mut state = RecordingState::Idle;
        assert!(!state.is_recording());
        assert!(state.take_stop().is_none());
        assert_eq!(state.elapsed_secs(), 0);
    }
}
