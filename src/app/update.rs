// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused
//! handler methods. The main `update()` function acts as a dispatcher, while
//! specific handlers are implemented in the `handlers` submodules organized
//! by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: UI navigation, context pages, notices
//! - `handlers::capture`: Photo capture, video recording, capture settings
//! - `handlers::gallery`: Asset loading, thumbnails, external opens
//! - `handlers::system`: Access resolution, configuration, diagnostics

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// This dispatcher pattern keeps the main update function clean and makes
    /// it easy to find the handling code for any message type.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::DismissNotice(seq) => self.handle_dismiss_notice(seq),

            // ===== Startup & Access =====
            Message::AccessResolved { camera, library } => {
                self.handle_access_resolved(camera, library)
            }

            // ===== Viewfinder =====
            Message::PreviewRendered(handle) => self.handle_preview_rendered(handle),

            // ===== Capture Operations =====
            Message::CapturePhoto => self.handle_capture_photo(),
            Message::ClearShutterOverlay => self.handle_clear_shutter_overlay(),
            Message::PhotoStored(result) => self.handle_photo_stored(result),
            Message::ToggleRecording => self.handle_toggle_recording(),
            Message::RecordingFinished(outcome) => self.handle_recording_finished(outcome),

            // ===== Capture Settings =====
            Message::FlipFacing => self.handle_flip_facing(),
            Message::ToggleFlash => self.handle_toggle_flash(),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),

            // ===== Gallery =====
            Message::ReloadGallery => self.handle_reload_gallery(),
            Message::GalleryLoaded(result) => self.handle_gallery_loaded(result),
            Message::ThumbnailsLoaded(thumbnails) => self.handle_thumbnails_loaded(thumbnails),
            Message::OpenAsset(path) => self.handle_open_asset(path),
            Message::OpenLibraryFolder => self.handle_open_library_folder(),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SetDefaultFacing(index) => self.handle_set_default_facing(index),
            Message::FolderNameEdited(value) => self.handle_folder_name_edited(value),
            Message::ApplyFolderName => self.handle_apply_folder_name(),

            // ===== Diagnostics =====
            Message::GenerateReport => self.handle_generate_report(),
            Message::ReportGenerated(result) => self.handle_report_generated(result),
            Message::ShowReport => self.handle_show_report(),
        }
    }
}
