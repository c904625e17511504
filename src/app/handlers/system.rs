// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles startup access resolution, configuration changes, and diagnostics
//! reports.

use crate::app::state::{AppModel, Message, Notice};
use crate::capture::{CameraFacing, PermissionStatus};
use crate::fl;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info, warn};

impl AppModel {
    // =========================================================================
    // Access Handlers
    // =========================================================================

    /// Record the combined camera + library access resolution.
    ///
    /// Also arrives after a library folder change, carrying the unchanged
    /// camera status alongside the fresh library probe.
    pub(crate) fn handle_access_resolved(
        &mut self,
        camera: PermissionStatus,
        library: PermissionStatus,
    ) -> Task<cosmic::Action<Message>> {
        self.access.resolve(camera, library);

        match self.access.overall() {
            PermissionStatus::Granted => {
                info!("Camera and library access granted");
                Task::done(cosmic::Action::App(Message::ReloadGallery))
            }
            PermissionStatus::Denied => {
                warn!(?camera, ?library, "Access denied for this session");
                Task::none()
            }
            PermissionStatus::Unknown => Task::none(),
        }
    }

    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        use crate::config::AppTheme;

        let app_theme = match index {
            0 => AppTheme::System,
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => return Task::none(),
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save app theme setting");
        }

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_set_default_facing(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let Some(facing) = CameraFacing::ALL.get(index).copied() else {
            return Task::none();
        };

        info!(?facing, "Setting startup camera facing");
        self.config.default_facing = facing;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save startup facing setting");
        }
        Task::none()
    }

    pub(crate) fn handle_folder_name_edited(
        &mut self,
        value: String,
    ) -> Task<cosmic::Action<Message>> {
        self.folder_name_input = value;
        Task::none()
    }

    /// Apply the drafted library folder name: persist it, swap the library,
    /// and re-probe access to the new directories.
    pub(crate) fn handle_apply_folder_name(&mut self) -> Task<cosmic::Action<Message>> {
        let name = self.folder_name_input.trim().to_string();
        if name.is_empty() || name == self.config.save_folder_name {
            return Task::none();
        }

        info!(folder = %name, "Library folder changed");
        self.config.save_folder_name = name.clone();
        self.folder_name_input = name.clone();

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save library folder setting");
        }

        self.library = crate::library::default_library(&name);

        let camera = self.access.camera;
        let library = std::sync::Arc::clone(&self.library);
        Task::perform(
            async move {
                let status = tokio::task::spawn_blocking(move || library.request_permission())
                    .await
                    .unwrap_or(PermissionStatus::Denied);
                (camera, status)
            },
            |(camera, library)| cosmic::Action::App(Message::AccessResolved { camera, library }),
        )
    }

    // =========================================================================
    // Diagnostics Handlers
    // =========================================================================

    pub(crate) fn handle_generate_report(&self) -> Task<cosmic::Action<Message>> {
        info!("Generating diagnostics report...");

        let device_name = self.device.name().to_string();
        let config = self.config.clone();
        let report_dir = self.library.open_target();

        Task::perform(
            async move { crate::bug_report::generate(&device_name, &config, report_dir).await },
            |result| cosmic::Action::App(Message::ReportGenerated(result)),
        )
    }

    pub(crate) fn handle_report_generated(
        &mut self,
        result: Result<std::path::PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Diagnostics report generated");
                self.last_report_path = Some(path);

                let url = &self.config.bug_report_url;
                if let Err(err) = open::that_detached(url) {
                    error!(error = %err, url = %url, "Failed to open issue tracker");
                }
                self.push_notice(Notice::info(fl!("report-saved")))
            }
            Err(err) => {
                error!(error = %err, "Failed to generate diagnostics report");
                self.push_notice(Notice::error(fl!("report-failed")))
            }
        }
    }

    pub(crate) fn handle_show_report(&self) -> Task<cosmic::Action<Message>> {
        if let Some(path) = self.last_report_path.as_ref()
            && let Err(err) = open::that_detached(path)
        {
            error!(error = %err, path = %path.display(), "Failed to open diagnostics report");
        }
        Task::none()
    }
}
