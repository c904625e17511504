// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles photo capture, video recording, and the live capture settings
//! (facing, flash, zoom).

use crate::app::state::{AppModel, Message, Notice, RecordingState};
use crate::constants::timing;
use crate::fl;
use crate::pipelines::video::RecordingOutcome;
use cosmic::Task;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl AppModel {
    // =========================================================================
    // Capture Operations Handlers
    // =========================================================================

    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Capture a photo with the current settings and persist it
    pub(crate) fn handle_capture_photo(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.access.overall().is_granted() {
            debug!("Photo capture ignored before access was granted");
            return Task::none();
        }
        if self.recording.is_recording() {
            debug!("Photo capture ignored while recording");
            return Task::none();
        }

        info!("Capturing photo...");
        self.shutter_active = true;

        let device = Arc::clone(&self.device);
        let library = Arc::clone(&self.library);
        let settings = self.settings;

        let save_task = Task::perform(
            async move {
                crate::pipelines::photo::capture_and_store(device, library, settings)
                    .await
                    .map_err(|err| err.to_string())
            },
            |result| cosmic::Action::App(Message::PhotoStored(result)),
        );

        let overlay_task =
            Self::delay_task(timing::SHUTTER_OVERLAY_MS, Message::ClearShutterOverlay);
        Task::batch([save_task, overlay_task])
    }

    pub(crate) fn handle_clear_shutter_overlay(&mut self) -> Task<cosmic::Action<Message>> {
        self.shutter_active = false;
        Task::none()
    }

    pub(crate) fn handle_photo_stored(
        &mut self,
        result: Result<crate::library::Asset, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(asset) => {
                info!(path = %asset.path.display(), "Photo saved successfully");
                let notice_task = self.push_notice(Notice::info(fl!("photo-saved")));
                let reload_task = Task::done(cosmic::Action::App(Message::ReloadGallery));
                Task::batch([notice_task, reload_task])
            }
            Err(err) => {
                // A failed capture surfaces as a banner, never as a crash
                error!(error = %err, "Failed to save photo");
                self.push_notice(Notice::error(fl!("photo-failed")))
            }
        }
    }

    /// Toggle video recording.
    ///
    /// Stopping is optimistic: the stop signal is fire-and-forget and the
    /// state drops to idle immediately, while the recording task keeps
    /// running until it delivers [`Message::RecordingFinished`].
    pub(crate) fn handle_toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if self.recording.is_recording() {
            if let Some(sender) = self.recording.take_stop() {
                info!("Sending stop signal to recorder");
                let _ = sender.send(());
            }
            self.recording = RecordingState::Idle;
            return Task::none();
        }

        if !self.access.overall().is_granted() {
            debug!("Recording ignored before access was granted");
            return Task::none();
        }

        self.begin_recording()
    }

    /// Start a recording session on the device and watch it to completion.
    fn begin_recording(&mut self) -> Task<cosmic::Action<Message>> {
        let device = Arc::clone(&self.device);
        let library = Arc::clone(&self.library);
        let settings = self.settings;

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.recording = RecordingState::start(stop_tx);
        info!(facing = ?settings.facing, "Starting video recording");

        Task::perform(
            async move {
                let started =
                    tokio::task::spawn_blocking(move || device.start_recording(&settings)).await;

                let session = match started {
                    Ok(Ok(session)) => session,
                    Ok(Err(err)) => return RecordingOutcome::Failed(err.to_string()),
                    Err(err) => {
                        return RecordingOutcome::Failed(format!("start task aborted: {}", err));
                    }
                };

                // A dropped UI sender counts as a stop request
                let _ = stop_rx.await;
                let _ = session.stop.send(());

                crate::pipelines::video::finish_recording(session.finished, library).await
            },
            |outcome| cosmic::Action::App(Message::RecordingFinished(outcome)),
        )
    }

    pub(crate) fn handle_recording_finished(
        &mut self,
        outcome: RecordingOutcome,
    ) -> Task<cosmic::Action<Message>> {
        self.recording = RecordingState::Idle;

        match outcome {
            RecordingOutcome::Saved(asset) => {
                info!(path = %asset.path.display(), "Recording saved successfully");
                let notice_task = self.push_notice(Notice::info(fl!("video-saved")));
                let reload_task = Task::done(cosmic::Action::App(Message::ReloadGallery));
                Task::batch([notice_task, reload_task])
            }
            RecordingOutcome::Empty => {
                info!("Recording finished without producing a clip");
                self.push_notice(Notice::info(fl!("video-empty")))
            }
            RecordingOutcome::Failed(err) => {
                error!(error = %err, "Failed to record video");
                self.push_notice(Notice::error(fl!("video-failed")))
            }
        }
    }

    // =========================================================================
    // Capture Settings Handlers
    // =========================================================================

    pub(crate) fn handle_flip_facing(&mut self) -> Task<cosmic::Action<Message>> {
        self.settings.flip_facing();
        debug!(facing = ?self.settings.facing, "Facing flipped");
        Task::none()
    }

    pub(crate) fn handle_toggle_flash(&mut self) -> Task<cosmic::Action<Message>> {
        self.settings.toggle_flash();
        debug!(flash = ?self.settings.flash, "Flash toggled");
        Task::none()
    }

    pub(crate) fn handle_zoom_in(&mut self) -> Task<cosmic::Action<Message>> {
        if self.settings.zoom_in() {
            debug!(zoom = self.settings.zoom, "Zoom in");
        }
        Task::none()
    }

    pub(crate) fn handle_zoom_out(&mut self) -> Task<cosmic::Action<Message>> {
        if self.settings.zoom_out() {
            debug!(zoom = self.settings.zoom, "Zoom out");
        }
        Task::none()
    }

    // =========================================================================
    // Viewfinder Handlers
    // =========================================================================

    pub(crate) fn handle_preview_rendered(
        &mut self,
        handle: cosmic::widget::image::Handle,
    ) -> Task<cosmic::Action<Message>> {
        if self.access.overall().is_granted() {
            self.preview = Some(handle);
        } else {
            warn!("Dropping viewfinder frame delivered before access was granted");
        }
        Task::none()
    }
}
