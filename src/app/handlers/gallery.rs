// SPDX-License-Identifier: GPL-3.0-only

//! Gallery handlers
//!
//! Handles loading the recent-assets strip, thumbnail decoding, and opening
//! assets or the library folder externally.

use crate::app::state::{AppModel, Message};
use crate::library::AssetQuery;
use cosmic::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

impl AppModel {
    // =========================================================================
    // Gallery Handlers
    // =========================================================================

    /// Re-fetch the recent assets after a successful capture or folder change
    pub(crate) fn handle_reload_gallery(&self) -> Task<cosmic::Action<Message>> {
        if !self.access.library.is_granted() {
            debug!("Gallery reload skipped without library access");
            return Task::none();
        }

        let library = Arc::clone(&self.library);
        let query = AssetQuery::default();

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || library.recent(&query))
                    .await
                    .map_err(|err| format!("scan task aborted: {}", err))
                    .and_then(|result| result.map_err(|err| err.to_string()))
            },
            |result| cosmic::Action::App(Message::GalleryLoaded(result)),
        )
    }

    pub(crate) fn handle_gallery_loaded(
        &mut self,
        result: Result<Vec<crate::library::Asset>, String>,
    ) -> Task<cosmic::Action<Message>> {
        let assets = match result {
            Ok(assets) => assets,
            Err(err) => {
                // Keep showing the previous list rather than flashing empty
                warn!(error = %err, "Failed to load recent assets");
                return Task::none();
            }
        };

        info!(count = assets.len(), "Recent assets loaded");
        self.thumbnails
            .retain(|path, _| assets.iter().any(|asset| asset.path == *path));

        let missing: Vec<crate::library::Asset> = assets
            .iter()
            .filter(|asset| !self.thumbnails.contains_key(&asset.path))
            .cloned()
            .collect();
        self.assets = assets;

        if missing.is_empty() {
            return Task::none();
        }

        Task::perform(
            async move { crate::storage::load_thumbnails(missing).await },
            |thumbnails| cosmic::Action::App(Message::ThumbnailsLoaded(thumbnails)),
        )
    }

    pub(crate) fn handle_thumbnails_loaded(
        &mut self,
        thumbnails: Vec<(PathBuf, cosmic::widget::image::Handle)>,
    ) -> Task<cosmic::Action<Message>> {
        for (path, handle) in thumbnails {
            self.thumbnails.insert(path, handle);
        }
        Task::none()
    }

    pub(crate) fn handle_open_asset(&self, path: PathBuf) -> Task<cosmic::Action<Message>> {
        info!(path = %path.display(), "Opening asset");
        if let Err(err) = open::that_detached(&path) {
            error!(error = %err, path = %path.display(), "Failed to open asset");
        }
        Task::none()
    }

    pub(crate) fn handle_open_library_folder(&self) -> Task<cosmic::Action<Message>> {
        match self.library.open_target() {
            Some(dir) => {
                info!(path = %dir.display(), "Opening library folder");
                if let Err(err) = open::that_detached(&dir) {
                    error!(error = %err, path = %dir.display(), "Failed to open library folder");
                }
            }
            None => debug!("Library has no browsable folder"),
        }
        Task::none()
    }
}
