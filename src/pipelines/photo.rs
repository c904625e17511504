// SPDX-License-Identifier: GPL-3.0-only

//! Still capture flow: device capture, then library persistence

use std::sync::Arc;

use tokio::task;
use tracing::{debug, info};

use crate::capture::{CaptureDevice, CaptureSettings};
use crate::errors::PhotoError;
use crate::library::{Asset, MediaLibrary};

/// Capture one still and persist it to the library.
///
/// The two hops run sequentially on the blocking pool. A device that
/// resolves without output maps to [`PhotoError::NothingCaptured`]; device
/// and library faults carry their detail through.
pub async fn capture_and_store(
    device: Arc<dyn CaptureDevice>,
    library: Arc<dyn MediaLibrary>,
    settings: CaptureSettings,
) -> Result<Asset, PhotoError> {
    info!(facing = ?settings.facing, zoom = settings.zoom, "Capturing photo");

    let spooled = task::spawn_blocking(move || device.capture_photo(&settings))
        .await
        .map_err(|e| PhotoError::Device(format!("capture task aborted: {}", e)))??;

    let Some(file) = spooled else {
        return Err(PhotoError::NothingCaptured);
    };
    debug!(file = %file.path.display(), "Still spooled, persisting");

    let asset = task::spawn_blocking(move || library.save(&file))
        .await
        .map_err(|e| PhotoError::Store(format!("save task aborted: {}", e)))??;

    info!(path = %asset.path.display(), "Photo stored");
    Ok(asset)
}
