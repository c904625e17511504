// SPDX-License-Identifier: GPL-3.0-only

//! Recording finalization flow
//!
//! Consumes the `finished` side of a [`RecordingSession`]: waits for the
//! device worker's outcome, persists a produced clip, and folds every exit
//! path into a [`RecordingOutcome`]. The flow always resolves, so the app's
//! recording state cleanup is guaranteed regardless of how the clip ended.
//!
//! [`RecordingSession`]: crate::capture::RecordingSession

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task;
use tracing::{debug, info};

use crate::capture::MediaFile;
use crate::errors::DeviceResult;
use crate::library::{Asset, MediaLibrary};

/// How a recording ended, mapped one-to-one onto user notices
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingOutcome {
    /// Clip persisted to the library
    Saved(Asset),
    /// The device resolved without producing a clip
    Empty,
    /// The device or the save failed; detail for the log
    Failed(String),
}

/// Await the device worker and persist whatever it produced.
pub async fn finish_recording(
    finished: oneshot::Receiver<DeviceResult<Option<MediaFile>>>,
    library: Arc<dyn MediaLibrary>,
) -> RecordingOutcome {
    let resolved = match finished.await {
        Ok(resolved) => resolved,
        Err(_) => return RecordingOutcome::Failed("recorder dropped without resolving".into()),
    };

    let file = match resolved {
        Ok(Some(file)) => file,
        Ok(None) => {
            debug!("Recording resolved empty");
            return RecordingOutcome::Empty;
        }
        Err(err) => return RecordingOutcome::Failed(err.to_string()),
    };
    debug!(file = %file.path.display(), "Clip spooled, persisting");

    let saved = task::spawn_blocking(move || library.save(&file)).await;
    match saved {
        Ok(Ok(asset)) => {
            info!(path = %asset.path.display(), "Video stored");
            RecordingOutcome::Saved(asset)
        }
        Ok(Err(err)) => RecordingOutcome::Failed(err.to_string()),
        Err(err) => RecordingOutcome::Failed(format!("save task aborted: {}", err)),
    }
}
