// SPDX-License-Identifier: GPL-3.0-only

//! Thumbnail loading for the gallery strip

use std::path::PathBuf;

use tracing::debug;

use crate::constants::gallery;
use crate::library::Asset;

/// Decode square-bounded thumbnails for a batch of assets.
///
/// Decoding happens on the blocking pool; assets whose bytes the `image`
/// crate cannot read (e.g. foreign video containers) are skipped and keep
/// their placeholder in the strip. Results are keyed by asset path.
pub async fn load_thumbnails(
    assets: Vec<Asset>,
) -> Vec<(PathBuf, cosmic::widget::image::Handle)> {
    let loaded = tokio::task::spawn_blocking(move || {
        let mut handles = Vec::with_capacity(assets.len());
        for asset in assets {
            let Ok(bytes) = std::fs::read(&asset.path) else {
                debug!(path = %asset.path.display(), "Unreadable asset, skipping thumbnail");
                continue;
            };
            let Ok(img) = image::load_from_memory(&bytes) else {
                debug!(path = %asset.path.display(), "Undecodable asset, keeping placeholder");
                continue;
            };

            let thumb = img
                .thumbnail(gallery::THUMBNAIL_EDGE, gallery::THUMBNAIL_EDGE)
                .to_rgba8();
            let (width, height) = thumb.dimensions();
            let handle =
                cosmic::widget::image::Handle::from_rgba(width, height, thumb.into_raw());
            handles.push((asset.path, handle));
        }
        handles
    })
    .await;

    match loaded {
        Ok(handles) => {
            debug!(count = handles.len(), "Loaded gallery thumbnails");
            handles
        }
        Err(_) => Vec::new(),
    }
}
