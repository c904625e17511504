// SPDX-License-Identifier: GPL-3.0-only

//! Built-in synthetic capture device
//!
//! Produces deterministic test-pattern media without touching real hardware:
//! stills are spooled as PNG, clips as animated GIF. The recording worker is
//! a dedicated thread that polls its stop channel between frames, so a stop
//! signal (or a dropped sender) finalizes the clip within one frame interval.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use chrono::Local;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::capture::{CaptureDevice, CaptureSettings, MediaFile, MediaKind, RecordingSession};
use crate::constants::{spool, synthetic};
use crate::errors::{DeviceError, DeviceResult};

/// Test-pattern capture device
pub struct SyntheticDevice {
    spool_dir: PathBuf,
    recording: Arc<AtomicBool>,
}

impl SyntheticDevice {
    /// Create a device spooling into the user cache directory
    pub fn new() -> Self {
        let spool_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(spool::DIR_NAME);
        Self::with_spool_dir(spool_dir)
    }

    /// Create a device spooling into an explicit directory
    pub fn with_spool_dir(spool_dir: PathBuf) -> Self {
        Self {
            spool_dir,
            recording: Arc::new(AtomicBool::new(false)),
        }
    }

    fn ensure_spool_dir(&self) -> DeviceResult<()> {
        std::fs::create_dir_all(&self.spool_dir)?;
        Ok(())
    }

    fn stamped_path(&self, prefix: &str, extension: &str) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S_%3f");
        self.spool_dir
            .join(format!("{}_{}.{}", prefix, stamp, extension))
    }
}

impl Default for SyntheticDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureDevice for SyntheticDevice {
    fn name(&self) -> &str {
        "Synthetic test pattern"
    }

    fn capture_photo(&self, settings: &CaptureSettings) -> DeviceResult<Option<MediaFile>> {
        self.ensure_spool_dir()?;

        let tick = (Local::now().timestamp_millis() / 100) as u32;
        let image = render_frame(settings, tick);

        let path = self.stamped_path("IMG", "png");
        image.save(&path)?;

        info!(path = %path.display(), "Spooled synthetic still");
        Ok(Some(MediaFile {
            path,
            kind: MediaKind::Photo,
        }))
    }

    fn start_recording(&self, settings: &CaptureSettings) -> DeviceResult<RecordingSession> {
        if self
            .recording
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DeviceError::Busy);
        }

        if let Err(err) = self.ensure_spool_dir() {
            self.recording.store(false, Ordering::SeqCst);
            return Err(err);
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let (finished_tx, finished_rx) = oneshot::channel();

        let path = self.stamped_path("VID", "gif");
        let settings = *settings;
        let recording = Arc::clone(&self.recording);

        thread::Builder::new()
            .name("synthetic-recorder".into())
            .spawn(move || {
                let outcome = record_clip(path, settings, stop_rx);
                recording.store(false, Ordering::SeqCst);
                // Receiver may be gone if the app shut down mid-recording
                let _ = finished_tx.send(outcome);
            })
            .map_err(|e| {
                self.recording.store(false, Ordering::SeqCst);
                DeviceError::Other(format!("Failed to spawn recorder thread: {}", e))
            })?;

        debug!(facing = ?settings.facing, zoom = settings.zoom, "Recording worker started");
        Ok(RecordingSession {
            stop: stop_tx,
            finished: finished_rx,
        })
    }
}

/// Record pattern frames into an animated GIF until the stop signal fires.
///
/// A closed stop channel counts as a stop, so dropping the session also
/// finalizes the clip. Zero encoded frames resolve as `Ok(None)`.
fn record_clip(
    path: PathBuf,
    settings: CaptureSettings,
    mut stop_rx: oneshot::Receiver<()>,
) -> DeviceResult<Option<MediaFile>> {
    let file = File::create(&path)?;
    let mut encoder = GifEncoder::new_with_speed(file, 10);
    if let Err(err) = encoder.set_repeat(Repeat::Infinite) {
        discard_partial(&path);
        return Err(DeviceError::Encode(err.to_string()));
    }

    let delay = Delay::from_numer_denom_ms(synthetic::FRAME_INTERVAL.as_millis() as u32, 1);
    let mut tick = 0u32;

    loop {
        match stop_rx.try_recv() {
            Ok(()) | Err(TryRecvError::Closed) => break,
            Err(TryRecvError::Empty) => {}
        }

        let image = render_frame(&settings, tick);
        let frame = Frame::from_parts(image, 0, 0, delay);
        if let Err(err) = encoder.encode_frame(frame) {
            discard_partial(&path);
            return Err(DeviceError::Encode(err.to_string()));
        }

        tick += 1;
        thread::sleep(synthetic::FRAME_INTERVAL);
    }

    drop(encoder);

    if tick == 0 {
        // Stopped before the first frame landed
        discard_partial(&path);
        return Ok(None);
    }

    info!(path = %path.display(), frames = tick, "Spooled synthetic clip");
    Ok(Some(MediaFile {
        path,
        kind: MediaKind::Video,
    }))
}

fn discard_partial(path: &std::path::Path) {
    if let Err(err) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "Failed to discard partial clip");
    }
}

/// Render one test-pattern frame for the given settings and animation tick.
///
/// The pattern is a drifting checkerboard: zoom widens the tiles, the front
/// facing mirrors the drift, and flash lifts the brightness.
pub fn render_frame(settings: &CaptureSettings, tick: u32) -> RgbaImage {
    let width = synthetic::FRAME_WIDTH;
    let height = synthetic::FRAME_HEIGHT;
    let tile = (synthetic::PATTERN_TILE as f32 * (1.0 + settings.zoom)) as u32;
    let tile = tile.max(1);

    let mirrored = matches!(settings.facing, crate::capture::CameraFacing::Front);
    let boost = if settings.flash.is_on() {
        synthetic::FLASH_BOOST
    } else {
        0
    };

    RgbaImage::from_fn(width, height, |x, y| {
        let x = if mirrored { width - 1 - x } else { x };
        let drift = (tick * 4) % tile;
        let cell = ((x + drift) / tile + y / tile) % 2;

        let (r, g, b) = match (cell, mirrored) {
            (0, false) => (24u8, 52u8, 84u8),
            (_, false) => (56u8, 118u8, 170u8),
            (0, true) => (84u8, 52u8, 24u8),
            (_, true) => (170u8, 118u8, 56u8),
        };

        Rgba([
            r.saturating_add(boost),
            g.saturating_add(boost),
            b.saturating_add(boost),
            255,
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{CameraFacing, FlashMode};

    #[test]
    fn test_pattern_is_deterministic() {
        let settings = CaptureSettings::default();
        assert_eq!(render_frame(&settings, 7), render_frame(&settings, 7));
    }

    #[test]
    fn test_flash_brightens_pattern() {
        let plain = CaptureSettings::default();
        let flashed = CaptureSettings {
            flash: FlashMode::On,
            ..plain
        };
        let p = render_frame(&plain, 0);
        let f = render_frame(&flashed, 0);
        assert!(f.get_pixel(0, 0).0[0] > p.get_pixel(0, 0).0[0]);
    }

    #[test]
    fn test_front_facing_mirrors_pattern() {
        let back = CaptureSettings::default();
        let front = CaptureSettings {
            facing: CameraFacing::Front,
            ..back
        };
        assert_ne!(render_frame(&back, 3), render_frame(&front, 3));
    }
}
