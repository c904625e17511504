// SPDX-License-Identifier: GPL-3.0-only

//! Capture device abstraction
//!
//! This module provides the trait seam between the UI and whatever produces
//! photo and video files. The app ships one concrete device, a synthetic
//! test-pattern source; anything that can spool media files to disk can stand
//! behind the same trait (the test suite substitutes a scripted fake).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CaptureDevice Trait │  ← Common interface
//! └──────────┬──────────┘
//!            │
//!       ┌────┴─────┐
//!       ▼          ▼
//! ┌──────────┐ ┌──────────┐
//! │Synthetic │ │Scripted  │  ← Concrete implementations
//! │  Device  │ │ (tests)  │
//! └──────────┘ └──────────┘
//! ```

pub mod synthetic;
pub mod testing;
pub mod types;

pub use types::*;

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::errors::DeviceResult;

/// An in-flight video recording handed out by [`CaptureDevice::start_recording`].
///
/// The device keeps recording until `stop` fires (or is dropped); `finished`
/// resolves exactly once with the outcome. Stopping is fire-and-forget by
/// construction: sending on a oneshot channel never waits for the worker.
pub struct RecordingSession {
    /// Signal the device to finish the clip
    pub stop: oneshot::Sender<()>,
    /// Resolves with the spooled clip, `Ok(None)` when nothing was recorded
    pub finished: oneshot::Receiver<DeviceResult<Option<MediaFile>>>,
}

/// Capture device trait
///
/// All capture devices must implement this trait to provide:
/// - Still photo capture into a spool file
/// - Toggle-style video recording via [`RecordingSession`]
pub trait CaptureDevice: Send + Sync {
    /// Human-readable device name
    fn name(&self) -> &str;

    // ===== Capture: Photo =====

    /// Capture a single still with the given settings
    ///
    /// Blocks the calling thread while the still is produced and encoded;
    /// callers on the UI runtime route this through `spawn_blocking`.
    ///
    /// # Returns
    /// * `Ok(Some(MediaFile))` - Still spooled successfully
    /// * `Ok(None)` - The device resolved without producing output
    /// * `Err(DeviceError)` - Capture failed
    fn capture_photo(&self, settings: &CaptureSettings) -> DeviceResult<Option<MediaFile>>;

    // ===== Capture: Video =====

    /// Begin recording a clip with the given settings
    ///
    /// Returns immediately with a [`RecordingSession`]; the actual recording
    /// runs on a device-owned worker until the session's stop signal fires.
    /// Only one recording can be active at a time.
    ///
    /// # Returns
    /// * `Ok(RecordingSession)` - Recording started
    /// * `Err(DeviceError::Busy)` - Another recording is active
    /// * `Err(DeviceError)` - Failed to start
    fn start_recording(&self, settings: &CaptureSettings) -> DeviceResult<RecordingSession>;
}

/// Get the built-in capture device
pub fn default_device() -> Arc<dyn CaptureDevice> {
    Arc::new(synthetic::SyntheticDevice::new())
}
