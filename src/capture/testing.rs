// SPDX-License-Identifier: GPL-3.0-only

//! Deterministic scripted capture device for tests
//!
//! No filesystem or timing is involved: spooled paths are synthetic and the
//! recording outcome is driven entirely by the configured behavior. Recording
//! sessions need a tokio runtime (the worker is a spawned task).

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::oneshot;

use crate::capture::{CaptureDevice, CaptureSettings, MediaFile, MediaKind, RecordingSession};
use crate::errors::{DeviceError, DeviceResult};

/// What `capture_photo` resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoBehavior {
    /// Resolve with a spooled still
    Produce,
    /// Resolve without output (the "result absent" edge)
    Absent,
    /// Fail outright
    Fail,
}

/// What the recording session's `finished` receiver resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipBehavior {
    /// Resolve with a clip once the stop signal fires
    ProduceOnStop,
    /// Resolve empty once the stop signal fires
    EmptyOnStop,
    /// Resolve with an error once the stop signal fires
    FailOnStop,
    /// Never resolve on its own; the test resolves via [`ScriptedDevice::resolve_pending`]
    Manual,
}

/// Scripted capture device
pub struct ScriptedDevice {
    photo: PhotoBehavior,
    clip: ClipBehavior,
    photos_taken: AtomicUsize,
    recordings_started: AtomicUsize,
    pending: Mutex<Option<oneshot::Sender<DeviceResult<Option<MediaFile>>>>>,
}

impl ScriptedDevice {
    pub fn new(photo: PhotoBehavior, clip: ClipBehavior) -> Self {
        Self {
            photo,
            clip,
            photos_taken: AtomicUsize::new(0),
            recordings_started: AtomicUsize::new(0),
            pending: Mutex::new(None),
        }
    }

    /// Number of photo captures requested so far
    pub fn photos_taken(&self) -> usize {
        self.photos_taken.load(Ordering::SeqCst)
    }

    /// Number of recording sessions handed out so far
    pub fn recordings_started(&self) -> usize {
        self.recordings_started.load(Ordering::SeqCst)
    }

    /// Resolve a [`ClipBehavior::Manual`] session; returns false if none is pending
    pub fn resolve_pending(&self, outcome: DeviceResult<Option<MediaFile>>) -> bool {
        let sender = self.pending.lock().unwrap().take();
        match sender {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }

    fn scripted_file(prefix: &str, n: usize, kind: MediaKind) -> MediaFile {
        let ext = match kind {
            MediaKind::Photo => "png",
            MediaKind::Video => "gif",
        };
        MediaFile {
            path: PathBuf::from(format!("scripted/{}_{:04}.{}", prefix, n, ext)),
            kind,
        }
    }
}

impl CaptureDevice for ScriptedDevice {
    fn name(&self) -> &str {
        "Scripted device"
    }

    fn capture_photo(&self, _settings: &CaptureSettings) -> DeviceResult<Option<MediaFile>> {
        let n = self.photos_taken.fetch_add(1, Ordering::SeqCst);
        match self.photo {
            PhotoBehavior::Produce => Ok(Some(Self::scripted_file("IMG", n, MediaKind::Photo))),
            PhotoBehavior::Absent => Ok(None),
            PhotoBehavior::Fail => Err(DeviceError::Other("scripted photo failure".into())),
        }
    }

    fn start_recording(&self, _settings: &CaptureSettings) -> DeviceResult<RecordingSession> {
        let n = self.recordings_started.fetch_add(1, Ordering::SeqCst);
        let (stop_tx, stop_rx) = oneshot::channel();
        let (finished_tx, finished_rx) = oneshot::channel();

        match self.clip {
            ClipBehavior::Manual => {
                *self.pending.lock().unwrap() = Some(finished_tx);
            }
            behavior => {
                tokio::spawn(async move {
                    // A dropped stop sender also counts as a stop
                    let _ = stop_rx.await;
                    let outcome = match behavior {
                        ClipBehavior::ProduceOnStop => {
                            Ok(Some(Self::scripted_file("VID", n, MediaKind::Video)))
                        }
                        ClipBehavior::EmptyOnStop => Ok(None),
                        ClipBehavior::FailOnStop => {
                            Err(DeviceError::Other("scripted recorder error".into()))
                        }
                        ClipBehavior::Manual => unreachable!(),
                    };
                    let _ = finished_tx.send(outcome);
                });
            }
        }

        Ok(RecordingSession {
            stop: stop_tx,
            finished: finished_rx,
        })
    }
}
