// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the photo and video capture flows

use std::path::PathBuf;
use std::sync::Arc;

use viewfinder::capture::synthetic::SyntheticDevice;
use viewfinder::capture::testing::{ClipBehavior, PhotoBehavior, ScriptedDevice};
use viewfinder::capture::{CaptureDevice, CaptureSettings, MediaFile, MediaKind};
use viewfinder::errors::{DeviceError, PhotoError};
use viewfinder::library::folder::FolderLibrary;
use viewfinder::library::testing::MemoryLibrary;
use viewfinder::library::{AssetQuery, MediaLibrary};
use viewfinder::pipelines::video::RecordingOutcome;
use viewfinder::pipelines::{photo, video};

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("viewfinder-test-{}", uuid::Uuid::new_v4()))
}

// ===== Photo flow =====

#[tokio::test]
async fn test_photo_capture_persists_to_library() {
    let device = Arc::new(ScriptedDevice::new(
        PhotoBehavior::Produce,
        ClipBehavior::ProduceOnStop,
    ));
    let library = Arc::new(MemoryLibrary::new());

    let asset = photo::capture_and_store(
        device.clone(),
        library.clone(),
        CaptureSettings::default(),
    )
    .await
    .unwrap();

    assert_eq!(asset.kind, MediaKind::Photo);
    assert_eq!(device.photos_taken(), 1);

    let stored = library.stored();
    assert_eq!(stored.len(), 1, "The captured still should be in the library");
    assert_eq!(stored[0], asset);
}

#[tokio::test]
async fn test_photo_capture_without_result_is_reported() {
    let device = Arc::new(ScriptedDevice::new(
        PhotoBehavior::Absent,
        ClipBehavior::ProduceOnStop,
    ));
    let library = Arc::new(MemoryLibrary::new());

    let result =
        photo::capture_and_store(device, library.clone(), CaptureSettings::default()).await;

    assert_eq!(result, Err(PhotoError::NothingCaptured));
    assert_eq!(
        library.saves_attempted(),
        0,
        "An empty capture should never reach the library"
    );
}

#[tokio::test]
async fn test_photo_device_failure_carries_detail() {
    let device = Arc::new(ScriptedDevice::new(
        PhotoBehavior::Fail,
        ClipBehavior::ProduceOnStop,
    ));
    let library = Arc::new(MemoryLibrary::new());

    let result =
        photo::capture_and_store(device, library.clone(), CaptureSettings::default()).await;

    match result {
        Err(PhotoError::Device(msg)) => {
            assert!(
                msg.contains("scripted photo failure"),
                "Device detail should survive into the error: {}",
                msg
            );
        }
        other => panic!("Expected a device error, got {:?}", other),
    }
    assert_eq!(library.saves_attempted(), 0);
}

#[tokio::test]
async fn test_photo_save_failure_is_distinct_from_capture_failure() {
    let device = Arc::new(ScriptedDevice::new(
        PhotoBehavior::Produce,
        ClipBehavior::ProduceOnStop,
    ));
    let library = Arc::new(MemoryLibrary::failing_saves());

    let result =
        photo::capture_and_store(device, library.clone(), CaptureSettings::default()).await;

    assert!(
        matches!(result, Err(PhotoError::Store(_))),
        "A library rejection should map to a store error, got {:?}",
        result
    );
    assert_eq!(library.saves_attempted(), 1);
}

// ===== Video flow =====

#[tokio::test]
async fn test_recording_stop_persists_clip() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::ProduceOnStop);
    let library = Arc::new(MemoryLibrary::new());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    session.stop.send(()).unwrap();

    let outcome = video::finish_recording(session.finished, library.clone()).await;
    match outcome {
        RecordingOutcome::Saved(asset) => assert_eq!(asset.kind, MediaKind::Video),
        other => panic!("Expected a saved clip, got {:?}", other),
    }
    assert_eq!(library.stored().len(), 1);
}

#[tokio::test]
async fn test_recording_resolving_empty_saves_nothing() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::EmptyOnStop);
    let library = Arc::new(MemoryLibrary::new());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    session.stop.send(()).unwrap();

    let outcome = video::finish_recording(session.finished, library.clone()).await;
    assert_eq!(outcome, RecordingOutcome::Empty);
    assert_eq!(
        library.saves_attempted(),
        0,
        "An empty recording should never reach the library"
    );
}

#[tokio::test]
async fn test_recording_failure_reports_detail() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::FailOnStop);
    let library = Arc::new(MemoryLibrary::new());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    session.stop.send(()).unwrap();

    let outcome = video::finish_recording(session.finished, library).await;
    match outcome {
        RecordingOutcome::Failed(msg) => {
            assert!(
                msg.contains("scripted recorder error"),
                "Recorder detail should survive into the outcome: {}",
                msg
            );
        }
        other => panic!("Expected a failed outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_recording_save_failure_maps_to_failed() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::ProduceOnStop);
    let library = Arc::new(MemoryLibrary::failing_saves());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    session.stop.send(()).unwrap();

    let outcome = video::finish_recording(session.finished, library.clone()).await;
    assert!(
        matches!(outcome, RecordingOutcome::Failed(_)),
        "A library rejection should map to a failed outcome, got {:?}",
        outcome
    );
    assert_eq!(library.saves_attempted(), 1);
}

#[tokio::test]
async fn test_dropped_stop_sender_still_finalizes() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::ProduceOnStop);
    let library = Arc::new(MemoryLibrary::new());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    drop(session.stop);

    // The cleanup path must not depend on an explicit stop signal
    let outcome = video::finish_recording(session.finished, library.clone()).await;
    assert!(matches!(outcome, RecordingOutcome::Saved(_)));
    assert_eq!(library.stored().len(), 1);
}

#[tokio::test]
async fn test_manual_resolution_drives_the_outcome() {
    let device = ScriptedDevice::new(PhotoBehavior::Produce, ClipBehavior::Manual);
    let library = Arc::new(MemoryLibrary::new());

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    assert_eq!(device.recordings_started(), 1);

    let file = MediaFile {
        path: PathBuf::from("scripted/VID_manual.gif"),
        kind: MediaKind::Video,
    };
    assert!(device.resolve_pending(Ok(Some(file))));
    assert!(
        !device.resolve_pending(Ok(None)),
        "Only one resolution per session"
    );

    let outcome = video::finish_recording(session.finished, library).await;
    assert!(matches!(outcome, RecordingOutcome::Saved(_)));
}

// ===== Built-in device end to end =====

#[tokio::test]
async fn test_synthetic_still_lands_in_library() {
    let root = temp_root();
    let device = Arc::new(SyntheticDevice::with_spool_dir(root.join("spool")));
    let library = Arc::new(FolderLibrary::with_dirs(
        root.join("photos"),
        root.join("videos"),
    ));

    let asset = photo::capture_and_store(device, library.clone(), CaptureSettings::default())
        .await
        .unwrap();

    assert_eq!(asset.kind, MediaKind::Photo);
    assert!(asset.path.exists(), "Saved still should be on disk");
    assert!(
        asset.path.starts_with(root.join("photos")),
        "Stills belong in the photo directory: {}",
        asset.path.display()
    );

    let recent = library.recent(&AssetQuery::default()).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].path, asset.path);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_synthetic_device_rejects_concurrent_recordings() {
    let root = temp_root();
    let device = SyntheticDevice::with_spool_dir(root.join("spool"));

    let session = device.start_recording(&CaptureSettings::default()).unwrap();
    let second = device.start_recording(&CaptureSettings::default());
    assert!(
        matches!(second, Err(DeviceError::Busy)),
        "A second recording should be rejected while one is active"
    );

    let _ = session.stop.send(());
    let resolved = session.finished.await.unwrap();
    assert!(resolved.is_ok(), "Stopping should finalize cleanly");

    let _ = std::fs::remove_dir_all(&root);
}
