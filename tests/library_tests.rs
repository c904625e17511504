// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the media library providers

use std::fs;
use std::path::PathBuf;

use viewfinder::capture::{MediaFile, MediaKind, PermissionStatus};
use viewfinder::constants::gallery;
use viewfinder::errors::LibraryError;
use viewfinder::library::folder::FolderLibrary;
use viewfinder::library::testing::MemoryLibrary;
use viewfinder::library::{AssetQuery, MediaLibrary};

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("viewfinder-test-{}", uuid::Uuid::new_v4()))
}

// ===== Folder-backed provider =====

#[test]
fn test_folder_library_probe_creates_directories() {
    let root = temp_root();
    let library = FolderLibrary::with_dirs(root.join("photos"), root.join("videos"));

    assert_eq!(library.request_permission(), PermissionStatus::Granted);
    assert!(root.join("photos").is_dir());
    assert!(root.join("videos").is_dir());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_denies_when_directory_is_blocked() {
    let root = temp_root();
    fs::create_dir_all(&root).unwrap();
    // A plain file where a parent directory should be makes the probe fail
    fs::write(root.join("blocker"), b"").unwrap();

    let library = FolderLibrary::with_dirs(root.join("blocker/photos"), root.join("videos"));
    assert_eq!(library.request_permission(), PermissionStatus::Denied);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_save_moves_spool_file() {
    let root = temp_root();
    let spool = root.join("spool");
    fs::create_dir_all(&spool).unwrap();
    let spooled = spool.join("IMG_0001.png");
    fs::write(&spooled, b"not a real png").unwrap();

    let library = FolderLibrary::with_dirs(root.join("photos"), root.join("videos"));
    let asset = library
        .save(&MediaFile {
            path: spooled.clone(),
            kind: MediaKind::Photo,
        })
        .unwrap();

    assert_eq!(asset.path, root.join("photos").join("IMG_0001.png"));
    assert!(asset.path.exists(), "Saved file should be in the library");
    assert!(!spooled.exists(), "Save should consume the spool file");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_save_missing_spool_file_fails() {
    let root = temp_root();
    let library = FolderLibrary::with_dirs(root.join("photos"), root.join("videos"));

    let result = library.save(&MediaFile {
        path: root.join("spool/missing.png"),
        kind: MediaKind::Photo,
    });
    assert!(matches!(result, Err(LibraryError::NotFound(_))));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_recent_spans_both_directories() {
    let root = temp_root();
    let photos = root.join("photos");
    let videos = root.join("videos");
    fs::create_dir_all(&photos).unwrap();
    fs::create_dir_all(&videos).unwrap();
    fs::write(photos.join("IMG_0001.png"), b"p").unwrap();
    fs::write(videos.join("VID_0001.gif"), b"v").unwrap();
    fs::write(photos.join("notes.txt"), b"ignore me").unwrap();

    let library = FolderLibrary::with_dirs(photos, videos);
    let recent = library.recent(&AssetQuery::default()).unwrap();

    assert_eq!(recent.len(), 2, "Unrecognized extensions should be skipped");
    assert!(recent.iter().any(|a| a.kind == MediaKind::Photo));
    assert!(recent.iter().any(|a| a.kind == MediaKind::Video));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_recent_filters_by_kind() {
    let root = temp_root();
    let photos = root.join("photos");
    let videos = root.join("videos");
    fs::create_dir_all(&photos).unwrap();
    fs::create_dir_all(&videos).unwrap();
    fs::write(photos.join("IMG_0001.png"), b"p").unwrap();
    fs::write(videos.join("VID_0001.gif"), b"v").unwrap();

    let library = FolderLibrary::with_dirs(photos, videos);
    let query = AssetQuery {
        kinds: vec![MediaKind::Video],
        limit: 10,
    };
    let recent = library.recent(&query).unwrap();

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].kind, MediaKind::Video);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_folder_library_open_target_is_photo_directory() {
    let root = temp_root();
    let library = FolderLibrary::with_dirs(root.join("photos"), root.join("videos"));

    assert_eq!(library.open_target(), Some(root.join("photos")));
}

// ===== In-memory provider =====

#[test]
fn test_memory_library_recent_is_newest_first() {
    let library = MemoryLibrary::new();
    library.seed(MediaKind::Photo, 3);

    let recent = library.recent(&AssetQuery::default()).unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].file_name(), "Photo_0002.png");
    assert!(
        recent.windows(2).all(|w| w[0].created_at >= w[1].created_at),
        "Assets should come back newest first"
    );
}

#[test]
fn test_memory_library_recent_truncates_to_limit() {
    let library = MemoryLibrary::new();
    library.seed(MediaKind::Photo, gallery::RECENT_LIMIT + 10);

    let recent = library.recent(&AssetQuery::default()).unwrap();
    assert_eq!(recent.len(), gallery::RECENT_LIMIT);
    // The oldest seeds fall off the end, not the start
    let newest = format!("Photo_{:04}.png", gallery::RECENT_LIMIT + 9);
    assert_eq!(recent[0].file_name(), newest);
}

#[test]
fn test_memory_library_recent_filters_by_kind() {
    let library = MemoryLibrary::new();
    library.seed(MediaKind::Photo, 2);
    library.seed(MediaKind::Video, 2);

    let query = AssetQuery {
        kinds: vec![MediaKind::Video],
        limit: 10,
    };
    let recent = library.recent(&query).unwrap();

    assert_eq!(recent.len(), 2);
    assert!(recent.iter().all(|a| a.kind == MediaKind::Video));
}

#[test]
fn test_memory_library_denied_permission() {
    let library = MemoryLibrary::denied();
    assert_eq!(library.request_permission(), PermissionStatus::Denied);
}

#[test]
fn test_memory_library_failing_saves_are_counted() {
    let library = MemoryLibrary::failing_saves();

    let result = library.save(&MediaFile {
        path: PathBuf::from("spool/IMG_0001.png"),
        kind: MediaKind::Photo,
    });

    assert!(result.is_err());
    assert_eq!(library.saves_attempted(), 1);
    assert!(library.stored().is_empty());
}

#[test]
fn test_default_query_matches_gallery_limit() {
    let query = AssetQuery::default();
    assert_eq!(query.limit, gallery::RECENT_LIMIT);
    assert!(query.matches(MediaKind::Photo));
    assert!(query.matches(MediaKind::Video));
}
