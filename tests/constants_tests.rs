// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use viewfinder::constants::{file_formats, gallery, timing, zoom};

#[test]
fn test_zoom_range_is_coherent() {
    assert!(zoom::MIN < zoom::MAX);
    assert!(zoom::STEP > 0.0);
    assert!(
        zoom::CHANGE_EPSILON > 0.0 && zoom::CHANGE_EPSILON < zoom::STEP,
        "Epsilon above the step size would swallow every zoom press"
    );
}

#[test]
fn test_zoom_step_spans_the_range() {
    // The range must hold a whole number of steps so the bounds are reachable
    let span = zoom::MAX - zoom::MIN;
    let steps = (span / zoom::STEP).round();
    assert!(
        (steps * zoom::STEP - span).abs() < zoom::CHANGE_EPSILON,
        "Zoom range should be a whole number of steps"
    );
    assert!(steps >= 2.0);
}

#[test]
fn test_gallery_recent_limit() {
    assert_eq!(gallery::RECENT_LIMIT, 20);
}

#[test]
fn test_notice_outlives_shutter_overlay() {
    // The shutter flash is a blink; notices have to be readable
    assert!(timing::NOTICE_DISMISS_MS > timing::SHUTTER_OVERLAY_MS);
}

#[test]
fn test_format_tables_do_not_overlap() {
    for ext in file_formats::PHOTO_EXTENSIONS {
        assert!(
            !file_formats::is_video_extension(ext),
            "Extension {} is classified as both photo and video",
            ext
        );
    }
    for ext in file_formats::VIDEO_EXTENSIONS {
        assert!(
            !file_formats::is_photo_extension(ext),
            "Extension {} is classified as both photo and video",
            ext
        );
    }
}

#[test]
fn test_format_classification_ignores_case() {
    assert!(file_formats::is_photo_extension("PNG"));
    assert!(file_formats::is_photo_extension("Jpeg"));
    assert!(file_formats::is_video_extension("GIF"));
    assert!(file_formats::is_video_extension("Mp4"));
}
