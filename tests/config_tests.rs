// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use viewfinder::capture::CameraFacing;
use viewfinder::config::{AppTheme, Config};
use viewfinder::constants::library;

#[test]
fn test_config_default() {
    // Test that default config can be created
    let config = Config::default();

    // Check sensible defaults
    assert_eq!(
        config.app_theme,
        AppTheme::System,
        "Theme should follow the desktop by default"
    );
    assert_eq!(
        config.save_folder_name,
        library::DEFAULT_FOLDER,
        "Captures should land in the default folder"
    );
    assert_eq!(
        config.default_facing,
        CameraFacing::Back,
        "The back sensor should be active on first start"
    );
}

#[test]
fn test_config_bug_report_url() {
    // Test that bug report URL is set
    let config = Config::default();
    assert!(
        !config.bug_report_url.is_empty(),
        "Bug report URL should not be empty"
    );
    assert!(
        config.bug_report_url.starts_with("https://"),
        "Bug report URL should be a web URL"
    );
}
