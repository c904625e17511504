// SPDX-License-Identifier: GPL-3.0-only

use crate::capture::CameraFacing;
use crate::constants;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Folder name for saved captures under the XDG Pictures/Videos directories
    pub save_folder_name: String,
    /// Camera facing selected when the app starts
    pub default_facing: CameraFacing,
    /// Bug report submission URL (GitHub issues URL)
    pub bug_report_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(), // Default to System theme
            save_folder_name: constants::library::DEFAULT_FOLDER.to_string(),
            default_facing: CameraFacing::default(),
            bug_report_url: "https://github.com/pocketlens/viewfinder/issues/new".to_string(),
        }
    }
}
