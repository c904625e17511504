// SPDX-License-Identifier: GPL-3.0-only

//! Diagnostics report generation
//!
//! Collects the information worth attaching to an issue report:
//! - Application version and runtime
//! - Kernel and distribution
//! - Capture device and persisted configuration

use std::path::PathBuf;
use std::process::Command;

use tracing::{info, warn};

use crate::config::Config;
use crate::constants::app_info;

/// Generate a diagnostics report and save it next to the captures
///
/// Returns the path to the generated report file.
pub async fn generate(
    device_name: &str,
    config: &Config,
    report_dir: Option<PathBuf>,
) -> Result<PathBuf, String> {
    let mut report = String::new();

    // Header
    report.push_str("# Viewfinder Diagnostics Report\n\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Local::now().to_rfc3339()
    ));

    // Application version
    report.push_str("## Application Information\n\n");
    report.push_str(&format!("**Version:** {}\n\n", env!("GIT_VERSION")));

    // System information
    report.push_str(&system_info().await);

    // Capture device
    report.push_str("## Capture Device\n\n");
    report.push_str(&format!("**Device:** {}\n\n", device_name));

    // Persisted configuration
    report.push_str(&format_config(config));

    // Save to file
    let output_path = report_path(report_dir);
    tokio::fs::write(&output_path, report)
        .await
        .map_err(|e| format!("Failed to write diagnostics report: {}", e))?;

    info!(path = ?output_path, "Diagnostics report generated successfully");
    Ok(output_path)
}

/// Report file path, preferring the folder the captures land in
fn report_path(report_dir: Option<PathBuf>) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("viewfinder-report-{}.md", timestamp);

    let Some(report_dir) = report_dir else {
        return fallback_dir().join(&filename);
    };

    // Ensure directory exists
    if let Err(e) = std::fs::create_dir_all(&report_dir) {
        warn!(error = %e, "Failed to create report directory, using fallback");
        return fallback_dir().join(&filename);
    }

    report_dir.join(&filename)
}

fn fallback_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Collect system information
async fn system_info() -> String {
    let mut info = String::from("## System Information\n\n");

    // Linux kernel version
    if let Ok(output) = Command::new("uname").arg("-r").output()
        && let Ok(kernel) = String::from_utf8(output.stdout)
    {
        info.push_str(&format!("**Kernel:** {}\n", kernel.trim()));
    }

    // Distribution info
    if let Ok(os_release) = tokio::fs::read_to_string("/etc/os-release").await {
        for line in os_release.lines() {
            if let Some(distro) = line.strip_prefix("PRETTY_NAME=") {
                info.push_str(&format!("**Distribution:** {}\n", distro.trim_matches('"')));
                break;
            }
        }
    }

    info.push_str(&format!(
        "**Runtime:** {}\n",
        app_info::runtime_environment()
    ));

    // Flatpak runtime details
    if app_info::is_flatpak()
        && let Ok(flatpak_info) = tokio::fs::read_to_string("/.flatpak-info").await
    {
        info.push_str("\n### Flatpak Details\n\n");
        info.push_str("```ini\n");
        info.push_str(&flatpak_info);
        info.push_str("```\n");
    }

    info.push('\n');
    info
}

/// Format the persisted configuration
fn format_config(config: &Config) -> String {
    let mut info = String::from("## Configuration\n\n");
    info.push_str(&format!("- **Theme:** {:?}\n", config.app_theme));
    info.push_str(&format!(
        "- **Library folder:** {}\n",
        config.save_folder_name
    ));
    info.push_str(&format!(
        "- **Startup facing:** {}\n",
        config.default_facing.display_name()
    ));
    info.push('\n');
    info
}
