// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for headless captures
//!
//! This module provides command-line functionality for:
//! - Listing the most recent library assets
//! - Taking photos
//! - Recording clips

use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use viewfinder::capture::{self, CameraFacing, CaptureSettings, FlashMode};
use viewfinder::constants::{library as library_constants, zoom};
use viewfinder::library::{self, AssetQuery};
use viewfinder::pipelines;
use viewfinder::pipelines::video::RecordingOutcome;

/// List the most recent assets in the library
pub fn list_assets(limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    let library = library::default_library(library_constants::DEFAULT_FOLDER);

    let query = AssetQuery {
        limit,
        ..AssetQuery::default()
    };
    let assets = library.recent(&query)?;
    if assets.is_empty() {
        println!("No captures found.");
        return Ok(());
    }

    println!("Recent captures:");
    println!();
    for (index, asset) in assets.iter().enumerate() {
        let created: DateTime<Local> = asset.created_at.into();
        println!(
            "  [{}] {}  {:<5}  {}",
            index,
            created.format("%Y-%m-%d %H:%M:%S"),
            asset.kind.display_name(),
            asset.path.display()
        );
    }

    Ok(())
}

/// Take a photo with the built-in device
pub fn take_photo(
    facing: &str,
    flash: bool,
    zoom_level: f32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = CaptureSettings {
        facing: parse_facing(facing)?,
        flash: if flash { FlashMode::On } else { FlashMode::Off },
        zoom: zoom_level.clamp(zoom::MIN, zoom::MAX),
    };

    let device = capture::default_device();
    let library = library::default_library(library_constants::DEFAULT_FOLDER);

    if !library.request_permission().is_granted() {
        return Err("Library directories are not writable".into());
    }

    println!("Using device: {}", device.name());
    println!("Capturing...");

    let rt = tokio::runtime::Runtime::new()?;
    let asset = rt.block_on(pipelines::photo::capture_and_store(
        device,
        Arc::clone(&library),
        settings,
    ))?;

    // If the user asked for a specific file, move the capture there
    if let Some(user_path) = output
        && !user_path.is_dir()
    {
        std::fs::rename(&asset.path, &user_path)?;
        println!("Photo saved: {}", user_path.display());
        return Ok(());
    }

    println!("Photo saved: {}", asset.path.display());
    Ok(())
}

/// Record a clip with the built-in device
pub fn record_clip(
    facing: &str,
    duration: u64,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = CaptureSettings {
        facing: parse_facing(facing)?,
        ..Default::default()
    };

    let device = capture::default_device();
    let library = library::default_library(library_constants::DEFAULT_FOLDER);

    if !library.request_permission().is_granted() {
        return Err("Library directories are not writable".into());
    }

    println!("Using device: {}", device.name());
    println!("Duration: {} seconds", duration);

    let session = device.start_recording(&settings)?;

    // Set up Ctrl+C handler
    let stop_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let stop_flag_clone = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_clone.store(true, std::sync::atomic::Ordering::SeqCst);
    })?;

    println!();
    println!("Recording... (press Ctrl+C to stop early)");

    // Wait for duration or Ctrl+C
    let start = Instant::now();
    let target_duration = Duration::from_secs(duration);

    while start.elapsed() < target_duration {
        if stop_flag.load(std::sync::atomic::Ordering::SeqCst) {
            println!();
            println!("Stopping early...");
            break;
        }

        // Print progress
        let elapsed = start.elapsed().as_secs();
        print!("\rRecording: {:02}:{:02}", elapsed / 60, elapsed % 60);
        std::io::Write::flush(&mut std::io::stdout())?;

        std::thread::sleep(Duration::from_millis(100));
    }
    println!();

    // Stop the device, then wait for the clip to persist
    let _ = session.stop.send(());

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(pipelines::video::finish_recording(
        session.finished,
        Arc::clone(&library),
    ));

    match outcome {
        RecordingOutcome::Saved(asset) => {
            if let Some(user_path) = output
                && !user_path.is_dir()
            {
                std::fs::rename(&asset.path, &user_path)?;
                println!("Video saved: {}", user_path.display());
                return Ok(());
            }

            println!("Video saved: {}", asset.path.display());
            Ok(())
        }
        RecordingOutcome::Empty => Err("Recording produced no video".into()),
        RecordingOutcome::Failed(err) => Err(err.into()),
    }
}

/// Parse a facing name from the command line
fn parse_facing(name: &str) -> Result<CameraFacing, Box<dyn std::error::Error>> {
    match name {
        "front" => Ok(CameraFacing::Front),
        "back" => Ok(CameraFacing::Back),
        other => Err(format!("Unknown facing '{}' (expected front or back)", other).into()),
    }
}
