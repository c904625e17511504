// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use viewfinder::app::AppModel;
use viewfinder::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "viewfinder")]
#[command(about = "Point-and-shoot camera app for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the most recent library assets
    Assets {
        /// Maximum number of assets to list
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Take a photo
    Photo {
        /// Sensor to use: front or back
        #[arg(short, long, default_value = "back")]
        facing: String,

        /// Fire the flash
        #[arg(long)]
        flash: bool,

        /// Normalized zoom level (0.0 to 1.0)
        #[arg(short, long, default_value = "0.0")]
        zoom: f32,

        /// Output file path (default: saved into the library folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Record a video clip
    Record {
        /// Sensor to use: front or back
        #[arg(short, long, default_value = "back")]
        facing: String,

        /// Recording duration in seconds
        #[arg(short, long, default_value = "5")]
        duration: u64,

        /// Output file path (default: saved into the library folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=viewfinder=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assets { limit }) => cli::list_assets(limit),
        Some(Commands::Photo {
            facing,
            flash,
            zoom,
            output,
        }) => cli::take_photo(&facing, flash, zoom, output),
        Some(Commands::Record {
            facing,
            duration,
            output,
        }) => cli::record_clip(&facing, duration, output),
        None => run_gui(),
    }
}

fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(180.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<AppModel>(settings, ())?;

    Ok(())
}
