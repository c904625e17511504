// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder - a point-and-shoot camera app for the COSMIC desktop
//!
//! This library provides the core functionality for the Viewfinder application:
//! a permission-gated single-screen camera with photo capture, toggle-record
//! video, and a strip of the most recent library assets.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`capture`]: Capture device abstraction and the built-in synthetic device
//! - [`library`]: Media library abstraction and the folder-backed provider
//! - [`pipelines`]: Photo and video capture flows
//! - [`portal`]: Camera access brokering via the XDG desktop portal
//! - [`config`]: User configuration handling
//! - [`storage`]: Gallery thumbnail loading
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // viewfinder
//! ```

pub mod app;
pub mod bug_report;
pub mod capture;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod library;
pub mod pipelines;
pub mod portal;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use capture::{CameraFacing, CaptureSettings, FlashMode, MediaKind, PermissionStatus};
pub use config::Config;
pub use library::{Asset, AssetQuery};
