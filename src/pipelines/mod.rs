// SPDX-License-Identifier: GPL-3.0-only

//! Capture flows from device to library
//!
//! These flows glue the capture device to the media library without blocking
//! the UI: device and library calls are synchronous by contract, so each hop
//! runs on the blocking pool and the flow itself is an awaitable future the
//! app drives as a task.
//!
//! ```text
//! ┌───────────────┐     ┌─────────────────┐     ┌───────────────┐
//! │ CaptureDevice │ ──▶ │   Photo flow    │ ──▶ │ MediaLibrary  │
//! │  (spool PNG)  │     │ capture → save  │     │  (Pictures)   │
//! └───────────────┘     └─────────────────┘     └───────────────┘
//!
//! ┌───────────────┐     ┌─────────────────┐     ┌───────────────┐
//! │ Recording     │ ──▶ │   Video flow    │ ──▶ │ MediaLibrary  │
//! │ session (GIF) │     │ await → save    │     │   (Videos)    │
//! └───────────────┘     └─────────────────┘     └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`photo`]: Still capture and persistence
//! - [`video`]: Recording finalization and persistence

pub mod photo;
pub mod video;
