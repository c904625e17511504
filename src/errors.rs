// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the viewfinder application

use std::fmt;

/// Result type alias for capture device operations
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Result type alias for media library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Capture device errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Device is busy with another capture
    Busy,
    /// Encoding the still or clip failed
    Encode(String),
    /// Filesystem error in the spool directory
    Io(String),
    /// Generic device error with message
    Other(String),
}

/// Media library errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Library access was not granted
    AccessDenied,
    /// Filesystem error while saving or scanning
    Io(String),
    /// The referenced media file does not exist
    NotFound(String),
}

/// Photo pipeline errors, mapped to user-facing notices by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The device resolved without producing a still
    NothingCaptured,
    /// The device failed outright
    Device(String),
    /// The library rejected the persist
    Store(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Busy => write!(f, "Device is busy"),
            DeviceError::Encode(msg) => write!(f, "Encoding failed: {}", msg),
            DeviceError::Io(msg) => write!(f, "Spool I/O failed: {}", msg),
            DeviceError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied => write!(f, "Library access denied"),
            LibraryError::Io(msg) => write!(f, "Library I/O failed: {}", msg),
            LibraryError::NotFound(path) => write!(f, "No such media file: {}", path),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NothingCaptured => write!(f, "Capture produced no image"),
            PhotoError::Device(msg) => write!(f, "Capture failed: {}", msg),
            PhotoError::Store(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for DeviceError {}
impl std::error::Error for LibraryError {}
impl std::error::Error for PhotoError {}

impl From<std::io::Error> for DeviceError {
    fn from(err: std::io::Error) -> Self {
        DeviceError::Io(err.to_string())
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err.to_string())
    }
}

impl From<image::ImageError> for DeviceError {
    fn from(err: image::ImageError) -> Self {
        DeviceError::Encode(err.to_string())
    }
}

impl From<DeviceError> for PhotoError {
    fn from(err: DeviceError) -> Self {
        PhotoError::Device(err.to_string())
    }
}

impl From<LibraryError> for PhotoError {
    fn from(err: LibraryError) -> Self {
        PhotoError::Store(err.to_string())
    }
}
