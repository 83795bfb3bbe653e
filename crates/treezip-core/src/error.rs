//! Error types for treezip-core

use std::fmt;

use thiserror::Error;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for treezip-core
#[derive(Error, Debug)]
pub enum Error {
    /// Structural edits that cannot apply at the current position
    #[error("Zipper error: {0}")]
    Zipper(#[from] ZipperError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Log(#[from] crate::logging::LogError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The edit that was attempted at the root of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOp {
    Remove,
    InsertLeft,
    InsertRight,
}

impl fmt::Display for RootOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove => write!(f, "remove"),
            Self::InsertLeft => write!(f, "insert_left"),
            Self::InsertRight => write!(f, "insert_right"),
        }
    }
}

/// Programmer errors raised by zipper edits.
///
/// Navigation never fails with an error; it returns `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipperError {
    /// Removing the root, or giving the root a sibling.
    #[error("cannot {op} at the root of the tree")]
    InvalidRootOperation { op: RootOp },
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
