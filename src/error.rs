//! Error type shared by the fallible edges of the crate.
//!
//! View-model operations never fail; they clamp. Errors only surface while
//! building descriptors, loading configuration or fixtures, exporting, and
//! talking to external collaborators.

use thiserror::Error;

/// Errors produced by `labgrid`.
#[derive(Debug, Error)]
pub enum Error {
    /// Two column descriptors share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),

    /// A configuration or call referenced a column that is not declared.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The view configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A column that cannot be hidden was configured as hidden.
    #[error("column cannot be hidden: {0}")]
    FixedColumn(String),

    /// Two records share the same id.
    #[error("duplicate record id: {0}")]
    DuplicateRecord(String),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Embedded fixture data could not be decoded.
    #[error("invalid fixture data: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Serializing an export failed.
    #[error("export failed: {0}")]
    Export(String),

    /// The authentication collaborator rejected the credentials.
    #[error("authentication failed for {0}")]
    Authentication(String),

    /// The system clipboard was not reachable.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
