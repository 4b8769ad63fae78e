//! Error types for packing FGZ archives.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for pack operations.
pub type PackResult<T> = Result<T, PackError>;

/// Which length prefix of a record overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    Name,
    Payload,
}

impl fmt::Display for LengthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Payload => f.write_str("payload"),
        }
    }
}

/// Coarse classification of a [`PackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Required settings missing or out of range. Raised before any work starts.
    Configuration,
    /// Reading the source directory or writing the destination failed.
    Filesystem,
    /// A record could not be represented in the wire format.
    Encoding,
    /// The archive builder was used out of order.
    InvalidState,
    /// The gzip stage failed.
    Compression,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Errors raised while encoding, assembling or writing an archive.
///
/// Every error is fatal for the pack run. Nothing is retried.
#[derive(Debug, Error)]
pub enum PackError {
    /// No destination path was configured.
    #[error("destination path is not configured")]
    MissingDestination,

    /// Compression level outside 0..=9.
    #[error("invalid compression level {level}: expected 0..=9")]
    InvalidLevel { level: u32 },

    /// I/O failure on a specific path.
    #[error("failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A name or payload does not fit the 32-bit length prefix.
    #[error("{field} length {len} exceeds the 32-bit length field")]
    LengthOverflow { field: LengthField, len: usize },

    /// A write would run past the end of a fixed-size record buffer.
    #[error("record buffer overrun: {requested} bytes requested, {remaining} remaining")]
    CapacityExceeded { requested: usize, remaining: usize },

    /// Operation not allowed in the builder's current state.
    #[error("invalid builder state: {0}")]
    InvalidState(&'static str),

    /// The gzip encoder failed.
    #[error("gzip compression failed: {0}")]
    Compression(#[source] io::Error),

    /// The blocking compression task panicked or was cancelled.
    #[error("compression task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl PackError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingDestination | Self::InvalidLevel { .. } => ErrorClass::Configuration,
            Self::Filesystem { .. } => ErrorClass::Filesystem,
            Self::LengthOverflow { .. } | Self::CapacityExceeded { .. } => ErrorClass::Encoding,
            Self::InvalidState(_) => ErrorClass::InvalidState,
            Self::Compression(_) | Self::Task(_) => ErrorClass::Compression,
        }
    }

    /// Returns true if this error was raised before any input was read.
    pub fn is_configuration(&self) -> bool {
        self.class() == ErrorClass::Configuration
    }

    /// Suggested exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self.class() {
            ErrorClass::Configuration => 2,
            _ => 1,
        }
    }
}
