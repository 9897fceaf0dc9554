//! LZW-specific error types.

use alzw_core::ChannelError;
use std::path::PathBuf;
use thiserror::Error;

/// Adaptive LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Failure in the underlying bit channel (bad width, truncated stream).
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// Stream header carries a mode flag outside `{0, 1, 2}`.
    #[error("Invalid mode flag in stream header: {0:#04b}")]
    InvalidMode(u8),

    /// Codeword does not name a phrase known at this point of the stream.
    #[error("Invalid LZW code {code} at bit position {position}")]
    InvalidCode {
        /// The offending codeword.
        code: u16,
        /// Bit position just after the codeword.
        position: u64,
    },

    /// The decoder inferred a reset but the stream holds another value.
    #[error("Expected reset marker at bit position {position}, found code {found}")]
    MissingResetMarker {
        /// Value read where the reset marker belongs.
        found: u16,
        /// Bit position just after the value.
        position: u64,
    },

    /// Invalid maximum codeword width in the configuration.
    #[error("Invalid maximum bit width: {0} (must be 9-16)")]
    InvalidBitWidth(u8),

    /// Monitor threshold is not a finite number >= 1.0.
    #[error("Invalid monitor threshold: {0}")]
    InvalidThreshold(f64),

    /// Phrase is already present in the prefix dictionary.
    #[error("Phrase already assigned to code {existing}")]
    DuplicatePhrase {
        /// Code the phrase is already stored under.
        existing: u16,
    },

    /// Phrase does not extend a stored phrase by exactly one byte.
    #[error("Phrase prefix is not in the dictionary")]
    UnknownPrefix,

    /// The input file could not be opened or read.
    #[error("Cannot open source {}: {source}", path.display())]
    SourceUnavailable {
        /// Path of the source.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LzwError {
    /// Create a source unavailable error.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
