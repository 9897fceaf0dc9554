//! Error types for bit channel operations.
//!
//! Every failure in the channel is final: a codeword stream that has lost
//! bit alignment cannot be resynchronized, so errors are surfaced to the
//! caller rather than recovered from.

use std::io;
use thiserror::Error;

/// The error type for bit channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Requested bit width is outside the supported range.
    #[error("Invalid bit width: {width} (must be 1-{max})")]
    InvalidWidth {
        /// The rejected width.
        width: u8,
        /// Largest width accepted by the operation.
        max: u8,
    },

    /// Value has bits set above the requested width.
    #[error("Value {value:#x} does not fit in {width} bits")]
    ValueOutOfRange {
        /// The rejected value.
        value: u64,
        /// The requested width.
        width: u8,
    },

    /// Fewer bits remain in the stream than were requested.
    #[error("End of stream at bit position {position}")]
    EndOfStream {
        /// Bit position at which the read was attempted.
        position: u64,
    },
}

/// Result type alias for bit channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;

impl ChannelError {
    /// Create an invalid width error.
    pub fn invalid_width(width: u8, max: u8) -> Self {
        Self::InvalidWidth { width, max }
    }

    /// Create a value out of range error.
    pub fn value_out_of_range(value: u64, width: u8) -> Self {
        Self::ValueOutOfRange { value, width }
    }

    /// Create an end of stream error.
    pub fn end_of_stream(position: u64) -> Self {
        Self::EndOfStream { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChannelError::invalid_width(33, 32);
        assert!(err.to_string().contains("Invalid bit width: 33"));

        let err = ChannelError::value_out_of_range(0x200, 9);
        assert!(err.to_string().contains("0x200"));

        let err = ChannelError::end_of_stream(42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: ChannelError = io_err.into();
        assert!(matches!(err, ChannelError::Io(_)));
    }
}
