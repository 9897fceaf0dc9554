//! # alzw-codec: Adaptive LZW Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! with a growing codeword width and a choice of policies for a full
//! dictionary.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Adaptive width**: codewords start at 9 bits and widen up to 16
//! - **Dictionary policies**: keep, reset when full, or reset when the
//!   compression ratio degrades
//! - **Streaming I/O**: encode into any `Write`, decode from any `Read`
//!
//! ## Stream Format
//!
//! - **Header**: 2-bit mode flag (`00` none, `01` reset, `10` monitor)
//! - **Codewords**: MSB-first, 9 bits at first; the width grows by one each
//!   time every code at the current width is assigned
//! - **Code 256**: end of stream
//! - **Code 257**: dictionary reset, written where the policy fires
//! - **Learned phrases**: assigned from code 258 upwards
//! - **Padding**: zero bits up to the next byte boundary
//!
//! Only the mode travels in the header. The maximum width and the monitor
//! threshold come from [`LzwConfig`] and must match on both sides.
//!
//! ## Example
//!
//! ```rust
//! use alzw_codec::{compress, decompress, LzwConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original, LzwConfig::MONITOR).unwrap();
//! let decompressed = decompress(&compressed, LzwConfig::MONITOR).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
mod file;
mod policy;
mod state;
mod stats;
mod table;

pub use config::{
    DEFAULT_MONITOR_THRESHOLD, END_OF_STREAM, FIRST_CODE, LzwConfig, MAX_BITS, MIN_BITS, Mode,
    RESET_CODE,
};
pub use decoder::LzwDecoder;
pub use dictionary::{Dictionary, Match, PrefixDictionary};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use file::{compress_file, decompress_file};
pub use policy::{PolicyAction, RatioTracker, choose_action};
pub use state::{CodecState, Step};
pub use stats::CodecStats;
pub use table::CodeTable;

/// Decompress a complete stream held in memory.
///
/// The mode comes from the stream header; `config` supplies the maximum
/// width and the monitor threshold.
///
/// # Example
///
/// ```rust
/// use alzw_codec::{compress, decompress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::RESET).unwrap();
/// let decompressed = decompress(&compressed, LzwConfig::default()).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode_to_vec(data)
}

/// Compress data with the given configuration.
///
/// # Example
///
/// ```rust
/// use alzw_codec::{compress, LzwConfig};
///
/// let data = b"TOBEORNOTTOBEORTOBEORNOT";
/// let compressed = compress(data, LzwConfig::NONE).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode_to_vec(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [LzwConfig; 3] = [LzwConfig::NONE, LzwConfig::RESET, LzwConfig::MONITOR];

    #[test]
    fn test_roundtrip_tobeornot() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        for config in MODES {
            let compressed = compress(original, config).unwrap();
            assert_eq!(decompress(&compressed, config).unwrap(), original);
        }
    }

    #[test]
    fn test_empty_input() {
        for config in MODES {
            let compressed = compress(b"", config).unwrap();
            assert_eq!(compressed.len(), 2);
            assert!(decompress(&compressed, config).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_byte() {
        for config in MODES {
            let compressed = compress(b"A", config).unwrap();
            assert_eq!(decompress(&compressed, config).unwrap(), b"A");
        }
    }

    #[test]
    fn test_sixteen_repeated_bytes() {
        let original = [b'A'; 16];
        let compressed = compress(&original, LzwConfig::NONE).unwrap();
        assert_eq!(decompress(&compressed, LzwConfig::NONE).unwrap(), original);
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original, LzwConfig::NONE).unwrap();

        // Highly repetitive - should compress well
        assert!(compressed.len() < original.len() / 10);
        assert_eq!(decompress(&compressed, LzwConfig::NONE).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        for config in MODES {
            let compressed = compress(&original, config).unwrap();
            assert_eq!(decompress(&compressed, config).unwrap(), original);
        }
    }

    #[test]
    fn test_mode_comes_from_header() {
        let original = b"This is a test of compression! ".repeat(10);
        let compressed = compress(&original, LzwConfig::RESET.with_max_bits(9)).unwrap();
        let decoded = decompress(&compressed, LzwConfig::MONITOR.with_max_bits(9)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            compress(b"abc", LzwConfig::NONE.with_max_bits(8)),
            Err(LzwError::InvalidBitWidth(8))
        ));
        assert!(matches!(
            decompress(&[0x20, 0x00], LzwConfig::NONE.with_monitor_threshold(0.5)),
            Err(LzwError::InvalidThreshold(_))
        ));
    }
}
