//! # alzw Core
//!
//! Core components for the alzw adaptive LZW codec.
//!
//! - [`bitstream`]: MSB-first bit channel for codewords of arbitrary width
//! - [`error`]: Error types
//!
//! Codewords produced by the codec are 9 to 16 bits wide and never byte
//! aligned, so every codeword goes through [`MsbBitWriter`] and
//! [`MsbBitReader`]; nothing above this crate touches raw bytes of the
//! encoded stream.
//!
//! ## Example
//!
//! ```rust
//! use alzw_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut output = Vec::new();
//! let mut writer = MsbBitWriter::new(&mut output);
//! writer.write_bits(0b10, 2).unwrap();
//! writer.write_bits(300, 9).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = MsbBitReader::new(output.as_slice());
//! assert_eq!(reader.read_bits(2).unwrap(), 0b10);
//! assert_eq!(reader.read_bits(9).unwrap(), 300);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{ChannelError, Result};
