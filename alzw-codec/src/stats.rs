//! Per-stream statistics.

use crate::config::Mode;
use std::fmt;

/// Summary of one encoded or decoded stream.
///
/// `bytes_in` and `bytes_out` are taken from the caller's point of view: for
/// the encoder the input is the raw data, for the decoder it is the coded
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecStats {
    /// Dictionary policy of the stream.
    pub mode: Mode,
    /// Bytes consumed.
    pub bytes_in: u64,
    /// Bytes produced.
    pub bytes_out: u64,
    /// Phrase codewords, excluding the end-of-stream and reset markers.
    pub codewords: u64,
    /// Dictionary resets.
    pub resets: u64,
    /// Codeword width when the stream ended.
    pub final_width: u8,
}

impl CodecStats {
    /// Output size relative to input size, in percent.
    pub fn percent(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        self.bytes_out as f64 / self.bytes_in as f64 * 100.0
    }
}

impl fmt::Display for CodecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} bytes ({:.1}%), {} codewords, {} resets, mode {}, width {}",
            self.bytes_in,
            self.bytes_out,
            self.percent(),
            self.codewords,
            self.resets,
            self.mode,
            self.final_width
        )
    }
}
