//! Codec configuration and reserved codewords.

use crate::error::{LzwError, Result};
use std::fmt;

/// Initial codeword width in bits.
pub const MIN_BITS: u8 = 9;

/// Widest codeword the stream format allows.
pub const MAX_BITS: u8 = 16;

/// Number of single-byte seed phrases (codes `0..=255`).
pub const SEED_CODES: u16 = 256;

/// End-of-stream marker.
pub const END_OF_STREAM: u16 = 256;

/// Dictionary-reset marker.
pub const RESET_CODE: u16 = 257;

/// First code assigned to a learned phrase.
pub const FIRST_CODE: u16 = 258;

/// Width of the mode flag at the head of every stream.
pub const MODE_BITS: u8 = 2;

/// Default `ratio_of_ratios` at which `Monitor` resets the dictionary.
pub const DEFAULT_MONITOR_THRESHOLD: f64 = 1.1;

/// Policy applied once the dictionary is full at the maximum width.
///
/// The mode is fixed for a whole stream and recorded in its 2-bit header so
/// the decoder replays the same policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Keep using the full dictionary unchanged.
    #[default]
    None,
    /// Clear the dictionary every time it fills up.
    Reset,
    /// Clear the dictionary only once the compression ratio has degraded.
    Monitor,
}

impl Mode {
    /// Header encoding: `00`, `01` or `10`.
    pub fn to_bits(self) -> u8 {
        match self {
            Mode::None => 0,
            Mode::Reset => 1,
            Mode::Monitor => 2,
        }
    }

    /// Decode the 2-bit header flag.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Mode::None),
            1 => Ok(Mode::Reset),
            2 => Ok(Mode::Monitor),
            other => Err(LzwError::InvalidMode(other)),
        }
    }

    /// Parse a policy letter: `n`, `r` or `m`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Mode::None),
            'r' => Some(Mode::Reset),
            'm' => Some(Mode::Monitor),
            _ => None,
        }
    }

    /// The policy letter for this mode.
    pub fn letter(self) -> char {
        match self {
            Mode::None => 'n',
            Mode::Reset => 'r',
            Mode::Monitor => 'm',
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::None => "none",
            Mode::Reset => "reset",
            Mode::Monitor => "monitor",
        };
        f.write_str(name)
    }
}

/// Adaptive LZW configuration parameters.
///
/// Only `mode` travels in the stream header. `max_bits` and
/// `monitor_threshold` must match between the encoder and the decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LzwConfig {
    /// Dictionary policy. Ignored by the decoder, which reads it from the
    /// stream header.
    pub mode: Mode,
    /// Maximum codeword width in bits (9-16, typically 16).
    pub max_bits: u8,
    /// `ratio_of_ratios` at or above which `Monitor` resets.
    pub monitor_threshold: f64,
}

impl LzwConfig {
    /// Frozen dictionary once full.
    pub const NONE: Self = Self::new(Mode::None);

    /// Reset whenever the dictionary fills.
    pub const RESET: Self = Self::new(Mode::Reset);

    /// Reset when compression degrades past the threshold.
    pub const MONITOR: Self = Self::new(Mode::Monitor);

    /// Create a configuration with the standard 9-16 bit schedule.
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_bits: MAX_BITS,
            monitor_threshold: DEFAULT_MONITOR_THRESHOLD,
        }
    }

    /// Set the maximum codeword width.
    pub fn with_max_bits(mut self, max_bits: u8) -> Self {
        self.max_bits = max_bits;
        self
    }

    /// Set the monitor threshold.
    pub fn with_monitor_threshold(mut self, threshold: f64) -> Self {
        self.monitor_threshold = threshold;
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BITS..=MAX_BITS).contains(&self.max_bits) {
            return Err(LzwError::InvalidBitWidth(self.max_bits));
        }
        if !self.monitor_threshold.is_finite() || self.monitor_threshold < 1.0 {
            return Err(LzwError::InvalidThreshold(self.monitor_threshold));
        }
        Ok(())
    }

    /// Number of codes addressable at the maximum width.
    pub fn capacity(&self) -> u32 {
        1 << self.max_bits
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::NONE
    }
}
