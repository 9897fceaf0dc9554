//! Dictionary reset policy.
//!
//! Both sides of the codec feed identical numbers into [`RatioTracker`] and
//! ask [`choose_action`] the same question at the same codeword, which is
//! what keeps the decoder's table in lock-step with the encoder's
//! dictionary without transmitting the decision.

use crate::config::Mode;

/// What to do with a dictionary that is full at the maximum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    /// Keep coding with the dictionary as it is.
    KeepFrozen,
    /// Clear the dictionary back to its seeds.
    DoReset,
}

/// Running compression-ratio bookkeeping for `Monitor` mode.
///
/// Ratios are uncompressed bits over compressed bits, accumulated over the
/// whole stream. Until monitoring begins the baseline follows the current
/// ratio; once it begins the baseline stays fixed and
/// `ratio_of_ratios = baseline / current` measures the degradation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTracker {
    uncompressed_bits: u64,
    compressed_bits: u64,
    baseline: f64,
    ratio_of_ratios: f64,
    monitoring: bool,
}

impl RatioTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            uncompressed_bits: 0,
            compressed_bits: 0,
            baseline: 1.0,
            ratio_of_ratios: 1.0,
            monitoring: false,
        }
    }

    /// Account for one codeword of `width` bits standing for `phrase_len`
    /// input bytes.
    pub fn record(&mut self, width: u8, phrase_len: usize) {
        self.compressed_bits += u64::from(width);
        self.uncompressed_bits += phrase_len as u64 * 8;

        let current = self.current_ratio();
        if self.monitoring {
            self.ratio_of_ratios = self.baseline / current;
        } else {
            self.baseline = current;
        }
    }

    /// Latch the baseline. Has no effect while already monitoring.
    pub fn begin_monitoring(&mut self) {
        self.monitoring = true;
    }

    /// Stop monitoring after a reset; the next full dictionary re-latches.
    pub fn end_monitoring(&mut self) {
        self.monitoring = false;
        self.ratio_of_ratios = 1.0;
    }

    /// Whether the baseline is latched.
    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    /// Compression ratio over everything recorded so far.
    pub fn current_ratio(&self) -> f64 {
        if self.compressed_bits == 0 {
            return 1.0;
        }
        self.uncompressed_bits as f64 / self.compressed_bits as f64
    }

    /// Baseline over current ratio; above 1.0 means compression got worse.
    pub fn ratio_of_ratios(&self) -> f64 {
        self.ratio_of_ratios
    }

    /// Total uncompressed bits recorded.
    pub fn uncompressed_bits(&self) -> u64 {
        self.uncompressed_bits
    }

    /// Total compressed bits recorded.
    pub fn compressed_bits(&self) -> u64 {
        self.compressed_bits
    }
}

impl Default for RatioTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Decide what the policy does for the current codeword.
///
/// A dictionary with spare room is never reset. `Monitor` resets once
/// `ratio_of_ratios >= threshold`; both sides use this same comparison.
pub fn choose_action(
    mode: Mode,
    ratio: &RatioTracker,
    is_full: bool,
    threshold: f64,
) -> PolicyAction {
    if !is_full {
        return PolicyAction::KeepFrozen;
    }
    match mode {
        Mode::None => PolicyAction::KeepFrozen,
        Mode::Reset => PolicyAction::DoReset,
        Mode::Monitor if ratio.ratio_of_ratios() >= threshold => PolicyAction::DoReset,
        Mode::Monitor => PolicyAction::KeepFrozen,
    }
}
