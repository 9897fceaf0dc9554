//! Adaptive state machine shared by the encoder and the decoder.
//!
//! Both sides call [`CodecState::advance`] once per codeword with the same
//! arguments (the width the codeword was coded at and the length of its
//! phrase), so code assignment, width escalation and policy decisions are
//! computed by one piece of code for both directions.

use crate::config::{FIRST_CODE, LzwConfig, MIN_BITS, Mode};
use crate::dictionary::Dictionary;
use crate::policy::{PolicyAction, RatioTracker, choose_action};
use tracing::debug;

/// Outcome of one codeword for the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `code` is assigned to the phrase just coded plus the next input byte.
    Register(u16),
    /// Dictionary is full at the maximum width and stays as it is.
    Frozen,
    /// Dictionary must be cleared; the reset marker goes at the current
    /// width before calling [`CodecState::reset`].
    Reset,
}

/// Width, code counter, policy and ratio state around a phrase store.
#[derive(Debug)]
pub struct CodecState<D: Dictionary> {
    dict: D,
    config: LzwConfig,
    mode: Mode,
    width: u8,
    /// Next code to assign; reaches `2^max_bits` when full.
    next_code: u32,
    ratio: RatioTracker,
    resets: u64,
}

impl<D: Dictionary> CodecState<D> {
    /// Wrap a freshly seeded dictionary.
    pub fn new(dict: D, config: LzwConfig) -> Self {
        Self {
            dict,
            config,
            mode: config.mode,
            width: MIN_BITS,
            next_code: u32::from(FIRST_CODE),
            ratio: RatioTracker::new(),
            resets: 0,
        }
    }

    /// The phrase store.
    pub fn dict(&self) -> &D {
        &self.dict
    }

    /// Mutable access to the phrase store.
    pub fn dict_mut(&mut self) -> &mut D {
        &mut self.dict
    }

    /// Current codeword width.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Active policy.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Next code to be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// Ratio bookkeeping.
    pub fn ratio(&self) -> &RatioTracker {
        &self.ratio
    }

    /// Number of resets applied since the stream started.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Whether every code at the current width is assigned.
    pub fn is_full(&self) -> bool {
        self.next_code >= 1 << self.width
    }

    /// Whether the dictionary is full and the width cannot grow.
    pub fn is_exhausted(&self) -> bool {
        self.is_full() && self.width >= self.config.max_bits
    }

    /// Start a new stream under `mode`.
    pub fn restart(&mut self, mode: Mode) {
        self.mode = mode;
        self.ratio = RatioTracker::new();
        self.resets = 0;
        self.clear();
    }

    /// Clear the dictionary and return to the initial width.
    pub fn reset(&mut self) {
        let dropped = self.dict.learned();
        self.ratio.end_monitoring();
        self.resets += 1;
        self.clear();
        debug!(mode = %self.mode, resets = self.resets, dropped, "dictionary reset");
    }

    fn clear(&mut self) {
        self.dict.reset();
        self.width = MIN_BITS;
        self.next_code = u32::from(FIRST_CODE);
    }

    /// Account for one codeword coded at `width` standing for `phrase_len`
    /// bytes, and decide what happens to the dictionary.
    pub fn advance(&mut self, width: u8, phrase_len: usize) -> Step {
        self.ratio.record(width, phrase_len);

        if self.is_full() && self.width < self.config.max_bits {
            self.width += 1;
            debug!(width = self.width, next_code = self.next_code, "codeword width escalated");
        }

        if !self.is_full() {
            let code = self.next_code as u16;
            self.next_code += 1;
            return Step::Register(code);
        }

        if self.mode == Mode::Monitor && !self.ratio.is_monitoring() {
            self.ratio.begin_monitoring();
            debug!(
                baseline = self.ratio.current_ratio(),
                "dictionary full, monitoring compression ratio"
            );
        }

        match choose_action(
            self.mode,
            &self.ratio,
            true,
            self.config.monitor_threshold,
        ) {
            PolicyAction::KeepFrozen => Step::Frozen,
            PolicyAction::DoReset => Step::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_BITS;
    use crate::table::CodeTable;

    fn state(config: LzwConfig) -> CodecState<CodeTable> {
        CodecState::new(CodeTable::new(), config)
    }

    #[test]
    fn test_initial_state() {
        let s = state(LzwConfig::NONE);
        assert_eq!(s.width(), 9);
        assert_eq!(s.next_code(), 258);
        assert!(!s.is_full());
    }

    #[test]
    fn test_width_schedule_is_monotonic() {
        let mut s = state(LzwConfig::NONE);
        let mut last_width = s.width();
        let mut registered = 0u32;
        loop {
            let width = s.width();
            match s.advance(width, 1) {
                Step::Register(code) => {
                    assert_eq!(u32::from(code), 258 + registered);
                    assert!(u32::from(code) < 1 << s.width());
                    registered += 1;
                }
                Step::Frozen => break,
                Step::Reset => panic!("None mode never resets"),
            }
            assert!(s.width() >= last_width);
            assert!(s.width() <= MAX_BITS);
            last_width = s.width();
        }
        assert_eq!(registered, (1 << 16) - 258);
        assert_eq!(s.width(), 16);
        assert!(s.is_exhausted());
        assert_eq!(s.advance(16, 1), Step::Frozen);
    }

    #[test]
    fn test_escalation_point() {
        let mut s = state(LzwConfig::NONE);
        // 254 registrations fill codes 258..=511 at width 9.
        for _ in 0..254 {
            assert!(matches!(s.advance(9, 1), Step::Register(_)));
        }
        assert_eq!(s.width(), 9);
        assert!(s.is_full());
        // The next codeword escalates and registers 512 at width 10.
        assert_eq!(s.advance(9, 1), Step::Register(512));
        assert_eq!(s.width(), 10);
    }

    #[test]
    fn test_reset_mode() {
        let mut s = state(LzwConfig::RESET.with_max_bits(9));
        for _ in 0..254 {
            assert!(matches!(s.advance(9, 2), Step::Register(_)));
        }
        assert_eq!(s.advance(9, 2), Step::Reset);
        s.reset();
        assert_eq!(s.resets(), 1);
        assert_eq!(s.width(), 9);
        assert_eq!(s.advance(9, 2), Step::Register(258));
    }

    #[test]
    fn test_monitor_mode_latches_then_resets() {
        let mut s = state(LzwConfig::MONITOR.with_max_bits(9));
        for _ in 0..254 {
            assert!(matches!(s.advance(9, 4), Step::Register(_)));
        }
        // First full event only latches the baseline.
        assert_eq!(s.advance(9, 4), Step::Frozen);
        assert!(s.ratio().is_monitoring());
        // Same compression keeps the dictionary.
        assert_eq!(s.advance(9, 4), Step::Frozen);
        // Single-byte phrases drag the ratio down until a reset is due.
        let mut steps = 0;
        while s.advance(9, 1) == Step::Frozen {
            steps += 1;
            assert!(steps < 1000);
        }
        assert!(s.ratio().ratio_of_ratios() >= 1.1);
        s.reset();
        assert!(!s.ratio().is_monitoring());
    }

    #[test]
    fn test_same_schedule_for_both_stores() {
        use crate::dictionary::PrefixDictionary;

        let config = LzwConfig::RESET.with_max_bits(9);
        let mut encode_side = CodecState::new(PrefixDictionary::new(), config);
        let mut decode_side = state(config);

        // Register "A" + 'A', "AA" + 'A', ... on both sides until the reset.
        let mut parent = u16::from(b'A');
        loop {
            let step = encode_side.advance(9, 1);
            assert_eq!(decode_side.advance(9, 1), step);
            match step {
                Step::Register(code) => {
                    encode_side.dict_mut().extend(parent, b'A', code).unwrap();
                    assert!(decode_side.dict_mut().define(code, parent, b'A'));
                    parent = code;
                }
                Step::Frozen => panic!("Reset mode never freezes"),
                Step::Reset => break,
            }
            assert_eq!(encode_side.dict().learned(), decode_side.dict().learned());
        }
        assert_eq!(encode_side.dict().learned(), 254);
        assert_eq!(encode_side.dict().phrase(511), decode_side.dict().phrase(511));

        encode_side.reset();
        decode_side.reset();
        assert_eq!(encode_side.dict().learned(), 0);
        assert_eq!(decode_side.dict().learned(), 0);
    }

    #[test]
    fn test_restart() {
        let mut s = state(LzwConfig::RESET.with_max_bits(9));
        for _ in 0..300 {
            if s.advance(s.width(), 1) == Step::Reset {
                s.reset();
            }
        }
        assert!(s.resets() > 0);
        s.restart(Mode::None);
        assert_eq!(s.mode(), Mode::None);
        assert_eq!(s.resets(), 0);
        assert_eq!(s.next_code(), 258);
        assert_eq!(s.ratio().compressed_bits(), 0);
    }
}
