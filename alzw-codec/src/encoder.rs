//! Adaptive LZW encoder (compression).

use crate::config::{END_OF_STREAM, LzwConfig, MODE_BITS, RESET_CODE};
use crate::dictionary::PrefixDictionary;
use crate::error::Result;
use crate::state::{CodecState, Step};
use crate::stats::CodecStats;
use alzw_core::MsbBitWriter;
use std::io::Write;
use tracing::debug;

/// Adaptive LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    state: CodecState<PrefixDictionary>,
    config: LzwConfig,
    codewords: u64,
}

impl LzwEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: CodecState::new(PrefixDictionary::new(), config),
            config,
            codewords: 0,
        })
    }

    /// Encode `input` as one complete stream written to `writer`.
    ///
    /// # Algorithm
    ///
    /// 1. Write the 2-bit mode flag
    /// 2. Find the longest dictionary phrase that prefixes the remaining input
    /// 3. Write its code at the current width
    /// 4. Register phrase + next byte, escalating the width when the
    ///    dictionary is full, or apply the mode's policy once it is full at
    ///    the maximum width
    /// 5. Repeat until the input is consumed, then write the end-of-stream
    ///    code and flush
    pub fn encode<W: Write>(&mut self, input: &[u8], writer: W) -> Result<CodecStats> {
        let mut out = MsbBitWriter::new(writer);
        self.begin(&mut out)?;

        let mut rest = input;
        while !rest.is_empty() {
            let consumed = self.step(rest, &mut out)?;
            rest = &rest[consumed..];
        }

        self.finish(&mut out)?;

        let stats = CodecStats {
            mode: self.state.mode(),
            bytes_in: input.len() as u64,
            bytes_out: out.bits_written().div_ceil(8),
            codewords: self.codewords,
            resets: self.state.resets(),
            final_width: self.state.width(),
        };
        debug!(
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            codewords = stats.codewords,
            resets = stats.resets,
            "encode finished"
        );
        Ok(stats)
    }

    /// Encode `input` into a new buffer.
    pub fn encode_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 2 + 2);
        self.encode(input, &mut output)?;
        Ok(output)
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.state.restart(self.config.mode);
        self.codewords = 0;
    }

    /// Reset and write the stream header.
    pub(crate) fn begin<W: Write>(&mut self, out: &mut MsbBitWriter<W>) -> Result<()> {
        self.reset();
        out.write_bits(u32::from(self.state.mode().to_bits()), MODE_BITS)?;
        Ok(())
    }

    /// Code the longest known prefix of `rest` (non-empty) and return how
    /// many bytes it covered.
    pub(crate) fn step<W: Write>(
        &mut self,
        rest: &[u8],
        out: &mut MsbBitWriter<W>,
    ) -> Result<usize> {
        let Some(m) = self.state.dict().longest_prefix_of(rest) else {
            return Ok(0);
        };

        let width = self.state.width();
        out.write_bits(u32::from(m.code), width)?;
        self.codewords += 1;

        match self.state.advance(width, m.len) {
            Step::Register(code) => {
                if let Some(&next) = rest.get(m.len) {
                    self.state.dict_mut().extend(m.code, next, code)?;
                }
            }
            Step::Frozen => {}
            Step::Reset => {
                out.write_bits(u32::from(RESET_CODE), self.state.width())?;
                self.state.reset();
            }
        }

        Ok(m.len)
    }

    /// Write the end-of-stream code and flush.
    pub(crate) fn finish<W: Write>(&mut self, out: &mut MsbBitWriter<W>) -> Result<()> {
        out.write_bits(u32::from(END_OF_STREAM), self.state.width())?;
        out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &CodecState<PrefixDictionary> {
        &self.state
    }
}
