//! Adaptive LZW decoder (decompression).
//!
//! The decoder never learns about resets from the stream itself. It replays
//! the encoder's width schedule and policy through the shared
//! [`CodecState`], and only checks that a reset marker sits where it
//! inferred one.

use crate::config::{END_OF_STREAM, LzwConfig, MODE_BITS, Mode, RESET_CODE};
use crate::error::{LzwError, Result};
use crate::state::{CodecState, Step};
use crate::stats::CodecStats;
use crate::table::CodeTable;
use alzw_core::MsbBitReader;
use std::io::{Read, Write};
use tracing::debug;

/// Decoded bytes are handed to the writer in chunks of about this size.
const OUTPUT_CHUNK: usize = 64 * 1024;

/// One phrase codeword read from the stream.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Codeword {
    code: u16,
    width: u8,
    len: usize,
}

/// Adaptive LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    state: CodecState<CodeTable>,
    /// Slot registered by the previous codeword and the code it extends.
    /// Its last byte is the first byte of the next phrase.
    pending: Option<(u16, u16)>,
    codewords: u64,
}

impl LzwDecoder {
    /// Create a new decoder with the given configuration.
    ///
    /// `config.mode` is ignored; the mode is read from the stream header.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: CodecState::new(CodeTable::new(), config),
            pending: None,
            codewords: 0,
        })
    }

    /// Decode one complete stream from `input` into `output`.
    ///
    /// Decoding stops at the end-of-stream code; trailing padding bits are
    /// ignored. The output writer is flushed before returning.
    pub fn decode<R: Read, W: Write>(&mut self, input: R, mut output: W) -> Result<CodecStats> {
        let mut reader = MsbBitReader::new(input);
        let mode = self.begin(&mut reader)?;

        let mut buffer = Vec::with_capacity(OUTPUT_CHUNK * 2);
        let mut bytes_out = 0u64;
        while let Some(codeword) = self.read_phrase(&mut reader, &mut buffer)? {
            self.settle(&mut reader, codeword)?;
            if buffer.len() >= OUTPUT_CHUNK {
                output.write_all(&buffer)?;
                bytes_out += buffer.len() as u64;
                buffer.clear();
            }
        }
        output.write_all(&buffer)?;
        bytes_out += buffer.len() as u64;
        output.flush()?;

        let stats = CodecStats {
            mode,
            bytes_in: reader.bits_read().div_ceil(8),
            bytes_out,
            codewords: self.codewords,
            resets: self.state.resets(),
            final_width: self.state.width(),
        };
        debug!(
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            codewords = stats.codewords,
            resets = stats.resets,
            "decode finished"
        );
        Ok(stats)
    }

    /// Decode a complete in-memory stream.
    pub fn decode_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 3);
        self.decode(input, &mut output)?;
        Ok(output)
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.restart(Mode::None);
    }

    fn restart(&mut self, mode: Mode) {
        self.state.restart(mode);
        self.pending = None;
        self.codewords = 0;
    }

    /// Read the stream header and restart under its mode.
    pub(crate) fn begin<R: Read>(&mut self, reader: &mut MsbBitReader<R>) -> Result<Mode> {
        let flag = reader.read_bits(MODE_BITS)?;
        let mode = Mode::from_bits(flag as u8)?;
        self.restart(mode);
        debug!(%mode, "stream header");
        Ok(mode)
    }

    /// Read one codeword and append its phrase to `out`.
    ///
    /// Completes the slot left pending by the previous codeword first, which
    /// also resolves a code naming that very slot. Returns `None` at the
    /// end-of-stream code.
    pub(crate) fn read_phrase<R: Read>(
        &mut self,
        reader: &mut MsbBitReader<R>,
        out: &mut Vec<u8>,
    ) -> Result<Option<Codeword>> {
        let width = self.state.width();
        let code = reader.read_bits(width)? as u16;
        if code == END_OF_STREAM {
            return Ok(None);
        }

        let invalid = |reader: &MsbBitReader<R>| LzwError::InvalidCode {
            code,
            position: reader.bits_read(),
        };

        if let Some((slot, parent)) = self.pending.take() {
            let source = if code == slot { parent } else { code };
            let first = self
                .state
                .dict()
                .first_byte(source)
                .ok_or_else(|| invalid(reader))?;
            if !self.state.dict_mut().define(slot, parent, first) {
                return Err(invalid(reader));
            }
        }

        let start = out.len();
        if !self.state.dict().expand_into(code, out) {
            return Err(invalid(reader));
        }
        self.codewords += 1;

        Ok(Some(Codeword {
            code,
            width,
            len: out.len() - start,
        }))
    }

    /// Apply the width schedule and policy for a codeword just decoded,
    /// consuming the reset marker when a reset is due.
    pub(crate) fn settle<R: Read>(
        &mut self,
        reader: &mut MsbBitReader<R>,
        codeword: Codeword,
    ) -> Result<()> {
        match self.state.advance(codeword.width, codeword.len) {
            Step::Register(slot) => self.pending = Some((slot, codeword.code)),
            Step::Frozen => {}
            Step::Reset => {
                let found = reader.read_bits(self.state.width())? as u16;
                if found != RESET_CODE {
                    return Err(LzwError::MissingResetMarker {
                        found,
                        position: reader.bits_read(),
                    });
                }
                self.state.reset();
                self.pending = None;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &CodecState<CodeTable> {
        &self.state
    }
}
