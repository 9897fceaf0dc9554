//! MSB-first bit channel.
//!
//! This module provides `MsbBitReader` and `MsbBitWriter` for transporting
//! groups of bits of arbitrary width over a byte-oriented stream.
//!
//! # Bit Ordering
//!
//! Bits are packed most significant bit first: the first bit written lands
//! in bit 7 of the first byte. A 9-bit codeword therefore fills one whole
//! byte and the top bit of the next.
//!
//! # Example
//!
//! ```
//! use alzw_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = MsbBitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = MsbBitReader::new(output.as_slice());
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{ChannelError, Result};
use std::io::{ErrorKind, Read, Write};

/// Widest group accepted by `read_bits`/`write_bits`.
pub const MAX_WIDTH: u8 = 32;

/// Widest group accepted by the `_wide` variants.
pub const MAX_WIDE_WIDTH: u8 = 64;

#[inline]
fn check_width(width: u8, max: u8) -> Result<()> {
    if width == 0 || width > max {
        return Err(ChannelError::invalid_width(width, max));
    }
    Ok(())
}

/// MSB-first bit reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time as bits are
/// needed, so wrap unbuffered sources (files, sockets) in a `BufReader`.
#[derive(Debug)]
pub struct MsbBitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; the valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> MsbBitReader<R> {
    /// Create a new `MsbBitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this reader and return the underlying reader.
    ///
    /// Bits already pulled into the buffer are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the underlying reader.
    ///
    /// Returns `Ok(false)` at end of input.
    fn pull_byte(&mut self) -> Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | u64::from(byte[0]);
                    self.bits_in_buffer += 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are buffered.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        debug_assert!(count <= MAX_WIDTH);
        while self.bits_in_buffer < count {
            if !self.pull_byte()? {
                return Err(ChannelError::end_of_stream(self.total_bits_read));
            }
        }
        Ok(())
    }

    /// Read `width` bits (1-32), most significant bit first.
    ///
    /// Nothing is consumed when the stream holds fewer than `width` bits.
    pub fn read_bits(&mut self, width: u8) -> Result<u32> {
        check_width(width, MAX_WIDTH)?;
        self.fill_buffer(width)?;

        let shift = self.bits_in_buffer - width;
        let mask = (1u64 << width) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer = shift;
        self.buffer &= (1u64 << shift) - 1;
        self.total_bits_read += u64::from(width);

        Ok(value as u32)
    }

    /// Read `width` bits (1-64), most significant bit first.
    pub fn read_bits_wide(&mut self, width: u8) -> Result<u64> {
        check_width(width, MAX_WIDE_WIDTH)?;
        if width <= MAX_WIDTH {
            return self.read_bits(width).map(u64::from);
        }
        let low_width = width - MAX_WIDTH;
        let high = self.read_bits(MAX_WIDTH)?;
        let low = self.read_bits(low_width)?;
        Ok((u64::from(high) << low_width) | u64::from(low))
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read eight bits as a byte, regardless of alignment.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Check whether every bit of the stream has been consumed.
    ///
    /// At most one byte is pulled from the underlying reader and kept in the
    /// buffer, so no bits are lost by asking.
    pub fn is_empty(&mut self) -> Result<bool> {
        if self.bits_in_buffer > 0 {
            return Ok(false);
        }
        Ok(!self.pull_byte()?)
    }
}

/// MSB-first bit writer that wraps any `Write` implementation.
///
/// Partial bytes are held back until eight bits accumulate. Call `flush()`
/// exactly once at the end of the stream; there is no flush on drop, so a
/// writer dropped without flushing loses its trailing bits.
#[derive(Debug)]
pub struct MsbBitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; the pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of pending bits in buffer (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits_written: u64,
}

impl<W: Write> MsbBitWriter<W> {
    /// Create a new `MsbBitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Flush pending bits and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Emit every complete byte held in the buffer.
    #[inline]
    fn drain_bytes(&mut self) -> Result<()> {
        // At most 7 pending + 32 new bits, so at most 4 complete bytes.
        let mut bytes = [0u8; 5];
        let mut n = 0;
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            bytes[n] = (self.buffer >> self.bits_in_buffer) as u8;
            n += 1;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
        if n > 0 {
            self.writer.write_all(&bytes[..n])?;
        }
        Ok(())
    }

    /// Write the low `width` bits (1-32) of `value`, most significant first.
    ///
    /// Fails without writing anything if `value` does not fit in `width`
    /// bits.
    pub fn write_bits(&mut self, value: u32, width: u8) -> Result<()> {
        check_width(width, MAX_WIDTH)?;
        if width < MAX_WIDTH && value >> width != 0 {
            return Err(ChannelError::value_out_of_range(u64::from(value), width));
        }

        self.buffer = (self.buffer << width) | u64::from(value);
        self.bits_in_buffer += width;
        self.total_bits_written += u64::from(width);

        self.drain_bytes()
    }

    /// Write the low `width` bits (1-64) of `value`, most significant first.
    pub fn write_bits_wide(&mut self, value: u64, width: u8) -> Result<()> {
        check_width(width, MAX_WIDE_WIDTH)?;
        if width < MAX_WIDE_WIDTH && value >> width != 0 {
            return Err(ChannelError::value_out_of_range(value, width));
        }
        if width <= MAX_WIDTH {
            return self.write_bits(value as u32, width);
        }
        let low_width = width - MAX_WIDTH;
        self.write_bits((value >> low_width) as u32, MAX_WIDTH)?;
        self.write_bits((value & ((1u64 << low_width) - 1)) as u32, low_width)
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(u32::from(bit), 1)
    }

    /// Write eight bits, regardless of alignment.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(u32::from(byte), 8)
    }

    /// Pad any partial byte with zero bits, emit it and flush the writer.
    ///
    /// Calling this again without writing more bits emits nothing.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            let byte = (self.buffer << padding) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}
