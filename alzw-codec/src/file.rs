//! File-to-file compression helpers.

use crate::config::LzwConfig;
use crate::decoder::LzwDecoder;
use crate::encoder::LzwEncoder;
use crate::error::{LzwError, Result};
use crate::stats::CodecStats;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Compress the file at `src` into a new file at `dst`.
///
/// The source is read in full before `dst` is created, so an unreadable
/// source never leaves an output file behind.
pub fn compress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    config: LzwConfig,
) -> Result<CodecStats> {
    let src = src.as_ref();
    let mut encoder = LzwEncoder::new(config)?;
    let data = fs::read(src).map_err(|e| LzwError::source_unavailable(src, e))?;

    let output = File::create(dst.as_ref())?;
    encoder.encode(&data, BufWriter::new(output))
}

/// Expand the compressed file at `src` into a new file at `dst`.
///
/// `src` is opened before `dst` is created. A stream that turns out to be
/// corrupt part way leaves whatever was already written in `dst`.
pub fn decompress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    config: LzwConfig,
) -> Result<CodecStats> {
    let src = src.as_ref();
    let mut decoder = LzwDecoder::new(config)?;
    let input = File::open(src).map_err(|e| LzwError::source_unavailable(src, e))?;

    let output = File::create(dst.as_ref())?;
    decoder.decode(BufReader::new(input), BufWriter::new(output))
}
