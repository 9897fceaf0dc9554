//! Decode-side codeword table.

use crate::config::{FIRST_CODE, MAX_BITS};
use crate::dictionary::Dictionary;

/// One slot of the table.
///
/// A phrase is stored as its parent code plus one byte, so the table never
/// holds full phrase bytes. `len == 0` marks the reserved placeholders.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Code of the phrase minus its last byte (unused for seeds).
    prefix: u16,
    /// Last byte of the phrase.
    last: u8,
    /// First byte of the phrase.
    first: u8,
    /// Phrase length in bytes.
    len: u32,
}

impl Entry {
    const PLACEHOLDER: Self = Self {
        prefix: 0,
        last: 0,
        first: 0,
        len: 0,
    };

    fn seed(byte: u8) -> Self {
        Self {
            prefix: 0,
            last: byte,
            first: byte,
            len: 1,
        }
    }
}

/// Indexable table mapping codes to phrases.
///
/// Slots `0..=255` hold the seeds, slots 256 and 257 are placeholders for the
/// reserved codes, and learned phrases fill slots `258, 259, ...` in order.
#[derive(Debug)]
pub struct CodeTable {
    entries: Vec<Entry>,
}

impl CodeTable {
    /// Create a table holding only the single-byte seeds.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity((1usize << MAX_BITS) + 1);
        entries.extend((0..=255u8).map(Entry::seed));
        entries.push(Entry::PLACEHOLDER);
        entries.push(Entry::PLACEHOLDER);
        Self { entries }
    }

    /// The code the next `define` must use.
    pub fn next_slot(&self) -> u32 {
        self.entries.len() as u32
    }

    #[inline]
    fn entry(&self, code: u16) -> Option<&Entry> {
        self.entries.get(usize::from(code)).filter(|e| e.len > 0)
    }

    /// Whether `code` names a stored phrase.
    pub fn contains(&self, code: u16) -> bool {
        self.entry(code).is_some()
    }

    /// First byte of the phrase stored under `code`.
    pub fn first_byte(&self, code: u16) -> Option<u8> {
        self.entry(code).map(|e| e.first)
    }

    /// Length of the phrase stored under `code`.
    pub fn phrase_len(&self, code: u16) -> Option<usize> {
        self.entry(code).map(|e| e.len as usize)
    }

    /// Store `phrase(prefix) + byte` in the next slot, which must be `code`.
    ///
    /// Returns `false` (storing nothing) when `code` is not the next slot or
    /// `prefix` is unknown.
    pub fn define(&mut self, code: u16, prefix: u16, byte: u8) -> bool {
        if usize::from(code) != self.entries.len() {
            return false;
        }
        let Some(parent) = self.entry(prefix).copied() else {
            return false;
        };
        self.entries.push(Entry {
            prefix,
            last: byte,
            first: parent.first,
            len: parent.len + 1,
        });
        true
    }

    /// Append the phrase stored under `code` to `out`.
    ///
    /// Returns `false` (appending nothing) for an unknown code.
    pub fn expand_into(&self, code: u16, out: &mut Vec<u8>) -> bool {
        let Some(entry) = self.entry(code) else {
            return false;
        };
        let start = out.len();
        out.resize(start + entry.len as usize, 0);

        // Walk the prefix chain, filling the phrase back to front.
        let mut current = *entry;
        let mut pos = out.len();
        loop {
            pos -= 1;
            out[pos] = current.last;
            if current.len == 1 {
                break;
            }
            current = self.entries[usize::from(current.prefix)];
        }
        debug_assert_eq!(pos, start);
        true
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for CodeTable {
    fn reset(&mut self) {
        self.entries.truncate(usize::from(FIRST_CODE));
    }

    fn learned(&self) -> usize {
        self.entries.len() - usize::from(FIRST_CODE)
    }

    fn phrase(&self, code: u16) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        self.expand_into(code, &mut out).then_some(out)
    }
}
