//! Encode-side prefix dictionary and the interface shared with the decoder.

use crate::config::{FIRST_CODE, SEED_CODES};
use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// Phrase store operations common to both sides.
///
/// Both stores hold the 256 single-byte seeds permanently. Learned phrases
/// are only ever dropped all at once.
///
/// Registration, fullness and the codeword width are not part of this
/// trait: [`CodecState`](crate::CodecState) owns the code counter
/// and width for whichever store it wraps and decides when a phrase is
/// registered. Each store then adds phrases through its own method
/// ([`PrefixDictionary::extend`], [`CodeTable::define`](crate::CodeTable::define)),
/// since the encoder knows the new phrase's last byte immediately while the
/// decoder only learns it from the next codeword. `learned` and `phrase`
/// are for inspecting either store the same way, e.g. to compare them.
pub trait Dictionary {
    /// Drop every learned phrase, keeping the single-byte seeds.
    fn reset(&mut self);

    /// Number of learned phrases currently stored.
    fn learned(&self) -> usize;

    /// Bytes of the phrase stored under `code`, if any.
    fn phrase(&self, code: u16) -> Option<Vec<u8>>;
}

/// Result of a longest-prefix query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Code of the matched phrase.
    pub code: u16,
    /// Length of the matched phrase in bytes.
    pub len: usize,
}

/// Prefix tree mapping phrases to codes.
///
/// Every learned phrase is a stored phrase plus one byte, so each trie node
/// is identified by its code and an edge is a `(parent code, byte)` pair.
/// The seeds are implicit: code `b` is the phrase `[b]`.
#[derive(Debug, Default)]
pub struct PrefixDictionary {
    /// Trie edges: (parent code, next byte) -> child code.
    children: HashMap<(u16, u8), u16>,
    /// Reverse edges for learned codes: code -> (parent code, last byte).
    parents: HashMap<u16, (u16, u8)>,
}

impl PrefixDictionary {
    /// Create a dictionary holding only the single-byte seeds.
    pub fn new() -> Self {
        Self {
            children: HashMap::with_capacity(1 << 12),
            parents: HashMap::with_capacity(1 << 12),
        }
    }

    /// Code of `phrase` extended by `byte`, if stored.
    #[inline]
    pub fn child(&self, code: u16, byte: u8) -> Option<u16> {
        self.children.get(&(code, byte)).copied()
    }

    /// Whether `code` names a stored phrase.
    pub fn contains_code(&self, code: u16) -> bool {
        code < SEED_CODES || self.parents.contains_key(&code)
    }

    /// Find the longest stored phrase that is a prefix of `suffix`.
    ///
    /// Returns `None` only for an empty `suffix`; the seeds guarantee a
    /// match of at least one byte otherwise.
    pub fn longest_prefix_of(&self, suffix: &[u8]) -> Option<Match> {
        let (&first, rest) = suffix.split_first()?;
        let mut code = u16::from(first);
        let mut len = 1;
        for &byte in rest {
            match self.child(code, byte) {
                Some(next) => {
                    code = next;
                    len += 1;
                }
                None => break,
            }
        }
        Some(Match { code, len })
    }

    /// Code stored for exactly `phrase`.
    pub fn code_of(&self, phrase: &[u8]) -> Option<u16> {
        let (&first, rest) = phrase.split_first()?;
        rest.iter()
            .try_fold(u16::from(first), |code, &byte| self.child(code, byte))
    }

    /// Store the phrase `parent + byte` under `code`.
    pub fn extend(&mut self, parent: u16, byte: u8, code: u16) -> Result<()> {
        if !self.contains_code(parent) {
            return Err(LzwError::UnknownPrefix);
        }
        if let Some(existing) = self.child(parent, byte) {
            return Err(LzwError::DuplicatePhrase { existing });
        }
        debug_assert!(code >= FIRST_CODE && !self.parents.contains_key(&code));

        self.children.insert((parent, byte), code);
        self.parents.insert(code, (parent, byte));
        Ok(())
    }

    /// Store `phrase` under `code`.
    ///
    /// `phrase` must be a stored phrase plus one byte.
    pub fn insert(&mut self, phrase: &[u8], code: u16) -> Result<()> {
        let (&last, prefix) = phrase.split_last().ok_or(LzwError::UnknownPrefix)?;
        if prefix.is_empty() {
            return Err(LzwError::DuplicatePhrase {
                existing: u16::from(last),
            });
        }
        let parent = self.code_of(prefix).ok_or(LzwError::UnknownPrefix)?;
        self.extend(parent, last, code)
    }
}

impl Dictionary for PrefixDictionary {
    fn reset(&mut self) {
        self.children.clear();
        self.parents.clear();
    }

    fn learned(&self) -> usize {
        self.parents.len()
    }

    fn phrase(&self, code: u16) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut current = code;
        while current >= SEED_CODES {
            let &(parent, byte) = self.parents.get(&current)?;
            bytes.push(byte);
            current = parent;
        }
        bytes.push(current as u8);
        bytes.reverse();
        Some(bytes)
    }
}
