//! The compiled tag dictionary and its binary format.
//!
//! `TagDictionary` answers word-form → tag-set queries through three tiers:
//! a safe suffix table, an exact character trie, and an approximate suffix
//! table used as a last-resort guess.

mod compiler;
mod tag_dict;
mod tag_dict_io;
mod tagset;
#[cfg(test)]
mod tests;
mod trie;

pub use tag_dict::{DictStats, TagDictionary};
pub use tagset::TagSetIndex;
pub use trie::TrieNode;

use std::io;

/// Unified error type for dictionary binary I/O.
///
/// Lookup itself is total and never fails; every variant here belongs to the
/// encode/decode/load path (WTDX files).
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected WTDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("body checksum mismatch")]
    BadChecksum,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}
