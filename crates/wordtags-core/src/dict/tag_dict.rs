use std::collections::HashMap;

use super::tagset::TagSetIndex;
use super::trie::TrieNode;

/// The compiled, immutable lookup structure.
///
/// Built once by [`TagDictionary::compile`] or loaded from a WTDX file;
/// read-only afterwards, so any number of threads may query it without
/// synchronization.
pub struct TagDictionary {
    /// Ascending; mirrors the compile claiming order.
    pub(super) suffix_lens: Vec<usize>,
    pub(super) tags: TagSetIndex,
    /// Safe table: every lexicon word longer than the suffix that ends with
    /// it carries exactly the mapped index set.
    pub(super) safe_suffixes: HashMap<String, Vec<u32>>,
    /// Approximate table: union of indices over all words sharing the
    /// suffix, with no consistency guarantee.
    pub(super) all_suffixes: HashMap<String, Vec<u32>>,
    pub(super) trie_root: TrieNode,
}

/// Structure counts reported by `tagtool info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    pub tagset_count: usize,
    pub safe_suffix_count: usize,
    pub all_suffix_count: usize,
    pub trie_word_count: usize,
    pub trie_node_count: usize,
}

impl TagDictionary {
    /// Look up the tag-sets a word form can carry.
    ///
    /// Total: any input maps to a (possibly empty) result, never an error.
    /// The first tier that matches wins; tiers are never merged.
    pub fn lookup(&self, word: &str) -> Vec<&str> {
        self.lookup_indices(word)
            .iter()
            .filter_map(|&index| self.tags.get(index))
            .collect()
    }

    fn lookup_indices(&self, word: &str) -> Vec<u32> {
        // Tier 1: safe suffixes, shortest first. Key existence decides the
        // hit; a word claimed at one length was excluded from all longer
        // lengths at build time, so at most one length can match.
        for &len in &self.suffix_lens {
            let Some(suffix) = char_suffix(word, len) else {
                continue;
            };
            if let Some(indices) = self.safe_suffixes.get(suffix) {
                return indices.clone();
            }
        }

        // Tier 2: exact trie walk over the full word.
        let found = self.trie_root.find(word);
        if !found.is_empty() {
            return found.to_vec();
        }

        // Tier 3: approximate suffixes, longest first. Among unreliable
        // matches the most specific one is the best guess.
        for &len in self.suffix_lens.iter().rev() {
            let Some(suffix) = char_suffix(word, len) else {
                continue;
            };
            if let Some(indices) = self.all_suffixes.get(suffix) {
                return indices.clone();
            }
        }

        Vec::new()
    }

    pub fn suffix_lens(&self) -> &[usize] {
        &self.suffix_lens
    }

    pub fn tags(&self) -> &TagSetIndex {
        &self.tags
    }

    /// Iterate the safe suffix table (arbitrary order).
    pub fn iter_safe_suffixes(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.safe_suffixes
            .iter()
            .map(|(suffix, indices)| (suffix.as_str(), indices.as_slice()))
    }

    /// Flat (word, tag-set index) view of the trie, words in lexicographic
    /// order.
    pub fn trie_words(&self) -> Vec<(String, u32)> {
        self.trie_root.words()
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            tagset_count: self.tags.len(),
            safe_suffix_count: self.safe_suffixes.len(),
            all_suffix_count: self.all_suffixes.len(),
            trie_word_count: self.trie_root.leaf_count(),
            trie_node_count: self.trie_root.node_count(),
        }
    }
}

/// The trailing `len` characters of `word`, or `None` when the word is not
/// longer than `len`. Character-based, not byte-based.
pub(super) fn char_suffix(word: &str, len: usize) -> Option<&str> {
    let mut start = None;
    for (seen, (idx, _)) in word.char_indices().rev().enumerate() {
        if seen + 1 == len {
            start = Some(idx);
        } else if seen + 1 > len {
            return start.map(|i| &word[i..]);
        }
    }
    None
}
