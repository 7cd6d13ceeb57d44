use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::config::CompileConfig;

use super::tag_dict::{char_suffix, TagDictionary};
use super::tagset::TagSetIndex;
use super::trie::TrieNode;

impl TagDictionary {
    /// Compile a lexicon into the lookup structure.
    ///
    /// `words` maps each normalized word form to its deduplicated tag-set
    /// index set; every index must have been interned in `tags`. Words are
    /// processed in lexicographic order (the `BTreeMap` order), which fixes
    /// the claiming order and makes builds reproducible.
    ///
    /// For each suffix length, ascending: words not yet claimed by a shorter
    /// suffix are grouped by their trailing characters; a suffix where every
    /// such word carries the identical index set becomes a safe suffix and
    /// claims its words, excluding them from longer lengths and from the
    /// trie. A single disagreeing word poisons the suffix for that length.
    /// Words never claimed go into the exact trie, one insertion per
    /// (word, index) pair.
    pub fn compile(
        tags: TagSetIndex,
        words: BTreeMap<String, BTreeSet<u32>>,
        config: &CompileConfig,
    ) -> TagDictionary {
        let mut safe_suffixes: HashMap<String, Vec<u32>> = HashMap::new();
        let mut all_suffixes: HashMap<String, Vec<u32>> = HashMap::new();
        // Transient claiming state, discarded after the trie is built.
        let mut claimed: HashSet<&str> = HashSet::new();

        for &len in &config.suffix_lens {
            // Per-suffix union over all words of sufficient length. The
            // approximate table records this regardless of claiming or
            // consistency.
            let mut full_union: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
            // Per-suffix union over unclaimed words only; the safe
            // candidates for this round.
            let mut candidates: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();

            for (word, indices) in &words {
                let Some(suffix) = char_suffix(word, len) else {
                    continue;
                };
                full_union
                    .entry(suffix)
                    .or_default()
                    .extend(indices.iter().copied());
                if !claimed.contains(word.as_str()) {
                    candidates
                        .entry(suffix)
                        .or_default()
                        .extend(indices.iter().copied());
                }
            }

            for (suffix, union) in &full_union {
                all_suffixes.insert((*suffix).to_string(), union.iter().copied().collect());
            }

            // A suffix is only trusted when every unclaimed word sharing it
            // has an index set equal to the round union; one counter-example
            // disqualifies it for this length.
            let mut poisoned: HashSet<&str> = HashSet::new();
            for (word, indices) in &words {
                if claimed.contains(word.as_str()) {
                    continue;
                }
                let Some(suffix) = char_suffix(word, len) else {
                    continue;
                };
                if candidates.get(suffix).is_some_and(|union| union != indices) {
                    poisoned.insert(suffix);
                }
            }

            let mut claimed_now = 0usize;
            for word in words.keys() {
                if claimed.contains(word.as_str()) {
                    continue;
                }
                let Some(suffix) = char_suffix(word, len) else {
                    continue;
                };
                if !poisoned.contains(suffix) {
                    claimed.insert(word.as_str());
                    claimed_now += 1;
                }
            }

            let candidate_count = candidates.len();
            for (suffix, union) in candidates {
                if !poisoned.contains(suffix) {
                    safe_suffixes.insert(suffix.to_string(), union.iter().copied().collect());
                }
            }

            debug!(
                suffix_len = len,
                candidates = candidate_count,
                poisoned = poisoned.len(),
                claimed = claimed_now,
            );
        }

        let mut trie_root = TrieNode::new();
        let mut trie_pairs = 0usize;
        for (word, indices) in &words {
            if claimed.contains(word.as_str()) {
                continue;
            }
            for &index in indices {
                trie_root.add(word, index);
                trie_pairs += 1;
            }
        }
        debug!(trie_pairs, trie_nodes = trie_root.node_count());

        TagDictionary {
            suffix_lens: config.suffix_lens.clone(),
            tags,
            safe_suffixes,
            all_suffixes,
            trie_root,
        }
    }
}
