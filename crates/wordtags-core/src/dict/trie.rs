use std::collections::BTreeMap;

/// One node of the exact-lookup character trie.
///
/// Parent-to-child ownership is a strict tree; children are keyed by the next
/// character. A non-empty `tagset_indices` means a word ends at this node.
/// `hit_count` counts insertions that passed through the node and is purely
/// diagnostic.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    hit_count: u32,
    children: BTreeMap<char, TrieNode>,
    tagset_indices: Vec<u32>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one (word, tag-set index) pair. A word carrying two tag-sets is
    /// inserted twice, once per index.
    pub fn add(&mut self, word: &str, tagset_index: u32) {
        let mut node = self;
        node.hit_count += 1;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
            node.hit_count += 1;
        }
        node.tagset_indices.push(tagset_index);
    }

    /// Exact full-word lookup. Returns the indices terminating at the end of
    /// `word`, or an empty slice when the path does not exist. A path that
    /// exists only as a prefix of longer words yields an empty slice too.
    pub fn find(&self, word: &str) -> &[u32] {
        let mut node = self;
        for c in word.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.tagset_indices
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Total node count, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Total number of stored (word, tag-set index) pairs.
    pub fn leaf_count(&self) -> usize {
        self.tagset_indices.len()
            + self.children.values().map(TrieNode::leaf_count).sum::<usize>()
    }

    /// Flatten the trie back into (word, tag-set index) pairs, words in
    /// lexicographic order. This is the persisted encoding: loading re-adds
    /// each pair.
    pub fn words(&self) -> Vec<(String, u32)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut prefix = String::new();
        self.collect_words(&mut prefix, &mut out);
        out
    }

    fn collect_words(&self, prefix: &mut String, out: &mut Vec<(String, u32)>) {
        for &index in &self.tagset_indices {
            out.push((prefix.clone(), index));
        }
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect_words(prefix, out);
            prefix.pop();
        }
    }
}
