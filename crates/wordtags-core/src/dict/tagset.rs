use std::collections::HashMap;

use super::DictError;

/// Interned tag-set strings.
///
/// Every distinct canonical tag-set string gets a dense `u32` index; the
/// index → string direction is what lookup results are resolved through and
/// is immutable once compilation completes.
#[derive(Debug, Default, Clone)]
pub struct TagSetIndex {
    index2tagset: Vec<String>,
    tagset2index: HashMap<String, u32>,
}

impl TagSetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a tag-set string, returning its index. Idempotent.
    pub fn intern(&mut self, tagset: &str) -> u32 {
        if let Some(&index) = self.tagset2index.get(tagset) {
            return index;
        }
        let index = self.index2tagset.len() as u32;
        self.index2tagset.push(tagset.to_string());
        self.tagset2index.insert(tagset.to_string(), index);
        index
    }

    pub fn get(&self, index: u32) -> Option<&str> {
        self.index2tagset.get(index as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index2tagset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index2tagset.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.index2tagset.iter().map(String::as_str)
    }

    pub(super) fn as_strings(&self) -> &[String] {
        &self.index2tagset
    }

    /// Rebuild from the persisted `Vec<String>` form. Duplicate strings mean
    /// the file was not produced by this compiler.
    pub(super) fn from_strings(index2tagset: Vec<String>) -> Result<Self, DictError> {
        let mut tagset2index = HashMap::with_capacity(index2tagset.len());
        for (index, tagset) in index2tagset.iter().enumerate() {
            if tagset2index.insert(tagset.clone(), index as u32).is_some() {
                return Err(DictError::Parse(format!("duplicate tag-set: {tagset}")));
            }
        }
        Ok(Self {
            index2tagset,
            tagset2index,
        })
    }
}
