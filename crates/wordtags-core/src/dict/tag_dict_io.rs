use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::tag_dict::TagDictionary;
use super::tagset::TagSetIndex;
use super::trie::TrieNode;
use super::DictError;

const MAGIC: &[u8; 4] = b"WTDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + body_len + body_crc = 13

/// Flat serialization format for bincode. The trie persists as its
/// (word, tag-set index) pairs and is rebuilt by re-insertion on load.
#[derive(Serialize, Deserialize)]
struct DictionaryData {
    suffix_lens: Vec<u32>,
    index2tagset: Vec<String>,
    safe_suffixes: Vec<SuffixRecord>,
    all_suffixes: Vec<SuffixRecord>,
    trie_words: Vec<TrieWordRecord>,
}

#[derive(Serialize, Deserialize)]
struct SuffixRecord {
    suffix: String,
    tagsets: Vec<u32>,
}

#[derive(Serialize, Deserialize)]
struct TrieWordRecord {
    word: String,
    tagset: u32,
}

fn suffix_records(table: &HashMap<String, Vec<u32>>) -> Vec<SuffixRecord> {
    let mut records: Vec<SuffixRecord> = table
        .iter()
        .map(|(suffix, tagsets)| SuffixRecord {
            suffix: suffix.clone(),
            tagsets: tagsets.clone(),
        })
        .collect();
    records.sort_by(|a, b| a.suffix.cmp(&b.suffix));
    records
}

fn suffix_table(
    records: Vec<SuffixRecord>,
    tagset_count: usize,
    label: &str,
) -> Result<HashMap<String, Vec<u32>>, DictError> {
    let mut table = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(&index) = record.tagsets.iter().find(|&&i| i as usize >= tagset_count) {
            return Err(DictError::Parse(format!(
                "{label} suffix '{}' references tag-set {index} of {tagset_count}",
                record.suffix
            )));
        }
        table.insert(record.suffix, record.tagsets);
    }
    Ok(table)
}

impl TagDictionary {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let data = DictionaryData {
            suffix_lens: self.suffix_lens.iter().map(|&len| len as u32).collect(),
            index2tagset: self.tags.as_strings().to_vec(),
            safe_suffixes: suffix_records(&self.safe_suffixes),
            all_suffixes: suffix_records(&self.all_suffixes),
            trie_words: self
                .trie_root
                .words()
                .into_iter()
                .map(|(word, tagset)| TrieWordRecord { word, tagset })
                .collect(),
        };
        let body = bincode::serialize(&data).map_err(DictError::Serialize)?;

        let body_len: u32 = body
            .len()
            .try_into()
            .map_err(|_| DictError::Parse("body exceeds u32::MAX".to_string()))?;
        let crc = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body_len.to_le_bytes());
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&body);

        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let body_len = u32::from_le_bytes(data[5..9].try_into().unwrap()) as usize;
        let expected_crc = u32::from_le_bytes(data[9..13].try_into().unwrap());
        if data.len() < HEADER_SIZE + body_len {
            return Err(DictError::InvalidHeader);
        }

        let body = &data[HEADER_SIZE..HEADER_SIZE + body_len];
        if crc32fast::hash(body) != expected_crc {
            return Err(DictError::BadChecksum);
        }

        let parsed: DictionaryData =
            bincode::deserialize(body).map_err(DictError::Deserialize)?;

        let suffix_lens: Vec<usize> = parsed.suffix_lens.iter().map(|&len| len as usize).collect();
        if suffix_lens.is_empty() || suffix_lens.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DictError::Parse(
                "suffix lengths must be non-empty and strictly ascending".to_string(),
            ));
        }

        let tags = TagSetIndex::from_strings(parsed.index2tagset)?;
        let tagset_count = tags.len();

        let safe_suffixes = suffix_table(parsed.safe_suffixes, tagset_count, "safe")?;
        let all_suffixes = suffix_table(parsed.all_suffixes, tagset_count, "approximate")?;

        let mut trie_root = TrieNode::new();
        for record in parsed.trie_words {
            if record.tagset as usize >= tagset_count {
                return Err(DictError::Parse(format!(
                    "trie word '{}' references tag-set {} of {tagset_count}",
                    record.word, record.tagset
                )));
            }
            trie_root.add(&record.word, record.tagset);
        }

        Ok(Self {
            suffix_lens,
            tags,
            safe_suffixes,
            all_suffixes,
            trie_root,
        })
    }

    /// Open a dictionary file, using mmap to avoid doubling peak memory.
    ///
    /// The structure is decoded from the mapped region, then the mapping is
    /// dropped.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
