//! Flat lexicon parsing.
//!
//! The raw format is one entry per line, tab-separated:
//! `word<TAB>pos<TAB>lemma<TAB>tags`, where `tags` is a space-separated list
//! of `KEY=VALUE` tokens and may be empty or absent. `#` starts a comment
//! line. The lemma column is carried by the format but unused here.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use wordtags_core::config::CompileConfig;
use wordtags_core::dict::TagSetIndex;
use wordtags_core::normalize::{canonical_tagset, normalize_word};

#[derive(Debug, thiserror::Error)]
pub enum LexSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// The parsed lexicon: interned tag-sets plus word → tag-set indices,
/// ready to feed to `TagDictionary::compile`.
pub struct ParsedLexicon {
    pub tags: TagSetIndex,
    pub words: BTreeMap<String, BTreeSet<u32>>,
}

/// List lexicon files under `dir` (`*.tsv` / `*.dat`), sorted by name.
fn list_lexicon_files(dir: &Path) -> Result<Vec<fs::DirEntry>, LexSourceError> {
    let mut files: Vec<fs::DirEntry> = fs::read_dir(dir)
        .map_err(LexSourceError::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".tsv") || name.ends_with(".dat")
        })
        .collect();
    files.sort_by_key(|e| e.file_name());

    if files.is_empty() {
        return Err(LexSourceError::Parse(format!(
            "no lexicon (*.tsv, *.dat) files found in {}",
            dir.display()
        )));
    }

    Ok(files)
}

/// Parse a lexicon file, or every lexicon file in a directory.
///
/// Blank lines, comments, and lines with fewer than three fields are
/// skipped; a skipped/total stat line goes to stderr at the end.
pub fn parse_lexicon(path: &Path, config: &CompileConfig) -> Result<ParsedLexicon, LexSourceError> {
    let paths: Vec<std::path::PathBuf> = if path.is_dir() {
        list_lexicon_files(path)?
            .into_iter()
            .map(|entry| entry.path())
            .collect()
    } else {
        vec![path.to_path_buf()]
    };

    let mut tags = TagSetIndex::new();
    let mut words: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    let mut total_lines = 0u64;
    let mut skipped = 0u64;

    for file_path in &paths {
        eprintln!("Reading {}...", file_path.display());
        let content = fs::read_to_string(file_path).map_err(LexSourceError::Io)?;

        for line in content.lines() {
            total_lines += 1;
            if line.is_empty() || line.starts_with('#') {
                skipped += 1;
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let Some(entry) = parse_line(&fields, config) else {
                skipped += 1;
                continue;
            };

            let index = tags.intern(&entry.tagset);
            words.entry(entry.word).or_default().insert(index);
        }
    }

    eprintln!("  (skipped {skipped} of {total_lines} lines)");
    Ok(ParsedLexicon { tags, words })
}

struct ParsedLine {
    word: String,
    tagset: String,
}

/// Parse the split fields of one line. Returns `None` for lines that should
/// be skipped (too few fields, or a word that normalizes to nothing).
fn parse_line(fields: &[&str], config: &CompileConfig) -> Option<ParsedLine> {
    let word = normalize_word(fields.first()?);
    if word.is_empty() {
        return None;
    }
    let pos = fields.get(1)?.trim();
    if pos.is_empty() {
        return None;
    }
    // fields[2] is the lemma: required by the format, unused here.
    fields.get(2)?;
    let tag_tokens = fields
        .get(3)
        .map(|tags| tags.split_whitespace())
        .into_iter()
        .flatten();
    let tagset = canonical_tagset(pos, tag_tokens, &config.ignore_tags);
    Some(ParsedLine { word, tagset })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_lexicon(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_basic() {
        let file = write_lexicon(
            "# comment\n\
             кошки\tСУЩЕСТВИТЕЛЬНОЕ\tкошка\tПАДЕЖ=ИМ РОД=ЖЕН ЧИСЛО=МН\n\
             кошки\tСУЩЕСТВИТЕЛЬНОЕ\tкошка\tПАДЕЖ=РОД РОД=ЖЕН ЧИСЛО=ЕД\n\
             а\tСОЮЗ\tа\n\
             \n\
             битая строка\n",
        );
        let parsed = parse_lexicon(file.path(), &CompileConfig::default()).unwrap();
        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.tags.len(), 3);
        assert_eq!(parsed.words["кошки"].len(), 2);
        assert_eq!(parsed.words["а"].len(), 1);
    }

    #[test]
    fn test_parse_normalizes_words() {
        let file = write_lexicon("Ёлка\tСУЩЕСТВИТЕЛЬНОЕ\tёлка\tПАДЕЖ=ИМ\n");
        let parsed = parse_lexicon(file.path(), &CompileConfig::default()).unwrap();
        assert!(parsed.words.contains_key("елка"));
    }

    #[test]
    fn test_parse_dedups_repeated_entries() {
        let file = write_lexicon(
            "на\tПРЕДЛОГ\tна\tПАДЕЖ=ВИН\n\
             на\tПРЕДЛОГ\tна\tПАДЕЖ=ВИН\n",
        );
        let parsed = parse_lexicon(file.path(), &CompileConfig::default()).unwrap();
        assert_eq!(parsed.words["на"].len(), 1);
        assert_eq!(parsed.tags.len(), 1);
    }

    #[test]
    fn test_parse_applies_ignore_tags() {
        let config = CompileConfig {
            suffix_lens: vec![3, 4, 5],
            ignore_tags: vec!["СТИЛЬ=РАЗГ".to_string()],
        };
        let file = write_lexicon("штука\tСУЩЕСТВИТЕЛЬНОЕ\tштука\tПАДЕЖ=ИМ СТИЛЬ=РАЗГ\n");
        let parsed = parse_lexicon(file.path(), &config).unwrap();
        let index = *parsed.words["штука"].iter().next().unwrap();
        assert_eq!(parsed.tags.get(index), Some("СУЩЕСТВИТЕЛЬНОЕ ПАДЕЖ=ИМ"));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_lexicon(Path::new("/no/such/lexicon.tsv"), &CompileConfig::default());
        assert!(matches!(result, Err(LexSourceError::Io(_))));
    }

    #[test]
    fn test_parse_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_lexicon(dir.path(), &CompileConfig::default());
        assert!(matches!(result, Err(LexSourceError::Parse(_))));
    }
}
