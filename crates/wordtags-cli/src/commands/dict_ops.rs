use std::fs;
use std::path::Path;
use std::process;

use wordtags_core::config::{parse_config_toml, CompileConfig};
use wordtags_core::dict::TagDictionary;
use wordtags_core::normalize::normalize_word;

use crate::lex_source;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn load_config(config_path: Option<&str>) -> CompileConfig {
    match config_path {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_config_toml(&content), "Error in {path}: {}")
        }
        None => CompileConfig::default(),
    }
}

pub fn compile(input: &str, output_file: &str, config_path: Option<&str>) {
    let config = load_config(config_path);

    let parsed = die!(
        lex_source::parse_lexicon(Path::new(input), &config),
        "Error parsing lexicon: {}"
    );

    let word_count = parsed.words.len();
    let tagset_count = parsed.tags.len();
    eprintln!("Compiling {word_count} words ({tagset_count} tag-sets)...");

    let dict = TagDictionary::compile(parsed.tags, parsed.words, &config);
    let stats = dict.stats();
    eprintln!(
        "  {} safe suffixes, {} approximate suffixes, {} trie words",
        stats.safe_suffix_count, stats.all_suffix_count, stats.trie_word_count
    );

    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(file: &str) {
    let dict = die!(
        TagDictionary::open(Path::new(file)),
        "Error opening {file}: {}"
    );
    let stats = dict.stats();
    println!("Dictionary: {file}");
    println!(
        "  Suffix lengths: {:?}",
        dict.suffix_lens()
    );
    println!("  Tag-sets: {}", stats.tagset_count);
    println!("  Safe suffixes: {}", stats.safe_suffix_count);
    println!("  Approximate suffixes: {}", stats.all_suffix_count);
    println!(
        "  Trie: {} words, {} nodes",
        stats.trie_word_count, stats.trie_node_count
    );
}

pub fn lookup(dict_file: &str, word: &str) {
    let dict = die!(
        TagDictionary::open(Path::new(dict_file)),
        "Error opening {dict_file}: {}"
    );
    let word = normalize_word(word);
    let tagsets = dict.lookup(&word);
    if tagsets.is_empty() {
        println!("(no tag-sets for '{word}')");
        return;
    }
    for (i, tagset) in tagsets.iter().enumerate() {
        println!("{word}[{i}] => {tagset}");
    }
}
