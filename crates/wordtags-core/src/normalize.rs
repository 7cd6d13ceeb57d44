//! Text cleanup applied to lexicon words and query words.

/// Quote-like characters stripped from word forms.
const QUOTE_CHARS: &[char] = &['"', '\'', '`', '«', '»', '‘', '’', 'ʼ'];

/// Normalize a word form: trim, lowercase, drop quote characters, and fold
/// `ё` to `е` (lexicons are inconsistent about the diaeresis, so both
/// spellings must land on the same key).
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

/// Build the canonical tag-set string: the part-of-speech token followed by
/// the attribute tokens, order-preserving, single-space-joined. Tokens
/// listed in `ignore` are dropped.
pub fn canonical_tagset<'a>(
    pos: &str,
    tags: impl IntoIterator<Item = &'a str>,
    ignore: &[String],
) -> String {
    let mut out = String::from(pos.trim());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || ignore.iter().any(|skip| skip == tag) {
            continue;
        }
        out.push(' ');
        out.push_str(tag);
    }
    out
}
