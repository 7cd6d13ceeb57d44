
use std::collections::{BTreeMap, BTreeSet};

use crate::config::CompileConfig;

use super::{TagDictionary, TagSetIndex};

pub(super) const T_INS_PL: &str = "СУЩЕСТВИТЕЛЬНОЕ ПАДЕЖ=ТВОР ЧИСЛО=МН";
pub(super) const T_NOM_PL: &str = "СУЩЕСТВИТЕЛЬНОЕ ПАДЕЖ=ИМ РОД=ЖЕН ЧИСЛО=МН";
pub(super) const T_GEN_SG: &str = "СУЩЕСТВИТЕЛЬНОЕ ПАДЕЖ=РОД РОД=ЖЕН ЧИСЛО=ЕД";
pub(super) const T_CONJ: &str = "СОЮЗ";
pub(super) const T_PART: &str = "ЧАСТИЦА";

/// Small lexicon exercising all three tiers:
/// - "-ами" instrumentals agree exactly → claimed by a safe length-3 suffix
/// - "кошки"/"мошки" share suffixes but disagree → poisoned, both in trie
/// - "а" is shorter than every suffix length → trie
pub(super) fn sample_lexicon() -> (TagSetIndex, BTreeMap<String, BTreeSet<u32>>) {
    let mut tags = TagSetIndex::new();
    let ins_pl = tags.intern(T_INS_PL);
    let nom_pl = tags.intern(T_NOM_PL);
    let gen_sg = tags.intern(T_GEN_SG);
    let conj = tags.intern(T_CONJ);
    let part = tags.intern(T_PART);

    let mut words: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    words.insert("кошками".to_string(), BTreeSet::from([ins_pl]));
    words.insert("собаками".to_string(), BTreeSet::from([ins_pl]));
    words.insert("книгами".to_string(), BTreeSet::from([ins_pl]));
    words.insert("кошки".to_string(), BTreeSet::from([nom_pl, gen_sg]));
    words.insert("мошки".to_string(), BTreeSet::from([nom_pl]));
    words.insert("а".to_string(), BTreeSet::from([conj, part]));

    (tags, words)
}

pub(super) fn sample_dict() -> TagDictionary {
    let (tags, words) = sample_lexicon();
    TagDictionary::compile(tags, words, &CompileConfig::default())
}

/// Lookup results as a sorted set, for order-insensitive assertions.
pub(super) fn lookup_set(dict: &TagDictionary, word: &str) -> BTreeSet<String> {
    dict.lookup(word).into_iter().map(str::to_string).collect()
}
