//! Fixed vocabulary tables for query understanding.
//!
//! Synonym groups map surface words to a canonical value (e.g. "puppy" ->
//! "dog"). Groups are scanned in declared order and the first group with any
//! matching synonym wins, so the declaration order is part of the contract.
//!
//! Matching everywhere is substring containment against the lowercased
//! query, not tokenized exact match. A synonym embedded inside a longer
//! unrelated word therefore matches too; that tradeoff is accepted in
//! exchange for catching inflections ("dogs", "playfulness") for free.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Pet types with their synonym groups, including common breed words that
/// strongly imply the type.
pub const PET_TYPES: &[(&str, &[&str])] = &[
    (
        "dog",
        &[
            "dog",
            "puppy",
            "canine",
            "pup",
            "doggy",
            "lab",
            "retriever",
            "shepherd",
            "terrier",
            "bulldog",
            "poodle",
            "beagle",
            "husky",
        ],
    ),
    (
        "cat",
        &[
            "cat",
            "kitten",
            "feline",
            "kitty",
            "persian",
            "siamese",
            "tabby",
            "calico",
            "maine coon",
        ],
    ),
    (
        "bird",
        &[
            "bird",
            "parrot",
            "cockatiel",
            "budgie",
            "canary",
            "finch",
            "parakeet",
            "lovebird",
        ],
    ),
    ("rabbit", &["rabbit", "bunny", "hare"]),
    ("hamster", &["hamster", "gerbil", "guinea pig", "chinchilla"]),
];

/// Recognized coat colors. Colors have no synonyms; every entry is its own
/// canonical value and a query may name several.
pub const COLORS: &[&str] = &[
    "black", "white", "brown", "gray", "grey", "orange", "red", "yellow", "golden", "tan",
    "cream", "silver", "blue", "blonde",
];

/// Size bands with their synonym groups.
pub const SIZES: &[(&str, &[&str])] = &[
    ("small", &["small", "tiny", "little", "mini", "petite", "compact"]),
    ("medium", &["medium", "average", "normal", "moderate"]),
    ("large", &["large", "big", "huge", "giant", "massive", "xl"]),
];

/// Temperament traits with their synonym groups. Unlike pet type and size,
/// several traits may match a single query.
pub const TRAITS: &[(&str, &[&str])] = &[
    ("friendly", &["friendly", "social", "outgoing", "gregarious", "sociable"]),
    ("playful", &["playful", "energetic", "active", "lively", "spirited"]),
    ("calm", &["calm", "quiet", "peaceful", "gentle", "docile", "mellow"]),
    ("smart", &["smart", "intelligent", "clever", "bright", "trainable"]),
    ("loyal", &["loyal", "devoted", "faithful", "dedicated"]),
    ("cuddly", &["cuddly", "affectionate", "loving", "snuggly", "sweet"]),
];

/// Age bands with their synonym groups.
pub const AGE_TERMS: &[(&str, &[&str])] = &[
    ("young", &["young", "baby", "puppy", "kitten", "juvenile", "infant"]),
    ("adult", &["adult", "mature", "grown", "grown-up"]),
    ("senior", &["senior", "old", "elderly", "aged", "elder"]),
];

/// Filler words excluded from leftover keywords.
pub const STOP_WORDS: &[&str] = &[
    "for", "and", "or", "the", "a", "an", "in", "on", "at", "to", "with",
];

lazy_static! {
    /// Union of every vocabulary synonym plus the stop words.
    ///
    /// Keyword extraction excludes against this whole set regardless of which
    /// categories actually matched a given query, so a vocabulary word never
    /// leaks into leftover keywords just because its category resolved to a
    /// different synonym. Multi-word synonyms ("guinea pig") sit in the set
    /// as-is and do not exclude their individual tokens.
    pub static ref VOCABULARY_WORDS: HashSet<&'static str> = {
        let mut words: HashSet<&'static str> = HashSet::new();
        for (_, synonyms) in PET_TYPES {
            words.extend(synonyms.iter().copied());
        }
        words.extend(COLORS.iter().copied());
        for (_, synonyms) in SIZES {
            words.extend(synonyms.iter().copied());
        }
        for (_, synonyms) in TRAITS {
            words.extend(synonyms.iter().copied());
        }
        for (_, synonyms) in AGE_TERMS {
            words.extend(synonyms.iter().copied());
        }
        words.extend(STOP_WORDS.iter().copied());
        words
    };

    /// Word tokenizer for keyword extraction.
    pub static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// Scan synonym groups in declared order and return the first canonical
/// value whose group has any synonym contained in the query.
pub fn match_first(
    query_lower: &str,
    groups: &[(&'static str, &[&str])],
) -> Option<&'static str> {
    groups
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| query_lower.contains(s)))
        .map(|(canonical, _)| *canonical)
}

/// Collect every canonical value whose synonym group matches the query,
/// in declared order.
pub fn match_all(query_lower: &str, groups: &[(&'static str, &[&str])]) -> Vec<String> {
    groups
        .iter()
        .filter(|(_, synonyms)| synonyms.iter().any(|s| query_lower.contains(s)))
        .map(|(canonical, _)| canonical.to_string())
        .collect()
}
