//! Stop-word filtering.
//!
//! Tokens that carry no signal for similarity ("the", "and", "of") are
//! removed between tokenization and counting. The default set is the
//! classic 318-word English list shipped by mainstream IR tooling
//! (scikit-learn's built-in `english` list), stored here in alphabetical
//! groups and flattened at compile time.
//!
//! # Examples
//!
//! ```
//! use sugerir::text::StopWords;
//!
//! let stop = StopWords::english();
//! assert!(stop.is_stop_word("the"));
//! assert!(!stop.is_stop_word("action"));
//! ```

use std::collections::HashSet;

const WORDS_A_TO_B: &[&str] = &[
    "a",
    "about",
    "above",
    "across",
    "after",
    "afterwards",
    "again",
    "against",
    "all",
    "almost",
    "alone",
    "along",
    "already",
    "also",
    "although",
    "always",
    "am",
    "among",
    "amongst",
    "amoungst",
    "amount",
    "an",
    "and",
    "another",
    "any",
    "anyhow",
    "anyone",
    "anything",
    "anyway",
    "anywhere",
    "are",
    "around",
    "as",
    "at",
    "back",
    "be",
    "became",
    "because",
    "become",
    "becomes",
    "becoming",
    "been",
    "before",
    "beforehand",
    "behind",
    "being",
    "below",
    "beside",
    "besides",
    "between",
    "beyond",
    "bill",
    "both",
    "bottom",
    "but",
    "by",
];

const WORDS_C_TO_E: &[&str] = &[
    "call",
    "can",
    "cannot",
    "cant",
    "co",
    "con",
    "could",
    "couldnt",
    "cry",
    "de",
    "describe",
    "detail",
    "do",
    "done",
    "down",
    "due",
    "during",
    "each",
    "eg",
    "eight",
    "either",
    "eleven",
    "else",
    "elsewhere",
    "empty",
    "enough",
    "etc",
    "even",
    "ever",
    "every",
    "everyone",
    "everything",
    "everywhere",
    "except",
];

const WORDS_F_TO_H: &[&str] = &[
    "few",
    "fifteen",
    "fifty",
    "fill",
    "find",
    "fire",
    "first",
    "five",
    "for",
    "former",
    "formerly",
    "forty",
    "found",
    "four",
    "from",
    "front",
    "full",
    "further",
    "get",
    "give",
    "go",
    "had",
    "has",
    "hasnt",
    "have",
    "he",
    "hence",
    "her",
    "here",
    "hereafter",
    "hereby",
    "herein",
    "hereupon",
    "hers",
    "herself",
    "him",
    "himself",
    "his",
    "how",
    "however",
    "hundred",
];

const WORDS_I_TO_N: &[&str] = &[
    "i",
    "ie",
    "if",
    "in",
    "inc",
    "indeed",
    "interest",
    "into",
    "is",
    "it",
    "its",
    "itself",
    "keep",
    "last",
    "latter",
    "latterly",
    "least",
    "less",
    "ltd",
    "made",
    "many",
    "may",
    "me",
    "meanwhile",
    "might",
    "mill",
    "mine",
    "more",
    "moreover",
    "most",
    "mostly",
    "move",
    "much",
    "must",
    "my",
    "myself",
    "name",
    "namely",
    "neither",
    "never",
    "nevertheless",
    "next",
    "nine",
    "no",
    "nobody",
    "none",
    "noone",
    "nor",
    "not",
    "nothing",
    "now",
    "nowhere",
];

const WORDS_O_TO_S: &[&str] = &[
    "of",
    "off",
    "often",
    "on",
    "once",
    "one",
    "only",
    "onto",
    "or",
    "other",
    "others",
    "otherwise",
    "our",
    "ours",
    "ourselves",
    "out",
    "over",
    "own",
    "part",
    "per",
    "perhaps",
    "please",
    "put",
    "rather",
    "re",
    "same",
    "see",
    "seem",
    "seemed",
    "seeming",
    "seems",
    "serious",
    "several",
    "she",
    "should",
    "show",
    "side",
    "since",
    "sincere",
    "six",
    "sixty",
    "so",
    "some",
    "somehow",
    "someone",
    "something",
    "sometime",
    "sometimes",
    "somewhere",
    "still",
    "such",
    "system",
];

const WORDS_T_TO_Z: &[&str] = &[
    "take",
    "ten",
    "than",
    "that",
    "the",
    "their",
    "them",
    "themselves",
    "then",
    "thence",
    "there",
    "thereafter",
    "thereby",
    "therefore",
    "therein",
    "thereupon",
    "these",
    "they",
    "thick",
    "thin",
    "third",
    "this",
    "those",
    "though",
    "three",
    "through",
    "throughout",
    "thru",
    "thus",
    "to",
    "together",
    "too",
    "top",
    "toward",
    "towards",
    "twelve",
    "twenty",
    "two",
    "un",
    "under",
    "until",
    "up",
    "upon",
    "us",
    "very",
    "via",
    "was",
    "we",
    "well",
    "were",
    "what",
    "whatever",
    "when",
    "whence",
    "whenever",
    "where",
    "whereafter",
    "whereas",
    "whereby",
    "wherein",
    "whereupon",
    "wherever",
    "whether",
    "which",
    "while",
    "whither",
    "who",
    "whoever",
    "whole",
    "whom",
    "whose",
    "why",
    "will",
    "with",
    "within",
    "without",
    "would",
    "yet",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
];

const STOP_WORD_GROUPS: &[&[&str]] = &[
    WORDS_A_TO_B,
    WORDS_C_TO_E,
    WORDS_F_TO_H,
    WORDS_I_TO_N,
    WORDS_O_TO_S,
    WORDS_T_TO_Z,
];

const fn total_len() -> usize {
    let mut total = 0;
    let mut g = 0;
    while g < STOP_WORD_GROUPS.len() {
        total += STOP_WORD_GROUPS[g].len();
        g += 1;
    }
    total
}

const STOP_WORD_COUNT: usize = total_len();

const fn flatten() -> [&'static str; STOP_WORD_COUNT] {
    let mut flat = [""; STOP_WORD_COUNT];
    let mut idx = 0;
    let mut g = 0;
    while g < STOP_WORD_GROUPS.len() {
        let group = STOP_WORD_GROUPS[g];
        let mut w = 0;
        while w < group.len() {
            flat[idx] = group[w];
            idx += 1;
            w += 1;
        }
        g += 1;
    }
    flat
}

/// The standard English stop-word list, in alphabetical order.
///
/// 318 words, matching the list classic IR tooling applies for
/// `stop_words="english"`, so catalogs filtered here vectorize the same
/// way.
pub static ENGLISH_STOP_WORDS: &[&str] = &flatten();

/// A stop-word set applied to tokens after tokenization.
///
/// Entries are lowercased at construction. Lookups match tokens
/// verbatim; the tokenizer has already lowercased them.
///
/// # Examples
///
/// ```
/// use sugerir::text::StopWords;
///
/// let custom = StopWords::custom(["Unrated", "tbd"]);
/// assert!(custom.is_stop_word("unrated"));
/// assert!(custom.is_stop_word("tbd"));
/// assert!(!custom.is_stop_word("drama"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The standard English list.
    #[must_use]
    pub fn english() -> Self {
        Self::custom(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// An empty set: no token is filtered.
    #[must_use]
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// A caller-provided set. Entries are lowercased.
    #[must_use]
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect(),
        }
    }

    /// True when `token` is in the set.
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are filtered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
