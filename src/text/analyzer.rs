use std::collections::{HashMap, HashSet};

/// A single word produced by tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Language capability consumed by the normalization pipeline
///
/// The pipeline only needs these three operations, so the backing
/// implementation is swappable; tests use a fixed-map fake instead of
/// the shipped English analyzer.
pub trait Analyzer {
    /// Split cleaned text into tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Whether a token is a low-information word to discard
    fn is_stop_word(&self, token: &Token) -> bool;

    /// Dictionary base form of a token
    fn lemma_of(&self, token: &Token) -> String;
}

/// Common English stop words, lowercase
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below", "between", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "just", "and", "but", "if", "or", "because", "until",
    "while", "although", "this", "that", "these", "those", "i", "me", "my", "myself", "we",
    "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves", "he", "him",
    "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "am", "about", "against",
];

/// Irregular forms the suffix rules cannot reach
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("ran", "run"),
    ("went", "go"),
    ("gave", "give"),
    ("made", "make"),
    ("took", "take"),
    ("taught", "teach"),
    ("knew", "know"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Self-contained English backend: whitespace tokenizer, embedded stop-word
/// list, and a rule-based lemmatizer with a small irregular-form table
pub struct EnglishAnalyzer {
    stop_words: HashSet<&'static str>,
    irregulars: HashMap<&'static str, &'static str>,
}

impl EnglishAnalyzer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            irregulars: IRREGULAR_LEMMAS.iter().copied().collect(),
        }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }

    fn is_stop_word(&self, token: &Token) -> bool {
        self.stop_words.contains(token.text.as_str())
    }

    fn lemma_of(&self, token: &Token) -> String {
        let word = token.text.as_str();
        if let Some(lemma) = self.irregulars.get(word) {
            return (*lemma).to_string();
        }
        lemmatize_by_rule(word)
    }
}

/// Suffix-rule lemmatization for regular English inflections
///
/// Covers plural -s/-es/-ies, progressive -ing, and past -ed forms.
/// Unknown shapes pass through unchanged.
fn lemmatize_by_rule(word: &str) -> String {
    let len = word.chars().count();

    // Plurals
    if word.ends_with("ies") && len > 4 {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if word.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    if (word.ends_with("ches") || word.ends_with("shes") || word.ends_with("xes")
        || word.ends_with("zes"))
        && len > 4
    {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
        && len > 3
    {
        return word[..word.len() - 1].to_string();
    }

    // Progressive
    if word.ends_with("ing") && len > 5 {
        return restore_stem(&word[..word.len() - 3]);
    }

    // Past tense
    if word.ends_with("ed") && len > 4 {
        return restore_stem(&word[..word.len() - 2]);
    }

    word.to_string()
}

/// Repair a stem after stripping -ing/-ed: undouble a trailing doubled
/// consonant ("runn" -> "run") or restore a dropped final e ("mak" -> "make")
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(chars[n - 1]) {
        // Doubled consonants that are part of the base word stay: tell, miss
        if !matches!(chars[n - 1], 'l' | 's' | 'z') {
            return stem[..stem.len() - chars[n - 1].len_utf8()].to_string();
        }
    }

    if n >= 3
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        && !is_consonant(chars[n - 2])
        && is_consonant(chars[n - 3])
    {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
