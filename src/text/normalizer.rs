use regex::Regex;

use super::analyzer::{Analyzer, EnglishAnalyzer};

/// Free-text comment cleaner
///
/// Applies the fixed pipeline per string: lowercase, bracketed-segment
/// removal, punctuation removal, then lemmatization with stop-word
/// filtering through the configured [`Analyzer`]. The transform is total:
/// every input string yields an output string, possibly empty.
pub struct Normalizer<A: Analyzer> {
    analyzer: A,
    /// Matches a bracketed segment, non-greedy: first `[` to first `]`
    bracket_regex: Regex,
    /// Matches any character that is neither word-like nor whitespace
    punct_regex: Regex,
}

impl Normalizer<EnglishAnalyzer> {
    /// Normalizer with the shipped English analyzer
    pub fn english() -> Self {
        Self::new(EnglishAnalyzer::new())
    }
}

impl<A: Analyzer> Normalizer<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            bracket_regex: Regex::new(r"\[.*?\]").expect("bracket regex is valid"),
            punct_regex: Regex::new(r"[^\w\s]").expect("punctuation regex is valid"),
        }
    }

    /// Clean and normalize one string
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let no_brackets = self.bracket_regex.replace_all(&lowered, "");
        let cleaned = self.punct_regex.replace_all(&no_brackets, "");

        let lemmas: Vec<String> = self
            .analyzer
            .tokenize(&cleaned)
            .iter()
            .filter(|t| !self.analyzer.is_stop_word(t))
            .map(|t| self.analyzer.lemma_of(t))
            .collect();

        lemmas.join(" ")
    }

    /// Normalize a sequence of strings, preserving length and order
    pub fn normalize_all(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t)).collect()
    }
}
