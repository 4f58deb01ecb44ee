use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    tokenizer::normalize_word,
};

pub const DEFAULT_CORPUS_SIZE: usize = 64;
pub const DEFAULT_PROFILE_LIMIT: usize = 100;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Normalized terms excluded from all frequency accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Builds a set from raw words. Each word goes through the same
    /// normalization as document text, so `"the"` and `"The,"` both store `THE`.
    /// Words that normalize to nothing are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| normalize_word(word.as_ref()))
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}

/// Immutable run configuration handed to the tokenizer, profiler and ranker.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Number of documents addressed by a numbered source (`0..corpus_size`)
    pub corpus_size: usize,
    pub stop_words: StopWordSet,
    /// Maximum number of terms kept per frequency profile
    pub profile_limit: usize,
    /// Number of ranked pairs reported
    pub top_k: usize,
    /// Profile documents on the rayon thread pool
    pub parallel: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            corpus_size: DEFAULT_CORPUS_SIZE,
            stop_words: StopWordSet::default(),
            profile_limit: DEFAULT_PROFILE_LIMIT,
            top_k: DEFAULT_TOP_K,
            parallel: false,
        }
    }
}

impl CorpusConfig {
    /// Rejects configurations the pipeline cannot produce a meaningful report for.
    pub fn validate(&self) -> Result<()> {
        if self.corpus_size == 0 {
            return Err(Error::InvalidConfig(
                "corpus size must be at least 1".to_string(),
            ));
        }

        if self.profile_limit == 0 {
            return Err(Error::InvalidConfig(
                "profile limit must be at least 1".to_string(),
            ));
        }

        if self.top_k == 0 {
            return Err(Error::InvalidConfig(
                "number of reported pairs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
