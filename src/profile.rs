use std::collections::HashMap;

use crate::{config::CorpusConfig, tokenizer::Tokenizer};

#[derive(Debug, Clone, PartialEq)]
pub struct TermFrequency {
    pub term: String,
    pub frequency: f64,
}

impl TermFrequency {
    pub const fn new(term: String, frequency: f64) -> Self {
        Self { term, frequency }
    }
}

/// The most frequent terms of one document, highest relative frequency first.
///
/// Frequencies are relative to every accepted token of the document, not only
/// to the terms that survived truncation, so a truncated profile sums to less
/// than one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    terms: Vec<TermFrequency>,
    accepted_tokens: usize,
}

impl FrequencyProfile {
    /// Counts `tokens`, converts the counts to relative frequencies and keeps
    /// the `limit` most frequent. Equal frequencies are ordered by term.
    pub fn from_tokens<I>(tokens: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut word_count: HashMap<String, usize> = HashMap::new();
        let mut accepted_tokens = 0;

        for token in tokens {
            *word_count.entry(token).or_insert(0) += 1;
            accepted_tokens += 1;
        }

        if accepted_tokens == 0 {
            return Self::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let total = accepted_tokens as f64;

        #[allow(clippy::cast_precision_loss)]
        let mut terms: Vec<_> = word_count
            .into_iter()
            .map(|(term, count)| TermFrequency::new(term, count as f64 / total))
            .collect();

        terms.sort_by(|a, b| {
            b.frequency
                .total_cmp(&a.frequency)
                .then_with(|| a.term.cmp(&b.term))
        });
        terms.truncate(limit);

        Self {
            terms,
            accepted_tokens,
        }
    }

    pub fn terms(&self) -> &[TermFrequency] {
        &self.terms
    }

    /// Number of tokens that survived normalization and stop-word filtering.
    pub const fn accepted_tokens(&self) -> usize {
        self.accepted_tokens
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn frequency(&self, term: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.frequency)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms
            .iter()
            .map(|entry| (entry.term.as_str(), entry.frequency))
    }
}

/// Turns raw document text into a [`FrequencyProfile`].
pub struct Profiler {
    tokenizer: Tokenizer,
    limit: usize,
}

impl Profiler {
    pub const fn new(tokenizer: Tokenizer, limit: usize) -> Self {
        Self { tokenizer, limit }
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        Self::new(
            Tokenizer::new(config.stop_words.clone()),
            config.profile_limit,
        )
    }

    pub fn profile(&self, text: &str) -> FrequencyProfile {
        FrequencyProfile::from_tokens(self.tokenizer.tokenize(text), self.limit)
    }
}
