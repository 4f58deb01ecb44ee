use crate::config::StopWordSet;

/// Strips every character that is not an ASCII letter or digit and
/// upper-cases the rest. `"don't"` becomes `"DONT"`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

pub struct Tokenizer {
    stop_words: StopWordSet,
}

impl Tokenizer {
    pub const fn new(stop_words: StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Normalizes one whitespace-delimited word, or `None` when it is dropped.
    pub fn token(&self, word: &str) -> Option<String> {
        let token = normalize_word(word);

        if token.is_empty() || self.stop_words.contains(&token) {
            None
        } else {
            Some(token)
        }
    }

    /// Splits on ASCII whitespace, vertical tab included.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(is_separator).filter_map(|word| self.token(word))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWordSet::default())
    }
}
