//! Tokenizer: regex surface-form tokens with stop-word filtering and n-gram expansion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AnalysisError;

/// Starts with a letter, continues with letters/digits and `+ # . -`, min length 2.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z][a-z0-9+#.-]{1,}\b").expect("token pattern is valid"));

const STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "you", "our", "will", "have", "are", "this", "that", "from",
    "your", "we", "in", "of", "to", "a", "an", "is", "be", "or", "as", "at", "by",
];

/// Default n-gram range: unigrams and bigrams.
pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (1, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_n: usize,
    max_n: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            min_n: DEFAULT_NGRAM_RANGE.0,
            max_n: DEFAULT_NGRAM_RANGE.1,
        }
    }
}

impl Tokenizer {
    pub fn new(ngram_range: (usize, usize)) -> Result<Self, AnalysisError> {
        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(AnalysisError::InvalidConfig(format!(
                "ngram_range must satisfy 1 <= min <= max, got ({min_n}, {max_n})"
            )));
        }
        Ok(Self { min_n, max_n })
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        (self.min_n, self.max_n)
    }

    /// Lowercased, stop-word-free surface tokens in document order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !STOP_WORDS.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// Emits every n-gram for n in the configured range, n ascending,
    /// each pass in document order. Duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let mut ngrams = Vec::new();

        for n in self.min_n..=self.max_n {
            if words.len() < n {
                break;
            }
            ngrams.extend(words.windows(n).map(|w| w.join(" ")));
        }

        ngrams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_tokens() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_stop_words_removed_and_lowercased() {
        let tokenizer = Tokenizer::new((1, 1)).unwrap();
        let tokens = tokenizer.tokenize("The Python and the Rust");
        assert_eq!(tokens, vec!["python", "rust"]);
    }

    #[test]
    fn test_unigrams_then_bigrams_in_order() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("Built scalable services");
        assert_eq!(
            tokens,
            vec![
                "built",
                "scalable",
                "services",
                "built scalable",
                "scalable services"
            ]
        );
    }

    #[test]
    fn test_bigrams_skip_over_stop_words() {
        let tokenizer = Tokenizer::new((2, 2)).unwrap();
        assert_eq!(
            tokenizer.tokenize("experience with kubernetes"),
            vec!["experience kubernetes"]
        );
    }

    #[test]
    fn test_symbols_allowed_inside_tokens() {
        let tokenizer = Tokenizer::new((1, 1)).unwrap();
        let tokens = tokenizer.tokenize("node.js ci-cd tf-idf");
        assert_eq!(tokens, vec!["node.js", "ci-cd", "tf-idf"]);
    }

    #[test]
    fn test_single_letters_and_numbers_dropped() {
        let tokenizer = Tokenizer::new((1, 1)).unwrap();
        assert_eq!(tokenizer.tokenize("x 42 go"), vec!["go"]);
    }

    #[test]
    fn test_duplicates_retained() {
        let tokenizer = Tokenizer::new((1, 1)).unwrap();
        assert_eq!(tokenizer.tokenize("rust rust"), vec!["rust", "rust"]);
    }

    #[test]
    fn test_invalid_ngram_range_rejected() {
        assert!(matches!(
            Tokenizer::new((0, 2)),
            Err(AnalysisError::InvalidConfig(_))
        ));
        assert!(matches!(
            Tokenizer::new((3, 2)),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
