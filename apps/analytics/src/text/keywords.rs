//! Job-description keyword extraction: known technology terms first, then the
//! most frequent remaining words.

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z][A-Za-z0-9+#.-]{2,}\b").expect("keyword pattern is valid")
});

const STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "you", "our", "will", "have", "are", "this", "that", "from",
    "your", "we", "in", "of", "to", "a", "an", "is", "be", "or", "as", "at", "by", "it", "on",
    "if", "no", "up", "do", "so",
];

const TOP_WORDS: usize = 30;
const MAX_KEYWORDS: usize = 25;

pub struct KeywordExtractor {
    catalog: Arc<Catalog>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl KeywordExtractor {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns at most 25 keywords. Tech terms keep their catalog casing;
    /// frequent words are lowercased.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lower = text.to_lowercase();

        let mut keywords: Vec<String> = Vec::new();
        for term in self.catalog.all_skill_terms() {
            if contains_term(&lower, &term.to_lowercase())
                && !keywords.iter().any(|k| k.eq_ignore_ascii_case(term))
            {
                keywords.push(term.to_string());
            }
        }
        let tech_lower: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        for word in top_words(text, TOP_WORDS) {
            if !tech_lower.contains(&word) {
                keywords.push(word);
            }
        }

        keywords.truncate(MAX_KEYWORDS);
        keywords
    }
}

/// Most frequent non-stop-words, lowercased. Ties keep first-seen order.
fn top_words(text: &str, limit: usize) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for m in WORD_RE.find_iter(text) {
        let word = m.as_str().to_lowercase();
        if STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // stable: equal counts stay in insertion order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(limit).map(|(w, _)| w).collect()
}

/// Substring match that refuses to land inside a larger alphanumeric run,
/// so "r" does not match "react" and "go" does not match "google".
/// `&` joins its neighbours: "r&d" is one word, not the language R.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !joins_word(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !joins_word(c));
        before_ok && after_ok
    })
}

fn joins_word(c: char) -> bool {
    c.is_alphanumeric() || c == '&'
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JD: &str = "We are looking for a Software Engineer with expertise in Python, \
        React, Docker, and Kubernetes. Experience with machine learning and data pipelines is \
        a plus. You will build scalable REST APIs and collaborate with cross-functional teams. \
        Strong knowledge of PostgreSQL and cloud services required.";

    #[test]
    fn test_empty_text_has_no_keywords() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   ").is_empty());
    }

    #[test]
    fn test_tech_terms_come_first_in_catalog_order() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract(SAMPLE_JD);
        assert_eq!(
            &keywords[..5],
            &["Python", "React", "PostgreSQL", "Docker", "Kubernetes"]
        );
    }

    #[test]
    fn test_tech_terms_not_repeated_as_words() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract(SAMPLE_JD);
        assert!(!keywords.iter().any(|k| k == "python"));
        assert!(keywords.iter().any(|k| k == "software"));
    }

    #[test]
    fn test_short_terms_need_word_boundaries() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("Strong frontend engineering background");
        assert!(!keywords.iter().any(|k| k == "R" || k == "Go"));
    }

    #[test]
    fn test_ampersand_words_do_not_yield_single_letter_terms() {
        let keywords = KeywordExtractor::default().extract("Need C++, C#, Node.js and R&D skills");
        assert_eq!(keywords, vec!["C++", "C#", "Node.js", "need", "skills"]);
    }

    #[test]
    fn test_capped_at_25() {
        let text: String = (0..60).map(|i| format!("word{i} ")).collect();
        let keywords = KeywordExtractor::default().extract(&text);
        assert_eq!(keywords.len(), 25);
    }

    #[test]
    fn test_top_words_orders_by_frequency_then_first_seen() {
        let words = top_words("gamma beta beta alpha gamma beta", 10);
        assert_eq!(words, vec!["beta", "gamma", "alpha"]);
    }

    #[test]
    fn test_contains_term_boundaries() {
        assert!(contains_term("i write c++ daily", "c++"));
        assert!(contains_term("ci/cd pipelines", "ci/cd"));
        assert!(!contains_term("google cloud", "go"));
        assert!(contains_term("go, rust", "go"));
        assert!(!contains_term("anything", ""));
        assert!(!contains_term("r&d skills", "r"));
        assert!(!contains_term("at&t", "t"));
        assert!(contains_term("python & r", "r"));
    }
}
