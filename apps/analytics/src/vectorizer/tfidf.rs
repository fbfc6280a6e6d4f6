//! TF-IDF vectorizer over a small in-memory corpus.
//!
//! Vocabulary: top `max_features` tokens by raw corpus frequency, indexed in
//! frequency-descending order with first-seen tie-break.
//! IDF: ln((N + 1) / (df + 1)) + 1.
//! TF: count / max(total_tokens, 1).

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalysisError;
use crate::text::tokenizer::{Tokenizer, DEFAULT_NGRAM_RANGE};
use crate::vectorizer::sparse::{cosine_similarity, SparseVector};

pub const DEFAULT_MAX_FEATURES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    pub max_features: usize,
    pub ngram_range: (usize, usize),
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: DEFAULT_NGRAM_RANGE,
        }
    }
}

/// State produced by `fit`. Immutable until the next `fit`.
#[derive(Debug, Clone, PartialEq)]
struct FittedModel {
    vocabulary: IndexMap<String, usize>,
    idf: Vec<f64>,
    document_count: usize,
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    tokenizer: Tokenizer,
    model: Option<FittedModel>,
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Result<Self, AnalysisError> {
        if config.max_features == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_features must be greater than 0".to_string(),
            ));
        }
        let tokenizer = Tokenizer::new(config.ngram_range)?;
        Ok(Self {
            config,
            tokenizer,
            model: None,
        })
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Builds vocabulary and IDF from `documents`, replacing any previous fit.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> &mut Self {
        // raw corpus frequency, insertion-ordered for first-seen tie-break
        let mut frequency: IndexMap<String, usize> = IndexMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.tokenizer.tokenize(doc.as_ref());
            let mut seen: HashSet<&str> = HashSet::new();
            for token in &tokens {
                *frequency.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.config.max_features);

        let n = documents.len() as f64;
        let mut vocabulary = IndexMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (index, (token, _)) in ranked.into_iter().enumerate() {
            let df = document_frequency.get(&token).copied().unwrap_or(0) as f64;
            idf.push(((n + 1.0) / (df + 1.0)).ln() + 1.0);
            vocabulary.insert(token, index);
        }

        debug!(
            "Fitted TF-IDF on {} documents: {} features",
            documents.len(),
            vocabulary.len()
        );

        self.model = Some(FittedModel {
            vocabulary,
            idf,
            document_count: documents.len(),
        });
        self
    }

    pub fn transform<S: AsRef<str>>(
        &self,
        documents: &[S],
    ) -> Result<Vec<SparseVector>, AnalysisError> {
        let model = self.model.as_ref().ok_or(AnalysisError::NotFitted)?;

        Ok(documents
            .iter()
            .map(|doc| {
                let tokens = self.tokenizer.tokenize(doc.as_ref());
                let total = tokens.len().max(1) as f64;

                let mut counts: HashMap<&str, usize> = HashMap::new();
                for token in &tokens {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }

                counts
                    .into_iter()
                    .filter_map(|(token, count)| {
                        model
                            .vocabulary
                            .get(token)
                            .map(|&index| (index, count as f64 / total * model.idf[index]))
                    })
                    .collect()
            })
            .collect())
    }

    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Vec<SparseVector>, AnalysisError> {
        self.fit(documents).transform(documents)
    }

    pub fn cosine_similarity(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        cosine_similarity(a, b)
    }

    /// Token → index, in index order.
    pub fn vocabulary(&self) -> Result<&IndexMap<String, usize>, AnalysisError> {
        self.model
            .as_ref()
            .map(|m| &m.vocabulary)
            .ok_or(AnalysisError::NotFitted)
    }

    /// IDF weight per token, in index order.
    pub fn idf(&self) -> Result<Vec<(&str, f64)>, AnalysisError> {
        let model = self.model.as_ref().ok_or(AnalysisError::NotFitted)?;
        Ok(model
            .vocabulary
            .keys()
            .map(String::as_str)
            .zip(model.idf.iter().copied())
            .collect())
    }

    pub fn feature_names(&self) -> Result<Vec<&str>, AnalysisError> {
        Ok(self.vocabulary()?.keys().map(String::as_str).collect())
    }

    pub fn document_count(&self) -> Option<usize> {
        self.model.as_ref().map(|m| m.document_count)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            config: VectorizerConfig::default(),
            tokenizer: Tokenizer::default(),
            model: None,
        }
    }
}
