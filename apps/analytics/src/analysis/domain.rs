//! Domain classifier: keyword-presence scoring against the catalog's domain table.
//!
//! Algorithm:
//! 1. Lowercase the text once
//! 2. Per domain, count keyword phrases present as literal substrings (presence, not frequency)
//! 3. raw score = count × weight; confidence = min(100, raw score × 8)
//! 4. Rank by raw score descending, table order on ties
//!
//! With no matches anywhere, the catalog's fallback domain is primary at confidence 0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

const CONFIDENCE_PER_POINT: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: String,
    pub score: f64,
    pub matched_keywords: Vec<String>,
    pub confidence: u32, // 0 – 100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPrediction {
    pub primary_domain: String,
    pub secondary_domain: Option<String>,
    pub confidence: u32,
    /// Every domain, ranked.
    pub all_scores: Vec<DomainScore>,
}

impl DomainPrediction {
    /// False when no keyword of any domain matched and the primary is the fallback.
    pub fn has_signal(&self) -> bool {
        self.all_scores.iter().any(|s| s.score > 0.0)
    }
}

pub struct DomainClassifier {
    catalog: Arc<Catalog>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl DomainClassifier {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn predict(&self, text: &str) -> DomainPrediction {
        let text_lower = text.to_lowercase();

        let mut scores: Vec<DomainScore> = self
            .catalog
            .domains
            .iter()
            .map(|spec| {
                let matched_keywords: Vec<String> = spec
                    .keywords
                    .iter()
                    .filter(|kw| text_lower.contains(kw.as_str()))
                    .cloned()
                    .collect();
                let score = matched_keywords.len() as f64 * spec.weight;
                DomainScore {
                    domain: spec.label.clone(),
                    score,
                    matched_keywords,
                    confidence: confidence_for(score),
                }
            })
            .collect();

        // stable: ties keep table order
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let (primary_domain, confidence) = match scores.first() {
            Some(top) if top.score > 0.0 => (top.domain.clone(), top.confidence),
            _ => (self.catalog.fallback_domain.clone(), 0),
        };

        let secondary_domain = scores
            .get(1)
            .filter(|s| s.score > 0.0)
            .map(|s| s.domain.clone());

        DomainPrediction {
            primary_domain,
            secondary_domain,
            confidence,
            all_scores: scores,
        }
    }
}

fn confidence_for(score: f64) -> u32 {
    (score * CONFIDENCE_PER_POINT).clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DomainSpec;

    const ML_TEXT: &str =
        "Experienced Python developer with TensorFlow, PyTorch, NLP and machine learning expertise";

    #[test]
    fn test_ml_text_classified_as_data_science() {
        let prediction = DomainClassifier::default().predict(ML_TEXT);
        assert_eq!(prediction.primary_domain, "Data Science & ML");
        assert_eq!(prediction.confidence, 32); // 4 keywords × 8
        assert_eq!(
            prediction.secondary_domain.as_deref(),
            Some("Software Engineering")
        );
        assert!(prediction.has_signal());
    }

    #[test]
    fn test_presence_not_frequency() {
        let prediction = DomainClassifier::default().predict("docker docker docker docker");
        let devops = prediction
            .all_scores
            .iter()
            .find(|s| s.domain == "DevOps & Cloud")
            .unwrap();
        assert_eq!(devops.score, 1.0);
        assert_eq!(devops.matched_keywords, vec!["docker"]);
    }

    #[test]
    fn test_no_matches_falls_back() {
        let prediction = DomainClassifier::default().predict("");
        assert_eq!(prediction.primary_domain, "Software Engineering");
        assert_eq!(prediction.confidence, 0);
        assert!(prediction.secondary_domain.is_none());
        assert!(!prediction.has_signal());
        assert_eq!(prediction.all_scores.len(), 6);
    }

    #[test]
    fn test_ties_keep_table_order() {
        // kubernetes is listed under both Software Engineering and DevOps & Cloud
        let prediction = DomainClassifier::default().predict("kubernetes");
        assert_eq!(prediction.primary_domain, "Software Engineering");
        assert_eq!(prediction.secondary_domain.as_deref(), Some("DevOps & Cloud"));
    }

    #[test]
    fn test_confidence_capped_at_100() {
        let text = "machine learning deep learning tensorflow pytorch pandas numpy scikit-learn \
                    nlp computer vision neural network dataset model training data analysis \
                    statistics";
        let prediction = DomainClassifier::default().predict(text);
        assert_eq!(prediction.primary_domain, "Data Science & ML");
        assert_eq!(prediction.confidence, 100);
    }

    #[test]
    fn test_weight_scales_score() {
        let catalog = Catalog {
            domains: vec![
                DomainSpec {
                    label: "Plain".to_string(),
                    keywords: vec!["alpha".to_string(), "beta".to_string()],
                    weight: 1.0,
                },
                DomainSpec {
                    label: "Boosted".to_string(),
                    keywords: vec!["gamma".to_string()],
                    weight: 3.0,
                },
            ],
            fallback_domain: "Plain".to_string(),
            ..Catalog::builtin()
        };
        let prediction = DomainClassifier::new(Arc::new(catalog)).predict("alpha beta gamma");
        assert_eq!(prediction.primary_domain, "Boosted");
        assert_eq!(prediction.confidence, 24);
        assert_eq!(prediction.secondary_domain.as_deref(), Some("Plain"));
    }
}
