//! Bullet quality scoring on five independent 0–100 heuristics, plus a
//! template rewriter for weak bullets.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

const ACTION_VERBS: &[&str] = &[
    "Led",
    "Built",
    "Developed",
    "Achieved",
    "Improved",
    "Reduced",
    "Increased",
    "Managed",
    "Designed",
    "Implemented",
    "Optimized",
    "Delivered",
    "Created",
    "Collaborated",
    "Analyzed",
    "Automated",
    "Deployed",
    "Architected",
    "Launched",
    "Mentored",
    "Researched",
    "Presented",
    "Streamlined",
    "Integrated",
    "Scaled",
];

const IMPACT_PHRASES: &[&str] = &[
    "resulting in",
    "leading to",
    "achieving",
    "improved",
    "increased",
    "reduced",
    "saving",
    "enabling",
];

/// Percentage, multiplier, currency amount, or a count of users/customers/time units.
static QUANTIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+(?:\.\d+)?\s?%|\b\d+(?:\.\d+)?x\b|[$€£]\s?\d[\d,]*(?:\.\d+)?|\d+\s*(?:users|customers|hours|days|weeks)\b",
    )
    .expect("quantification pattern is valid")
});

static TECH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:python|react|aws|docker|kubernetes|sql|apis?|machine learning|tensorflow)\b",
    )
    .expect("technology pattern is valid")
});

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

const IDEAL_MIN_WORDS: usize = 10;
const IDEAL_MAX_WORDS: usize = 25;
const SUGGESTION_THRESHOLD: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletBreakdown {
    pub action_verb: u32,
    pub quantification: u32,
    pub length: u32,
    pub technical_depth: u32,
    pub impact_clarity: u32,
}

impl BulletBreakdown {
    fn mean(&self) -> u32 {
        (self.action_verb
            + self.quantification
            + self.length
            + self.technical_depth
            + self.impact_clarity)
            / 5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => Grade::A,
            s if s >= 60 => Grade::B,
            s if s >= 40 => Grade::C,
            _ => Grade::D,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBullet {
    pub bullet: String,
    pub overall_score: u32, // 0 – 100
    pub breakdown: BulletBreakdown,
    pub grade: Grade,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletReport {
    pub bullets: Vec<ScoredBullet>,
    pub average_score: f64,
    /// Lowest three by overall score; original order on ties.
    pub improvement_priority: Vec<ScoredBullet>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct BulletScorer;

impl BulletScorer {
    pub fn score(&self, bullet: &str) -> ScoredBullet {
        let word_count = bullet.split_whitespace().count();
        let lower = bullet.to_lowercase();

        let breakdown = BulletBreakdown {
            action_verb: score_action_verb(bullet),
            quantification: if QUANTIFICATION_RE.is_match(bullet) { 100 } else { 0 },
            length: score_length(word_count),
            technical_depth: if TECH_RE.is_match(bullet) { 80 } else { 30 },
            impact_clarity: if IMPACT_PHRASES.iter().any(|p| lower.contains(p)) {
                100
            } else {
                40
            },
        };

        let overall_score = breakdown.mean();

        ScoredBullet {
            bullet: bullet.to_string(),
            overall_score,
            breakdown,
            grade: Grade::from_score(overall_score),
            suggestions: suggestions_for(&breakdown, word_count),
        }
    }

    /// Empty input yields an empty report with a zero average.
    pub fn score_all<S: AsRef<str>>(&self, bullets: &[S]) -> BulletReport {
        let scored: Vec<ScoredBullet> = bullets.iter().map(|b| self.score(b.as_ref())).collect();

        let average_score = if scored.is_empty() {
            0.0
        } else {
            let total: u32 = scored.iter().map(|s| s.overall_score).sum();
            ((total as f64 / scored.len() as f64) * 10.0).round() / 10.0
        };

        let mut improvement_priority = scored.clone();
        improvement_priority.sort_by_key(|s| s.overall_score);
        improvement_priority.truncate(3);

        BulletReport {
            bullets: scored,
            average_score,
            improvement_priority,
        }
    }
}

fn score_action_verb(bullet: &str) -> u32 {
    let first_word = bullet.split_whitespace().next().unwrap_or("");
    if ACTION_VERBS.iter().any(|v| v.eq_ignore_ascii_case(first_word)) {
        100
    } else {
        0
    }
}

fn score_length(word_count: usize) -> u32 {
    if (IDEAL_MIN_WORDS..=IDEAL_MAX_WORDS).contains(&word_count) {
        100
    } else if word_count < IDEAL_MIN_WORDS {
        (word_count * 100 / IDEAL_MIN_WORDS) as u32
    } else {
        100usize.saturating_sub((word_count - IDEAL_MAX_WORDS) * 5) as u32
    }
}

/// One suggestion per weak dimension, in dimension order.
fn suggestions_for(breakdown: &BulletBreakdown, word_count: usize) -> Vec<String> {
    let mut suggestions = Vec::new();

    if breakdown.action_verb == 0 {
        suggestions.push(format!(
            "Start with an action verb (e.g., {}, {})",
            ACTION_VERBS[0], ACTION_VERBS[1]
        ));
    }
    if breakdown.quantification == 0 {
        suggestions.push("Add metrics: 'improved performance by X%' or 'served N users'".to_string());
    }
    if breakdown.length < SUGGESTION_THRESHOLD {
        if word_count < IDEAL_MIN_WORDS {
            suggestions
                .push("Expand the bullet point with more context (aim for 15-20 words)".to_string());
        } else {
            suggestions.push("Shorten the bullet point (aim for under 25 words)".to_string());
        }
    }
    if breakdown.technical_depth < SUGGESTION_THRESHOLD {
        suggestions.push("Name the tools or technologies you used".to_string());
    }
    if breakdown.impact_clarity < SUGGESTION_THRESHOLD {
        suggestions
            .push("Add result: '...resulting in X% improvement' or '...enabling Y'".to_string());
    }

    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Rewriter
// ────────────────────────────────────────────────────────────────────────────

const METRIC_PLACEHOLDER: &str = "[Add specific metric: X%, $Y, N users]";

/// Prefixes a category verb to bullets that lack one and flags bullets with no
/// numbers. Engineering roles draw from development verbs, others from
/// achievement verbs, rotating by position in the output.
pub struct BulletRewriter {
    catalog: Arc<Catalog>,
}

impl Default for BulletRewriter {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl BulletRewriter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn rewrite<S: AsRef<str>>(&self, bullets: &[S], role: &str) -> Vec<String> {
        let role_lower = role.to_lowercase();
        let category = if role_lower.contains("engineer") || role_lower.contains("develop") {
            "development"
        } else {
            "achievement"
        };
        let verbs = self.catalog.verbs_in(category);

        bullets
            .iter()
            .enumerate()
            .map(|(position, bullet)| {
                let mut words: Vec<String> = bullet
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                let starts_with_verb = words.first().is_some_and(|first| {
                    self.catalog
                        .all_verbs()
                        .any(|v| v.eq_ignore_ascii_case(first))
                });

                let mut text = if !starts_with_verb && !verbs.is_empty() {
                    let verb = &verbs[position % verbs.len()];
                    if let Some(first) = words.first_mut() {
                        *first = first.to_lowercase();
                    }
                    if words.is_empty() {
                        verb.clone()
                    } else {
                        format!("{verb} {}", words.join(" "))
                    }
                } else {
                    words.join(" ")
                };

                if !DIGIT_RE.is_match(&text) {
                    text.push(' ');
                    text.push_str(METRIC_PLACEHOLDER);
                }
                text
            })
            .collect()
    }
}
