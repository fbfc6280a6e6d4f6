//! ATS compatibility score: JD keyword coverage, document format checks,
//! action verb usage and quantification density, blended with fixed weights.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::skill_gap::round1;
use crate::catalog::Catalog;
use crate::text::keywords::KeywordExtractor;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("phone pattern is valid"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%?|\d+x").expect("number pattern is valid"));

const KEYWORD_WEIGHT: f64 = 0.4;
const FORMAT_WEIGHT: f64 = 0.25;
const VERB_WEIGHT: f64 = 0.2;
const QUANT_WEIGHT: f64 = 0.15;

const MATCHED_LIMIT: usize = 15;
const MISSING_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatChecks {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
    pub word_count_ok: bool,
    pub no_tables: bool,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
}

impl FormatChecks {
    fn evaluate(text: &str) -> Self {
        let lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();
        Self {
            has_email: EMAIL_RE.is_match(text),
            has_phone: PHONE_RE.is_match(text),
            has_linkedin: lower.contains("linkedin"),
            has_github: lower.contains("github"),
            word_count_ok: (400..=800).contains(&word_count),
            no_tables: !lower.contains("<table"),
            has_summary: ["summary", "objective", "profile"]
                .iter()
                .any(|w| lower.contains(w)),
            has_education: lower.contains("education") || lower.contains("university"),
            has_experience: lower.contains("experience") || lower.contains("work"),
            has_skills: lower.contains("skill"),
        }
    }

    fn as_array(&self) -> [bool; 10] {
        [
            self.has_email,
            self.has_phone,
            self.has_linkedin,
            self.has_github,
            self.word_count_ok,
            self.no_tables,
            self.has_summary,
            self.has_education,
            self.has_experience,
            self.has_skills,
        ]
    }

    /// Share of passed checks, 0 – 100.
    pub fn score(&self) -> f64 {
        let checks = self.as_array();
        let passed = checks.iter().filter(|c| **c).count();
        passed as f64 / checks.len() as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub keyword_match: f64,
    pub format_score: f64,
    pub action_verbs: f64,
    pub quantification: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub overall_score: u32, // 0 – 100
    pub breakdown: AtsBreakdown,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub format_checks: FormatChecks,
    pub recommendations: Vec<String>,
}

pub struct AtsScorer {
    catalog: Arc<Catalog>,
    keywords: KeywordExtractor,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl AtsScorer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            keywords: KeywordExtractor::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    pub fn score(&self, resume_text: &str, job_description: &str) -> AtsReport {
        let jd_keywords = self.keywords.extract(job_description);
        let resume_lower = resume_text.to_lowercase();

        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .into_iter()
            .partition(|kw| resume_lower.contains(&kw.to_lowercase()));

        let total_keywords = matched.len() + missing.len();
        let keyword_score = if total_keywords == 0 {
            0.0
        } else {
            matched.len() as f64 / total_keywords as f64 * 100.0
        };

        let format_checks = FormatChecks::evaluate(resume_text);
        let format_score = format_checks.score();

        let verbs_used = self
            .catalog
            .all_verbs()
            .filter(|v| resume_lower.contains(&v.to_lowercase()))
            .count();
        let verb_score = (verbs_used as f64 * 10.0).min(100.0);

        let numbers = NUMBER_RE.find_iter(resume_text).count();
        let quant_score = (numbers as f64 * 15.0).min(100.0);

        let overall_score = (keyword_score * KEYWORD_WEIGHT
            + format_score * FORMAT_WEIGHT
            + verb_score * VERB_WEIGHT
            + quant_score * QUANT_WEIGHT) as u32;

        let recommendations =
            build_recommendations(keyword_score, &format_checks, verb_score, &missing);

        AtsReport {
            overall_score,
            breakdown: AtsBreakdown {
                keyword_match: round1(keyword_score),
                format_score: round1(format_score),
                action_verbs: round1(verb_score),
                quantification: round1(quant_score),
            },
            matched_keywords: matched.into_iter().take(MATCHED_LIMIT).collect(),
            missing_keywords: missing.into_iter().take(MISSING_LIMIT).collect(),
            format_checks,
            recommendations,
        }
    }
}

fn build_recommendations(
    keyword_score: f64,
    checks: &FormatChecks,
    verb_score: f64,
    missing: &[String],
) -> Vec<String> {
    let mut recs = Vec::new();
    if keyword_score < 60.0 {
        let top: Vec<&str> = missing.iter().take(5).map(String::as_str).collect();
        recs.push(format!(
            "Add more keywords from the job description: {}",
            top.join(", ")
        ));
    }
    if !checks.has_linkedin {
        recs.push("Add your LinkedIn profile URL".to_string());
    }
    if !checks.word_count_ok {
        recs.push("Aim for 400-800 words in your resume".to_string());
    }
    if !checks.has_summary {
        recs.push("Add a professional summary section".to_string());
    }
    if verb_score < 50.0 {
        recs.push("Use more action verbs (Led, Built, Achieved, Optimized...)".to_string());
    }
    recs.push("Quantify your achievements with numbers and percentages".to_string());
    recs
}
