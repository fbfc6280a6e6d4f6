//! Skill gap analysis: exact (case-insensitive) matching plus one-hop taxonomy
//! lookups to separate transferable gaps from ones that need a learning plan.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, LearningResource};

const LEARNING_PLAN_LIMIT: usize = 5;
const HIGH_PRIORITY_SLOTS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    StrongMatch,
    GoodMatch,
    ModerateMatch,
    EarlyStage,
}

impl ReadinessLevel {
    /// Thresholds are inclusive lower bounds: 80 is a strong match.
    pub fn from_percentage(match_pct: f64) -> Self {
        match match_pct {
            p if p >= 80.0 => ReadinessLevel::StrongMatch,
            p if p >= 60.0 => ReadinessLevel::GoodMatch,
            p if p >= 40.0 => ReadinessLevel::ModerateMatch,
            _ => ReadinessLevel::EarlyStage,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            ReadinessLevel::StrongMatch => "Strong match. Apply now.",
            ReadinessLevel::GoodMatch => "Good match. Address 1-2 gaps before applying.",
            ReadinessLevel::ModerateMatch => {
                "Moderate match. 1-3 months of preparation recommended."
            }
            ReadinessLevel::EarlyStage => "Early stage. 3-6 months of skill development needed.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

/// A missing skill the candidate can reach from skills they already hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferableSkill {
    pub missing_skill: String,
    pub transferable_from: Vec<String>,
    pub gap_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStep {
    pub skill: String,
    pub priority: Priority,
    #[serde(flatten)]
    pub resource: LearningResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub match_percentage: f64, // 0 – 100, one decimal
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub transferable_skills: Vec<TransferableSkill>,
    pub learning_plan: Vec<LearningStep>,
    pub readiness_level: ReadinessLevel,
    pub readiness_advice: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct SkillGapAnalyzer {
    catalog: Arc<Catalog>,
}

impl Default for SkillGapAnalyzer {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl SkillGapAnalyzer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// An empty `required` list is vacuously satisfied: 100 %, nothing missing.
    pub fn analyze<C, R>(&self, candidate_skills: &[C], required_skills: &[R]) -> SkillGapReport
    where
        C: AsRef<str>,
        R: AsRef<str>,
    {
        let candidate_lower: HashSet<String> = candidate_skills
            .iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
            .iter()
            .map(|s| s.as_ref().to_string())
            .partition(|s| candidate_lower.contains(&s.to_lowercase()));

        let transferable_skills: Vec<TransferableSkill> = missing_skills
            .iter()
            .filter_map(|gap| self.transferable(gap, candidate_skills))
            .collect();

        let learning_plan: Vec<LearningStep> = missing_skills
            .iter()
            .filter(|gap| {
                !transferable_skills
                    .iter()
                    .any(|t| &t.missing_skill == *gap)
            })
            .take(LEARNING_PLAN_LIMIT)
            .enumerate()
            .map(|(i, skill)| LearningStep {
                skill: skill.clone(),
                priority: if i < HIGH_PRIORITY_SLOTS {
                    Priority::High
                } else {
                    Priority::Medium
                },
                resource: self.catalog.learning_resource(skill),
            })
            .collect();

        // Tier follows the reported (rounded) percentage.
        let match_percentage = if required_skills.is_empty() {
            100.0
        } else {
            round1(matched_skills.len() as f64 / required_skills.len() as f64 * 100.0)
        };
        let readiness_level = ReadinessLevel::from_percentage(match_percentage);

        SkillGapReport {
            match_percentage,
            matched_skills,
            missing_skills,
            transferable_skills,
            learning_plan,
            readiness_level,
            readiness_advice: readiness_level.advice().to_string(),
        }
    }

    fn transferable<C: AsRef<str>>(
        &self,
        gap: &str,
        candidate_skills: &[C],
    ) -> Option<TransferableSkill> {
        let related = self.catalog.related_skills(gap)?;
        let transferable_from: Vec<String> = candidate_skills
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| related.iter().any(|r| r.eq_ignore_ascii_case(s)))
            .map(str::to_string)
            .collect();

        if transferable_from.is_empty() {
            return None;
        }
        Some(TransferableSkill {
            missing_skill: gap.to_string(),
            transferable_from,
            gap_size: "small".to_string(),
        })
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
