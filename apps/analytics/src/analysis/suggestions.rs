//! Skill suggestions for a target role.
//!
//! Algorithm:
//!   1. Find every role keyword in the profile's `target_role`.
//!   2. Walk those roles' skill lists in order, skipping skills the candidate
//!      already lists (case-insensitive) and skills already suggested.
//!   3. The first three role suggestions are high priority.
//!   4. No role suggestion at all → generic skills, all medium priority.
//!   5. Cap at eight.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::skill_gap::Priority;
use crate::catalog::Catalog;
use crate::models::profile::StructuredProfile;

const MAX_SUGGESTIONS: usize = 8;
const HIGH_PRIORITY_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub skill: String,
    pub reason: String,
    pub priority: Priority,
}

pub struct SkillSuggester {
    catalog: Arc<Catalog>,
}

impl Default for SkillSuggester {
    fn default() -> Self {
        Self::new(Catalog::shared())
    }
}

impl SkillSuggester {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn suggest(&self, profile: &StructuredProfile) -> Vec<SkillSuggestion> {
        let mut seen: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
        let target_role = profile.target_role.as_deref().unwrap_or("").trim();

        let mut suggestions = Vec::new();
        for skill in self.catalog.skills_for_role(target_role).flatten() {
            if !seen.insert(skill.to_lowercase()) {
                continue;
            }
            let priority = if suggestions.len() < HIGH_PRIORITY_SLOTS {
                Priority::High
            } else {
                Priority::Medium
            };
            suggestions.push(SkillSuggestion {
                skill: skill.clone(),
                reason: format!("Commonly required for {target_role} roles"),
                priority,
            });
        }

        if suggestions.is_empty() {
            suggestions = self
                .catalog
                .generic_skills
                .iter()
                .filter(|skill| seen.insert(skill.to_lowercase()))
                .map(|skill| SkillSuggestion {
                    skill: skill.clone(),
                    reason: "Widely used across all roles".to_string(),
                    priority: Priority::Medium,
                })
                .collect();
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
