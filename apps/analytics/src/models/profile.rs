use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    /// Free text; split on '.' into scorable bullets.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Candidate profile as supplied by the caller. Every collection defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub target_role: Option<String>,
}

/// Fragments of at most this many characters are not treated as bullets.
const MIN_BULLET_CHARS: usize = 10;

impl StructuredProfile {
    /// Boundary validation. The analysis core itself accepts any profile.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.name.trim().is_empty() {
            return Err(AnalysisError::Validation("name cannot be empty".to_string()));
        }
        if let Some(pos) = self.skills.iter().position(|s| s.trim().is_empty()) {
            return Err(AnalysisError::Validation(format!(
                "skills[{pos}] cannot be blank"
            )));
        }
        Ok(())
    }

    /// Flattens the profile into one document:
    /// name, skills, education fields, experiences and projects, space-joined.
    pub fn to_document(&self) -> String {
        let education = self
            .education
            .iter()
            .map(|e| e.field.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let experience = self
            .experience
            .iter()
            .map(|e| format!("{} {} {}", e.role, e.company, e.description))
            .collect::<Vec<_>>()
            .join(" ");
        let projects = self
            .projects
            .iter()
            .map(|p| format!("{} {} {}", p.name, p.description, p.technologies.join(" ")))
            .collect::<Vec<_>>()
            .join(" ");

        [
            self.name.clone(),
            self.skills.join(" "),
            education,
            experience,
            projects,
        ]
        .join(" ")
    }

    /// Sentences from every experience description longer than 10 characters.
    pub fn experience_bullets(&self) -> Vec<String> {
        self.experience
            .iter()
            .flat_map(|e| e.description.split('.'))
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_BULLET_CHARS)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> StructuredProfile {
        StructuredProfile {
            name: "Priya Sharma".to_string(),
            email: Some("priya@example.com".to_string()),
            skills: vec![
                "Python".to_string(),
                "React".to_string(),
                "Machine Learning".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ],
            education: vec![EducationEntry {
                institution: "IIT Hyderabad".to_string(),
                degree: "B.Tech".to_string(),
                field: "Computer Science".to_string(),
            }],
            experience: vec![ExperienceEntry {
                role: "Software Intern".to_string(),
                company: "TechStartup".to_string(),
                description:
                    "Built REST APIs using FastAPI. Improved performance by reducing latency by 40%."
                        .to_string(),
                technologies: vec![],
            }],
            projects: vec![ProjectEntry {
                name: "SmartResume AI".to_string(),
                description: "AI-powered resume builder using NLP and machine learning"
                    .to_string(),
                technologies: vec![
                    "Python".to_string(),
                    "React".to_string(),
                    "TensorFlow".to_string(),
                ],
            }],
            target_role: None,
        }
    }

    #[test]
    fn test_to_document_field_order() {
        let doc = sample_profile().to_document();
        assert!(doc.starts_with("Priya Sharma Python React Machine Learning PostgreSQL Docker Computer Science Software Intern TechStartup Built REST APIs"));
        assert!(doc.ends_with("SmartResume AI AI-powered resume builder using NLP and machine learning Python React TensorFlow"));
    }

    #[test]
    fn test_experience_bullets_split_on_periods() {
        let bullets = sample_profile().experience_bullets();
        assert_eq!(
            bullets,
            vec![
                "Built REST APIs using FastAPI",
                "Improved performance by reducing latency by 40%"
            ]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let profile = StructuredProfile {
            name: "A".to_string(),
            experience: vec![ExperienceEntry {
                description: "Did it. Shipped ten features on time.".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            profile.experience_bullets(),
            vec!["Shipped ten features on time"]
        );
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let profile: StructuredProfile = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name_and_skills() {
        let mut profile = sample_profile();
        profile.name = "  ".to_string();
        assert!(matches!(
            profile.validate(),
            Err(AnalysisError::Validation(_))
        ));

        let mut profile = sample_profile();
        profile.skills.push(" ".to_string());
        assert_eq!(
            profile.validate(),
            Err(AnalysisError::Validation("skills[5] cannot be blank".to_string()))
        );
    }
}
