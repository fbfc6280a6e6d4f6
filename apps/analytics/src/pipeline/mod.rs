//! Analysis Pipeline. Composes vectorizer, classifier, gap analyzer and bullet
//! scorer into the operations exposed to callers.
//!
//! Flow (full_analysis): serialize profile → fit TF-IDF on {profile, JD} →
//!       cosine similarity → classify → extract JD keywords → skill gap →
//!       score experience bullets → overall recommendation.
//!
//! Every call fits its own vectorizer. Similarity is therefore relative to the
//! two documents of that call and is not comparable across job postings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::ats::{AtsReport, AtsScorer};
use crate::analysis::bullets::{BulletReport, BulletRewriter, BulletScorer};
use crate::analysis::domain::{DomainClassifier, DomainPrediction};
use crate::analysis::skill_gap::{round1, SkillGapAnalyzer, SkillGapReport};
use crate::analysis::suggestions::{SkillSuggester, SkillSuggestion};
use crate::catalog::Catalog;
use crate::errors::AnalysisError;
use crate::models::profile::StructuredProfile;
use crate::text::keywords::KeywordExtractor;
use crate::vectorizer::{TfidfVectorizer, VectorizerConfig};

pub const DEFAULT_PIPELINE_MAX_FEATURES: usize = 300;
pub const DEFAULT_JD_KEYWORD_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub vectorizer: VectorizerConfig,
    /// How many extracted JD keywords count as required skills.
    pub jd_keyword_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig {
                max_features: DEFAULT_PIPELINE_MAX_FEATURES,
                ..VectorizerConfig::default()
            },
            jd_keyword_limit: DEFAULT_JD_KEYWORD_LIMIT,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reports
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub similarity_score: f64, // 0 – 100, one decimal
    pub domain_classification: DomainPrediction,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReport {
    pub job_match: JobMatch,
    pub skill_gap: SkillGapReport,
    /// None when no experience description yields a bullet.
    pub bullet_quality: Option<BulletReport>,
    pub overall_recommendation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Stateless across calls; safe to share between threads.
pub struct AnalysisPipeline {
    config: PipelineConfig,
    classifier: DomainClassifier,
    gap_analyzer: SkillGapAnalyzer,
    bullet_scorer: BulletScorer,
    rewriter: BulletRewriter,
    keywords: KeywordExtractor,
    ats: AtsScorer,
    suggester: SkillSuggester,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::with_catalog(PipelineConfig::default(), Catalog::shared())
    }
}

impl AnalysisPipeline {
    /// Validates the vectorizer settings up front so per-call fits cannot fail on config.
    pub fn new(config: PipelineConfig, catalog: Arc<Catalog>) -> Result<Self, AnalysisError> {
        TfidfVectorizer::new(config.vectorizer)?;
        Ok(Self::with_catalog(config, catalog))
    }

    fn with_catalog(config: PipelineConfig, catalog: Arc<Catalog>) -> Self {
        Self {
            config,
            classifier: DomainClassifier::new(Arc::clone(&catalog)),
            gap_analyzer: SkillGapAnalyzer::new(Arc::clone(&catalog)),
            bullet_scorer: BulletScorer,
            rewriter: BulletRewriter::new(Arc::clone(&catalog)),
            keywords: KeywordExtractor::new(Arc::clone(&catalog)),
            ats: AtsScorer::new(Arc::clone(&catalog)),
            suggester: SkillSuggester::new(catalog),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fits a fresh vectorizer on exactly {resume, job description}.
    pub fn match_resume_to_job(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<JobMatch, AnalysisError> {
        let corpus = [resume_text, job_description];
        let mut vectorizer = TfidfVectorizer::new(self.config.vectorizer)?;
        let vectors = vectorizer.fit_transform(&corpus)?;
        let similarity = vectorizer.cosine_similarity(&vectors[0], &vectors[1]);

        let domain_classification = self.classifier.predict(resume_text);
        debug!(
            "Job match: similarity={similarity:.4}, domain={}",
            domain_classification.primary_domain
        );

        Ok(JobMatch {
            similarity_score: round1(similarity * 100.0),
            domain_classification,
            recommendation: similarity_recommendation(similarity).to_string(),
        })
    }

    pub fn analyze_skill_gap<C, R>(
        &self,
        candidate_skills: &[C],
        required_skills: &[R],
    ) -> SkillGapReport
    where
        C: AsRef<str>,
        R: AsRef<str>,
    {
        self.gap_analyzer.analyze(candidate_skills, required_skills)
    }

    pub fn score_bullets<S: AsRef<str>>(&self, bullets: &[S]) -> BulletReport {
        self.bullet_scorer.score_all(bullets)
    }

    pub fn ats_score(&self, resume_text: &str, job_description: &str) -> AtsReport {
        self.ats.score(resume_text, job_description)
    }

    pub fn rewrite_bullets<S: AsRef<str>>(&self, bullets: &[S], role: &str) -> Vec<String> {
        self.rewriter.rewrite(bullets, role)
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.keywords.extract(text)
    }

    /// Skills to learn next, driven by the profile's `target_role`.
    pub fn suggest_skills(&self, profile: &StructuredProfile) -> Vec<SkillSuggestion> {
        let suggestions = self.suggester.suggest(profile);
        debug!(
            "Skill suggestions for role {:?}: {}",
            profile.target_role,
            suggestions.len()
        );
        suggestions
    }

    pub fn full_analysis(
        &self,
        profile: &StructuredProfile,
        job_description: &str,
    ) -> Result<FullReport, AnalysisError> {
        let resume_text = profile.to_document();

        let job_match = self.match_resume_to_job(&resume_text, job_description)?;

        let mut jd_keywords = self.extract_keywords(job_description);
        jd_keywords.truncate(self.config.jd_keyword_limit);
        let skill_gap = self.analyze_skill_gap(&profile.skills, &jd_keywords);

        let bullets = profile.experience_bullets();
        let bullet_quality = if bullets.is_empty() {
            None
        } else {
            Some(self.score_bullets(&bullets))
        };

        let overall_recommendation = overall_recommendation(&job_match, &skill_gap);

        info!(
            "Full analysis: similarity={}%, skill match={}%, bullets={}",
            job_match.similarity_score,
            skill_gap.match_percentage,
            bullets.len()
        );

        Ok(FullReport {
            job_match,
            skill_gap,
            bullet_quality,
            overall_recommendation,
        })
    }
}

fn similarity_recommendation(similarity: f64) -> &'static str {
    if similarity >= 0.7 {
        "Excellent match! Apply with confidence."
    } else if similarity >= 0.5 {
        "Good match. Tailor a few sections to better align."
    } else if similarity >= 0.3 {
        "Moderate match. Consider adding relevant keywords."
    } else {
        "Low match. Significantly customize your resume for this role."
    }
}

/// Equal-weight blend of similarity and skill match percentages.
fn overall_recommendation(job_match: &JobMatch, skill_gap: &SkillGapReport) -> String {
    let avg = (job_match.similarity_score + skill_gap.match_percentage) / 2.0;

    if avg >= 75.0 {
        "Strong candidate profile. Submit your application.".to_string()
    } else if avg >= 50.0 {
        format!(
            "Good foundation. Bridge {} skill gaps to strengthen your application.",
            skill_gap.missing_skills.len()
        )
    } else {
        "Resume needs significant customization. Focus on the skill gaps and ATS optimization."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skill_gap::ReadinessLevel;

    const PROFILE_JSON: &str = r#"{
        "name": "Priya Sharma",
        "skills": ["Python", "React", "Machine Learning", "PostgreSQL", "Docker"],
        "education": [{"degree": "B.Tech", "field": "Computer Science", "institution": "IIT Hyderabad"}],
        "experience": [{
            "role": "Software Intern",
            "company": "TechStartup",
            "description": "Built REST APIs using FastAPI. Improved performance by reducing latency by 40%."
        }],
        "projects": [{
            "name": "SmartResume AI",
            "description": "AI-powered resume builder using NLP and machine learning",
            "technologies": ["Python", "React", "TensorFlow"]
        }]
    }"#;

    const SAMPLE_JD: &str = "We are looking for a Software Engineer with expertise in Python, \
        React, Docker, and Kubernetes. Experience with machine learning and data pipelines is \
        a plus. You will build scalable REST APIs and collaborate with cross-functional teams. \
        Strong knowledge of PostgreSQL and cloud services required.";

    fn profile() -> StructuredProfile {
        serde_json::from_str(PROFILE_JSON).unwrap()
    }

    #[test]
    fn test_full_analysis_sample() {
        let report = AnalysisPipeline::default()
            .full_analysis(&profile(), SAMPLE_JD)
            .unwrap();

        assert!(report.job_match.similarity_score > 0.0);
        assert!(report.job_match.similarity_score <= 100.0);

        // JD tech terms: Python, React, PostgreSQL, Docker, Kubernetes
        assert!(report
            .skill_gap
            .matched_skills
            .iter()
            .any(|s| s == "Python"));
        assert!(report
            .skill_gap
            .missing_skills
            .iter()
            .any(|s| s == "Kubernetes"));

        let bullets = report.bullet_quality.unwrap();
        assert_eq!(bullets.bullets.len(), 2);
        assert_eq!(bullets.bullets[0].bullet, "Built REST APIs using FastAPI");
        assert!(!report.overall_recommendation.is_empty());
    }

    #[test]
    fn test_full_analysis_without_experience_has_no_bullet_report() {
        let mut p = profile();
        p.experience.clear();
        let report = AnalysisPipeline::default().full_analysis(&p, SAMPLE_JD).unwrap();
        assert!(report.bullet_quality.is_none());
    }

    #[test]
    fn test_empty_job_description_is_vacuous_skill_match() {
        let report = AnalysisPipeline::default().full_analysis(&profile(), "").unwrap();
        assert_eq!(report.job_match.similarity_score, 0.0);
        assert_eq!(report.skill_gap.match_percentage, 100.0);
        assert_eq!(report.skill_gap.readiness_level, ReadinessLevel::StrongMatch);
    }

    #[test]
    fn test_jd_keyword_limit_caps_required_skills() {
        let config = PipelineConfig {
            jd_keyword_limit: 2,
            ..PipelineConfig::default()
        };
        let pipeline = AnalysisPipeline::new(config, Catalog::shared()).unwrap();
        let report = pipeline.full_analysis(&profile(), SAMPLE_JD).unwrap();
        let required =
            report.skill_gap.matched_skills.len() + report.skill_gap.missing_skills.len();
        assert_eq!(required, 2);
    }

    #[test]
    fn test_match_is_independent_per_call() {
        let pipeline = AnalysisPipeline::default();
        let first = pipeline
            .match_resume_to_job("python docker kubernetes", "python docker")
            .unwrap();
        let _other = pipeline
            .match_resume_to_job("figma sketch", "completely unrelated posting")
            .unwrap();
        let again = pipeline
            .match_resume_to_job("python docker kubernetes", "python docker")
            .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_identical_documents_match_fully() {
        let text = "Rust engineer building distributed systems";
        let result = AnalysisPipeline::default()
            .match_resume_to_job(text, text)
            .unwrap();
        assert_eq!(result.similarity_score, 100.0);
        assert_eq!(
            result.recommendation,
            "Excellent match! Apply with confidence."
        );
    }

    #[test]
    fn test_invalid_vectorizer_config_rejected() {
        let config = PipelineConfig {
            vectorizer: VectorizerConfig {
                max_features: 10,
                ngram_range: (2, 1),
            },
            ..PipelineConfig::default()
        };
        assert!(matches!(
            AnalysisPipeline::new(config, Catalog::shared()),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_similarity_recommendation_tiers() {
        assert!(similarity_recommendation(0.7).starts_with("Excellent"));
        assert!(similarity_recommendation(0.5).starts_with("Good"));
        assert!(similarity_recommendation(0.3).starts_with("Moderate"));
        assert!(similarity_recommendation(0.29).starts_with("Low"));
    }

    #[test]
    fn test_overall_recommendation_tiers() {
        let analyzer = SkillGapAnalyzer::default();
        let job_match = |score: f64| JobMatch {
            similarity_score: score,
            domain_classification: DomainClassifier::default().predict(""),
            recommendation: String::new(),
        };

        let full = analyzer.analyze(&["Rust"], &["Rust"]);
        assert!(overall_recommendation(&job_match(50.0), &full).starts_with("Strong"));

        let half = analyzer.analyze(&["Rust"], &["Rust", "Go"]);
        let rec = overall_recommendation(&job_match(50.0), &half);
        assert_eq!(
            rec,
            "Good foundation. Bridge 1 skill gaps to strengthen your application."
        );

        let none = analyzer.analyze(&["Rust"], &["Go"]);
        assert!(overall_recommendation(&job_match(10.0), &none).starts_with("Resume needs"));
    }

    #[test]
    fn test_suggest_skills_reads_target_role() {
        let pipeline = AnalysisPipeline::default();
        let mut profile = profile();
        profile.target_role = Some("Backend Engineer".to_string());

        // Docker and PostgreSQL are already on the profile
        let skills: Vec<String> = pipeline
            .suggest_skills(&profile)
            .into_iter()
            .map(|s| s.skill)
            .collect();
        assert_eq!(skills, vec!["Redis", "Kubernetes", "Kafka", "gRPC", "Terraform"]);

        profile.target_role = None;
        let generic = pipeline.suggest_skills(&profile);
        assert_eq!(generic[0].skill, "Git");
    }

    #[test]
    fn test_pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisPipeline>();
    }
}
