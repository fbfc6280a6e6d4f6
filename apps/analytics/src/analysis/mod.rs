// Deterministic heuristic analyzers. No trained models; all tables come from `catalog`.

pub mod ats;
pub mod bullets;
pub mod domain;
pub mod skill_gap;
pub mod suggestions;

pub use ats::{AtsReport, AtsScorer};
pub use bullets::{BulletReport, BulletRewriter, BulletScorer, Grade, ScoredBullet};
pub use domain::{DomainClassifier, DomainPrediction, DomainScore};
pub use skill_gap::{ReadinessLevel, SkillGapAnalyzer, SkillGapReport};
pub use suggestions::{SkillSuggester, SkillSuggestion};
