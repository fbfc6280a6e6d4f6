//! Résumé / job-description text analytics.
//!
//! Deterministic, synchronous, no I/O: TF-IDF similarity, keyword domain
//! classification, skill gap analysis, bullet quality and ATS scoring.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod text;
pub mod vectorizer;

pub use catalog::Catalog;
pub use errors::AnalysisError;
pub use models::StructuredProfile;
pub use pipeline::{AnalysisPipeline, FullReport, JobMatch, PipelineConfig};
