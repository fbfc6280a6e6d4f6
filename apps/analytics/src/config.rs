use anyhow::{Context, Result};

use crate::pipeline::{PipelineConfig, DEFAULT_JD_KEYWORD_LIMIT, DEFAULT_PIPELINE_MAX_FEATURES};
use crate::vectorizer::VectorizerConfig;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; defaults match `PipelineConfig::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub max_features: usize,
    pub ngram_max: usize,
    pub jd_keyword_limit: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            max_features: parse_env("ANALYTICS_MAX_FEATURES", DEFAULT_PIPELINE_MAX_FEATURES)?,
            ngram_max: parse_env("ANALYTICS_NGRAM_MAX", 2)?,
            jd_keyword_limit: parse_env("ANALYTICS_JD_KEYWORD_LIMIT", DEFAULT_JD_KEYWORD_LIMIT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            vectorizer: VectorizerConfig {
                max_features: self.max_features,
                ngram_range: (1, self.ngram_max),
            },
            jd_keyword_limit: self.jd_keyword_limit,
        }
    }
}

fn parse_env(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value = parse_env("ANALYTICS_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("ANALYTICS_TEST_GARBAGE", "lots");
        let err = parse_env("ANALYTICS_TEST_GARBAGE", 1).unwrap_err();
        assert!(err.to_string().contains("ANALYTICS_TEST_GARBAGE"));
        std::env::remove_var("ANALYTICS_TEST_GARBAGE");
    }

    #[test]
    fn test_pipeline_config_mapping() {
        let config = Config {
            max_features: 120,
            ngram_max: 3,
            jd_keyword_limit: 7,
            rust_log: "debug".to_string(),
        };
        let pipeline = config.pipeline_config();
        assert_eq!(pipeline.vectorizer.max_features, 120);
        assert_eq!(pipeline.vectorizer.ngram_range, (1, 3));
        assert_eq!(pipeline.jd_keyword_limit, 7);
    }
}
