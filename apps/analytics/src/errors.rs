use thiserror::Error;

/// Library-level error type.
///
/// Empty documents, empty skill lists and empty bullet lists are valid inputs
/// with defined outputs and never surface here.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Vectorizer not fitted: call fit() before transform()")]
    NotFitted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AnalysisError {
    /// Stable machine-readable code, mirrored in CLI error output.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::NotFitted => "NOT_FITTED",
            AnalysisError::InvalidConfig(_) => "INVALID_CONFIG",
            AnalysisError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AnalysisError::NotFitted.code(), "NOT_FITTED");
        assert_eq!(
            AnalysisError::InvalidConfig("x".to_string()).code(),
            "INVALID_CONFIG"
        );
        assert_eq!(
            AnalysisError::Validation("x".to_string()).code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AnalysisError::Validation("name cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: name cannot be empty");
    }
}
