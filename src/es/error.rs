//! Error type for the evolution strategy.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while configuring or running the evolution strategy.
///
/// Every error is a hard stop: nothing is retried and no partial result
/// is returned.
#[derive(Debug, Error)]
pub enum EsError {
    /// A run parameter is out of range or unrecognized.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An operator asked for more distinct elements than exist.
    #[error("cannot sample {requested} distinct elements from {available}")]
    InvalidSample { requested: usize, available: usize },

    /// Environmental selection has fewer candidates than survivors requested.
    #[error("cannot select {requested} survivors from {available} candidates")]
    InsufficientCandidates { requested: usize, available: usize },

    /// The job instance failed validation.
    #[error("invalid job instance: {}", join_messages(.0))]
    InvalidInstance(Vec<ValidationError>),

    /// An instance file could not be read.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// An instance file is not a valid JSON job list.
    #[error("failed to parse instance: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::validation::validate_jobs;

    #[test]
    fn test_display_messages() {
        let err = EsError::InvalidSample {
            requested: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "cannot sample 2 distinct elements from 1");

        let err = EsError::InvalidConfig("mu must be at least 2".into());
        assert_eq!(err.to_string(), "invalid configuration: mu must be at least 2");
    }

    #[test]
    fn test_invalid_instance_joins_messages() {
        let errors = validate_jobs(&[Job::new(1, -1.0, 0.0), Job::new(1, 1.0, 0.0)]).unwrap_err();
        let err = EsError::InvalidInstance(errors);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid job instance: "));
        assert!(msg.contains("; "));
    }
}
