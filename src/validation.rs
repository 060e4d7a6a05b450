//! Input validation for single-machine instances.
//!
//! Checks structural integrity of a job set before the search starts.
//! Detects:
//! - Empty instances
//! - Duplicate job IDs
//! - Negative processing times
//! - Non-finite processing times or due dates
//!
//! All problems are collected; validation does not stop at the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance contains no jobs.
    EmptyInstance,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has a negative processing time.
    NegativeProcessTime,
    /// A processing time or due date is NaN or infinite.
    NonFiniteValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a job instance.
///
/// Checks:
/// 1. At least one job
/// 2. No duplicate job IDs
/// 3. Processing times and due dates are finite
/// 4. Processing times are non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            "Instance has no jobs",
        ));
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !job.process_time.is_finite() || !job.due_date.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteValue,
                format!("Job {} has a non-finite processing time or due date", job.id),
            ));
        } else if job.process_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProcessTime,
                format!(
                    "Job {} has negative processing time {}",
                    job.id, job.process_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::reference_jobs;

    #[test]
    fn test_valid_input() {
        assert!(validate_jobs(&reference_jobs()).is_ok());
    }

    #[test]
    fn test_empty_instance() {
        let errors = validate_jobs(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInstance);
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new(1, 2.0, 5.0), Job::new(1, 3.0, 9.0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_negative_process_time() {
        let jobs = vec![Job::new(1, -2.0, 5.0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeProcessTime);
    }

    #[test]
    fn test_non_finite_values() {
        let jobs = vec![Job::new(1, f64::NAN, 5.0), Job::new(2, 1.0, f64::INFINITY)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_negative_due_date_is_allowed() {
        let jobs = vec![Job::new(1, 2.0, -5.0)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![
            Job::new(1, -1.0, 5.0),
            Job::new(1, 2.0, 5.0),
            Job::new(2, f64::NAN, 5.0),
        ];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_display_is_message() {
        let err = validate_jobs(&[]).unwrap_err().remove(0);
        assert_eq!(err.to_string(), "Instance has no jobs");
    }
}
