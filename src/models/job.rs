//! Job model.
//!
//! A job is a single unit of work processed without interruption on the
//! one machine. Jobs are immutable once created; sequencing only changes
//! their order.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A job to be sequenced on the single machine.
///
/// # Time Representation
/// Times are plain numbers in a consumer-defined unit relative to t=0,
/// the moment the machine becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier within an instance.
    pub id: u32,
    /// Processing time (non-negative).
    pub process_time: f64,
    /// Due date. Completing later than this makes the job tardy.
    pub due_date: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: u32, process_time: f64, due_date: f64) -> Self {
        Self {
            id,
            process_time,
            due_date,
        }
    }

    /// Lateness of this job if it completes at `completion`.
    ///
    /// Negative when the job finishes early.
    pub fn lateness(&self, completion: f64) -> f64 {
        completion - self.due_date
    }

    /// Tardiness of this job if it completes at `completion`: `max(0, C - d)`.
    pub fn tardiness(&self, completion: f64) -> f64 {
        self.lateness(completion).max(0.0)
    }
}

/// Returns the job ids of a sequence, in order.
pub fn job_ids(jobs: &[Job]) -> Vec<u32> {
    jobs.iter().map(|j| j.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new(7, 4.0, 17.0);
        assert_eq!(job.id, 7);
        assert_eq!(job.process_time, 4.0);
        assert_eq!(job.due_date, 17.0);
    }

    #[test]
    fn test_lateness_and_tardiness() {
        let job = Job::new(1, 4.0, 6.0);
        assert_eq!(job.lateness(10.0), 4.0);
        assert_eq!(job.tardiness(10.0), 4.0);
        assert_eq!(job.lateness(4.0), -2.0);
        assert_eq!(job.tardiness(4.0), 0.0);
    }

    #[test]
    fn test_job_ids() {
        let jobs = vec![Job::new(3, 1.0, 1.0), Job::new(1, 1.0, 1.0)];
        assert_eq!(job_ids(&jobs), vec![3, 1]);
    }

    #[test]
    fn test_job_serde() {
        let job = Job::new(2, 4.0, 8.0);
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(job, back);

        let parsed: Job =
            serde_json::from_str(r#"{"id": 5, "process_time": 1, "due_date": 4}"#).unwrap();
        assert_eq!(parsed, Job::new(5, 1.0, 4.0));
    }
}
