//! Sequence quality metrics (KPIs).
//!
//! Computes standard single-machine performance indicators for a job
//! sequence. Only the total tardiness drives the search; the rest are
//! for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion time of the last job |
//! | Total Tardiness | Sum of max(0, C_j - d_j) |
//! | Maximum Lateness (L_max) | Largest C_j - d_j, may be negative |
//! | Maximum Tardiness | max(0, L_max) |
//! | Tardy Jobs | Count of jobs with C_j > d_j |
//! | On-Time Rate | Fraction meeting due dates |
//! | Mean Flow Time | Mean C_j (all jobs released at t=0) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::es::objective::completion_times;
use crate::models::Job;

/// Sequence performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceKpi {
    /// Completion time of the last job.
    pub makespan: f64,
    /// Sum of tardiness across all jobs.
    pub total_tardiness: f64,
    /// Maximum lateness; `0.0` for an empty sequence.
    pub max_lateness: f64,
    /// Maximum tardiness.
    pub max_tardiness: f64,
    /// Number of jobs completing after their due date.
    pub tardy_jobs: usize,
    /// Fraction of jobs completing on time (0.0..1.0).
    pub on_time_rate: f64,
    /// Mean completion time.
    pub mean_flow_time: f64,
}

impl SequenceKpi {
    /// Computes KPIs for jobs processed in the given order.
    pub fn calculate(jobs: &[Job]) -> Self {
        let completions = completion_times(jobs);

        let mut total_tardiness = 0.0;
        let mut max_lateness = f64::NEG_INFINITY;
        let mut tardy_jobs = 0;

        for (job, &completion) in jobs.iter().zip(&completions) {
            let lateness = job.lateness(completion);
            max_lateness = max_lateness.max(lateness);
            if lateness > 0.0 {
                total_tardiness += lateness;
                tardy_jobs += 1;
            }
        }

        if jobs.is_empty() {
            max_lateness = 0.0;
        }

        let on_time_rate = if jobs.is_empty() {
            1.0
        } else {
            (jobs.len() - tardy_jobs) as f64 / jobs.len() as f64
        };

        let mean_flow_time = if jobs.is_empty() {
            0.0
        } else {
            completions.iter().sum::<f64>() / jobs.len() as f64
        };

        Self {
            makespan: completions.last().copied().unwrap_or(0.0),
            total_tardiness,
            max_lateness,
            max_tardiness: max_lateness.max(0.0),
            tardy_jobs,
            on_time_rate,
            mean_flow_time,
        }
    }
}
