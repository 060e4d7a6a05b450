//! Fitness evaluation for single-machine sequences.
//!
//! The objective is the **sum of tardiness** over all jobs,
//! `Σ max(0, C_j - d_j)`, even though the problem is traditionally stated
//! as `1||L_max`. Results stay comparable with earlier runs of this
//! search; the true maximum lateness is reported separately by
//! [`crate::kpi::SequenceKpi`].

use crate::models::Job;

/// Completion time of every job when processed in the given order.
pub fn completion_times(jobs: &[Job]) -> Vec<f64> {
    let mut t = 0.0;
    jobs.iter()
        .map(|j| {
            t += j.process_time;
            t
        })
        .collect()
}

/// Sum of tardiness of a sequence. Lower is better; never negative.
pub fn total_tardiness(jobs: &[Job]) -> f64 {
    let mut t = 0.0;
    let mut tardiness = 0.0;
    for job in jobs {
        t += job.process_time;
        tardiness += job.tardiness(t);
    }
    tardiness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::reference_jobs;

    #[test]
    fn test_completion_times() {
        let jobs = vec![Job::new(1, 4.0, 6.0), Job::new(2, 2.0, 3.0), Job::new(3, 1.0, 9.0)];
        assert_eq!(completion_times(&jobs), vec![4.0, 6.0, 7.0]);
    }

    #[test]
    fn test_total_tardiness_sums_not_max() {
        // C = 4, 8, 13 against d = 6, 8, 10 → 0 + 0 + 3
        let jobs = vec![Job::new(1, 4.0, 6.0), Job::new(2, 4.0, 8.0), Job::new(3, 5.0, 10.0)];
        assert_eq!(total_tardiness(&jobs), 3.0);

        // C = 5, 9, 13 against d = 10, 8, 6 → 0 + 1 + 7
        let reversed: Vec<Job> = jobs.iter().rev().copied().collect();
        assert_eq!(total_tardiness(&reversed), 8.0);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(total_tardiness(&[]), 0.0);
        assert!(completion_times(&[]).is_empty());
    }

    #[test]
    fn test_early_jobs_do_not_offset_tardy_ones() {
        let jobs = vec![Job::new(1, 1.0, 100.0), Job::new(2, 10.0, 5.0)];
        assert_eq!(total_tardiness(&jobs), 6.0);
    }

    #[test]
    fn test_reference_identity_order() {
        // Id order: C = 4,8,13,15,16,19,23,30,35,38,40,44,50,53,55
        let expected = 0.0 + 0.0 + 3.0 + 0.0 + 12.0 + 9.0 + 6.0 + 10.0 + 5.0 + 8.0 + 20.0
            + 0.0 + 10.0 + 0.0 + 15.0;
        assert_eq!(total_tardiness(&reference_jobs()), expected);
    }
}
