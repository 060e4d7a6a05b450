//! Scheduling domain models.
//!
//! The single-machine problem needs only one entity: the [`Job`].
//! A sequence of jobs is a plain slice; the evolutionary engine wraps
//! it in [`crate::es::Individual`] to attach fitness.
//!
//! # Notation
//!
//! | Symbol | Field | Meaning |
//! |--------|-------|---------|
//! | p_j | `process_time` | Processing time |
//! | d_j | `due_date` | Due date |
//! | C_j | (derived) | Completion time in a sequence |

mod job;

pub use job::{Job, job_ids};
