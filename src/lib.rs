//! Single-machine job sequencing with an evolution strategy.
//!
//! Sequences a fixed set of jobs on one machine to minimize total
//! tardiness, using a (μ+λ) or (μ,λ) evolution strategy over job
//! permutations. Meant for small-to-medium instances where an
//! approximate, steadily improving sequence is good enough.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`
//! - **`es`**: The evolution strategy: `Individual`, operators,
//!   `EsConfig`, `Evolution`, `EsRunner`
//! - **`validation`**: Input integrity checks (duplicate IDs, invalid times)
//! - **`instance`**: Reference instance and JSON loading
//! - **`kpi`**: Sequence performance indicators for reporting
//!
//! # Example
//!
//! ```
//! use es_schedule::es::{EsConfig, EsRunner};
//! use es_schedule::instance::reference_jobs;
//!
//! let jobs = reference_jobs();
//! let config = EsConfig::default().with_iterations(10).with_seed(7);
//! let result = EsRunner::run(&jobs, &config).unwrap();
//! assert!(result.best.is_permutation_of(&jobs));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"

pub mod es;
pub mod instance;
pub mod kpi;
pub mod models;
pub mod validation;
