//! Evolution strategy for single-machine sequencing.
//!
//! Implements a (μ+λ) / (μ,λ) evolution strategy over job permutations.
//!
//! # Encoding
//!
//! - **Individual**: the job sequence itself, a permutation of all jobs.
//!   Fitness is the sum of tardiness of the sequence (lower is better).
//!
//! # Generation cycle
//!
//! tournament selection (μ parents) → order crossover (λ offspring) →
//! swap mutation → plus/comma survivor selection (μ survivors)
//!
//! # Submodules
//!
//! - [`operators`]: Selection, crossover, and mutation operators
//! - [`objective`]: Fitness evaluation
//!
//! # Reference
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"

mod config;
mod error;
mod individual;
pub mod objective;
pub mod operators;
mod runner;

pub use config::{EsConfig, Strategy};
pub use error::EsError;
pub use individual::{Individual, initial_population, mean_fitness};
pub use operators::{
    cut_points, environmental_selection, order_crossover, recombination, swap_mutation,
    tournament_selection,
};
pub use runner::{
    EsResult, EsRunner, Evolution, GenerationObserver, GenerationStats, NoObserver,
};
