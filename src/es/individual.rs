//! Permutation individual for the evolution strategy.
//!
//! # Encoding
//!
//! An individual is the job sequence itself: a permutation of the full
//! job set, processed front to back on the machine. Every operator in
//! [`super::operators`] keeps this permutation property.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::objective::total_tardiness;
use crate::models::{Job, job_ids};

/// A candidate job sequence with its cached fitness.
///
/// Lower fitness = better sequence (minimization convention).
/// The sequence is private so the cache is recomputed on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    jobs: Vec<Job>,
    fitness: f64,
}

impl Individual {
    /// Wraps a job sequence and evaluates it.
    pub fn new(jobs: Vec<Job>) -> Self {
        let fitness = total_tardiness(&jobs);
        Self { jobs, fitness }
    }

    /// Creates a uniformly random ordering of `jobs`.
    pub fn random<R: Rng>(jobs: &[Job], rng: &mut R) -> Self {
        let mut order = jobs.to_vec();
        order.shuffle(rng);
        Self::new(order)
    }

    /// Fitness value (sum of tardiness).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The job sequence.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Job ids in sequence order.
    pub fn ids(&self) -> Vec<u32> {
        job_ids(&self.jobs)
    }

    /// Number of jobs in the sequence.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Exchanges the jobs at positions `i` and `j` and re-evaluates.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.jobs.swap(i, j);
        self.fitness = total_tardiness(&self.jobs);
    }

    /// Whether this sequence is a permutation of `jobs` (by id).
    pub fn is_permutation_of(&self, jobs: &[Job]) -> bool {
        if self.jobs.len() != jobs.len() {
            return false;
        }
        let own: HashSet<u32> = self.jobs.iter().map(|j| j.id).collect();
        own.len() == self.jobs.len() && jobs.iter().all(|j| own.contains(&j.id))
    }
}

/// Builds the initial population: `size` independent random shuffles.
///
/// Identical sequences may occur more than once.
pub fn initial_population<R: Rng>(jobs: &[Job], size: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| Individual::random(jobs, rng)).collect()
}

/// Mean fitness of a population, `0.0` when empty.
pub fn mean_fitness(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Individual::fitness).sum::<f64>() / population.len() as f64
}
