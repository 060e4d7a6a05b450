//! Evolution strategy operators.
//!
//! One generation applies them in this order:
//!
//! 1. [`tournament_selection`] picks μ parents
//! 2. [`recombination`] breeds λ offspring with [`order_crossover`]
//! 3. [`swap_mutation`] perturbs every offspring in place
//! 4. [`environmental_selection`] keeps the μ best survivors
//!
//! All randomness comes from the caller's `rng`, so a fixed seed gives a
//! reproducible generation.
//!
//! # Usage
//!
//! ```
//! use es_schedule::es::{Individual, order_crossover, cut_points};
//! use es_schedule::instance::reference_jobs;
//!
//! assert_eq!(cut_points(15), (3, 10));
//!
//! let jobs = reference_jobs();
//! let p1 = Individual::new(jobs.clone());
//! let p2 = Individual::new(jobs.iter().rev().copied().collect());
//! let child = order_crossover(&p1, &p2);
//! assert!(child.is_permutation_of(&jobs));
//! ```
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Beyer & Schwefel (2002), "Evolution strategies: A comprehensive introduction"

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index::{self, IndexVec};

use super::{EsError, Individual, Strategy};
use crate::models::Job;

// ======================== Parent selection ========================

/// Tournament selection with `k` contestants per draw.
///
/// Runs `number` independent tournaments over the full population. Each
/// draws `k` distinct individuals and keeps the one with the lowest
/// fitness; on ties the first sampled contestant wins. The same
/// individual may win several tournaments.
///
/// # Errors
/// [`EsError::InvalidSample`] if `k` exceeds the population size,
/// [`EsError::InvalidConfig`] if `k` is zero.
pub fn tournament_selection<R: Rng>(
    population: &[Individual],
    number: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Individual>, EsError> {
    if k == 0 {
        return Err(EsError::InvalidConfig("tournament size must be at least 1".into()));
    }

    let mut parents = Vec::with_capacity(number);
    for _ in 0..number {
        let contestants = sample_distinct(rng, population.len(), k)?;
        let winner = contestants
            .iter()
            .map(|i| &population[i])
            .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
            .ok_or(EsError::InvalidSample {
                requested: k,
                available: population.len(),
            })?;
        parents.push(winner.clone());
    }
    Ok(parents)
}

// ======================== Recombination ========================

/// Fixed order-crossover cut points for a sequence of length `n`:
/// `(⌊2n/9⌋, ⌊6n/9⌋)`.
pub fn cut_points(n: usize) -> (usize, usize) {
    (n * 2 / 9, n * 6 / 9)
}

/// Order Crossover (OX) with fixed cut points.
///
/// Keeps `p1`'s middle segment `[cut1, cut2)` in place and fills the
/// remaining positions with the other jobs in `p2`'s order, reading `p2`
/// from `cut2` and wrapping around, writing from `cut2` and wrapping
/// around.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn order_crossover(p1: &Individual, p2: &Individual) -> Individual {
    Individual::new(ox_build_child(p1.jobs(), p2.jobs()))
}

/// Build one OX child: middle segment from `template`, the rest from `donor`.
fn ox_build_child(template: &[Job], donor: &[Job]) -> Vec<Job> {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");

    let (cut1, cut2) = cut_points(n);
    let mid = &template[cut1..cut2];
    let in_mid: HashSet<u32> = mid.iter().map(|j| j.id).collect();

    // Donor rotated to start at cut2, minus the jobs already in the segment
    let filler: Vec<Job> = donor[cut2..]
        .iter()
        .chain(&donor[..cut2])
        .filter(|j| !in_mid.contains(&j.id))
        .copied()
        .collect();

    // filler.len() == n - (cut2 - cut1) >= cut1.
    // With cut1 == 0 the child is mid ++ filler, not filler ++ mid.
    let split = filler.len() - cut1;

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&filler[split..]);
    child.extend_from_slice(mid);
    child.extend_from_slice(&filler[..split]);
    child
}

/// Breeds `number` offspring from random parent pairs.
///
/// Each pair (two distinct parents, chosen uniformly) yields
/// `OX(p1, p2)` and, while offspring are still missing, `OX(p2, p1)`.
///
/// # Errors
/// [`EsError::InvalidSample`] if fewer than two parents are given.
pub fn recombination<R: Rng>(
    parents: &[Individual],
    number: usize,
    rng: &mut R,
) -> Result<Vec<Individual>, EsError> {
    let mut offspring = Vec::with_capacity(number);

    while offspring.len() < number {
        let pair = sample_distinct(rng, parents.len(), 2)?;
        let p1 = &parents[pair.index(0)];
        let p2 = &parents[pair.index(1)];

        offspring.push(order_crossover(p1, p2));
        if offspring.len() < number {
            offspring.push(order_crossover(p2, p1));
        }
    }

    Ok(offspring)
}

// ======================== Mutation ========================

/// Swap mutation: exchanges two distinct random positions in every
/// offspring, in place.
///
/// # Errors
/// [`EsError::InvalidSample`] if an offspring has fewer than two jobs.
pub fn swap_mutation<R: Rng>(offspring: &mut [Individual], rng: &mut R) -> Result<(), EsError> {
    for child in offspring.iter_mut() {
        let positions = sample_distinct(rng, child.len(), 2)?;
        child.swap(positions.index(0), positions.index(1));
    }
    Ok(())
}

// ======================== Survivor selection ========================

/// Keeps the `number` best individuals, sorted by ascending fitness.
///
/// The candidate pool is `offspring` followed by `parents` under
/// [`Strategy::Plus`], or `offspring` alone under [`Strategy::Comma`].
/// The sort is stable, so equal fitness keeps pool order.
///
/// # Errors
/// [`EsError::InsufficientCandidates`] if the pool is smaller than `number`.
pub fn environmental_selection(
    offspring: Vec<Individual>,
    parents: &[Individual],
    number: usize,
    strategy: Strategy,
) -> Result<Vec<Individual>, EsError> {
    let mut pool = offspring;
    match strategy {
        Strategy::Plus => pool.extend_from_slice(parents),
        Strategy::Comma => {}
    }

    if pool.len() < number {
        return Err(EsError::InsufficientCandidates {
            requested: number,
            available: pool.len(),
        });
    }

    pool.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
    pool.truncate(number);
    Ok(pool)
}

// ======================== Helpers ========================

/// Samples `amount` distinct indices from `0..length`.
fn sample_distinct<R: Rng>(rng: &mut R, length: usize, amount: usize) -> Result<IndexVec, EsError> {
    if amount > length {
        return Err(EsError::InvalidSample {
            requested: amount,
            available: length,
        });
    }
    Ok(index::sample(rng, length, amount))
}
