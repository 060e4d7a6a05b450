//! Generational control loop.
//!
//! [`Evolution`] holds the state of one run and advances it one
//! generation at a time; [`EsRunner`] drives a complete run from an
//! [`EsConfig`].
//!
//! # Lifecycle
//!
//! ```text
//! Evolution::new ──► step ──► step ──► … ──► is_terminated() ──► finish
//!  (validate,        (tournament → OX → swap → plus/comma)
//!   init population)
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::individual::{initial_population, mean_fitness};
use super::operators::{environmental_selection, recombination, swap_mutation, tournament_selection};
use super::{EsConfig, EsError, Individual};
use crate::models::Job;
use crate::validation::validate_jobs;

/// Summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Fitness of the best survivor of this generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation's survivors.
    pub mean_fitness: f64,
    /// Best fitness among the parents selected this generation.
    pub parent_best_fitness: f64,
    /// Best fitness seen so far, including the initial population.
    pub best_so_far: f64,
}

/// Receives per-generation telemetry.
///
/// `ranked` is the surviving population, best first.
pub trait GenerationObserver {
    fn on_generation(&mut self, stats: &GenerationStats, ranked: &[Individual]);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationStats, &[Individual]),
{
    fn on_generation(&mut self, stats: &GenerationStats, ranked: &[Individual]) {
        self(stats, ranked)
    }
}

/// Observer that ignores all telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl GenerationObserver for NoObserver {
    fn on_generation(&mut self, _stats: &GenerationStats, _ranked: &[Individual]) {}
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct EsResult {
    /// Best-ranked individual of the final generation.
    pub best: Individual,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Best individual seen at any point of the run.
    pub best_so_far: Individual,
    /// Number of generations run.
    pub generations: usize,
    /// Statistics of every generation, in order.
    pub history: Vec<GenerationStats>,
}

/// State of an evolution strategy run.
#[derive(Debug, Clone)]
pub struct Evolution {
    config: EsConfig,
    population: Vec<Individual>,
    generation: usize,
    best_so_far: Option<Individual>,
    history: Vec<GenerationStats>,
}

impl Evolution {
    /// Validates the configuration and the instance, then builds the
    /// initial population.
    ///
    /// # Errors
    /// [`EsError::InvalidConfig`] or [`EsError::InvalidInstance`]; no
    /// generation has run when either is returned.
    pub fn new<R: Rng>(jobs: &[Job], config: &EsConfig, rng: &mut R) -> Result<Self, EsError> {
        config.validate()?;
        validate_jobs(jobs).map_err(EsError::InvalidInstance)?;

        let population = initial_population(jobs, config.population_size, rng);
        let best_so_far = best_of(&population).cloned();

        info!(
            jobs = jobs.len(),
            population = config.population_size,
            mu = config.mu,
            lambda = config.lambda,
            strategy = %config.strategy,
            iterations = config.iterations,
            "evolution strategy initialized"
        );

        Ok(Self {
            config: config.clone(),
            population,
            generation: 0,
            best_so_far,
            history: Vec::with_capacity(config.iterations),
        })
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the configured number of generations has been run.
    pub fn is_terminated(&self) -> bool {
        self.generation >= self.config.iterations
    }

    /// Current population. Ranked best first once a generation has run.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual seen so far.
    pub fn best_so_far(&self) -> Option<&Individual> {
        self.best_so_far.as_ref()
    }

    /// Statistics of the generations run so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Runs one generation.
    ///
    /// # Errors
    /// [`EsError::InvalidConfig`] once the configured number of generations
    /// has run; operator errors otherwise.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<GenerationStats, EsError> {
        if self.is_terminated() {
            return Err(EsError::InvalidConfig(format!(
                "all {} generations have already run",
                self.config.iterations
            )));
        }
        let config = &self.config;

        let parents =
            tournament_selection(&self.population, config.mu, config.tournament_size, rng)?;
        let mut offspring = recombination(&parents, config.lambda, rng)?;
        swap_mutation(&mut offspring, rng)?;
        let ranked = environmental_selection(offspring, &parents, config.mu, config.strategy)?;

        self.generation += 1;

        if let Some(head) = ranked.first() {
            let improved = self
                .best_so_far
                .as_ref()
                .is_none_or(|best| head.fitness() < best.fitness());
            if improved {
                self.best_so_far = Some(head.clone());
            }
        }

        let stats = GenerationStats {
            generation: self.generation,
            best_fitness: ranked.first().map_or(f64::INFINITY, Individual::fitness),
            mean_fitness: mean_fitness(&ranked),
            parent_best_fitness: best_of(&parents).map_or(f64::INFINITY, Individual::fitness),
            best_so_far: self
                .best_so_far
                .as_ref()
                .map_or(f64::INFINITY, Individual::fitness),
        };

        debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            best_so_far = stats.best_so_far,
            "generation complete"
        );
        for ind in &ranked {
            trace!(fitness = ind.fitness(), sequence = ?ind.ids(), "survivor");
        }

        self.population = ranked;
        self.history.push(stats);
        Ok(stats)
    }

    /// Runs the remaining generations and returns the result.
    pub fn run<R, O>(mut self, rng: &mut R, observer: &mut O) -> Result<EsResult, EsError>
    where
        R: Rng,
        O: GenerationObserver + ?Sized,
    {
        while !self.is_terminated() {
            let stats = self.step(rng)?;
            observer.on_generation(&stats, &self.population);
        }
        self.finish()
    }

    /// Reports the best-ranked individual of the last generation.
    ///
    /// # Errors
    /// [`EsError::InvalidConfig`] if no generation has been run yet.
    pub fn finish(self) -> Result<EsResult, EsError> {
        if self.generation == 0 {
            return Err(EsError::InvalidConfig("no generation has been run".into()));
        }
        let best = self
            .population
            .first()
            .cloned()
            .ok_or(EsError::InsufficientCandidates {
                requested: 1,
                available: 0,
            })?;
        let best_so_far = self.best_so_far.unwrap_or_else(|| best.clone());

        info!(
            generations = self.generation,
            best = best.fitness(),
            best_so_far = best_so_far.fitness(),
            "evolution strategy finished"
        );

        Ok(EsResult {
            best_fitness: best.fitness(),
            best,
            best_so_far,
            generations: self.generation,
            history: self.history,
        })
    }
}

/// Convenience entry points that own the random generator.
pub struct EsRunner;

impl EsRunner {
    /// Runs the evolution strategy on `jobs`.
    ///
    /// Seeds from `config.seed` when set, otherwise from the OS.
    pub fn run(jobs: &[Job], config: &EsConfig) -> Result<EsResult, EsError> {
        Self::run_with_observer(jobs, config, &mut NoObserver)
    }

    /// Like [`EsRunner::run`], reporting every generation to `observer`.
    pub fn run_with_observer<O>(
        jobs: &[Job],
        config: &EsConfig,
        observer: &mut O,
    ) -> Result<EsResult, EsError>
    where
        O: GenerationObserver + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Evolution::new(jobs, config, &mut rng)?.run(&mut rng, observer)
    }
}

fn best_of(population: &[Individual]) -> Option<&Individual> {
    population
        .iter()
        .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
}
