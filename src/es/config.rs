//! Evolution strategy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EsError;

/// How the next generation is formed from offspring and parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// (μ+λ): survivors are drawn from offspring and parents.
    Plus,
    /// (μ,λ): survivors are drawn from offspring only.
    Comma,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Plus => f.write_str("plus"),
            Strategy::Comma => f.write_str("comma"),
        }
    }
}

impl FromStr for Strategy {
    type Err = EsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plus" | "+" => Ok(Strategy::Plus),
            "comma" | "," => Ok(Strategy::Comma),
            other => Err(EsError::InvalidConfig(format!(
                "unknown strategy '{other}' (expected 'plus' or 'comma')"
            ))),
        }
    }
}

/// Configuration for a single evolution strategy run.
///
/// The defaults reproduce the reference (4+12)-ES over 100 generations.
///
/// # Examples
///
/// ```
/// use es_schedule::es::{EsConfig, Strategy};
///
/// let config = EsConfig::default()
///     .with_mu(5)
///     .with_lambda(20)
///     .with_strategy(Strategy::Comma)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EsConfig {
    /// Size of the randomly generated initial population.
    pub population_size: usize,

    /// μ: number of parents, and of survivors per generation.
    pub mu: usize,

    /// λ: number of offspring per generation.
    pub lambda: usize,

    /// Individuals compared in each tournament.
    pub tournament_size: usize,

    /// Plus or comma survivor selection.
    pub strategy: Strategy,

    /// Number of generations to run.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mu: 4,
            lambda: 12,
            tournament_size: 2,
            strategy: Strategy::Plus,
            iterations: 100,
            seed: None,
        }
    }
}

impl EsConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mu(mut self, mu: usize) -> Self {
        self.mu = mu;
        self
    }

    pub fn with_lambda(mut self, lambda: usize) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The tournament must fit in both the initial population and the μ
    /// survivors every later generation draws from. Limits that depend
    /// on the instance (swap positions vs. job count) are reported by the
    /// operators themselves.
    pub fn validate(&self) -> Result<(), EsError> {
        if self.mu < 2 {
            return Err(EsError::InvalidConfig(format!(
                "mu must be at least 2, got {}",
                self.mu
            )));
        }
        if self.lambda < 1 {
            return Err(EsError::InvalidConfig(format!(
                "lambda must be at least 1, got {}",
                self.lambda
            )));
        }
        if self.tournament_size == 0 {
            return Err(EsError::InvalidConfig("tournament_size must be at least 1".into()));
        }
        if self.tournament_size > self.mu || self.tournament_size > self.population_size {
            return Err(EsError::InvalidConfig(format!(
                "tournament_size {} exceeds mu={} or population_size={}",
                self.tournament_size, self.mu, self.population_size
            )));
        }
        if self.iterations == 0 {
            return Err(EsError::InvalidConfig("iterations must be at least 1".into()));
        }
        if self.strategy == Strategy::Comma && self.lambda < self.mu {
            return Err(EsError::InvalidConfig(format!(
                "comma selection needs lambda >= mu, got lambda={} mu={}",
                self.lambda, self.mu
            )));
        }
        Ok(())
    }
}
