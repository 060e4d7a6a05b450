use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use es_schedule::es::{EsConfig, EsError, EsRunner, GenerationStats, Individual, Strategy};
use es_schedule::instance::{load_jobs, reference_jobs};
use es_schedule::kpi::SequenceKpi;

/// Sequence jobs on a single machine with an evolution strategy.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON job list; the built-in 15-job instance when omitted
    #[arg(long)]
    instance: Option<PathBuf>,
    /// Size of the initial population
    #[arg(long, default_value_t = 20)]
    population: usize,
    /// Number of parents (mu)
    #[arg(long, default_value_t = 4)]
    mu: usize,
    /// Number of offspring (lambda)
    #[arg(long, default_value_t = 12)]
    lambda: usize,
    /// Contestants per tournament
    #[arg(long, default_value_t = 2)]
    tournament: usize,
    /// Survivor selection: plus or comma
    #[arg(long, default_value_t = Strategy::Plus)]
    strategy: Strategy,
    /// Number of generations
    #[arg(long, default_value_t = 100)]
    iterations: usize,
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
    /// Print only the final result
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), EsError> {
    let mut config = EsConfig::default()
        .with_population_size(args.population)
        .with_mu(args.mu)
        .with_lambda(args.lambda)
        .with_tournament_size(args.tournament)
        .with_strategy(args.strategy)
        .with_iterations(args.iterations);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let jobs = match &args.instance {
        Some(path) => {
            info!(path = %path.display(), "loading instance");
            load_jobs(path)?
        }
        None => reference_jobs(),
    };

    let quiet = args.quiet;
    let mut report = |stats: &GenerationStats, ranked: &[Individual]| {
        if !quiet {
            print_generation(stats, ranked);
        }
    };
    let result = EsRunner::run_with_observer(&jobs, &config, &mut report)?;

    let kpi = SequenceKpi::calculate(result.best.jobs());
    println!("Best job sequence:");
    println!("{:?}", result.best.ids());
    println!("Total tardiness: {}", result.best_fitness);
    println!("Maximum lateness: {}", kpi.max_lateness);
    println!(
        "Makespan: {}  Tardy jobs: {}  On-time rate: {:.2}",
        kpi.makespan, kpi.tardy_jobs, kpi.on_time_rate
    );
    if result.best_so_far.fitness() < result.best_fitness {
        println!(
            "Best seen during the run: {} {:?}",
            result.best_so_far.fitness(),
            result.best_so_far.ids()
        );
    }
    Ok(())
}

fn print_generation(stats: &GenerationStats, ranked: &[Individual]) {
    let rule = "-".repeat(65);
    println!("Iteration {}:", stats.generation);
    for ind in ranked {
        println!("{} : {:?}", ind.fitness(), ind.ids());
    }
    println!("{rule}");
    println!("Average - Iteration {}: {}", stats.generation, stats.mean_fitness);
    println!("{rule}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_flag() {
        let args = Args::try_parse_from(["es-schedule", "--strategy", "comma"]).unwrap();
        assert_eq!(args.strategy, Strategy::Comma);

        let args = Args::try_parse_from(["es-schedule"]).unwrap();
        assert_eq!(args.strategy, Strategy::Plus);
    }

    #[test]
    fn test_unknown_strategy_is_usage_error() {
        let err = Args::try_parse_from(["es-schedule", "--strategy", "elitist"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
