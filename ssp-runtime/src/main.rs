use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use rand::{rngs::SmallRng, SeedableRng};
use ssp_challenge::Population;
use statrs::statistics::Statistics;
use std::{fs, path::PathBuf, time::Instant};

fn cli() -> Command {
    Command::new("ssp-runtime")
        .about("Generates supplier populations and computes best-weight selections")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates a population")
                .arg(
                    arg!(<NUM_SUPPLIERS> "Number of suppliers")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random number generator")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the population will be saved to this file path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Generates a population and searches it for the best-weight selection")
                .arg(
                    arg!(<NUM_SUPPLIERS> "Number of suppliers")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random number generator")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--verify "Replay the acceptance rule against the result")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("bench")
                .about("Times the search over a sweep of population sizes and fits a quadratic model")
                .arg(
                    arg!(--repetitions [REPETITIONS] "Populations generated and searched per sweep entry")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--sweep [SWEEP] "Comma separated population sizes")
                        .default_value("8,12,16,18,20,22,24,26"),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the random number generator")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("NUM_SUPPLIERS").unwrap(),
            sub_m.get_one::<u64>("seed").copied(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("solve", sub_m)) => solve(
            *sub_m.get_one::<usize>("NUM_SUPPLIERS").unwrap(),
            sub_m.get_one::<u64>("seed").copied(),
            *sub_m.get_one::<bool>("verify").unwrap(),
        ),
        Some(("bench", sub_m)) => bench(
            *sub_m.get_one::<usize>("repetitions").unwrap(),
            sub_m.get_one::<String>("sweep").unwrap().clone(),
            sub_m.get_one::<u64>("seed").copied(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn generate(num_suppliers: usize, seed: Option<u64>, output: Option<PathBuf>) -> Result<()> {
    let mut rng = make_rng(seed);
    let population = Population::generate(num_suppliers, &mut rng)?;
    match output {
        Some(path) => {
            fs::write(&path, serde_json::to_string_pretty(&population)?)?;
            println!("Population saved to {:?}", path);
        }
        None => {
            for supplier in &population.suppliers {
                println!();
                println!("{}", supplier);
            }
        }
    }
    Ok(())
}

fn solve(num_suppliers: usize, seed: Option<u64>, verify: bool) -> Result<()> {
    let mut rng = make_rng(seed);
    let population = Population::generate(num_suppliers, &mut rng)?;
    let selection = ssp_algorithms::greedy_seeded::solve(&population)?;
    println!("best weight: {}", selection.total_weight);
    println!("best set: {:?}", selection.labels);
    if verify {
        population.verify_selection(&selection)?;
        println!("Selection verified");
    }
    Ok(())
}

fn bench(repetitions: usize, sweep: String, seed: Option<u64>) -> Result<()> {
    let sweep = sweep
        .split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("Invalid sweep entry '{}': {}", entry, e))
        })
        .collect::<Result<Vec<usize>>>()?;
    if sweep.is_empty() {
        return Err(anyhow!("Sweep must contain at least one population size"));
    }

    let mut rng = make_rng(seed);
    let mut mean_times = Vec::with_capacity(sweep.len());
    for &num_suppliers in &sweep {
        let mut durations = Vec::with_capacity(repetitions);
        for _ in 0..repetitions {
            let population = Population::generate(num_suppliers, &mut rng)?;
            let start = Instant::now();
            ssp_algorithms::greedy_seeded::solve(&population)?;
            durations.push(start.elapsed().as_secs_f64());
        }
        mean_times.push(durations.iter().mean());
    }

    for (&num_suppliers, &mean_time) in sweep.iter().zip(&mean_times) {
        print!("({}, {:.5}) ", num_suppliers, mean_time);
    }
    println!();
    println!("quadratic fit: t = {:e} * n^2", fit_quadratic(&sweep, &mean_times));
    Ok(())
}

/// Least-squares fit of `t = a * n^2` over the measured sweep.
fn fit_quadratic(sweep: &[usize], mean_times: &[f64]) -> f64 {
    let numerator: f64 = sweep
        .iter()
        .zip(mean_times)
        .map(|(&n, &t)| t * (n * n) as f64)
        .sum();
    let denominator: f64 = sweep.iter().map(|&n| ((n * n) * (n * n)) as f64).sum();
    numerator / denominator
}
