// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use adder_search::report::{CircuitListing, Verification};
use adder_search::search::{config, search_circuits, SearchConfig};
use clap::Parser;

/// Exhaustive search for minimal NOT/AND/OR/XOR circuits computing a 2-bit adder.
#[derive(Parser, Debug)]
struct Args {
    /// Smallest gate budget to try.
    #[arg(long, default_value_t = config::DEFAULT_MIN_BUDGET)]
    min_gates: usize,

    /// Gate budgets are tried up to, but not including, this value.
    #[arg(long, default_value_t = config::DEFAULT_MAX_BUDGET)]
    max_gates: usize,

    /// Stop after this many circuits have been found.
    #[arg(long, default_value_t = config::DEFAULT_TARGET_COUNT)]
    max_found: usize,

    /// Print the verification table for every circuit, not just the first.
    #[arg(long, default_value_t = false)]
    verify_all: bool,
}

fn main() {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let config = match SearchConfig::new(args.min_gates, args.max_gates, args.max_found) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    println!("Optimized 2-bit adder circuit search");
    println!("Finding minimal gate implementations...");

    let outcome = search_circuits(&config);
    if outcome.is_empty() {
        println!("No circuits found within search limits");
    }
    for (i, record) in outcome.circuits.iter().enumerate() {
        println!();
        print!("{}", CircuitListing::new(i + 1, record));
        if i == 0 || args.verify_all {
            println!();
            print!("{}", Verification::new(record));
        }
    }
    println!();
    println!("Total gate evaluations: {}", outcome.evaluations());
}
