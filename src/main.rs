//! banana-evo CLI - Run the standard and modified GA from a JSON configuration.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use banana_evo::prelude::*;

/// Prints one status line per generation, like the live labels of a GUI
struct ConsoleSink {
    every: usize,
}

impl GenerationSink for ConsoleSink {
    fn report(&mut self, snapshot: &GenerationSnapshot<'_>) {
        let completed = snapshot.completed_generations();
        if completed % self.every != 0 && completed != 1 {
            return;
        }
        match snapshot.best_chromosome() {
            Some(best) => println!(
                "Generations completed ({}): {:>5}   {}   f = {:.6}",
                snapshot.variant,
                completed,
                best,
                snapshot.best_fitness()
            ),
            None => println!(
                "Generations completed ({}): {:>5}",
                snapshot.variant, completed
            ),
        }
    }
}

fn print_population(result: &EvolutionResult) {
    println!();
    println!("Final population ({}):", result.variant);
    println!("{:>6}  {:>16}  {:>12}  {:>12}", "No.", "Fitness", "Gene 1", "Gene 2");
    for row in result.final_population.rows() {
        println!(
            "{:>6}  {:>16.6}  {:>12.6}  {:>12.6}",
            row.number, row.fitness, row.gene1, row.gene2
        );
    }
}

fn print_result(result: &EvolutionResult, show_population: bool) {
    println!();
    println!("Best solution ({}):", result.variant);
    match result.best.chromosome() {
        Some(best) => println!("  {}", best),
        None => println!("  (none)"),
    }
    println!("Function value ({}):", result.variant);
    println!("  {:.6}", result.best_fitness());
    println!("{}", result.stats.summary());

    if show_population {
        print_population(result);
    }
}

fn print_example_config() {
    match RunConfig::default().to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error rendering example config: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("--example") {
        print_example_config();
        return;
    }
    if args.get(1).map(String::as_str) == Some("--help") {
        println!("Usage: {} [config.json]", args[0]);
        println!();
        println!("Minimize (x2 - x1^2)^2 + (1 - x1)^2 with a standard and a modified GA.");
        println!();
        println!("Arguments:");
        println!("  config.json  Path to run configuration (defaults are used when omitted)");
        println!("  --example    Print an example configuration");
        return;
    }

    let run_config = match args.get(1) {
        Some(path) => RunConfig::from_path(PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => RunConfig::default(),
    };

    let config = run_config.to_ga_config().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let mut rng = match run_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Banana function GA");
    println!("==================");
    println!("Function:          {}", BananaFunction::new().formula());
    println!("Mutation rate:     {}%", run_config.mutation_percent);
    println!("Chromosomes:       {}", config.chromosome_count());
    println!(
        "Gene bounds:       [{}, {}]",
        config.bounds().min,
        config.bounds().max
    );
    println!("Generations:       {}", config.generations());
    println!("Elites (modified): {}", config.elite_count());
    println!();

    let mut sink = ConsoleSink {
        every: (config.generations() / 10).max(1),
    };

    let outcome = match run_config.variant {
        VariantChoice::Both => compare_variants(&config, &mut sink, &mut rng).map(|comparison| {
            print_result(&comparison.standard, run_config.show_population);
            print_result(&comparison.modified, run_config.show_population);
            match comparison.winner() {
                Some(variant) => println!("Lower best fitness: {}", variant),
                None => println!("Both variants reached the same best fitness"),
            }
        }),
        choice => choice.variants().into_iter().try_for_each(|variant| {
            EvolutionDriver::new(config, variant, &mut sink)
                .run(&mut rng)
                .map(|result| print_result(&result, run_config.show_population))
        }),
    };

    if let Err(e) = outcome {
        eprintln!("Run failed: {}", e);
        std::process::exit(1);
    }
}
