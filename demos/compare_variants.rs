//! Standard vs. Modified GA
//!
//! This example runs both variants on the banana function with the same
//! parameters, repeated over several seeds, and reports how often the
//! elitist tournament variant ends with the lower best fitness.

use banana_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Standard vs. Modified GA ===\n");

    const TRIALS: u64 = 10;

    // 50 chromosomes, 100 generations, 50% mutation, genes in [-46, 46]
    let config = GaConfig::default();
    let objective = BananaFunction::new();

    println!("Function: {}", objective.formula());
    println!("Elites kept by the modified variant: {}\n", config.elite_count());

    let mut modified_wins = 0;
    let mut standard_wins = 0;

    for seed in 0..TRIALS {
        let mut rng = StdRng::seed_from_u64(seed);
        let comparison = compare_variants(&config, &mut NullSink, &mut rng)?;

        println!(
            "  seed {:>2}: standard = {:>12.6}  modified = {:>12.6}",
            seed,
            comparison.standard.best_fitness(),
            comparison.modified.best_fitness()
        );

        match comparison.winner() {
            Some(Variant::Modified) => modified_wins += 1,
            Some(Variant::Standard) => standard_wins += 1,
            None => {}
        }
    }

    println!("\nModified won {} of {} trials", modified_wins, TRIALS);
    println!("Standard won {} of {} trials", standard_wins, TRIALS);

    let optimum = objective.optimal_solution();
    println!(
        "\nKnown optimum: {}  f = {:.6}",
        optimum,
        objective.optimal_fitness()
    );

    Ok(())
}
