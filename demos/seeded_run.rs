//! Seeded Modified GA Run
//!
//! This example runs the modified variant with a fixed seed, prints a status
//! line every ten generations through a closure sink, and shows the final
//! population table.

use banana_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Seeded Modified GA Run ===\n");

    let mut rng = StdRng::seed_from_u64(42);

    let config = GaConfig::new(0.2, 60, 25, Bounds::symmetric(10.0))?;

    let sink = FnSink::new(|snapshot: &GenerationSnapshot<'_>| {
        let completed = snapshot.completed_generations();
        if completed % 10 == 0 {
            if let Some(best) = snapshot.best_chromosome() {
                println!(
                    "Generations completed: {:>3}   {}   f = {:.6}",
                    completed,
                    best,
                    snapshot.best_fitness()
                );
            }
        }
    });

    let result = EvolutionDriver::new(config, Variant::Modified, sink).run(&mut rng)?;

    println!("\nOptimization complete!");
    println!("  Best fitness: {:.6}", result.best_fitness());
    println!("  Generations:  {}", result.generations);
    println!("  Evaluations:  {}", result.evaluations);
    if let Some(best) = result.best.chromosome() {
        let distance = best.distance(&BananaFunction::new().optimal_solution());
        println!("  Best:         {}", best);
        println!("  Distance from optimum: {:.6}", distance);
    }

    println!("\nFinal population:");
    for row in result.final_population.rows() {
        println!(
            "  {:>3}  {:>14.6}  {:>10.6}  {:>10.6}",
            row.number, row.fitness, row.gene1, row.gene2
        );
    }

    println!("\n{}", result.stats.summary());

    Ok(())
}
