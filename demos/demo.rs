//! Walk through every training module without the HTTP layer.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `poker_trainer` works end to end:
//!
//! 1. **One scenario per module** with a fixed seed, so the output is
//!    deterministic and reproducible.
//! 2. **Seat overrides** for the preflop drills, including what happens to
//!    an unrecognized seat.
//! 3. **Feedback grading** for a few sample actions against the same spot,
//!    showing which tips fire.

use rand::rngs::StdRng;
use rand::SeedableRng;

use poker_trainer::{feedback, generate_scenario, Module};

fn print_scenario(rng: &mut StdRng, module: Module, opener: Option<&str>, defender: Option<&str>) {
    let scenario = generate_scenario(rng, module, opener, defender);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}", scenario.module, scenario.id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for line in scenario.text.lines() {
        println!("  {line}");
    }
    println!();
}

fn main() {
    // Seeded so every run prints the same drills.
    let mut rng = StdRng::seed_from_u64(42);

    println!("=== One scenario per module ===\n");
    for module in Module::all() {
        print_scenario(&mut rng, module, None, None);
    }

    println!("=== Seat overrides ===\n");
    print_scenario(&mut rng, Module::PreflopOpen, Some("BTN"), None);
    print_scenario(&mut rng, Module::PreflopThreeBet, Some("SB"), Some("BTN"));
    // "MID" is not a recognized seat, so a random one is substituted.
    print_scenario(&mut rng, Module::PreflopOpen, Some("MID"), None);

    println!("=== Feedback grading ===\n");
    let spot = generate_scenario(&mut rng, Module::BluffCatch, None, None);
    println!("Spot: {}\n", spot.text.lines().next().unwrap_or(""));
    for action in ["call", "fold", "jam it in", "check back"] {
        println!("--- action: {action} ---");
        println!("{}", feedback(&spot, action, ""));
        println!();
    }
}
