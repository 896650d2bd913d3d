//! Rehearse every example transducer
//!
//! This example runs the reference scenario of each example transducer and
//! reports any mismatching (configuration, outputs) pairs.
//!
//! Key concepts:
//! - Scenarios over transducers of different types in one suite
//! - Mismatches are collected, never fail-fast
//! - An empty report means every transducer behaved as documented
//!
//! Run with: cargo run --example rehearse_all
//! Set RUST_LOG=modal=trace to watch every rehearsal step.

use modal::machines;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Rehearsing Example Transducers ===\n");

    let suite = match machines::suite() {
        Ok(suite) => suite,
        Err(err) => {
            eprintln!("Failed to build scenarios: {err}");
            std::process::exit(2);
        }
    };

    println!("Scenarios registered: {}", suite.len());

    let mismatches = suite.mismatches();
    if mismatches.is_empty() {
        println!("No mismatches.");
        println!("\n=== Example Complete ===");
        return;
    }

    for mismatch in &mismatches {
        println!("  ✗ {}", mismatch.scenario);
        println!("      expected: {}", mismatch.expected);
        println!("      actual:   {}", mismatch.actual);
    }
    std::process::exit(1);
}
