//! Step-by-step Tracing
//!
//! This example drives a run one symbol at a time, printing every
//! intermediate snapshot, and shows the full diagnostic report for a
//! malformed graph.
//!
//! Key concepts:
//! - The caller owns the run loop
//! - Immutable snapshots with trace messages
//! - Fail-fast validation versus accumulated diagnostics
//!
//! Run with: cargo run --example step_trace

use dfa_runner::builder::AutomatonBuilder;
use dfa_runner::core::{start, step, Step};
use dfa_runner::diagnostics::diagnose;
use stillwater::validation::Validation;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Step-by-step Tracing ===\n");

    let graph = AutomatonBuilder::new()
        .start("S")
        .state("A")
        .accept("B")
        .transition("S", "a", "A")
        .transition("A", "b", "B")
        .transition("B", "a", "A")
        .build()
        .expect("every label is declared");

    let mut current = match start(&graph, "abab") {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid automaton: {err}");
            return;
        }
    };

    loop {
        println!(
            "  {:<28} remaining: {:?}",
            current.message(),
            current.input_left()
        );
        match step(current) {
            Ok(Step::Continue(next)) => current = next,
            Ok(Step::Halted(accepted)) => {
                println!("  verdict: {}", if accepted { "accept" } else { "reject" });
                break;
            }
            Err(err) => {
                eprintln!("  fault: {err}");
                break;
            }
        }
    }

    println!("\nDiagnosing a malformed graph:");
    let broken = AutomatonBuilder::new()
        .state("P")
        .state("Q")
        .transition("P", "", "Q")
        .transition("Q", "xy", "P")
        .transition("Q", "z", "P")
        .transition("Q", "z", "Q")
        .build()
        .expect("every label is declared");

    match diagnose(&broken) {
        Validation::Success(_) => println!("  no problems found"),
        Validation::Failure(errors) => {
            for err in errors.iter() {
                println!("  - {err}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
