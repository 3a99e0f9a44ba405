//! Binary Multiples of Three
//!
//! This example builds a DFA that accepts binary numerals divisible by three
//! and checks a handful of inputs against it.
//!
//! Key concepts:
//! - Declaring an automaton with the `automaton!` macro
//! - Validating once, then running many inputs against the validated view
//! - Structured logging of each step through `tracing`
//!
//! Run with: cargo run --example binary_strings

use dfa_runner::automaton;
use dfa_runner::core::{run, validate};

fn main() {
    // Prints INFO events to STDOUT.
    tracing_subscriber::fmt::init();

    println!("=== Binary Multiples of Three ===\n");

    // State Rk means "value read so far is k mod 3".
    let graph = automaton! {
        states: [R0(start, accept), R1, R2],
        transitions: [
            (R0, "0", R0),
            (R0, "1", R1),
            (R1, "0", R2),
            (R1, "1", R0),
            (R2, "0", R1),
            (R2, "1", R2),
        ],
    }
    .expect("labels are declared once and used consistently");

    let validated = match validate(&graph) {
        Ok(validated) => validated,
        Err(err) => {
            eprintln!("invalid automaton: {err}");
            return;
        }
    };

    for input in ["0", "11", "110", "111", "1001", "10010", "2"] {
        match run(validated.start(input)) {
            Ok(outcome) => {
                let verdict = if outcome.accepted { "accept" } else { "reject" };
                println!(
                    "  {input:>6} -> {verdict} after {} transitions",
                    outcome.history.steps().len()
                );
            }
            Err(err) => eprintln!("  {input:>6} -> fault: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
