//! dfa-runner: a pure, step-wise deterministic finite automaton simulator
//!
//! A graph of states and labelled transitions is checked once by
//! [`validate`](crate::core::validate), which either names the first structural
//! problem or hands back a [`ValidatedAutomaton`](crate::core::ValidatedAutomaton).
//! Only a validated automaton can start a run. A run is then driven one
//! symbol at a time with [`step`](crate::core::step), producing a fresh immutable
//! [`SimulationState`](crate::core::SimulationState) each time until it halts with
//! an accept/reject verdict.
//!
//! # Core Concepts
//!
//! - **Automaton**: arena of states; edges refer to destinations by [`StateId`](crate::core::StateId)
//! - **Validation**: exactly one start state, one-character symbols, no duplicate symbols per state
//! - **Simulation**: immutable snapshots with a trace message; the caller owns the loop
//! - **Diagnostics**: every structural problem at once, via Stillwater's `Validation`
//! - **Presentation**: read-only glyph/layout projection for renderers
//!
//! # Example
//!
//! ```rust
//! use dfa_runner::core::{start, step, Automaton, Step};
//!
//! let mut graph = Automaton::new();
//! let s = graph.add_state("S", true, false);
//! let a = graph.add_state("A", false, true);
//! graph.add_transition(s, "1", a).unwrap();
//!
//! let mut state = start(&graph, "1").unwrap();
//! let verdict = loop {
//!     match step(state).unwrap() {
//!         Step::Continue(next) => {
//!             println!("{}", next.message());
//!             state = next;
//!         }
//!         Step::Halted(accepted) => break accepted,
//!     }
//! };
//! assert!(verdict);
//! ```

pub mod builder;
pub mod core;
pub mod diagnostics;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{
    accepts, start, step, validate, Automaton, SimulationState, StateId, Step, StepError,
    ValidatedAutomaton, ValidationError,
};
