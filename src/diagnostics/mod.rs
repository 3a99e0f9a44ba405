//! Full structural reports for automaton graphs.
//!
//! [`validate`](crate::core::validate) stops at the first problem, which is
//! what the executor needs. Editors and loaders usually want every problem
//! at once, so [`diagnose`] runs the same checks and accumulates all
//! violations with Stillwater's `Validation` instead.
//!
//! # Example
//!
//! ```rust
//! use dfa_runner::core::{Automaton, ValidationError};
//! use dfa_runner::diagnostics::diagnose;
//! use stillwater::validation::Validation;
//!
//! let mut graph = Automaton::new();
//! let a = graph.add_state("A", false, false);
//! graph.add_transition(a, "", a).unwrap();
//! graph.add_transition(a, "xy", a).unwrap();
//!
//! match diagnose(&graph) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
//!     Validation::Success(_) => panic!("graph has no start state"),
//! }
//! ```

use crate::core::{check_edge, Automaton, ValidationError};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of a single structural check.
pub type Check = Validation<(), NonEmptyVec<ValidationError>>;

/// Run every structural check on `graph`, accumulating ALL violations.
///
/// Returns `Validation::Success(())` exactly when
/// [`validate`](crate::core::validate) would succeed. On failure, violations
/// are listed in the order `validate` encounters them, with a missing start
/// state reported last.
pub fn diagnose(graph: &Automaton) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut first_start: Option<&str> = None;

    for (_, node) in graph.states() {
        if node.is_start() {
            match first_start {
                Some(first) => {
                    checks.push(Validation::fail(ValidationError::DuplicateStartState {
                        first: first.to_string(),
                        second: node.label().to_string(),
                    }));
                }
                None => first_start = Some(node.label()),
            }
        }

        // Every edge is checked, even after a failure on the same state.
        let mut seen: HashSet<&str> = HashSet::new();
        for edge in node.edges() {
            let check = match check_edge(graph, node, &edge.symbol, edge.destination, &seen) {
                Ok(()) => Validation::success(()),
                Err(err) => Validation::fail(err),
            };
            checks.push(check);
            seen.insert(&edge.symbol);
        }
    }

    if first_start.is_none() {
        checks.push(Validation::fail(ValidationError::MissingStartState));
    }

    debug!(checks = checks.len(), "diagnosed automaton");

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
