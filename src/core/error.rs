//! Errors raised by validation and execution.

use super::model::StateId;
use thiserror::Error;

/// Structural problems that make a graph unusable as a DFA.
///
/// These are caller errors: fixing the graph fixes the error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Only one start state allowed")]
    DuplicateStartState { first: String, second: String },

    #[error("Must have one start state")]
    MissingStartState,

    #[error("Lambda transition from {from} to {to} is not allowed")]
    LambdaTransitionNotAllowed { from: String, to: String },

    #[error("Edge {symbol} must be one symbol")]
    MultiCharacterSymbol { from: String, symbol: String },

    #[error("Nondeterministic edge {symbol}{}", origin_suffix(.from))]
    NondeterministicEdge {
        symbol: String,
        from: Option<String>,
    },

    #[error("Transition from {from} on '{symbol}' points at {destination}, which is not in this automaton")]
    DanglingTransition {
        from: String,
        symbol: String,
        destination: StateId,
    },
}

fn origin_suffix(from: &Option<String>) -> String {
    match from {
        Some(label) => format!(" from node: {label}"),
        None => String::new(),
    }
}

/// Faults detected while stepping a validated automaton.
///
/// Reaching one of these means the determinism invariant was bypassed; it is
/// never produced by ordinary rejected input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("This is a DFA! State '{state}' has {matches} transitions on '{symbol}'")]
    DeterminismViolation {
        state: String,
        symbol: char,
        matches: usize,
    },

    #[error("Active state {id} is not in the validated automaton")]
    UnknownState { id: StateId },
}

/// Errors from the one-call [`accepts`](crate::core::accepts) driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Step(#[from] StepError),
}
