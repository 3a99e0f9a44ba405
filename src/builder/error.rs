//! Build errors for the automaton builder.

use crate::core::GraphError;
use thiserror::Error;

/// Errors that can occur when building an automaton from labels.
///
/// Structural DFA problems are not build errors; they are left for
/// [`validate`](crate::core::validate) to report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("State '{label}' declared more than once. Builder labels must be unique")]
    DuplicateLabel { label: String },

    #[error("Transition refers to undeclared state '{label}'. Call .state(label) first")]
    UnknownState { label: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
