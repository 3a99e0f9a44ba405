//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the [`automaton!`](crate::automaton)
//! macro for describing graphs by state label instead of by handle.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::{AutomatonBuilder, StateFlags};
pub use error::BuildError;
