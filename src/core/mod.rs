//! Core automaton types and logic.
//!
//! This module contains the pure core of the simulator:
//! - The arena-backed automaton model
//! - Fail-fast structural validation
//! - The single-step executor over immutable snapshots
//! - Run drivers and immutable run history
//!
//! Nothing in this module performs I/O or mutates shared state, so any number
//! of runs over the same graph can proceed in parallel.

mod error;
mod history;
mod model;
mod run;
mod simulation;
mod validate;

pub(crate) use validate::check_edge;

pub use error::{RunError, StepError, ValidationError};
pub use history::{RunHistory, StepRecord};
pub use model::{Automaton, Edge, GraphError, Node, StateId};
pub use run::{accepts, run, Outcome};
pub use simulation::{start, step, SimulationState, Step, STARTING};
pub use validate::{validate, ValidatedAutomaton};
