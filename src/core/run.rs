//! Drive a run to completion.
//!
//! [`step`] never loops on its own. These helpers are ordinary callers of it
//! for when only the verdict (and optionally the path taken) matters.

use super::error::{RunError, StepError};
use super::history::{RunHistory, StepRecord};
use super::model::Automaton;
use super::simulation::{start, step, SimulationState, Step};
use tracing::info;

/// Final result of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the input was accepted.
    pub accepted: bool,
    /// Transitions taken before the run halted.
    pub history: RunHistory,
}

/// Step `initial` until the run halts, recording every transition.
pub fn run(initial: SimulationState<'_>) -> Result<Outcome, StepError> {
    let mut history = RunHistory::new(initial.active());
    let mut current = initial;

    loop {
        let from = current.active();
        let symbol = current.input_left().chars().next().unwrap_or_default();

        match step(current)? {
            Step::Continue(next) => {
                history = history.record(StepRecord {
                    from,
                    to: next.active(),
                    symbol,
                    message: next.message().to_string(),
                });
                current = next;
            }
            Step::Halted(accepted) => {
                info!(
                    accepted,
                    state = %history.current(),
                    steps = history.steps().len(),
                    "run halted"
                );
                return Ok(Outcome { accepted, history });
            }
        }
    }
}

/// Validate `graph` and report whether it accepts `input`.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{accepts, Automaton};
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// let a = graph.add_state("A", false, true);
/// graph.add_transition(s, "1", a).unwrap();
///
/// assert!(accepts(&graph, "1").unwrap());
/// assert!(!accepts(&graph, "0").unwrap());
/// assert!(!accepts(&graph, "11").unwrap());
/// ```
pub fn accepts(graph: &Automaton, input: &str) -> Result<bool, RunError> {
    let initial = start(graph, input)?;
    Ok(run(initial)?.accepted)
}
