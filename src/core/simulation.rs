//! Step-wise execution of a validated automaton.
//!
//! A run is a chain of immutable [`SimulationState`] snapshots. Each call to
//! [`step`] consumes one snapshot and yields either the next one or the final
//! verdict. There is no built-in loop; callers decide how far to drive a run
//! and can observe every intermediate snapshot on the way.

use super::error::{StepError, ValidationError};
use super::model::{Automaton, Node, StateId};
use super::validate::{validate, ValidatedAutomaton};
use tracing::{debug, info};

/// Trace message of the first snapshot of every run.
pub const STARTING: &str = "starting";

/// Immutable snapshot of an in-progress run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState<'a> {
    automaton: ValidatedAutomaton<'a>,
    active: StateId,
    input_left: &'a str,
    message: String,
}

impl<'a> SimulationState<'a> {
    /// The automaton being run.
    pub fn automaton(&self) -> ValidatedAutomaton<'a> {
        self.automaton
    }

    /// Handle of the currently active state.
    pub fn active(&self) -> StateId {
        self.active
    }

    /// The currently active state, if the handle resolves.
    pub fn active_node(&self) -> Option<&'a Node> {
        self.automaton.graph().node(self.active)
    }

    /// Input not consumed yet.
    pub fn input_left(&self) -> &'a str {
        self.input_left
    }

    /// How this snapshot was reached.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a single [`step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// One symbol was consumed; the run continues from this snapshot.
    Continue(SimulationState<'a>),

    /// The run is over: `true` accepts, `false` rejects.
    Halted(bool),
}

impl<'a> Step<'a> {
    /// The verdict, if the run has halted.
    pub fn verdict(&self) -> Option<bool> {
        match self {
            Self::Continue(_) => None,
            Self::Halted(accepted) => Some(*accepted),
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Halted(_))
    }
}

impl<'a> ValidatedAutomaton<'a> {
    /// Bootstrap a run at the start state with the full `input` left.
    pub fn start(self, input: &'a str) -> SimulationState<'a> {
        SimulationState {
            automaton: self,
            active: self.start_state(),
            input_left: input,
            message: STARTING.to_string(),
        }
    }
}

/// Validate `graph` and bootstrap a run over `input`.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{start, step, Automaton, Step};
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// let a = graph.add_state("A", false, true);
/// graph.add_transition(s, "1", a).unwrap();
///
/// let state = start(&graph, "1").unwrap();
/// assert_eq!(state.message(), "starting");
///
/// let Step::Continue(state) = step(state).unwrap() else {
///     panic!("expected a transition");
/// };
/// assert_eq!(state.message(), "transitioning from S to A");
/// assert_eq!(step(state).unwrap(), Step::Halted(true));
/// ```
pub fn start<'a>(
    graph: &'a Automaton,
    input: &'a str,
) -> Result<SimulationState<'a>, ValidationError> {
    Ok(validate(graph)?.start(input))
}

/// Advance `current` by one input symbol.
///
/// With no input left the run halts with the active state's accept flag.
/// Otherwise the single edge matching the next symbol is taken; when no edge
/// matches the run halts with `false`.
pub fn step(current: SimulationState<'_>) -> Result<Step<'_>, StepError> {
    let graph = current.automaton.graph();
    let node = graph
        .node(current.active)
        .ok_or(StepError::UnknownState { id: current.active })?;

    let mut remaining = current.input_left.chars();
    let Some(symbol) = remaining.next() else {
        info!(state = node.label(), accepted = node.is_accept(), "input exhausted");
        return Ok(Step::Halted(node.is_accept()));
    };

    let mut matches = node
        .edges()
        .iter()
        .filter(|edge| edge.symbol.chars().eq(std::iter::once(symbol)));

    match (matches.next(), matches.next()) {
        (None, _) => {
            info!(state = node.label(), %symbol, "no transition, rejecting");
            Ok(Step::Halted(false))
        }
        (Some(edge), None) => {
            let target = graph.node(edge.destination).ok_or(StepError::UnknownState {
                id: edge.destination,
            })?;
            debug!(from = node.label(), to = target.label(), %symbol, "transition");

            let message = format!("transitioning from {} to {}", node.label(), target.label());
            Ok(Step::Continue(SimulationState {
                automaton: current.automaton,
                active: edge.destination,
                input_left: remaining.as_str(),
                message,
            }))
        }
        (Some(_), Some(_)) => Err(StepError::DeterminismViolation {
            state: node.label().to_string(),
            symbol,
            matches: 2 + matches.count(),
        }),
    }
}
