//! Run history tracking.
//!
//! Provides an immutable record of the transitions taken during a run.
//! Recording never mutates an existing history; it returns a new one.

use super::model::StateId;
use serde::{Deserialize, Serialize};

/// Record of a single transition taken during a run.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{Automaton, StepRecord};
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// let a = graph.add_state("A", false, true);
///
/// let record = StepRecord {
///     from: s,
///     to: a,
///     symbol: '1',
///     message: "transitioning from S to A".to_string(),
/// };
/// assert_eq!(record.symbol, '1');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// The input symbol consumed
    pub symbol: char,
    /// Trace message of the snapshot this transition produced
    pub message: String,
}

/// Ordered history of a run, beginning at its start state.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{Automaton, RunHistory, StepRecord};
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// let a = graph.add_state("A", false, true);
///
/// let history = RunHistory::new(s);
/// let history = history.record(StepRecord {
///     from: s,
///     to: a,
///     symbol: '1',
///     message: "transitioning from S to A".to_string(),
/// });
///
/// assert_eq!(history.get_path(), vec![s, a]);
/// assert_eq!(history.consumed(), "1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHistory {
    start: StateId,
    steps: Vec<StepRecord>,
}

impl RunHistory {
    /// Create an empty history for a run beginning at `start`.
    pub fn new(start: StateId) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - the existing history is left as it was.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            start: self.start,
            steps,
        }
    }

    /// States visited, in order: the start state, then the target of each
    /// transition.
    pub fn get_path(&self) -> Vec<StateId> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|step| step.to))
            .collect()
    }

    /// The prefix of the input consumed so far.
    pub fn consumed(&self) -> String {
        self.steps.iter().map(|step| step.symbol).collect()
    }

    /// The state the run is currently in.
    pub fn current(&self) -> StateId {
        self.steps.last().map_or(self.start, |step| step.to)
    }

    /// All recorded transitions.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Automaton;

    fn three_states() -> (StateId, StateId, StateId) {
        let mut graph = Automaton::new();
        (
            graph.add_state("S", true, false),
            graph.add_state("A", false, false),
            graph.add_state("B", false, true),
        )
    }

    fn record(from: StateId, to: StateId, symbol: char) -> StepRecord {
        StepRecord {
            from,
            to,
            symbol,
            message: String::new(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let (s, _, _) = three_states();
        let history = RunHistory::new(s);

        assert!(history.steps().is_empty());
        assert_eq!(history.get_path(), vec![s]);
        assert_eq!(history.consumed(), "");
        assert_eq!(history.current(), s);
    }

    #[test]
    fn record_is_immutable() {
        let (s, a, _) = three_states();
        let history = RunHistory::new(s);

        let new_history = history.record(record(s, a, 'x'));

        assert_eq!(history.steps().len(), 0);
        assert_eq!(new_history.steps().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let (s, a, b) = three_states();
        let history = RunHistory::new(s)
            .record(record(s, a, '0'))
            .record(record(a, b, '1'));

        assert_eq!(history.get_path(), vec![s, a, b]);
        assert_eq!(history.consumed(), "01");
        assert_eq!(history.current(), b);
    }

    #[test]
    fn history_serializes_correctly() {
        let (s, a, _) = three_states();
        let history = RunHistory::new(s).record(record(s, a, 'q'));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RunHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
