//! Automaton data model.
//!
//! The graph owns every state in an arena. Transitions refer to their
//! destination by [`StateId`], never by reference, so cyclic automata need
//! no shared ownership and the whole graph stays plain data.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable handle of a state inside the [`Automaton`] that created it.
///
/// Handles are only meaningful for the graph they came from. Using a handle
/// from another graph is a caller error that can only be detected when it
/// falls outside this graph's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// Position of the state in the owning graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One outgoing arrow of a state.
///
/// The symbol is kept as a string so that malformed edges (empty or
/// multi-character symbols) can be represented and then rejected by
/// validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Input symbol consumed by this edge.
    pub symbol: String,
    /// State reached after consuming `symbol`.
    pub destination: StateId,
}

/// A single automaton state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    label: String,
    is_start: bool,
    is_accept: bool,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Node {
    /// Diagnostic label. Labels need not be unique.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    /// Outgoing transitions, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Errors raised while assembling an [`Automaton`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    #[error("State {id} is not a member of this automaton")]
    UnknownState { id: StateId },
}

/// The top-level automaton graph.
///
/// States are appended with [`Automaton::add_state`] and wired together with
/// [`Automaton::add_transition`]. Construction performs no structural
/// checks beyond handle membership; call
/// [`validate`](crate::core::validate) before simulating.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::Automaton;
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// let a = graph.add_state("A", false, true);
/// graph.add_transition(s, "1", a).unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.node(s).unwrap().edges().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    nodes: Vec<Node>,
}

impl Automaton {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a state and return its handle.
    pub fn add_state(
        &mut self,
        label: impl Into<String>,
        is_start: bool,
        is_accept: bool,
    ) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(Node {
            label: label.into(),
            is_start,
            is_accept,
            edges: Vec::new(),
        });
        id
    }

    /// Add an outgoing edge from `from` to `to` labelled with `symbol`.
    ///
    /// Both handles must belong to this automaton. The symbol itself is not
    /// checked here.
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbol: impl Into<String>,
        to: StateId,
    ) -> Result<(), GraphError> {
        if !self.contains(to) {
            return Err(GraphError::UnknownState { id: to });
        }
        let node = self
            .nodes
            .get_mut(from.0)
            .ok_or(GraphError::UnknownState { id: from })?;
        node.edges.push(Edge {
            symbol: symbol.into(),
            destination: to,
        });
        Ok(())
    }

    /// Look up a state by handle.
    pub fn node(&self, id: StateId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Whether `id` falls inside this automaton's arena.
    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Iterate over all states with their handles, in insertion order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (StateId(index), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_state_returns_sequential_handles() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);

        assert_eq!(s.index(), 0);
        assert_eq!(a.index(), 1);
        assert_eq!(graph.len(), 2);
        assert!(!graph.is_empty());
    }

    #[test]
    fn node_flags_are_preserved() {
        let mut graph = Automaton::new();
        let both = graph.add_state("SA", true, true);
        let node = graph.node(both).unwrap();

        assert_eq!(node.label(), "SA");
        assert!(node.is_start());
        assert!(node.is_accept());
        assert!(node.edges().is_empty());
    }

    #[test]
    fn add_transition_keeps_insertion_order() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "0", s).unwrap();
        graph.add_transition(s, "1", a).unwrap();

        let symbols: Vec<&str> = graph
            .node(s)
            .unwrap()
            .edges()
            .iter()
            .map(|e| e.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["0", "1"]);
    }

    #[test]
    fn add_transition_rejects_foreign_destination() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);

        let mut other = Automaton::new();
        other.add_state("X", false, false);
        let foreign = other.add_state("Y", false, false);

        let result = graph.add_transition(s, "a", foreign);
        assert_eq!(result, Err(GraphError::UnknownState { id: foreign }));
    }

    #[test]
    fn add_transition_rejects_unknown_source() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);

        let mut other = Automaton::new();
        other.add_state("X", false, false);
        let foreign = other.add_state("Y", false, false);

        let result = graph.add_transition(foreign, "a", s);
        assert!(matches!(result, Err(GraphError::UnknownState { .. })));
    }

    #[test]
    fn states_yield_handles_in_order() {
        let mut graph = Automaton::new();
        graph.add_state("A", false, false);
        graph.add_state("B", false, false);

        let labels: Vec<(usize, &str)> = graph
            .states()
            .map(|(id, node)| (id.index(), node.label()))
            .collect();
        assert_eq!(labels, vec![(0, "A"), (1, "B")]);
    }

    #[test]
    fn automaton_serializes_correctly() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "1", a).unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        let deserialized: Automaton = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, deserialized);
    }

    #[test]
    fn state_id_displays_with_hash() {
        let mut graph = Automaton::new();
        graph.add_state("A", false, false);
        let b = graph.add_state("B", false, false);
        assert_eq!(b.to_string(), "#1");
    }
}
