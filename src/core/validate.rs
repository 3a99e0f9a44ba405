//! Structural validation of automaton graphs.
//!
//! Validation is a single fail-fast pass over every state and each of its
//! outgoing edges. The first violation found in iteration order is reported.
//! A successful pass yields a [`ValidatedAutomaton`], which is the only way to
//! start a simulation.

use super::error::ValidationError;
use super::model::{Automaton, Node, StateId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A graph that passed validation, together with its start state.
///
/// The wrapper borrows the graph immutably, so the graph cannot change for
/// as long as the wrapper (or any simulation built on it) is alive. Executors
/// rely on this instead of re-checking the single-start and determinism
/// invariants on every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedAutomaton<'g> {
    graph: &'g Automaton,
    start: StateId,
}

impl<'g> ValidatedAutomaton<'g> {
    /// The underlying graph.
    pub fn graph(&self) -> &'g Automaton {
        self.graph
    }

    /// Handle of the unique start state.
    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// Handles of every accepting state, in graph order.
    ///
    /// Read from the borrowed graph, which cannot change after validation.
    pub fn accept_states(&self) -> Vec<StateId> {
        self.graph
            .states()
            .filter(|(_, node)| node.is_accept())
            .map(|(id, _)| id)
            .collect()
    }

    /// Wrap a graph without checking it, to exercise the executor's guards.
    #[cfg(test)]
    pub(crate) fn unchecked(graph: &'g Automaton, start: StateId) -> Self {
        Self { graph, start }
    }
}

/// Validate `graph` as a DFA.
///
/// Returns the validated view on success. Running it again on the same
/// unmodified graph always produces the same result.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{validate, Automaton, ValidationError};
///
/// let mut graph = Automaton::new();
/// let s = graph.add_state("S", true, false);
/// graph.add_transition(s, "", s).unwrap();
///
/// assert_eq!(
///     validate(&graph),
///     Err(ValidationError::LambdaTransitionNotAllowed {
///         from: "S".to_string(),
///         to: "S".to_string(),
///     })
/// );
/// ```
pub fn validate(graph: &Automaton) -> Result<ValidatedAutomaton<'_>, ValidationError> {
    scan(graph)
        .map(|start| ValidatedAutomaton { graph, start })
        .inspect_err(|err| warn!(error = %err, "automaton rejected"))
}

fn scan(graph: &Automaton) -> Result<StateId, ValidationError> {
    let mut start: Option<StateId> = None;

    for (id, node) in graph.states() {
        debug!(
            state = node.label(),
            start = node.is_start(),
            accept = node.is_accept(),
            "checking state"
        );

        if node.is_start() {
            if let Some(first) = start {
                return Err(ValidationError::DuplicateStartState {
                    first: label_of(graph, first),
                    second: node.label().to_string(),
                });
            }
            start = Some(id);
        }

        check_edges(graph, node)?;
    }

    start.ok_or(ValidationError::MissingStartState)
}

/// Check every outgoing edge of `node`, stopping at the first violation.
pub(crate) fn check_edges(graph: &Automaton, node: &Node) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for edge in node.edges() {
        check_edge(graph, node, &edge.symbol, edge.destination, &seen)?;
        seen.insert(&edge.symbol);
    }
    Ok(())
}

/// Check one edge against the symbols already seen on the same state.
pub(crate) fn check_edge(
    graph: &Automaton,
    node: &Node,
    symbol: &str,
    destination: StateId,
    seen: &HashSet<&str>,
) -> Result<(), ValidationError> {
    let target = graph
        .node(destination)
        .ok_or_else(|| ValidationError::DanglingTransition {
            from: node.label().to_string(),
            symbol: symbol.to_string(),
            destination,
        })?;

    if symbol.is_empty() {
        return Err(ValidationError::LambdaTransitionNotAllowed {
            from: node.label().to_string(),
            to: target.label().to_string(),
        });
    }
    if symbol.chars().count() > 1 {
        return Err(ValidationError::MultiCharacterSymbol {
            from: node.label().to_string(),
            symbol: symbol.to_string(),
        });
    }
    if seen.contains(symbol) {
        return Err(ValidationError::NondeterministicEdge {
            symbol: symbol.to_string(),
            from: (!node.label().is_empty()).then(|| node.label().to_string()),
        });
    }
    Ok(())
}

fn label_of(graph: &Automaton, id: StateId) -> String {
    graph
        .node(id)
        .map(|node| node.label().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_graph() -> Automaton {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "1", a).unwrap();
        graph.add_transition(s, "0", s).unwrap();
        graph
    }

    #[test]
    fn valid_graph_returns_start_state() {
        let graph = binary_graph();
        let validated = validate(&graph).unwrap();

        assert_eq!(validated.start_state().index(), 0);
        assert_eq!(validated.accept_states().len(), 1);
        assert_eq!(validated.accept_states()[0].index(), 1);
    }

    #[test]
    fn start_state_may_also_accept() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, true);

        let validated = validate(&graph).unwrap();
        assert_eq!(validated.start_state(), s);
        assert_eq!(validated.accept_states(), vec![s]);
    }

    #[test]
    fn empty_graph_is_missing_start() {
        let graph = Automaton::new();
        assert_eq!(validate(&graph), Err(ValidationError::MissingStartState));
    }

    #[test]
    fn no_start_flag_is_missing_start() {
        let mut graph = Automaton::new();
        graph.add_state("A", false, true);
        graph.add_state("B", false, false);

        assert_eq!(validate(&graph), Err(ValidationError::MissingStartState));
    }

    #[test]
    fn second_start_state_is_rejected() {
        let mut graph = Automaton::new();
        graph.add_state("S1", true, false);
        graph.add_state("S2", true, false);

        assert_eq!(
            validate(&graph),
            Err(ValidationError::DuplicateStartState {
                first: "S1".to_string(),
                second: "S2".to_string(),
            })
        );
    }

    #[test]
    fn empty_symbol_is_lambda() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "", a).unwrap();

        assert_eq!(
            validate(&graph),
            Err(ValidationError::LambdaTransitionNotAllowed {
                from: "S".to_string(),
                to: "A".to_string(),
            })
        );
    }

    #[test]
    fn long_symbol_is_rejected() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        graph.add_transition(s, "ab", s).unwrap();

        assert_eq!(
            validate(&graph),
            Err(ValidationError::MultiCharacterSymbol {
                from: "S".to_string(),
                symbol: "ab".to_string(),
            })
        );
    }

    #[test]
    fn single_multibyte_char_is_one_symbol() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, true);
        graph.add_transition(s, "λ", s).unwrap();

        assert!(validate(&graph).is_ok());
    }

    #[test]
    fn duplicate_symbol_is_nondeterministic() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "a", s).unwrap();
        graph.add_transition(s, "a", a).unwrap();

        assert_eq!(
            validate(&graph),
            Err(ValidationError::NondeterministicEdge {
                symbol: "a".to_string(),
                from: Some("S".to_string()),
            })
        );
    }

    #[test]
    fn unlabelled_source_is_omitted_from_nondeterminism() {
        let mut graph = Automaton::new();
        let s = graph.add_state("", true, false);
        graph.add_transition(s, "a", s).unwrap();
        graph.add_transition(s, "a", s).unwrap();

        assert_eq!(
            validate(&graph),
            Err(ValidationError::NondeterministicEdge {
                symbol: "a".to_string(),
                from: None,
            })
        );
    }

    #[test]
    fn same_symbol_on_different_states_is_fine() {
        let mut graph = Automaton::new();
        let s = graph.add_state("S", true, false);
        let a = graph.add_state("A", false, true);
        graph.add_transition(s, "a", a).unwrap();
        graph.add_transition(a, "a", s).unwrap();

        assert!(validate(&graph).is_ok());
    }

    #[test]
    fn first_violation_in_state_order_wins() {
        let mut graph = Automaton::new();
        let a = graph.add_state("A", false, false);
        graph.add_transition(a, "xy", a).unwrap();
        graph.add_state("S1", true, false);
        graph.add_state("S2", true, false);

        assert!(matches!(
            validate(&graph),
            Err(ValidationError::MultiCharacterSymbol { .. })
        ));
    }

    #[test]
    fn duplicate_start_reported_before_its_own_edges() {
        let mut graph = Automaton::new();
        graph.add_state("S1", true, false);
        let s2 = graph.add_state("S2", true, false);
        graph.add_transition(s2, "", s2).unwrap();

        assert!(matches!(
            validate(&graph),
            Err(ValidationError::DuplicateStartState { .. })
        ));
    }

    #[test]
    fn dangling_destination_is_rejected() {
        let json = r#"{"nodes":[{"label":"S","is_start":true,"is_accept":false,"edges":[{"symbol":"a","destination":7}]}]}"#;
        let graph: Automaton = serde_json::from_str(json).unwrap();

        assert!(matches!(
            validate(&graph),
            Err(ValidationError::DanglingTransition { .. })
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        let graph = binary_graph();
        assert_eq!(validate(&graph), validate(&graph));
    }
}
