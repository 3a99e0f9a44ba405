//! Builder for constructing automata by state label.

use crate::builder::error::BuildError;
use crate::core::{Automaton, StateId};
use std::collections::HashMap;

/// Start/accept flags of a state under construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateFlags {
    pub start: bool,
    pub accept: bool,
}

impl StateFlags {
    /// Neither start nor accepting.
    pub const NONE: Self = Self {
        start: false,
        accept: false,
    };

    /// Mark as the start state.
    pub fn start(mut self) -> Self {
        self.start = true;
        self
    }

    /// Mark as accepting.
    pub fn accept(mut self) -> Self {
        self.accept = true;
        self
    }
}

/// Builder for constructing automata with a fluent API.
///
/// States are referred to by label, so labels must be unique within one
/// builder. The builder does not check DFA structure: graphs with no start
/// state or with lambda edges build fine and are rejected later by
/// validation.
///
/// # Example
///
/// ```rust
/// use dfa_runner::builder::AutomatonBuilder;
/// use dfa_runner::core::accepts;
///
/// let graph = AutomatonBuilder::new()
///     .start("S")
///     .accept("A")
///     .transition("S", "1", "A")
///     .build()
///     .unwrap();
///
/// assert!(accepts(&graph, "1").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<(String, StateFlags)>,
    transitions: Vec<(String, String, String)>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare a state with explicit flags.
    pub fn with_flags(mut self, label: impl Into<String>, flags: StateFlags) -> Self {
        self.states.push((label.into(), flags));
        self
    }

    /// Declare a plain (non-start, non-accepting) state.
    pub fn state(self, label: impl Into<String>) -> Self {
        self.with_flags(label, StateFlags::NONE)
    }

    /// Declare a start state.
    pub fn start(self, label: impl Into<String>) -> Self {
        self.with_flags(label, StateFlags::NONE.start())
    }

    /// Declare an accepting state.
    pub fn accept(self, label: impl Into<String>) -> Self {
        self.with_flags(label, StateFlags::NONE.accept())
    }

    /// Add a transition between two declared states.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push((from.into(), symbol.into(), to.into()));
        self
    }

    /// Build the automaton.
    /// Returns an error if a label is declared twice or never declared.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let mut graph = Automaton::new();
        let mut ids: HashMap<String, StateId> = HashMap::new();

        for (label, flags) in self.states {
            if ids.contains_key(&label) {
                return Err(BuildError::DuplicateLabel { label });
            }
            let id = graph.add_state(label.clone(), flags.start, flags.accept);
            ids.insert(label, id);
        }

        let resolve = |label: String| {
            ids.get(&label)
                .copied()
                .ok_or(BuildError::UnknownState { label })
        };

        for (from, symbol, to) in self.transitions {
            let from = resolve(from)?;
            let to = resolve(to)?;
            graph.add_transition(from, symbol, to)?;
        }

        Ok(graph)
    }
}
