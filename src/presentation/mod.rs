//! Read-only display projection of a validated automaton.
//!
//! Renderers need a glyph, a shape and a layout origin for each state and a
//! label for each edge. All of these are pure functions of the start/accept
//! flags and the edge symbols, so they live here rather than on the core
//! types. Nothing in this module feeds back into validation or execution.

use crate::core::{Node, StateId, ValidatedAutomaton};

/// Shape every state is drawn with.
pub const STATE_SHAPE: &str = "circle";

/// Edge label used for an empty (lambda) symbol.
pub const LAMBDA_LABEL: &str = "λ";

/// Horizontal offset applied to start states to leave room for the entry arrow.
pub const START_OFFSET_X: i32 = 10;

/// Icon selected from a state's flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    StartAccept,
    Accept,
    Start,
    Plain,
}

impl Glyph {
    pub fn of(node: &Node) -> Self {
        match (node.is_start(), node.is_accept()) {
            (true, true) => Self::StartAccept,
            (false, true) => Self::Accept,
            (true, false) => Self::Start,
            (false, false) => Self::Plain,
        }
    }

    /// Image file for the glyph; plain states have none.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::StartAccept => Some("start_accept_state.svg"),
            Self::Accept => Some("accept_state.svg"),
            Self::Start => Some("start_state.svg"),
            Self::Plain => None,
        }
    }
}

/// Layout origin of a state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Origin {
    pub fn of(node: &Node) -> Self {
        Self {
            x: if node.is_start() { START_OFFSET_X } else { 0 },
            y: 0,
        }
    }
}

/// Display attributes of one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateView<'g> {
    pub id: StateId,
    pub label: &'g str,
    pub glyph: Glyph,
    pub shape: &'static str,
    pub origin: Origin,
}

/// Display attributes of one edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeView<'g> {
    pub from: StateId,
    pub to: StateId,
    pub label: &'g str,
}

/// Label shown for an edge carrying `symbol`.
pub fn edge_label(symbol: &str) -> &str {
    if symbol.is_empty() {
        LAMBDA_LABEL
    } else {
        symbol
    }
}

/// Everything a renderer needs, borrowed from the validated graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection<'g> {
    pub states: Vec<StateView<'g>>,
    pub edges: Vec<EdgeView<'g>>,
}

impl<'g> From<ValidatedAutomaton<'g>> for Projection<'g> {
    fn from(automaton: ValidatedAutomaton<'g>) -> Self {
        let mut projection = Projection::default();

        for (id, node) in automaton.graph().states() {
            projection.states.push(StateView {
                id,
                label: node.label(),
                glyph: Glyph::of(node),
                shape: STATE_SHAPE,
                origin: Origin::of(node),
            });

            for edge in node.edges() {
                projection.edges.push(EdgeView {
                    from: id,
                    to: edge.destination,
                    label: edge_label(&edge.symbol),
                });
            }
        }

        projection
    }
}
