//! Selection state: the one node or edge currently inspected.
//!
//! `Selection` is a tagged union, so a node and an edge can never be
//! selected together. Every transition replaces the whole value.
//! Selections survive recomputation; clearing a stale one is the render
//! boundary's decision (see `Selection::is_stale`).

use serde::{Deserialize, Serialize};

use crate::model::{DerivedEdge, DerivedGraph, DerivedNode};
use crate::render::RenderEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Node(DerivedNode),
    Edge(DerivedEdge),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn node(&self) -> Option<&DerivedNode> {
        match self {
            Selection::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn edge(&self) -> Option<&DerivedEdge> {
        match self {
            Selection::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the selected element is gone from `graph`.
    ///
    /// Nodes match by person id. Edges match by relation, since edge ids
    /// are renumbered on every derivation.
    pub fn is_stale(&self, graph: &DerivedGraph) -> bool {
        match self {
            Selection::None => false,
            Selection::Node(n) => !graph.contains_node(n.id),
            Selection::Edge(e) => !graph.edges.iter().any(|other| other.same_relation(e)),
        }
    }
}

/// The single selection cell for one view.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Apply a render event. Returns the selection it replaced.
    pub fn apply(&mut self, event: RenderEvent) -> Selection {
        let next = match event {
            RenderEvent::NodeTapped(node) => Selection::Node(node),
            RenderEvent::EdgeTapped(edge) => Selection::Edge(edge),
            RenderEvent::Dismissed => Selection::None,
        };
        std::mem::replace(&mut self.current, next)
    }

    pub fn clear(&mut self) -> Selection {
        self.apply(RenderEvent::Dismissed)
    }
}
