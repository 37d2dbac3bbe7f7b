//! Render boundary, the seam to whatever draws the graph.
//!
//! A renderer receives each derived model by value and owns it until the
//! next one arrives. Taps and dismissals come back as `RenderEvent`s
//! carrying the full record, so the selection never needs a second lookup.

use crate::model::{DerivedEdge, DerivedGraph, DerivedNode, EdgeId, PersonId};

/// Events raised by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    NodeTapped(DerivedNode),
    EdgeTapped(DerivedEdge),
    Dismissed,
}

/// Consumer of derived models.
///
/// Models may contain enemy edges whose endpoint is not in the node set
/// (see `DerivedGraph::dangling_edges`). Implementations must skip or
/// reject those, never panic on them.
pub trait RenderBoundary {
    fn present(&mut self, graph: DerivedGraph);
}

/// Headless renderer that keeps the latest model.
///
/// Reference implementation for embedding and tests.
#[derive(Debug, Default)]
pub struct LatestModel {
    graph: Option<DerivedGraph>,
    presented: u64,
}

impl LatestModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> Option<&DerivedGraph> {
        self.graph.as_ref()
    }

    /// How many models have been presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Event for a tap on a node of the current model.
    pub fn tap_node(&self, id: PersonId) -> Option<RenderEvent> {
        self.graph.as_ref()?.node(id).cloned().map(RenderEvent::NodeTapped)
    }

    /// Event for a tap on an edge of the current model.
    pub fn tap_edge(&self, id: EdgeId) -> Option<RenderEvent> {
        self.graph.as_ref()?.edge(id).cloned().map(RenderEvent::EdgeTapped)
    }
}

impl RenderBoundary for LatestModel {
    fn present(&mut self, graph: DerivedGraph) {
        self.graph = Some(graph);
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive_graph;
    use crate::model::*;

    #[test]
    fn test_latest_model_replaces_wholesale() {
        let people = vec![PersonEntity::new(1, "Ana").arriving(1)];
        let mut r = LatestModel::new();
        assert!(r.tap_node(PersonId(1)).is_none());

        r.present(derive_graph(&people, &[], &[], &[], Episode(1)));
        assert_eq!(r.presented(), 1);
        assert!(matches!(r.tap_node(PersonId(1)), Some(RenderEvent::NodeTapped(_))));

        r.present(derive_graph(&people, &[], &[], &[], Episode(0)));
        assert_eq!(r.presented(), 2);
        assert!(r.tap_node(PersonId(1)).is_none());
    }

    #[test]
    fn test_tap_edge_unknown_id() {
        let mut r = LatestModel::new();
        r.present(DerivedGraph::empty(Episode(1)));
        let id = EdgeId { kind: EdgeKind::Enemy, index: 0 };
        assert!(r.tap_edge(id).is_none());
    }
}
