//! The derived render model: nodes and edges for one episode.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Color, Episode, PersonId};

/// Kind of a rendered edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Friend,
    Enemy,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Friend => "friend",
            EdgeKind::Enemy => "enemy",
        }
    }
}

/// Synthetic edge identifier, unique within one derivation only.
///
/// Never compare ids from two different derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    pub kind: EdgeKind,
    pub index: u32,
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind.as_str(), self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
}

/// A person as the renderer sees them for the selected episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedNode {
    pub id: PersonId,
    pub label: String,
    pub picture_url: Option<String>,
    pub bio: Option<String>,
    /// Set iff the person is in a pairing this episode.
    pub border_color: Option<Color>,
    pub border_style: Option<BorderStyle>,
    pub deactivation_episode: Option<Episode>,
    pub is_inactive: bool,
}

/// A friend or enemy edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedEdge {
    pub id: EdgeId,
    pub source: PersonId,
    pub target: PersonId,
    pub kind: EdgeKind,
    pub emoji: Option<String>,
    pub context: Option<String>,
    pub image_url: Option<String>,
}

impl DerivedEdge {
    /// Same underlying relation, ignoring the synthetic id.
    pub fn same_relation(&self, other: &DerivedEdge) -> bool {
        self.kind == other.kind
            && self.source == other.source
            && self.target == other.target
            && self.emoji == other.emoji
            && self.context == other.context
            && self.image_url == other.image_url
    }

    pub fn touches(&self, id: PersonId) -> bool {
        self.source == id || self.target == id
    }
}

/// Counts over one derived model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub inactive_nodes: usize,
    pub paired_nodes: usize,
    pub friend_edges: usize,
    pub enemy_edges: usize,
    pub dangling_edges: usize,
}

/// One full derivation result. Replaced wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedGraph {
    pub episode: Episode,
    pub nodes: Vec<DerivedNode>,
    pub edges: Vec<DerivedEdge>,
}

impl DerivedGraph {
    pub fn empty(episode: Episode) -> Self {
        Self { episode, nodes: Vec::new(), edges: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: PersonId) -> Option<&DerivedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&DerivedEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: PersonId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Edges with an endpoint outside the node set.
    ///
    /// Only enemy edges can end up here: they ignore arrival.
    pub fn dangling_edges(&self) -> Vec<&DerivedEdge> {
        let present: HashSet<PersonId> = self.nodes.iter().map(|n| n.id).collect();
        self.edges
            .iter()
            .filter(|e| !present.contains(&e.source) || !present.contains(&e.target))
            .collect()
    }

    /// Edges incident to a person, in model order.
    pub fn edges_touching(&self, id: PersonId) -> SmallVec<[&DerivedEdge; 8]> {
        self.edges.iter().filter(|e| e.touches(id)).collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            inactive_nodes: self.nodes.iter().filter(|n| n.is_inactive).count(),
            paired_nodes: self.nodes.iter().filter(|n| n.border_color.is_some()).count(),
            friend_edges: self.edges.iter().filter(|e| e.kind == EdgeKind::Friend).count(),
            enemy_edges: self.edges.iter().filter(|e| e.kind == EdgeKind::Enemy).count(),
            dangling_edges: self.dangling_edges().len(),
        }
    }
}
