//! Graph derivation engine. Turns cohort data plus an episode into a
//! renderable node/edge model.
//!
//! The engine is a pure function. It holds no state between calls, performs
//! no I/O, and never fails: bad references are filtered, not reported as
//! errors.
//!
//! ## Visibility rules
//!
//! | Element | Included when |
//! |---------|---------------|
//! | Node | `arrival_episode` is set and `<= episode` |
//! | Friend edge | `episode` matches exactly and both endpoints are nodes |
//! | Enemy edge | both endpoints exist in the cohort (arrival ignored by default) and the node set is not empty |

pub mod colors;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::*;
use crate::store::Snapshot;

pub use colors::{assign_colors, ColorAssignment};

// ============================================================================
// Options
// ============================================================================

/// Which enemy edges survive derivation.
///
/// Enmities carry no episode. `Global` keeps an enemy edge whenever both
/// people exist, even if one of them has not arrived yet; such edges point
/// outside the node set and are reported by `DerivedGraph::dangling_edges`.
/// `Arrived` applies the friendship endpoint rule instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnmityVisibility {
    #[default]
    Global,
    Arrived,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    pub palette: Palette,
    pub enmity_visibility: EnmityVisibility,
}

// ============================================================================
// Edge id allocation
// ============================================================================

/// Per-kind counters scoped to a single derivation.
#[derive(Debug, Default)]
struct EdgeIds {
    friend: u32,
    enemy: u32,
}

impl EdgeIds {
    fn next(&mut self, kind: EdgeKind) -> EdgeId {
        let slot = match kind {
            EdgeKind::Friend => &mut self.friend,
            EdgeKind::Enemy => &mut self.enemy,
        };
        let id = EdgeId { kind, index: *slot };
        *slot += 1;
        id
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive the model for `episode` with default options.
pub fn derive_graph(
    people: &[PersonEntity],
    friendships: &[FriendshipRelation],
    enmities: &[EnmityRelation],
    pairings: &[PairingRelation],
    episode: Episode,
) -> DerivedGraph {
    derive_graph_with(people, friendships, enmities, pairings, episode, &DeriveOptions::default())
}

/// Derive the model for `episode` from a loaded snapshot.
pub fn derive_snapshot(snapshot: &Snapshot, episode: Episode, options: &DeriveOptions) -> DerivedGraph {
    derive_graph_with(
        &snapshot.people,
        &snapshot.friendships,
        &snapshot.enmities,
        &snapshot.pairings,
        episode,
        options,
    )
}

pub fn derive_graph_with(
    people: &[PersonEntity],
    friendships: &[FriendshipRelation],
    enmities: &[EnmityRelation],
    pairings: &[PairingRelation],
    episode: Episode,
    options: &DeriveOptions,
) -> DerivedGraph {
    let colors = assign_colors(pairings, episode, &options.palette);

    let nodes: Vec<DerivedNode> = people
        .iter()
        .filter(|p| p.is_visible_in(episode))
        .map(|p| derive_node(p, episode, &colors))
        .collect();

    let arrived: HashSet<PersonId> = nodes.iter().map(|n| n.id).collect();
    let known: HashSet<PersonId> = people.iter().map(|p| p.id).collect();

    let mut ids = EdgeIds::default();
    let mut edges = Vec::new();

    for f in friendships {
        if f.episode != episode
            || !arrived.contains(&f.person_a)
            || !arrived.contains(&f.person_b)
        {
            continue;
        }
        edges.push(DerivedEdge {
            id: ids.next(EdgeKind::Friend),
            source: f.person_a,
            target: f.person_b,
            kind: EdgeKind::Friend,
            emoji: f.emoji.clone(),
            context: f.context.clone(),
            image_url: f.image_url.clone(),
        });
    }

    let endpoints = match options.enmity_visibility {
        EnmityVisibility::Global => &known,
        EnmityVisibility::Arrived => &arrived,
    };
    let mut dangling = 0usize;
    // Nothing has aired yet: an empty cast shows no feuds either.
    let enmities = if nodes.is_empty() { &[][..] } else { enmities };
    for e in enmities {
        if !endpoints.contains(&e.person_a) || !endpoints.contains(&e.person_b) {
            continue;
        }
        if !arrived.contains(&e.person_a) || !arrived.contains(&e.person_b) {
            debug!(
                episode = episode.0,
                source = e.person_a.0,
                target = e.person_b.0,
                "enemy edge references a person not yet arrived"
            );
            dangling += 1;
        }
        edges.push(DerivedEdge {
            id: ids.next(EdgeKind::Enemy),
            source: e.person_a,
            target: e.person_b,
            kind: EdgeKind::Enemy,
            emoji: Some(e.emoji.clone()),
            context: Some(e.context.clone()),
            image_url: None,
        });
    }

    if dangling > 0 {
        warn!(
            episode = episode.0,
            dangling,
            "enemy edges point outside the visible node set"
        );
    }
    debug!(
        episode = episode.0,
        nodes = nodes.len(),
        friend_edges = ids.friend,
        enemy_edges = ids.enemy,
        "derived graph"
    );

    DerivedGraph { episode, nodes, edges }
}

fn derive_node(person: &PersonEntity, episode: Episode, colors: &ColorAssignment) -> DerivedNode {
    let border_color = colors.get(person.id).cloned();
    let border_style = border_color.as_ref().map(|_| BorderStyle::Solid);
    DerivedNode {
        id: person.id,
        label: person.name.clone(),
        picture_url: person.picture_url.clone(),
        bio: person.bio.clone(),
        border_color,
        border_style,
        deactivation_episode: person.deactivation_episode,
        is_inactive: person.is_inactive_in(episode),
    }
}

// ============================================================================
// Tests
// ============================================================================
