//! # cohort-graph: episode-filtered social relationship graph
//!
//! Derives a renderable node/edge model from four flat tables (people,
//! friendships, enmities, pairings) and a selected episode, so a viewer
//! can browse who is present, paired, friendly or hostile without seeing
//! anything from later episodes.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `engine::derive_graph` is a total function, no state, no I/O
//! 2. **Clean DTOs**: `PersonEntity`, `DerivedNode`, `DerivedEdge` cross all boundaries
//! 3. **Whole-model replacement**: every change recomputes from scratch
//! 4. **Traits at the seams**: `SnapshotSource` for acquisition, `RenderBoundary` for drawing
//!
//! ## Quick Start
//!
//! ```rust
//! use cohort_graph::{CohortGraph, Episode, LatestModel, PersonEntity, Snapshot, ViewConfig};
//!
//! let mut view = CohortGraph::new(ViewConfig::default(), LatestModel::new());
//! view.load_snapshot(
//!     Snapshot::new()
//!         .with_person(PersonEntity::new(1, "Ana").arriving(1))
//!         .with_person(PersonEntity::new(2, "Ben").arriving(2)),
//! );
//! assert_eq!(view.renderer().graph().unwrap().nodes.len(), 1);
//!
//! view.select_episode(Episode(2));
//! assert_eq!(view.renderer().graph().unwrap().nodes.len(), 2);
//! ```
//!
//! ## Snapshot Sources
//!
//! | Source | Description |
//! |--------|-------------|
//! | `MemorySource` | In-process snapshot for testing/embedding |
//! | `JsonSource` | JSON file with the four collections |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod engine;
pub mod store;
pub mod episode;
pub mod selection;
pub mod render;
pub mod config;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    PersonEntity, PersonId, Episode,
    FriendshipRelation, EnmityRelation, PairingRelation,
    DerivedNode, DerivedEdge, DerivedGraph, EdgeId, EdgeKind, BorderStyle, GraphStats,
    Color, Palette,
};

// ============================================================================
// Re-exports: Engine, store, state
// ============================================================================

pub use engine::{derive_graph, derive_graph_with, assign_colors, DeriveOptions, EnmityVisibility};
pub use store::{EntityStore, Snapshot, SnapshotSource, MemorySource, JsonSource};
pub use episode::EpisodeSelector;
pub use selection::{Selection, SelectionState};
pub use render::{RenderBoundary, RenderEvent, LatestModel};
pub use config::ViewConfig;

use tracing::warn;

// ============================================================================
// Top-level view handle
// ============================================================================

/// The primary entry point. A `CohortGraph` owns the entity store, the
/// episode selector and the selection cell for one view, and hands each
/// recomputed model to its renderer.
pub struct CohortGraph<R: RenderBoundary> {
    config: ViewConfig,
    options: DeriveOptions,
    store: EntityStore,
    selector: EpisodeSelector,
    selection: SelectionState,
    renderer: R,
}

impl<R: RenderBoundary> CohortGraph<R> {
    /// Create a view over an empty store. The renderer immediately receives
    /// the (empty) model for the initial episode.
    pub fn new(config: ViewConfig, renderer: R) -> Self {
        let options = config.derive_options();
        let selector = EpisodeSelector::new(config.initial_episode, config.last_episode);
        let mut view = Self {
            config,
            options,
            store: EntityStore::new(),
            selector,
            selection: SelectionState::new(),
            renderer,
        };
        view.refresh();
        view
    }

    /// Fetch a snapshot and recompute.
    ///
    /// On failure the store keeps what it had (empty on first load), the
    /// view is still recomputed, and the error is returned for the host.
    pub async fn load<S: SnapshotSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let fetched = source.fetch().await;
        let outcome = match fetched {
            Ok(snapshot) => {
                self.store.load(snapshot);
                Ok(())
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "snapshot acquisition failed");
                Err(e)
            }
        };
        self.refresh();
        outcome
    }

    /// Replace the store contents and recompute.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        self.store.load(snapshot);
        self.refresh();
    }

    /// Jump to an episode. Recomputes only if it changed.
    pub fn select_episode(&mut self, episode: Episode) -> bool {
        let changed = self.selector.select(episode);
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn next_episode(&mut self) -> bool {
        let changed = self.selector.next();
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn previous_episode(&mut self) -> bool {
        let changed = self.selector.previous();
        if changed {
            self.refresh();
        }
        changed
    }

    /// Route a renderer event into the selection cell.
    pub fn handle(&mut self, event: RenderEvent) -> &Selection {
        self.selection.apply(event);
        self.selection.current()
    }

    /// Select a node of the current model by person id.
    pub fn select_node(&mut self, id: PersonId) -> Result<&Selection> {
        let node = self
            .derive()
            .nodes
            .into_iter()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Person {id} in episode {}", self.episode())))?;
        Ok(self.handle(RenderEvent::NodeTapped(node)))
    }

    /// Select an edge of the current model. Edge ids are only meaningful
    /// for the episode they were derived in.
    pub fn select_edge(&mut self, id: EdgeId) -> Result<&Selection> {
        let edge = self
            .derive()
            .edges
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Edge {id} in episode {}", self.episode())))?;
        Ok(self.handle(RenderEvent::EdgeTapped(edge)))
    }

    /// Compute the model for the current episode without presenting it.
    pub fn derive(&self) -> DerivedGraph {
        engine::derive_snapshot(&self.store.snapshot(), self.selector.current(), &self.options)
    }

    pub fn episode(&self) -> Episode {
        self.selector.current()
    }

    pub fn selector(&self) -> &EpisodeSelector {
        &self.selector
    }

    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn refresh(&mut self) {
        let graph = self.derive();
        self.renderer.present(graph);
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
