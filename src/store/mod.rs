//! # Entity Store and snapshot sources
//!
//! `SnapshotSource` is the contract between cohort-graph and whatever fetches
//! the four relational tables. `EntityStore` keeps the loaded snapshot for
//! the session.
//!
//! ## Implementations
//!
//! | Source | Module | Description |
//! |--------|--------|-------------|
//! | `MemorySource` | `memory` | Hands out an in-process snapshot |
//! | `JsonSource` | `json` | Reads a JSON snapshot file |

pub mod memory;
pub mod json;

use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::*;
use crate::Result;

pub use json::JsonSource;
pub use memory::MemorySource;

// ============================================================================
// Snapshot
// ============================================================================

/// The four collections, as materialized by an acquisition source.
///
/// Missing collections decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub people: Vec<PersonEntity>,
    #[serde(default)]
    pub friendships: Vec<FriendshipRelation>,
    #[serde(default)]
    pub enmities: Vec<EnmityRelation>,
    #[serde(default)]
    pub pairings: Vec<PairingRelation>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_person(mut self, person: PersonEntity) -> Self {
        self.people.push(person);
        self
    }

    pub fn with_friendship(mut self, f: FriendshipRelation) -> Self {
        self.friendships.push(f);
        self
    }

    pub fn with_enmity(mut self, e: EnmityRelation) -> Self {
        self.enmities.push(e);
        self
    }

    pub fn with_pairing(mut self, p: PairingRelation) -> Self {
        self.pairings.push(p);
        self
    }

    pub fn person(&self, id: PersonId) -> Option<&PersonEntity> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.friendships.is_empty()
            && self.enmities.is_empty()
            && self.pairings.is_empty()
    }

    /// Latest episode anything in the snapshot refers to.
    pub fn last_episode(&self) -> Option<Episode> {
        let people = self
            .people
            .iter()
            .flat_map(|p| [p.arrival_episode, p.deactivation_episode])
            .flatten();
        let friendships = self.friendships.iter().map(|f| f.episode);
        let pairings = self.pairings.iter().map(|p| p.episode);
        people.chain(friendships).chain(pairings).max()
    }
}

// ============================================================================
// SnapshotSource Trait
// ============================================================================

/// Acquisition boundary. Implementations own transport, retries and
/// timeouts; the core only sees the finished snapshot or an error.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

// ============================================================================
// EntityStore
// ============================================================================

/// Holds the snapshot for the lifetime of a session.
///
/// Readers get a cheap `Arc` clone; a load swaps the whole snapshot and
/// bumps the revision.
pub struct EntityStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    snapshot: RwLock<Arc<Snapshot>>,
    loaded_at: RwLock<Option<DateTime<Utc>>>,
    revision: AtomicU64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                snapshot: RwLock::new(Arc::new(Snapshot::default())),
                loaded_at: RwLock::new(None),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the held snapshot. Returns the new revision.
    pub fn load(&self, snapshot: Snapshot) -> u64 {
        info!(
            people = snapshot.people.len(),
            friendships = snapshot.friendships.len(),
            enmities = snapshot.enmities.len(),
            pairings = snapshot.pairings.len(),
            "entity store loaded"
        );
        *self.inner.snapshot.write() = Arc::new(snapshot);
        *self.inner.loaded_at.write() = Some(Utc::now());
        self.inner.revision.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.snapshot.read().clone()
    }

    /// 0 until the first load.
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::Relaxed)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        *self.inner.loaded_at.read()
    }

    pub fn is_loaded(&self) -> bool {
        self.revision() > 0
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = EntityStore::new();
        assert!(!store.is_loaded());
        assert!(store.snapshot().is_empty());
        assert!(store.loaded_at().is_none());
    }

    #[test]
    fn test_load_bumps_revision() {
        let store = EntityStore::new();
        let rev = store.load(Snapshot::new().with_person(PersonEntity::new(1, "Ana")));
        assert_eq!(rev, 1);
        assert!(store.is_loaded());
        assert!(store.loaded_at().is_some());
        assert_eq!(store.snapshot().people.len(), 1);
    }

    #[test]
    fn test_readers_keep_old_snapshot() {
        let store = EntityStore::new();
        store.load(Snapshot::new().with_person(PersonEntity::new(1, "Ana")));
        let held = store.snapshot();
        store.load(Snapshot::new());
        assert_eq!(held.people.len(), 1);
        assert!(store.snapshot().people.is_empty());
    }

    #[test]
    fn test_snapshot_missing_collections_default_empty() {
        let snap = Snapshot::from_json_str(r#"{"people": [{"id": 1, "name": "Ana"}]}"#).unwrap();
        assert_eq!(snap.people.len(), 1);
        assert!(snap.friendships.is_empty());
        assert!(snap.enmities.is_empty());
        assert!(snap.pairings.is_empty());
        assert_eq!(snap.people[0].arrival_episode, None);
    }

    #[test]
    fn test_snapshot_malformed_optionals_are_absent() {
        let snap = Snapshot::from_json_str(
            r#"{"people": [{"id": 1, "name": "Ana", "picture_url": "", "arrival_episode": "2", "deactivation_episode": "gone"}]}"#,
        )
        .unwrap();
        let ana = &snap.people[0];
        assert_eq!(ana.picture_url, None);
        assert_eq!(ana.arrival_episode, Some(Episode(2)));
        assert_eq!(ana.deactivation_episode, None);
    }

    #[test]
    fn test_last_episode() {
        let snap = Snapshot::new()
            .with_person(PersonEntity::new(1, "Ana").arriving(1).deactivated(9))
            .with_friendship(FriendshipRelation::new(1, 2, 4))
            .with_pairing(PairingRelation::new(1, 2, 12));
        assert_eq!(snap.last_episode(), Some(Episode(12)));
        assert_eq!(Snapshot::new().last_episode(), None);
    }
}
