//! In-memory snapshot source.
//!
//! Reference implementation of `SnapshotSource`. Use it for tests and for
//! hosts that already hold the four collections.

use async_trait::async_trait;

use super::{Snapshot, SnapshotSource};
use crate::Result;

pub struct MemorySource {
    snapshot: Snapshot,
}

impl MemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for MemorySource {
    async fn fetch(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
