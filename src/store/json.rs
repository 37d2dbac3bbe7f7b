//! JSON file snapshot source.
//!
//! The file holds one object with `people`, `friendships`, `enmities` and
//! `pairings` arrays, the same shape `Snapshot` serializes to.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{Snapshot, SnapshotSource};
use crate::{Error, Result};

pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for JsonSource {
    async fn fetch(&self) -> Result<Snapshot> {
        let file = File::open(&self.path)
            .map_err(|e| Error::Source(format!("{}: {e}", self.path.display())))?;
        Snapshot::from_reader(BufReader::new(file))
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Episode, PersonId};
    use std::io::Write;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cohort-graph-{tag}-{}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let path = temp_path("read");
        let mut f = File::create(&path).unwrap();
        write!(
            f,
            r#"{{
                "people": [{{"id": 1, "name": "Ana", "arrival_episode": 1}}],
                "pairings": [{{"person_a": 1, "person_b": 2, "episode": 1}}]
            }}"#
        )
        .unwrap();
        drop(f);

        let snap = JsonSource::new(&path).fetch().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(snap.people[0].id, PersonId(1));
        assert_eq!(snap.people[0].arrival_episode, Some(Episode(1)));
        assert_eq!(snap.pairings.len(), 1);
        assert!(snap.friendships.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_source_error() {
        let source = JsonSource::new(temp_path("missing"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }

    #[tokio::test]
    async fn test_bad_json_is_json_error() {
        let path = temp_path("bad");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonSource::new(&path).fetch().await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::Json(_)));
    }
}
