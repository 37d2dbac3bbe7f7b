//! Person entity and the episode timeline.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Stable person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numbered episode. Episodes are totally ordered; `Episode(0)` precedes
/// every real episode and therefore shows nothing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Episode(pub u32);

impl Episode {
    pub const FIRST: Episode = Episode(1);

    pub fn number(self) -> u32 {
        self.0
    }

    /// The following episode (saturating).
    pub fn succ(self) -> Episode {
        Episode(self.0.saturating_add(1))
    }

    /// The preceding episode, never below `Episode(0)`.
    pub fn pred(self) -> Episode {
        Episode(self.0.saturating_sub(1))
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Episode {
    fn from(n: u32) -> Self {
        Episode(n)
    }
}

/// A member of the cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEntity {
    pub id: PersonId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::non_empty_string")]
    pub picture_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_string")]
    pub bio: Option<String>,
    /// First episode in which the person is visible. `None` means never.
    #[serde(default, deserialize_with = "lenient::episode")]
    pub arrival_episode: Option<Episode>,
    /// Episode in which the person is eliminated. `None` means never.
    #[serde(default, deserialize_with = "lenient::episode")]
    pub deactivation_episode: Option<Episode>,
}

impl PersonEntity {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            picture_url: None,
            bio: None,
            arrival_episode: None,
            deactivation_episode: None,
        }
    }

    pub fn arriving(mut self, episode: u32) -> Self {
        self.arrival_episode = Some(Episode(episode));
        self
    }

    pub fn deactivated(mut self, episode: u32) -> Self {
        self.deactivation_episode = Some(Episode(episode));
        self
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.picture_url = Some(url.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Has this person arrived by `episode`?
    pub fn is_visible_in(&self, episode: Episode) -> bool {
        self.arrival_episode.is_some_and(|arrival| arrival <= episode)
    }

    /// Has this person been eliminated by `episode`?
    pub fn is_inactive_in(&self, episode: Episode) -> bool {
        self.deactivation_episode.is_some_and(|gone| gone <= episode)
    }
}
