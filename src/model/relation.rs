//! Relations between people: friendships, enmities, pairings.
//!
//! All three are unordered pairs. Only friendships and enmities become
//! edges; pairings drive border color.

use serde::{Deserialize, Serialize};

use super::{lenient, Episode, PersonId};

/// A friendship, visible only in the single episode it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipRelation {
    pub person_a: PersonId,
    pub person_b: PersonId,
    pub episode: Episode,
    #[serde(default, deserialize_with = "lenient::non_empty_string")]
    pub emoji: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_string")]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty_string")]
    pub image_url: Option<String>,
}

impl FriendshipRelation {
    pub fn new(a: u64, b: u64, episode: u32) -> Self {
        Self {
            person_a: PersonId(a),
            person_b: PersonId(b),
            episode: Episode(episode),
            emoji: None,
            context: None,
            image_url: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn involves(&self, id: PersonId) -> bool {
        self.person_a == id || self.person_b == id
    }
}

/// An enmity. Carries no episode: it is visible in every episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnmityRelation {
    pub person_a: PersonId,
    pub person_b: PersonId,
    pub emoji: String,
    pub context: String,
}

impl EnmityRelation {
    pub fn new(a: u64, b: u64, emoji: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            person_a: PersonId(a),
            person_b: PersonId(b),
            emoji: emoji.into(),
            context: context.into(),
        }
    }

    pub fn involves(&self, id: PersonId) -> bool {
        self.person_a == id || self.person_b == id
    }
}

/// Two people sharing a color cue for one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairingRelation {
    pub person_a: PersonId,
    pub person_b: PersonId,
    pub episode: Episode,
}

impl PairingRelation {
    pub fn new(a: u64, b: u64, episode: u32) -> Self {
        Self {
            person_a: PersonId(a),
            person_b: PersonId(b),
            episode: Episode(episode),
        }
    }

    pub fn members(&self) -> [PersonId; 2] {
        [self.person_a, self.person_b]
    }
}
