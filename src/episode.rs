//! Episode selector state.
//!
//! Holds the selected episode. It changes only through explicit calls;
//! every call reports whether the value actually moved so the session can
//! skip redundant recomputation.

use serde::{Deserialize, Serialize};

use crate::model::Episode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSelector {
    current: Episode,
    /// Last episode offered for stepping. Not a bound on `select`.
    last: Episode,
}

impl EpisodeSelector {
    pub fn new(current: Episode, last: Episode) -> Self {
        Self { current, last }
    }

    pub fn current(&self) -> Episode {
        self.current
    }

    pub fn last(&self) -> Episode {
        self.last
    }

    /// Jump to any episode.
    pub fn select(&mut self, episode: Episode) -> bool {
        let changed = self.current != episode;
        self.current = episode;
        changed
    }

    /// Step forward, stopping at `last`.
    pub fn next(&mut self) -> bool {
        if self.current >= self.last {
            return false;
        }
        self.select(self.current.succ())
    }

    /// Step back, stopping at the first episode.
    pub fn previous(&mut self) -> bool {
        if self.current <= Episode::FIRST {
            return false;
        }
        self.select(self.current.pred())
    }

    /// Episodes a selector UI offers, `1..=last`.
    pub fn episodes(&self) -> impl Iterator<Item = Episode> {
        (Episode::FIRST.0..=self.last.0).map(Episode)
    }
}

impl Default for EpisodeSelector {
    fn default() -> Self {
        Self::new(Episode::FIRST, Episode(17))
    }
}
