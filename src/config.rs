//! View configuration.

use serde::{Deserialize, Serialize};

use crate::engine::{DeriveOptions, EnmityVisibility};
use crate::model::{Episode, Palette};
use crate::{Error, Result};

/// Settings for one graph view. Every field has a default, so `{}` is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub palette: Palette,
    pub enmity_visibility: EnmityVisibility,
    /// Episode shown when the view opens.
    pub initial_episode: Episode,
    /// Last episode the selector steps to.
    pub last_episode: Episode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            enmity_visibility: EnmityVisibility::Global,
            initial_episode: Episode::FIRST,
            last_episode: Episode(17),
        }
    }
}

impl ViewConfig {
    /// Parse and validate.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: ViewConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_episode < Episode::FIRST {
            return Err(Error::Config("initial_episode must be at least 1".into()));
        }
        if self.last_episode < self.initial_episode {
            return Err(Error::Config(format!(
                "last_episode {} precedes initial_episode {}",
                self.last_episode, self.initial_episode
            )));
        }
        Ok(())
    }

    pub fn derive_options(&self) -> DeriveOptions {
        DeriveOptions {
            palette: self.palette.clone(),
            enmity_visibility: self.enmity_visibility,
        }
    }
}
