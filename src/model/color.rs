//! Border colors and the pairing palette.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A CSS color string handed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color(s.to_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Smallest palette accepted.
pub const MIN_PALETTE_LEN: usize = 8;

pub const DEFAULT_PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231",
    "#911eb4", "#46f0f0", "#f032e6", "#bcf60c", "#fabebe",
];

/// Ordered, cycling set of distinct colors.
///
/// Collisions past the palette length are accepted, not avoided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = impl Into<Color>>) -> Result<Self> {
        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        if colors.len() < MIN_PALETTE_LEN {
            return Err(Error::Config(format!(
                "palette needs at least {MIN_PALETTE_LEN} colors, got {}",
                colors.len()
            )));
        }
        for (i, c) in colors.iter().enumerate() {
            if colors[..i].contains(c) {
                return Err(Error::Config(format!("palette repeats color {c}")));
            }
        }
        Ok(Self { colors })
    }

    /// Color for the `index`-th pairing, wrapping around.
    pub fn cycle(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| Color::from(*c)).collect(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}
