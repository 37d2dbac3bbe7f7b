//! Pairing color assignment.
//!
//! Pairings of the selected episode are walked in input order; the i-th
//! one paints both members with `palette[i mod len]`. A person in two
//! pairings keeps the later color.

use hashbrown::HashMap;

use crate::model::{Color, Episode, PairingRelation, Palette, PersonId};

/// PersonId → border color for one episode. Unpaired people are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: HashMap<PersonId, Color>,
}

impl ColorAssignment {
    pub fn get(&self, id: PersonId) -> Option<&Color> {
        self.colors.get(&id)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &Color)> {
        self.colors.iter()
    }
}

pub fn assign_colors(
    pairings: &[PairingRelation],
    episode: Episode,
    palette: &Palette,
) -> ColorAssignment {
    let mut colors = HashMap::new();
    for (i, pairing) in pairings.iter().filter(|p| p.episode == episode).enumerate() {
        let color = palette.cycle(i);
        for member in pairing.members() {
            // last write wins
            colors.insert(member, color.clone());
        }
    }
    ColorAssignment { colors }
}
