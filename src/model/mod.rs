//! # Cohort Graph Model
//!
//! Clean DTOs for the raw cohort data and for the derived render model.
//! Raw entities come in from a snapshot source; derived nodes and edges go
//! out to the render boundary.
//!
//! Design rule: NO renderer types, NO layout, NO I/O here.
//! This module is pure data: no state, no async.

pub mod person;
pub mod relation;
pub mod color;
pub mod derived;
pub(crate) mod lenient;

pub use person::{Episode, PersonEntity, PersonId};
pub use relation::{EnmityRelation, FriendshipRelation, PairingRelation};
pub use color::{Color, Palette, DEFAULT_PALETTE, MIN_PALETTE_LEN};
pub use derived::{
    BorderStyle, DerivedEdge, DerivedGraph, DerivedNode, EdgeId, EdgeKind, GraphStats,
};
