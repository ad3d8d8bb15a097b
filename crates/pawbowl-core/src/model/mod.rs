//! Canonical domain types, converted from the wire types in `pawbowl-api`.

pub mod player;
pub mod team;

pub use player::{Player, PlayerDraft, PlayerId, PlayerStatus};
pub use team::{Team, TeamId};
