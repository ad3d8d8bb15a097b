// ── Player domain type ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use pawbowl_api::{NewPlayer, WirePlayer};

use super::team::TeamId;

/// Placeholder image used when an added player has no picture yet.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/100?text=New+Puppy";

// ── PlayerId ────────────────────────────────────────────────────────

/// Server-assigned player identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ── PlayerStatus ────────────────────────────────────────────────────

/// Roster status. New players always start on the bench.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
}

// ── Player ──────────────────────────────────────────────────────────

/// A roster entry: identity, attributes, and optional team assignment.
///
/// The `team` reference is not validated against the team cache — it may
/// dangle if the caches are stale, in which case display falls back to
/// "Unassigned".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub team: Option<TeamId>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<WirePlayer> for Player {
    fn from(wire: WirePlayer) -> Self {
        // Unknown status strings collapse to the default rather than
        // failing the whole list fetch.
        let status = wire.status.parse().unwrap_or_default();
        Self {
            id: PlayerId(wire.id),
            name: wire.name,
            breed: wire.breed,
            status,
            team: wire.team_id.map(TeamId),
            image_url: wire.image_url,
            created_at: wire.created_at,
        }
    }
}

// ── PlayerDraft ─────────────────────────────────────────────────────

/// User-supplied fields for a new player. Status and image are fixed by
/// the add flow: every new player starts on the bench with a
/// placeholder picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
    pub team: Option<TeamId>,
}

impl PlayerDraft {
    /// Build the wire payload for the creating request.
    pub fn to_wire(&self) -> NewPlayer {
        NewPlayer {
            name: self.name.clone(),
            breed: self.breed.clone(),
            status: PlayerStatus::Bench.to_string(),
            team_id: self.team.map(TeamId::as_i64),
            image_url: PLACEHOLDER_IMAGE_URL.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("bench".parse::<PlayerStatus>().unwrap(), PlayerStatus::Bench);
        assert_eq!("Field".parse::<PlayerStatus>().unwrap(), PlayerStatus::Field);
        assert!("benched".parse::<PlayerStatus>().is_err());
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(PlayerStatus::Bench.to_string(), "bench");
        assert_eq!(PlayerStatus::Field.to_string(), "field");
    }

    #[test]
    fn wire_conversion_defaults_unknown_status_to_bench() {
        let wire = WirePlayer {
            id: 5,
            name: "Fido".into(),
            breed: "Pug".into(),
            status: "mystery".into(),
            team_id: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        };
        let player = Player::from(wire);
        assert_eq!(player.status, PlayerStatus::Bench);
        assert_eq!(player.id, PlayerId(5));
    }

    #[test]
    fn draft_hardcodes_bench_and_placeholder() {
        let draft = PlayerDraft {
            name: "Fido".into(),
            breed: "Pug".into(),
            team: Some(TeamId(2)),
        };
        let wire = draft.to_wire();
        assert_eq!(wire.status, "bench");
        assert_eq!(wire.team_id, Some(2));
        assert_eq!(wire.image_url, PLACEHOLDER_IMAGE_URL);
    }
}
