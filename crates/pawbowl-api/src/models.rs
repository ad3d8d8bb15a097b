// Wire types for the Puppy Bowl API.
//
// Every response is wrapped in the `Envelope<T>` type. Fields use
// `#[serde(default)]` liberally because the service is inconsistent
// about field presence (e.g. `teamId` may be absent or null).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard Puppy Bowl API response envelope.
///
/// Every endpoint wraps its payload:
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": { "message": "..." } }
/// ```
// No `#[serde(default)]` here: serde already treats a missing `Option`
// field as `None`, and a field-level default would drag a `T: Default`
// bound into the derived impl.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiFailure>,
}

/// The `error` object of a failure envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiFailure {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ApiFailure {
    pub(crate) fn into_message(self) -> String {
        self.message
            .or(self.name)
            .unwrap_or_else(|| "unspecified API error".into())
    }
}

// ── Payload wrappers ────────────────────────────────────────────────
//
// The collection and single-item endpoints nest their payload one level
// deeper: `data.players`, `data.player`, `data.teams`.

#[derive(Debug, Deserialize)]
pub(crate) struct PlayersData {
    pub players: Vec<WirePlayer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerData {
    pub player: WirePlayer,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamsData {
    pub teams: Vec<WireTeam>,
}

// ── Player ───────────────────────────────────────────────────────────

/// Player record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlayer {
    pub id: i64,
    pub name: String,
    pub breed: String,
    /// Roster status: `"bench"` or `"field"`.
    pub status: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a player.
///
/// `team_id` is serialized as `null` when unset — the service treats a
/// null team as "unassigned".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub team_id: Option<i64>,
    pub image_url: String,
}

// ── Team ─────────────────────────────────────────────────────────────

/// Team record. Read-only from this client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub score: Option<i64>,
}
