// ── Team domain type ──

use std::fmt;

use serde::{Deserialize, Serialize};

use pawbowl_api::WireTeam;

/// Server-assigned team identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A named grouping entity referenced by players. Read-only here;
/// cached for display and the add-form team picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub score: Option<i64>,
}

impl From<WireTeam> for Team {
    fn from(wire: WireTeam) -> Self {
        Self {
            id: TeamId(wire.id),
            name: wire.name,
            score: wire.score,
        }
    }
}
