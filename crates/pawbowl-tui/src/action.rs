//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;

use pawbowl_core::{Player, PlayerId, Team};

/// Pending confirmation before a destructive operation.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    RemovePlayer { id: PlayerId, name: String },
}

impl fmt::Display for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemovePlayer { name, .. } => {
                write!(f, "Remove {name} from the roster? This cannot be undone.")
            }
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize,

    // ── Data Events (from background fetch tasks) ─────────────────
    TeamsLoaded(Vec<Team>),
    PlayersLoaded(Vec<Player>),
    DetailLoaded(PlayerId, Box<Option<Player>>),

    // ── Roster navigation ─────────────────────────────────────────
    SelectNext,
    SelectPrev,
    ClearSelection,
    Refresh,

    // ── Add form ──────────────────────────────────────────────────
    OpenForm,
    CloseForm,
    SubmitForm,
    CreateSucceeded(Box<Player>),
    CreateFailed(String),

    // ── Remove flow ───────────────────────────────────────────────
    RequestRemove(PlayerId),
    ConfirmYes,
    ConfirmNo,
    RemoveSucceeded(PlayerId),
    RemoveFailed(String),

    // ── Alert modal ───────────────────────────────────────────────
    DismissAlert,
}
