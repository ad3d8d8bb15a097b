//! Domain layer between `pawbowl-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the domain model and the roster business logic:
//!
//! - **[`RosterService`]** — Facade over the API client that applies the
//!   per-operation failure policy: read operations degrade to empty/absent
//!   results with a diagnostic log, mutations return errors for the caller
//!   to surface (inline status text for create, blocking alert for delete).
//!
//! - **[`RosterState`]** — The application state: the full player list
//!   (replaced wholesale on every refresh, never patched), the read-only
//!   team cache, and the current selection.
//!
//! - **Domain model** ([`model`]) — `Player`, `Team`, `PlayerStatus`, and
//!   the id newtypes, converted from the wire types in `pawbowl-api`.

pub mod config;
pub mod error;
pub mod model;
pub mod roster;
pub mod state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::RosterConfig;
pub use error::CoreError;
pub use model::{Player, PlayerDraft, PlayerId, PlayerStatus, Team, TeamId};
pub use roster::RosterService;
pub use state::RosterState;
