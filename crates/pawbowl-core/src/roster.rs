// ── Roster service ──
//
// Facade over the API client that applies the per-operation failure
// policy. Read operations never propagate errors: they log and degrade
// to empty/absent results so the UI keeps rendering. Mutations return
// errors for the caller to surface (inline status text for create, a
// blocking alert for delete). No operation retries; no failure is
// fatal to the running application.

use tracing::{debug, error};

use pawbowl_api::{RosterClient, TransportConfig};

use crate::config::RosterConfig;
use crate::error::CoreError;
use crate::model::{Player, PlayerDraft, PlayerId, Team};

/// The main entry point for consumers.
pub struct RosterService {
    client: RosterClient,
}

impl RosterService {
    /// Create a service from configuration.
    pub fn new(config: &RosterConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = RosterClient::new(config.url.clone(), config.cohort.clone(), &transport)?;
        Ok(Self { client })
    }

    /// Create a service over an existing client (used by tests).
    pub fn with_client(client: RosterClient) -> Self {
        Self { client }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &RosterClient {
        &self.client
    }

    // ── Strict reads: error to the caller ────────────────────────────

    /// Fetch all teams, surfacing failures. Scripting surfaces (the CLI)
    /// want the error; interactive surfaces use [`Self::load_teams`].
    pub async fn teams(&self) -> Result<Vec<Team>, CoreError> {
        let teams = self.client.list_teams().await?;
        Ok(teams.into_iter().map(Team::from).collect())
    }

    /// Fetch the full player list, surfacing failures.
    pub async fn players(&self) -> Result<Vec<Player>, CoreError> {
        let players = self.client.list_players().await?;
        Ok(players.into_iter().map(Player::from).collect())
    }

    /// Fetch one player by id, surfacing failures. An absent player is
    /// [`CoreError::PlayerNotFound`] rather than a generic rejection.
    pub async fn player(&self, id: PlayerId) -> Result<Player, CoreError> {
        match self.client.get_player(id.as_i64()).await {
            Ok(player) => Ok(Player::from(player)),
            Err(e) if e.is_not_found() => Err(CoreError::PlayerNotFound { id: id.as_i64() }),
            Err(e) => Err(e.into()),
        }
    }

    // ── Reads: degrade silently ──────────────────────────────────────

    /// Fetch all teams. Failure logs and yields an empty list — the UI
    /// renders without a team picker rather than refusing to start.
    pub async fn load_teams(&self) -> Vec<Team> {
        match self.teams().await {
            Ok(teams) => teams,
            Err(e) => {
                error!(error = %e, "team fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch the full player list. Failure logs and yields an empty
    /// list; the caller replaces the cached list wholesale either way.
    pub async fn load_players(&self) -> Vec<Player> {
        match self.players().await {
            Ok(players) => players,
            Err(e) => {
                error!(error = %e, "player list fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch one player by id, fresh from the service (the detail view
    /// deliberately does not trust the cached list). Absent or failed →
    /// `None`, logged.
    pub async fn fetch_player(&self, id: PlayerId) -> Option<Player> {
        match self.player(id).await {
            Ok(player) => Some(player),
            Err(CoreError::PlayerNotFound { .. }) => {
                debug!(%id, "player not found");
                None
            }
            Err(e) => {
                error!(%id, error = %e, "player fetch failed");
                None
            }
        }
    }

    // ── Mutations: caller surfaces the error ─────────────────────────

    /// Create a player from a draft. The returned error's message is the
    /// server's rejection text when the envelope carried one.
    pub async fn add_player(&self, draft: &PlayerDraft) -> Result<Player, CoreError> {
        let created = self.client.create_player(&draft.to_wire()).await?;
        debug!(id = created.id, name = %created.name, "player created");
        Ok(Player::from(created))
    }

    /// Remove a player by id.
    pub async fn remove_player(&self, id: PlayerId) -> Result<(), CoreError> {
        self.client.delete_player(id.as_i64()).await?;
        debug!(%id, "player removed");
        Ok(())
    }
}
