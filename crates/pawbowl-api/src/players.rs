// Player endpoints
//
// All player operations live under the cohort-scoped `players` path.

use serde_json::Value;
use tracing::debug;

use crate::client::RosterClient;
use crate::error::Error;
use crate::models::{NewPlayer, PlayerData, PlayersData, WirePlayer};

impl RosterClient {
    /// List all players in the cohort, in service order.
    ///
    /// `GET /api/{cohort}/players`
    pub async fn list_players(&self) -> Result<Vec<WirePlayer>, Error> {
        let url = self.api_url("players")?;
        debug!("listing players");
        let data: PlayersData = self.get(url).await?;
        Ok(data.players)
    }

    /// Fetch a single player by id.
    ///
    /// `GET /api/{cohort}/players/{id}`
    pub async fn get_player(&self, id: i64) -> Result<WirePlayer, Error> {
        let url = self.api_url(&format!("players/{id}"))?;
        debug!(id, "fetching player");
        let data: PlayerData = self.get(url).await?;
        Ok(data.player)
    }

    /// Create a new player.
    ///
    /// `POST /api/{cohort}/players` with a [`NewPlayer`] body. The
    /// created record (with its server-assigned id) is returned.
    pub async fn create_player(&self, player: &NewPlayer) -> Result<WirePlayer, Error> {
        let url = self.api_url("players")?;
        debug!(name = %player.name, "creating player");
        let data: PlayerData = self.post(url, player).await?;
        Ok(data.player)
    }

    /// Remove a player from the roster.
    ///
    /// `DELETE /api/{cohort}/players/{id}`
    pub async fn delete_player(&self, id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("players/{id}"))?;
        debug!(id, "deleting player");
        let _: Option<Value> = self.delete(url).await?;
        Ok(())
    }
}
