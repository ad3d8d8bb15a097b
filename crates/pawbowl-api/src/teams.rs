// Team endpoints
//
// Teams are read-only from this client's perspective; they exist for
// display and for populating the add-player team picker.

use tracing::debug;

use crate::client::RosterClient;
use crate::error::Error;
use crate::models::{TeamsData, WireTeam};

impl RosterClient {
    /// List all teams in the cohort, in service order.
    ///
    /// `GET /api/{cohort}/teams`
    pub async fn list_teams(&self) -> Result<Vec<WireTeam>, Error> {
        let url = self.api_url("teams")?;
        debug!("listing teams");
        let data: TeamsData = self.get(url).await?;
        Ok(data.teams)
    }
}
