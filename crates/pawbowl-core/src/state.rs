// ── Roster application state ──
//
// One owned struct instead of scattered globals, so update and render
// logic stay pure functions over it and unit tests never need a live
// rendering surface or network.

use tracing::debug;

use crate::model::{Player, PlayerId, Team, TeamId};

/// Display name used when a player's team reference has no match in the
/// team cache (unassigned or dangling).
pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// The whole application state: the player list, the team cache, and
/// the current selection.
///
/// The player list is the single source of truth for rendering. It is
/// replaced wholesale after every mutating operation — never patched
/// incrementally. The team cache is replaced once at startup and
/// read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    players: Vec<Player>,
    teams: Vec<Team>,
    selected: Option<PlayerId>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn selected(&self) -> Option<PlayerId> {
        self.selected
    }

    /// Look up a player in the cached list.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The currently selected player, if the selection is set and still
    /// present in the cached list.
    pub fn selected_player(&self) -> Option<&Player> {
        self.selected.and_then(|id| self.player(id))
    }

    /// Index of the selected player within the roster order.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.players.iter().position(|p| p.id == id))
    }

    /// Resolve a team reference to its display name, falling back to
    /// [`UNASSIGNED_TEAM`] when the reference is absent or dangles.
    pub fn team_name(&self, team: Option<TeamId>) -> &str {
        team.and_then(|id| self.teams.iter().find(|t| t.id == id))
            .map_or(UNASSIGNED_TEAM, |t| t.name.as_str())
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Replace the player list wholesale with a fresh fetch result.
    ///
    /// If the new list no longer contains the selected id (e.g. the
    /// player was deleted elsewhere between refreshes), the selection is
    /// cleared rather than left pointing at a ghost.
    pub fn replace_players(&mut self, players: Vec<Player>) {
        self.players = players;
        if let Some(id) = self.selected {
            if self.player(id).is_none() {
                debug!(%id, "selected player absent from refreshed list, clearing selection");
                self.selected = None;
            }
        }
    }

    /// Replace the team cache wholesale.
    pub fn replace_teams(&mut self, teams: Vec<Team>) {
        self.teams = teams;
    }

    /// Select a player. Selecting an id absent from the list is allowed
    /// (the detail view re-fetches by id anyway) but pointless; callers
    /// normally pass ids straight from the rendered roster.
    pub fn select(&mut self, id: PlayerId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Clear the selection iff it matches `id`. Used after a successful
    /// delete so an unrelated selection survives.
    pub fn deselect_if(&mut self, id: PlayerId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::PlayerStatus;

    fn player(id: i64, name: &str, team: Option<i64>) -> Player {
        Player {
            id: PlayerId(id),
            name: name.into(),
            breed: "Pug".into(),
            status: PlayerStatus::Bench,
            team: team.map(TeamId),
            image_url: None,
            created_at: None,
        }
    }

    fn team(id: i64, name: &str) -> Team {
        Team {
            id: TeamId(id),
            name: name.into(),
            score: None,
        }
    }

    #[test]
    fn replace_players_is_wholesale() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido", None), player(2, "Rex", None)]);
        assert_eq!(state.players().len(), 2);

        // A second replacement does not merge with the prior list.
        state.replace_players(vec![player(3, "Biscuit", None)]);
        assert_eq!(state.players().len(), 1);
        assert_eq!(state.players()[0].id, PlayerId(3));
        assert!(state.player(PlayerId(1)).is_none());
    }

    #[test]
    fn selection_survives_refresh_when_still_present() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido", None), player(2, "Rex", None)]);
        state.select(PlayerId(2));

        state.replace_players(vec![player(2, "Rex", None), player(3, "Biscuit", None)]);
        assert_eq!(state.selected(), Some(PlayerId(2)));
        assert_eq!(state.selected_player().unwrap().name, "Rex");
    }

    #[test]
    fn selection_cleared_when_refresh_drops_it() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido", None)]);
        state.select(PlayerId(1));

        state.replace_players(vec![player(2, "Rex", None)]);
        assert_eq!(state.selected(), None);
        assert!(state.selected_player().is_none());
    }

    #[test]
    fn deselect_if_only_clears_matching_id() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido", None), player(2, "Rex", None)]);
        state.select(PlayerId(1));

        state.deselect_if(PlayerId(2));
        assert_eq!(state.selected(), Some(PlayerId(1)));

        state.deselect_if(PlayerId(1));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn team_name_resolves_through_cache() {
        let mut state = RosterState::new();
        state.replace_teams(vec![team(1, "Ruff"), team(2, "Fluff")]);

        assert_eq!(state.team_name(Some(TeamId(2))), "Fluff");
        assert_eq!(state.team_name(None), UNASSIGNED_TEAM);
        // Dangling reference falls back rather than erroring.
        assert_eq!(state.team_name(Some(TeamId(99))), UNASSIGNED_TEAM);
    }

    #[test]
    fn selected_index_follows_roster_order() {
        let mut state = RosterState::new();
        state.replace_players(vec![
            player(10, "Fido", None),
            player(20, "Rex", None),
            player(30, "Biscuit", None),
        ]);

        assert_eq!(state.selected_index(), None);
        state.select(PlayerId(30));
        assert_eq!(state.selected_index(), Some(2));
    }
}
