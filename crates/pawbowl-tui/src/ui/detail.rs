//! Detail panel — populated by a fresh per-player fetch, never from the
//! cached list.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use pawbowl_core::{Player, RosterState};

use crate::theme;

/// Shown when nothing is selected.
pub const SELECT_PROMPT: &str = "Select a puppy to see the details!";
/// Shown when the detail fetch came back empty or failed.
pub const FETCH_FAILED: &str = "Couldn't fetch that puppy's details.";

/// What the detail panel currently shows. Driven by the selection and
/// the in-flight re-fetch.
#[derive(Debug, Clone, Default)]
pub enum DetailPanel {
    /// No selection.
    #[default]
    Empty,
    /// Selection made, fetch in flight.
    Loading,
    /// Fetch failed or the player is gone.
    Missing,
    /// Fetch succeeded.
    Loaded(Box<Player>),
}

/// Render the detail panel into `area`.
pub fn render(frame: &mut Frame, area: Rect, panel: &DetailPanel, state: &RosterState) {
    let block = Block::default()
        .title(" Details ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match panel {
        DetailPanel::Empty => vec![Line::styled(SELECT_PROMPT, theme::key_hint())],
        DetailPanel::Loading => vec![Line::styled("Loading…", theme::key_hint())],
        DetailPanel::Missing => vec![Line::styled(FETCH_FAILED, theme::status_error())],
        DetailPanel::Loaded(player) => loaded_lines(player, state),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn loaded_lines<'a>(player: &'a Player, state: &'a RosterState) -> Vec<Line<'a>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, theme::key_hint()),
            Span::styled(value, theme::row()),
        ])
    };

    let mut lines = vec![
        Line::styled(player.name.as_str(), theme::title_style()),
        Line::raw(""),
        field("ID:      ", player.id.to_string()),
        field("Breed:   ", player.breed.clone()),
        field("Status:  ", player.status.to_string()),
        field("Team:    ", state.team_name(player.team).to_string()),
    ];
    if let Some(ref url) = player.image_url {
        lines.push(field("Image:   ", url.clone()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("d", theme::key_hint_key()),
        Span::styled(" remove from roster", theme::key_hint()),
    ]));
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use pawbowl_core::{Player, PlayerId, PlayerStatus, RosterState, Team, TeamId};

    use super::*;

    fn draw(panel: &DetailPanel, state: &RosterState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 14)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), panel, state))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_panel_prompts_for_selection() {
        let text = draw(&DetailPanel::Empty, &RosterState::new());
        assert!(text.contains(SELECT_PROMPT), "got:\n{text}");
    }

    #[test]
    fn missing_panel_shows_error() {
        let text = draw(&DetailPanel::Missing, &RosterState::new());
        assert!(text.contains(FETCH_FAILED), "got:\n{text}");
    }

    #[test]
    fn loaded_panel_resolves_team_name() {
        let mut state = RosterState::new();
        state.replace_teams(vec![Team {
            id: TeamId(3),
            name: "Ruff".into(),
            score: None,
        }]);
        let player = Player {
            id: PlayerId(7),
            name: "Biscuit".into(),
            breed: "Corgi".into(),
            status: PlayerStatus::Field,
            team: Some(TeamId(3)),
            image_url: None,
            created_at: None,
        };

        let text = draw(&DetailPanel::Loaded(Box::new(player)), &state);
        assert!(text.contains("Biscuit"), "got:\n{text}");
        assert!(text.contains("Corgi"), "got:\n{text}");
        assert!(text.contains("Ruff"), "got:\n{text}");
    }

    #[test]
    fn loaded_panel_falls_back_to_unassigned() {
        let player = Player {
            id: PlayerId(7),
            name: "Biscuit".into(),
            breed: "Corgi".into(),
            status: PlayerStatus::Bench,
            team: Some(TeamId(99)),
            image_url: None,
            created_at: None,
        };

        let text = draw(&DetailPanel::Loaded(Box::new(player)), &RosterState::new());
        assert!(text.contains("Unassigned"), "got:\n{text}");
    }
}
