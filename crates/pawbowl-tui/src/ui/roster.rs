//! Roster panel — one card per player, highlighted iff selected.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use pawbowl_core::{Player, RosterState};

use crate::theme;

/// Shown when the fetched player list is empty.
pub const EMPTY_ROSTER_MESSAGE: &str = "No puppies currently on the roster!";

/// Render the roster list into `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &RosterState, focused: bool) {
    let border = if focused {
        theme::border_focused()
    } else {
        theme::border_default()
    };
    let block = Block::default()
        .title(format!(" Roster ({}) ", state.players().len()))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.players().is_empty() {
        let empty = Paragraph::new(EMPTY_ROSTER_MESSAGE)
            .style(theme::row())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = state
        .players()
        .iter()
        .map(|p| card(p, state))
        .collect();
    frame.render_widget(List::new(items), inner);
}

/// One roster card: marker, name, breed, team.
fn card<'a>(player: &'a Player, state: &'a RosterState) -> ListItem<'a> {
    let selected = state.selected() == Some(player.id);
    let marker = if selected { "▶ " } else { "  " };
    let style = if selected {
        theme::row_selected()
    } else {
        theme::row()
    };

    let line = Line::from(vec![
        Span::raw(marker),
        Span::styled(player.name.as_str(), style),
        Span::styled(format!("  {}", player.breed), theme::key_hint()),
        Span::styled(
            format!("  [{}]", state.team_name(player.team)),
            theme::key_hint(),
        ),
    ]);
    ListItem::new(line)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use pawbowl_core::{Player, PlayerId, PlayerStatus, RosterState};

    use super::*;

    fn player(id: i64, name: &str) -> Player {
        Player {
            id: PlayerId(id),
            name: name.into(),
            breed: "Pug".into(),
            status: PlayerStatus::Bench,
            team: None,
            image_url: None,
            created_at: None,
        }
    }

    fn draw(state: &RosterState) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), state, true))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
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
    fn empty_roster_shows_exact_message() {
        let state = RosterState::new();
        let text = buffer_text(&draw(&state));
        assert!(text.contains(EMPTY_ROSTER_MESSAGE), "got:\n{text}");
    }

    #[test]
    fn one_card_per_player() {
        let mut state = RosterState::new();
        state.replace_players(vec![
            player(1, "Fido"),
            player(2, "Rex"),
            player(3, "Biscuit"),
        ]);
        let text = buffer_text(&draw(&state));
        for name in ["Fido", "Rex", "Biscuit"] {
            assert_eq!(text.matches(name).count(), 1, "got:\n{text}");
        }
    }

    #[test]
    fn selected_marker_follows_selection() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido"), player(2, "Rex")]);
        state.select(PlayerId(2));

        let text = buffer_text(&draw(&state));
        let marked: Vec<&str> = text
            .lines()
            .filter(|l| l.contains('▶'))
            .collect();
        assert_eq!(marked.len(), 1, "got:\n{text}");
        assert!(marked[0].contains("Rex"), "got:\n{text}");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut state = RosterState::new();
        state.replace_players(vec![player(1, "Fido"), player(2, "Rex")]);
        state.select(PlayerId(1));

        let first = draw(&state);
        let second = draw(&state);
        assert_eq!(first, second);
    }
}
