//! Add-player form — name/breed inputs plus a team picker cycling the
//! cached teams. Status is fixed to bench and the image to a placeholder
//! by the draft type; the form never asks for them.

use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use pawbowl_core::{PlayerDraft, RosterState, Team};

use crate::theme;

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Breed,
    Team,
}

/// Editable state of the add-player form.
#[derive(Debug, Default)]
pub struct AddForm {
    pub name: Input,
    pub breed: Input,
    /// Index into the cached team list; `None` means unassigned.
    pub team_index: Option<usize>,
    pub focus: FormField,
    /// Server rejection text, shown inline until the next submit.
    pub error: Option<String>,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next field (Tab order: name → breed → team).
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Breed,
            FormField::Breed => FormField::Team,
            FormField::Team => FormField::Name,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Team,
            FormField::Breed => FormField::Name,
            FormField::Team => FormField::Breed,
        };
    }

    /// Cycle the team picker forward: Unassigned → first team → … → last.
    pub fn team_next(&mut self, team_count: usize) {
        self.team_index = match self.team_index {
            None if team_count > 0 => Some(0),
            Some(i) if i + 1 < team_count => Some(i + 1),
            _ => None,
        };
    }

    pub fn team_prev(&mut self, team_count: usize) {
        self.team_index = match self.team_index {
            None if team_count > 0 => Some(team_count - 1),
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Feed a key press into the focused text input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let event = CrosstermEvent::Key(key);
        match self.focus {
            FormField::Name => {
                self.name.handle_event(&event);
            }
            FormField::Breed => {
                self.breed.handle_event(&event);
            }
            FormField::Team => {}
        }
    }

    /// Validate and build the submission draft.
    pub fn draft(&self, teams: &[Team]) -> Result<PlayerDraft, String> {
        let name = self.name.value().trim();
        let breed = self.breed.value().trim();
        if name.is_empty() || breed.is_empty() {
            return Err("Name and breed are required".into());
        }
        Ok(PlayerDraft {
            name: name.into(),
            breed: breed.into(),
            team: self.team_index.and_then(|i| teams.get(i)).map(|t| t.id),
        })
    }

    /// Display label for the current team choice.
    pub fn team_label<'a>(&self, teams: &'a [Team]) -> &'a str {
        self.team_index
            .and_then(|i| teams.get(i))
            .map_or("Unassigned", |t| t.name.as_str())
    }
}

/// Render the form as a centered overlay.
pub fn render(frame: &mut Frame, area: Rect, form: &AddForm, state: &RosterState) {
    let width = 44u16.min(area.width.saturating_sub(4));
    let height = 12u16.min(area.height.saturating_sub(4));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let popup = Rect::new(area.x + x, area.y + y, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Add a puppy ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::vertical([
        Constraint::Length(1), // name
        Constraint::Length(1), // breed
        Constraint::Length(1), // team
        Constraint::Length(1), // spacer
        Constraint::Length(1), // error
        Constraint::Min(0),
        Constraint::Length(1), // hints
    ])
    .split(inner);

    frame.render_widget(field_line("Name:  ", form.name.value(), form.focus == FormField::Name), rows[0]);
    frame.render_widget(field_line("Breed: ", form.breed.value(), form.focus == FormField::Breed), rows[1]);
    frame.render_widget(
        field_line(
            "Team:  ",
            &format!("◂ {} ▸", form.team_label(state.teams())),
            form.focus == FormField::Team,
        ),
        rows[2],
    );

    if let Some(ref error) = form.error {
        frame.render_widget(
            Paragraph::new(Line::styled(error.as_str(), theme::status_error())),
            rows[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", theme::key_hint_key()),
            Span::styled(" add  ", theme::key_hint()),
            Span::styled("Tab", theme::key_hint_key()),
            Span::styled(" next field  ", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" cancel", theme::key_hint()),
        ])),
        rows[6],
    );
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Paragraph<'a> {
    let value_style = if focused {
        theme::row_selected()
    } else {
        theme::row()
    };
    Paragraph::new(Line::from(vec![
        Span::styled(label, theme::key_hint()),
        Span::styled(value.to_owned(), value_style),
    ]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use pawbowl_core::TeamId;

    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team {
                id: TeamId(1),
                name: "Ruff".into(),
                score: None,
            },
            Team {
                id: TeamId(2),
                name: "Fluff".into(),
                score: None,
            },
        ]
    }

    #[test]
    fn team_picker_cycles_through_unassigned() {
        let mut form = AddForm::new();
        let teams = teams();

        assert_eq!(form.team_label(&teams), "Unassigned");
        form.team_next(teams.len());
        assert_eq!(form.team_label(&teams), "Ruff");
        form.team_next(teams.len());
        assert_eq!(form.team_label(&teams), "Fluff");
        form.team_next(teams.len());
        assert_eq!(form.team_label(&teams), "Unassigned");

        form.team_prev(teams.len());
        assert_eq!(form.team_label(&teams), "Fluff");
    }

    #[test]
    fn team_picker_stays_unassigned_without_teams() {
        let mut form = AddForm::new();
        form.team_next(0);
        assert_eq!(form.team_index, None);
        form.team_prev(0);
        assert_eq!(form.team_index, None);
    }

    #[test]
    fn draft_requires_name_and_breed() {
        let form = AddForm::new();
        assert!(form.draft(&teams()).is_err());
    }

    #[test]
    fn draft_carries_picked_team() {
        let mut form = AddForm {
            name: Input::new("Biscuit".into()),
            breed: Input::new("Corgi".into()),
            ..AddForm::new()
        };
        form.team_next(2);
        form.team_next(2);

        let draft = form.draft(&teams()).unwrap();
        assert_eq!(draft.name, "Biscuit");
        assert_eq!(draft.team, Some(TeamId(2)));
    }

    #[test]
    fn focus_cycles_all_fields() {
        let mut form = AddForm::new();
        assert_eq!(form.focus, FormField::Name);
        form.focus_next();
        assert_eq!(form.focus, FormField::Breed);
        form.focus_next();
        assert_eq!(form.focus, FormField::Team);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Team);
    }
}
