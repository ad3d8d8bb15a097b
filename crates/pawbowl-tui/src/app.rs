//! Application core — event loop, modes, action dispatch.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use pawbowl_core::{PlayerId, RosterService, RosterState};

use crate::action::{Action, ConfirmAction};
use crate::event::{Event, EventReader};
use crate::theme;
use crate::tui::TerminalGuard;
use crate::ui::detail::DetailPanel;
use crate::ui::form::{AddForm, FormField};
use crate::ui::{detail, form, modal, roster};

/// Input mode. Exactly one is active; it decides where key presses go.
#[derive(Debug, Clone, Default)]
enum Mode {
    /// Roster browsing — navigation, add, remove.
    #[default]
    Browse,
    /// Add-player form overlay.
    Form,
    /// y/n confirmation before a destructive operation.
    Confirm(ConfirmAction),
    /// Blocking error alert; swallows input until dismissed.
    Alert(String),
}

/// One-line feedback above the key hints.
#[derive(Debug, Clone)]
struct StatusLine {
    message: String,
    error: bool,
}

/// Top-level application state and event loop.
pub struct App {
    service: Arc<RosterService>,
    state: RosterState,
    detail: DetailPanel,
    mode: Mode,
    form: AddForm,
    status: Option<StatusLine>,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(service: RosterService) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            service: Arc::new(service),
            state: RosterState::new(),
            detail: DetailPanel::Empty,
            mode: Mode::Browse,
            form: AddForm::new(),
            status: None,
            running: true,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::enter()?;

        self.spawn_initial_load();

        let mut events = EventReader::spawn();

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize => {
                    self.action_tx.send(Action::Resize)?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action);

                if let Action::Render = action {
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Startup: teams first (the form picker needs them), then players.
    fn spawn_initial_load(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let teams = service.load_teams().await;
            let _ = tx.send(Action::TeamsLoaded(teams));
            let players = service.load_players().await;
            let _ = tx.send(Action::PlayersLoaded(players));
        });
    }

    fn spawn_player_refresh(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let players = service.load_players().await;
            let _ = tx.send(Action::PlayersLoaded(players));
        });
    }

    /// The detail view is populated from a fresh fetch by id, never from
    /// the cached list.
    fn spawn_detail_fetch(&self, id: PlayerId) {
        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let player = service.fetch_player(id).await;
            let _ = tx.send(Action::DetailLoaded(id, Box::new(player)));
        });
    }

    // ── Key mapping ──────────────────────────────────────────────────

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        // Ctrl-C always quits, whatever the mode.
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match &self.mode {
            Mode::Alert(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::DismissAlert),
                // Blocking: everything else is swallowed
                _ => None,
            },

            Mode::Confirm(_) => match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            },

            Mode::Form => match key.code {
                KeyCode::Esc => Some(Action::CloseForm),
                KeyCode::Enter => Some(Action::SubmitForm),
                KeyCode::Tab | KeyCode::Down => {
                    self.form.focus_next();
                    None
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.form.focus_prev();
                    None
                }
                KeyCode::Left if self.form.focus == FormField::Team => {
                    self.form.team_prev(self.state.teams().len());
                    None
                }
                KeyCode::Right if self.form.focus == FormField::Team => {
                    self.form.team_next(self.state.teams().len());
                    None
                }
                _ => {
                    self.form.handle_key(key);
                    None
                }
            },

            Mode::Browse => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
                // Enter re-fetches the selected player's details, or
                // selects the first player when nothing is selected yet.
                KeyCode::Enter => match self.state.selected() {
                    Some(id) => {
                        self.detail = DetailPanel::Loading;
                        self.spawn_detail_fetch(id);
                        None
                    }
                    None => Some(Action::SelectNext),
                },
                KeyCode::Esc => Some(Action::ClearSelection),
                KeyCode::Char('a') => Some(Action::OpenForm),
                KeyCode::Char('r') => Some(Action::Refresh),
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.state.selected().map(Action::RequestRemove)
                }
                _ => None,
            },
        }
    }

    // ── Action processing ────────────────────────────────────────────

    #[allow(clippy::too_many_lines)]
    fn process_action(&mut self, action: &Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Tick | Action::Render | Action::Resize => {}

            // ── Data arrival ──────────────────────────────────────

            Action::TeamsLoaded(teams) => {
                debug!(count = teams.len(), "team cache loaded");
                self.state.replace_teams(teams.clone());
            }

            Action::PlayersLoaded(players) => {
                debug!(count = players.len(), "player list replaced");
                self.state.replace_players(players.clone());
                // Wholesale replacement may have dropped the selection.
                if self.state.selected().is_none() {
                    self.detail = DetailPanel::Empty;
                }
            }

            Action::DetailLoaded(id, player) => {
                // Ignore stale fetches for a selection that moved on.
                if self.state.selected() == Some(*id) {
                    self.detail = match player.as_ref() {
                        Some(p) => DetailPanel::Loaded(Box::new(p.clone())),
                        None => DetailPanel::Missing,
                    };
                }
            }

            // ── Navigation ────────────────────────────────────────

            Action::SelectNext => self.move_selection(true),
            Action::SelectPrev => self.move_selection(false),

            Action::ClearSelection => {
                self.state.clear_selection();
                self.detail = DetailPanel::Empty;
            }

            Action::Refresh => self.spawn_player_refresh(),

            // ── Add form ──────────────────────────────────────────

            Action::OpenForm => {
                self.form = AddForm::new();
                self.mode = Mode::Form;
            }

            Action::CloseForm => {
                self.mode = Mode::Browse;
            }

            Action::SubmitForm => match self.form.draft(self.state.teams()) {
                Err(message) => {
                    self.form.error = Some(message);
                }
                Ok(draft) => {
                    self.form.error = None;
                    let service = Arc::clone(&self.service);
                    let tx = self.action_tx.clone();
                    tokio::spawn(async move {
                        let action = match service.add_player(&draft).await {
                            Ok(player) => Action::CreateSucceeded(Box::new(player)),
                            Err(e) => Action::CreateFailed(e.to_string()),
                        };
                        let _ = tx.send(action);
                    });
                }
            },

            Action::CreateSucceeded(player) => {
                self.mode = Mode::Browse;
                self.form = AddForm::new();
                self.status = Some(StatusLine {
                    message: format!("Added {} to the roster!", player.name),
                    error: false,
                });
                self.spawn_player_refresh();
            }

            // Server rejection stays inline in the form; no refresh. If
            // the user already closed the form, it lands in the status
            // line instead.
            Action::CreateFailed(message) => {
                if matches!(self.mode, Mode::Form) {
                    self.form.error = Some(message.clone());
                } else {
                    self.status = Some(StatusLine {
                        message: message.clone(),
                        error: true,
                    });
                }
            }

            // ── Remove flow ───────────────────────────────────────

            Action::RequestRemove(id) => {
                let name = self
                    .state
                    .player(*id)
                    .map_or_else(|| format!("player {id}"), |p| p.name.clone());
                self.mode = Mode::Confirm(ConfirmAction::RemovePlayer { id: *id, name });
            }

            Action::ConfirmYes => {
                if let Mode::Confirm(ConfirmAction::RemovePlayer { id, .. }) = &self.mode {
                    let id = *id;
                    self.mode = Mode::Browse;
                    let service = Arc::clone(&self.service);
                    let tx = self.action_tx.clone();
                    tokio::spawn(async move {
                        let action = match service.remove_player(id).await {
                            Ok(()) => Action::RemoveSucceeded(id),
                            Err(e) => Action::RemoveFailed(e.to_string()),
                        };
                        let _ = tx.send(action);
                    });
                }
            }

            Action::ConfirmNo => {
                self.mode = Mode::Browse;
            }

            Action::RemoveSucceeded(id) => {
                self.state.deselect_if(*id);
                if self.state.selected().is_none() {
                    self.detail = DetailPanel::Empty;
                }
                self.status = Some(StatusLine {
                    message: "Removed from the roster".into(),
                    error: false,
                });
                self.spawn_player_refresh();
            }

            // Delete failure blocks with an alert, matching the weight
            // of the destructive operation.
            Action::RemoveFailed(message) => {
                self.mode = Mode::Alert(format!("Failed to remove player: {message}"));
            }

            Action::DismissAlert => {
                self.mode = Mode::Browse;
            }
        }
    }

    /// Move the selection one step within roster order, clamping at the
    /// ends, and kick off the detail re-fetch.
    fn move_selection(&mut self, forward: bool) {
        let players = self.state.players();
        if players.is_empty() {
            return;
        }

        let next_index = match self.state.selected_index() {
            Some(i) if forward => (i + 1).min(players.len() - 1),
            Some(i) => i.saturating_sub(1),
            None if forward => 0,
            None => players.len() - 1,
        };

        let id = players[next_index].id;
        if self.state.selected() != Some(id) {
            self.state.select(id);
            self.detail = DetailPanel::Loading;
            self.spawn_detail_fetch(id);
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let columns = Layout::horizontal([
            Constraint::Percentage(60), // Roster
            Constraint::Percentage(40), // Detail
        ])
        .split(layout[0]);

        roster::render(
            frame,
            columns[0],
            &self.state,
            matches!(self.mode, Mode::Browse),
        );
        detail::render(frame, columns[1], &self.detail, &self.state);
        self.render_status_bar(frame, layout[1]);

        match &self.mode {
            Mode::Browse => {}
            Mode::Form => form::render(frame, area, &self.form, &self.state),
            Mode::Confirm(confirm) => {
                modal::render_confirm(frame, area, &confirm.to_string());
            }
            Mode::Alert(message) => modal::render_alert(frame, area, message),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_span = match &self.status {
            Some(StatusLine { message, error: true }) => {
                Span::styled(message.as_str(), theme::status_error())
            }
            Some(StatusLine { message, .. }) => {
                Span::styled(message.as_str(), theme::status_success())
            }
            None => Span::raw(""),
        };

        let hints = Span::styled(
            " │ ↑/↓ select  a add  d remove  r refresh  q quit",
            theme::key_hint(),
        );

        let line = Line::from(vec![Span::raw(" "), status_span, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    use pawbowl_core::{Player, PlayerStatus, RosterConfig};

    use super::*;

    /// App wired to a port nothing answers on. Actions that spawn a
    /// background refresh degrade to empty lists if they ever run.
    fn test_app() -> App {
        let url = Url::parse("http://127.0.0.1:9").unwrap();
        let config = RosterConfig::new(url, "test-cohort");
        App::new(RosterService::new(&config).unwrap())
    }

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

    #[tokio::test]
    async fn create_failure_stays_inline_without_refresh() {
        let mut app = test_app();
        app.state.replace_players(vec![player(1, "Fido")]);
        app.mode = Mode::Form;

        app.process_action(&Action::CreateFailed("Invalid breed".into()));

        assert!(matches!(app.mode, Mode::Form));
        assert_eq!(app.form.error.as_deref(), Some("Invalid breed"));
        // Roster untouched, no refresh queued.
        assert_eq!(app.state.players().len(), 1);
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn create_success_resets_form_and_reports() {
        let mut app = test_app();
        app.mode = Mode::Form;
        app.form.error = Some("stale".into());

        app.process_action(&Action::CreateSucceeded(Box::new(player(9, "Biscuit"))));

        assert!(matches!(app.mode, Mode::Browse));
        assert!(app.form.error.is_none());
        let status = app.status.as_ref().unwrap();
        assert!(status.message.contains("Biscuit"));
        assert!(!status.error);
    }

    #[tokio::test]
    async fn remove_success_reverts_detail_to_prompt() {
        let mut app = test_app();
        app.state.replace_players(vec![player(7, "Rex")]);
        app.state.select(PlayerId(7));
        app.detail = DetailPanel::Loaded(Box::new(player(7, "Rex")));

        app.process_action(&Action::RemoveSucceeded(PlayerId(7)));

        assert_eq!(app.state.selected(), None);
        assert!(matches!(app.detail, DetailPanel::Empty));
        assert!(app.status.as_ref().is_some_and(|s| !s.error));
    }

    #[tokio::test]
    async fn remove_failure_raises_blocking_alert() {
        let mut app = test_app();

        app.process_action(&Action::RemoveFailed("Player 7 not found".into()));

        match &app.mode {
            Mode::Alert(message) => assert!(message.contains("Player 7 not found")),
            other => panic!("expected Alert, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn confirm_no_returns_to_browse_without_removing() {
        let mut app = test_app();
        app.state.replace_players(vec![player(1, "Fido")]);

        app.process_action(&Action::RequestRemove(PlayerId(1)));
        assert!(matches!(app.mode, Mode::Confirm(_)));

        app.process_action(&Action::ConfirmNo);
        assert!(matches!(app.mode, Mode::Browse));
        assert_eq!(app.state.players().len(), 1);
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_detail_fetch_is_ignored() {
        let mut app = test_app();
        app.state.replace_players(vec![player(1, "Fido"), player(2, "Rex")]);
        app.state.select(PlayerId(2));
        app.detail = DetailPanel::Loading;

        // Result for a selection that has since moved on.
        app.process_action(&Action::DetailLoaded(
            PlayerId(1),
            Box::new(Some(player(1, "Fido"))),
        ));
        assert!(matches!(app.detail, DetailPanel::Loading));

        // Result for the current selection applies.
        app.process_action(&Action::DetailLoaded(
            PlayerId(2),
            Box::new(Some(player(2, "Rex"))),
        ));
        match &app.detail {
            DetailPanel::Loaded(p) => assert_eq!(p.name, "Rex"),
            other => panic!("expected Loaded, got: {other:?}"),
        }
    }
}
