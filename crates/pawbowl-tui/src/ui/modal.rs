//! Confirm dialog and blocking alert modal.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme;

/// Centered popup rect sized for a short message.
fn popup_rect(area: Rect) -> Rect {
    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(4));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Render a y/n confirmation dialog over the whole frame.
pub fn render_confirm(frame: &mut Frame, area: Rect, message: &str) {
    let popup = popup_rect(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::raw(""),
        Line::from(message.to_owned()).alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("y", theme::key_hint_key()),
            Span::styled(" confirm   ", theme::key_hint()),
            Span::styled("n", theme::key_hint_key()),
            Span::styled("/", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" cancel", theme::key_hint()),
        ])
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Render a blocking alert. Input is swallowed until it is dismissed.
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = popup_rect(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Error ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::ERROR_RED));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::raw(""),
        Line::styled(message.to_owned(), theme::status_error()).alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Enter", theme::key_hint_key()),
            Span::styled("/", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" dismiss", theme::key_hint()),
        ])
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(render: impl Fn(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render(frame)).unwrap();
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
    fn confirm_shows_message_and_choices() {
        let text = draw(|frame| {
            render_confirm(frame, frame.area(), "Remove Rex from the roster?");
        });
        assert!(text.contains("Remove Rex"), "got:\n{text}");
        assert!(text.contains("confirm"), "got:\n{text}");
        assert!(text.contains("cancel"), "got:\n{text}");
    }

    #[test]
    fn alert_shows_message_and_dismiss_hint() {
        let text = draw(|frame| {
            render_alert(frame, frame.area(), "Failed to remove player. Please try again");
        });
        assert!(text.contains("Failed to remove"), "got:\n{text}");
        assert!(text.contains("dismiss"), "got:\n{text}");
    }
}
