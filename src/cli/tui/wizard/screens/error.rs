use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Message
            Constraint::Min(3),    // Detail
            Constraint::Length(1), // Recovery hint
        ])
        .split(area);

    let message = state
        .error
        .as_ref()
        .map(|e| e.message.as_str())
        .unwrap_or("Something went wrong");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("✗ {}", message), theme.error()))),
        chunks[0],
    );

    if let Some(detail) = state.error.as_ref().and_then(|e| e.detail.as_deref()) {
        let lines: Vec<Line> = detail
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), theme.text())))
            .collect();
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            chunks[1],
        );
    }

    let hint = if state.can_reset() {
        "Press Esc to start over, q to quit"
    } else {
        "Press Enter or q to quit"
    };
    frame.render_widget(Paragraph::new(Span::styled(hint, theme.muted())), chunks[2]);
}
