//! Help overlay

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::state::{Stage, WizardState};
use super::theme::Theme;

/// Key bindings that do something on the current stage
pub fn help_items(state: &WizardState) -> Vec<(&'static str, &'static str)> {
    let mut items = Vec::new();
    if !matches!(state.stage, Stage::Detecting | Stage::Installing) {
        items.push(("Enter", "Confirm / continue"));
    }
    if state.can_reset() {
        items.push(("Esc", "Start over"));
    }
    if state.stage.uses_selector() {
        items.push(("↑/↓", "Select"));
    }
    if state.can_quit() {
        items.push(("q", "Quit"));
    }
    items.push(("?", "Toggle help"));
    items
}

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_help_modal(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let modal_area = centered_rect(50, 50, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.highlight());

    let mut lines = vec![Line::from("")];
    for (key, description) in help_items(state) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}", key), theme.highlight()),
            Span::raw("   "),
            Span::styled(description, theme.text()),
        ]));
    }
    lines.push(Line::from(""));
    let hint = Span::styled("Press any key to close", theme.dim());
    lines.push(Line::from(hint).alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(state: &WizardState) -> Vec<&'static str> {
        help_items(state).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_help_items_follow_stage() {
        let mut state = WizardState::full_install();
        assert_eq!(keys(&state), ["Enter", "q", "?"]);

        state.stage = Stage::SelectModel;
        assert_eq!(keys(&state), ["Enter", "↑/↓", "q", "?"]);

        state.stage = Stage::Installing;
        assert_eq!(keys(&state), ["?"]);

        state.stage = Stage::Error;
        assert_eq!(keys(&state), ["Enter", "Esc", "q", "?"]);
    }

    #[test]
    fn test_switch_mode_error_lists_no_esc() {
        let mut state = WizardState::switch_model("/tmp/.claude".into(), None);
        assert_eq!(keys(&state), ["Enter", "↑/↓", "q", "?"]);

        state.stage = Stage::Error;
        assert!(!keys(&state).contains(&"Esc"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
