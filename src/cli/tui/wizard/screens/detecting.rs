use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{centered_band, spinner};
use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(spinner(state.tick), theme.highlight()),
            Span::styled(" Detecting environment...", theme.text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Checking operating system, Node.js, npm, Claude Code and network",
            theme.muted(),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, 3));
}
