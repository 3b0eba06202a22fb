use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{centered_band, spinner};
use crate::cli::tui::wizard::events::TaskKind;
use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;
use crate::installer::PACKAGE_NAME;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let activity = match state.in_flight {
        Some(TaskKind::WriteConfig) => "Writing settings...".to_string(),
        _ => format!("Installing {}...", PACKAGE_NAME),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(spinner(state.tick), theme.highlight()),
            Span::styled(format!(" {}", activity), theme.text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("This can take a few minutes", theme.muted())),
        Line::from(Span::styled("Quitting is disabled until npm finishes", theme.dim())),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, 4));
}
