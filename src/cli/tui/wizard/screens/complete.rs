use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::centered_band;
use crate::cli::tui::wizard::state::{Stage, WizardState};
use crate::cli::tui::wizard::theme::Theme;
use crate::config::models;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let model = models::find_by_id(&state.config.model)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| state.config.model.clone());

    let mut lines = Vec::new();
    if state.stage == Stage::SwitchComplete {
        lines.push(Line::from(Span::styled("✓ Model switched", theme.success())));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Now using ", theme.text()),
            Span::styled(model, theme.highlight()),
        ]));
        lines.push(Line::from(Span::styled(
            "Restart claude to pick up the new model",
            theme.muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled("✓ Installation complete", theme.success())));
        lines.push(Line::from(""));
        if let Some(result) = &state.install_result {
            lines.push(Line::from(Span::styled(result.message.clone(), theme.text())));
        }
        lines.push(Line::from(vec![
            Span::styled("Model ", theme.muted()),
            Span::styled(model, theme.highlight()),
        ]));
        if let Some(path) = &state.settings_path {
            lines.push(Line::from(vec![
                Span::styled("Settings ", theme.muted()),
                Span::styled(path.display().to_string(), theme.text()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Run ", theme.text()),
            Span::styled("claude", theme.highlight()),
            Span::styled(" in your project to get started", theme.text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press Enter to exit", theme.dim())));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, height));
}
