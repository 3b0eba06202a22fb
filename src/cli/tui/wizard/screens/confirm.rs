use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;
use crate::config::{mask_api_key, models};

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Review the configuration",
            theme.highlight(),
        ))),
        chunks[0],
    );

    let config = &state.config;
    let model_name = models::find_by_id(&config.model)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| config.model.clone());
    let settings_path = state
        .snapshot
        .as_ref()
        .map(|s| s.settings_path().display().to_string())
        .unwrap_or_default();

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), theme.muted()),
            Span::styled(value, theme.text()),
        ])
    };
    let lines = vec![
        row("Provider", config.provider.clone()),
        row("Base URL", config.base_url.clone()),
        row("API key", mask_api_key(&config.api_key)),
        row("Model", model_name),
        row("Settings", settings_path),
    ];
    let card = Paragraph::new(lines).block(
        Block::default()
            .title(" Configuration ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border()),
    );
    frame.render_widget(card, chunks[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", theme.highlight()),
            Span::styled(" writes the settings and installs Claude Code with npm", theme.muted()),
        ])),
        chunks[2],
    );
}
