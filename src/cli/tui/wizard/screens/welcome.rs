use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::centered_band;
use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;
use crate::config::settings::WANJIE_NAME;

const LOGO: [&str; 5] = [
    "  ____ _                 _        ",
    " / ___| | __ _ _   _  __| | ___   ",
    "| |   | |/ _` | | | |/ _` |/ _ \\  ",
    "| |___| | (_| | |_| | (_| |  __/  ",
    " \\____|_|\\__,_|\\__,_|\\__,_|\\___|  ",
];

pub fn render(frame: &mut Frame, area: Rect, _state: &WizardState, theme: &Theme) {
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(*l, theme.title())))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Claude Code Installer", theme.highlight())));
    lines.push(Line::from(Span::styled(
        format!("Powered by {}", WANJIE_NAME),
        theme.muted(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("This wizard will:", theme.text())));
    for item in [
        "1. Check Node.js, npm and network access",
        "2. Configure your API key",
        "3. Pick a default model",
        "4. Install Claude Code with npm",
    ] {
        lines.push(Line::from(Span::styled(item, theme.text())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", theme.muted()),
        Span::styled("Enter", theme.highlight()),
        Span::styled(" to begin", theme.muted()),
    ]));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_band(area, height));
}
