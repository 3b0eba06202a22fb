//! API key entry with the detected environment summary

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::wizard::state::WizardState;
use crate::cli::tui::wizard::theme::Theme;
use crate::config::settings::{MIN_API_KEY_LEN, WANJIE_NAME};
use crate::detector::SystemSnapshot;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // System info
            Constraint::Length(1),
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Input
            Constraint::Length(2), // Inline error
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(snapshot) = &state.snapshot {
        render_system_info(frame, chunks[0], snapshot, theme);
    }

    let prompt = vec![
        Line::from(Span::styled(
            format!("Enter your {} API key", WANJIE_NAME),
            theme.highlight(),
        )),
        Line::from(Span::styled(
            format!("At least {} characters", MIN_API_KEY_LEN),
            theme.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(prompt), chunks[2]);

    // Never echo the key itself
    let masked: String = "•".repeat(state.key_input.value().chars().count());
    let input = Paragraph::new(Line::from(vec![
        Span::styled(masked, theme.text()),
        Span::styled("█", theme.highlight()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.highlight()),
    );
    frame.render_widget(input, chunks[3]);

    if let Some(error) = &state.error {
        let mut spans = vec![Span::styled(format!("✗ {}", error.message), theme.error())];
        if let Some(detail) = &error.detail {
            spans.push(Span::styled(format!(": {}", detail), theme.muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[4]);
    }
}

fn render_system_info(frame: &mut Frame, area: Rect, snapshot: &SystemSnapshot, theme: &Theme) {
    let row = |label: &str, present: bool, value: &str| {
        let style = if present { theme.success() } else { theme.error() };
        Line::from(vec![
            Span::styled(format!("{} ", Theme::status_icon(present)), style),
            Span::styled(format!("{:<12}", label), theme.muted()),
            Span::styled(
                if present { value.to_string() } else { "not found".to_string() },
                theme.text(),
            ),
        ])
    };

    let lines = vec![
        row("System", true, snapshot.os_name()),
        row("Node.js", snapshot.has_runtime, &snapshot.runtime_version),
        row("npm", snapshot.has_package_manager, &snapshot.package_manager_version),
        row("Claude Code", snapshot.has_tool, &snapshot.tool_version),
        row(
            "Network",
            snapshot.can_reach_api,
            if snapshot.can_reach_api { "reachable" } else { "" },
        ),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(" System ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border()),
    );
    frame.render_widget(card, area);
}
