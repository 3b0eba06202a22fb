//! Screen modules for the installer wizard
pub mod complete;
pub mod confirm;
pub mod detecting;
pub mod error;
pub mod input_key;
pub mod installing;
pub mod select_model;
pub mod welcome;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::modal;
use super::state::{AppMode, Stage, WizardState};
use super::steps::{StepIndicator, StepStatus};
use super::theme::Theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given tick
pub fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Render the whole frame for the current stage
pub fn render(frame: &mut Frame, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step bar
            Constraint::Min(0),    // Stage content
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_steps(frame, chunks[0], &state.steps, theme);

    let body = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(Span::styled(format!(" {} ", title(state)), theme.title()));
    let inner = body.inner(chunks[1]);
    frame.render_widget(body, chunks[1]);

    match state.stage {
        Stage::Welcome => welcome::render(frame, inner, state, theme),
        Stage::Detecting => detecting::render(frame, inner, state, theme),
        Stage::InputKey => input_key::render(frame, inner, state, theme),
        Stage::SelectModel | Stage::SwitchModel => select_model::render(frame, inner, state, theme),
        Stage::Confirm => confirm::render(frame, inner, state, theme),
        Stage::Installing => installing::render(frame, inner, state, theme),
        Stage::Complete | Stage::SwitchComplete => complete::render(frame, inner, state, theme),
        Stage::Error => error::render(frame, inner, state, theme),
    }

    render_help_bar(frame, chunks[2], state, theme);

    if state.show_help {
        modal::render_help_modal(frame, frame.area(), state, theme);
    }
}

fn title(state: &WizardState) -> &'static str {
    match state.mode {
        AppMode::FullInstall => "Claude Code Installer",
        AppMode::SwitchModel => "Claude Code Model Switcher",
    }
}

fn render_steps(frame: &mut Frame, area: Rect, steps: &StepIndicator, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, step) in steps.steps().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", theme.dim()));
        }
        let (icon, style) = match step.status {
            StepStatus::Completed => ("✓", theme.success()),
            StepStatus::Current => ("●", theme.highlight()),
            StepStatus::Failed => ("✗", theme.error()),
            StepStatus::Pending => ("○", theme.dim()),
        };
        spans.push(Span::styled(format!("{} {}", icon, step.name), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let hints: &[(&str, &str)] = match state.stage {
        Stage::Welcome => &[("Enter", "Start"), ("?", "Help"), ("q", "Quit")],
        Stage::Detecting => &[("q", "Quit")],
        Stage::InputKey => &[("Enter", "Continue"), ("Ctrl+C", "Quit")],
        Stage::SelectModel => &[("↑/↓", "Select"), ("Enter", "Continue"), ("q", "Quit")],
        Stage::SwitchModel => &[("↑/↓", "Select"), ("Enter", "Switch"), ("q", "Quit")],
        Stage::Confirm => &[("Enter", "Install"), ("q", "Quit")],
        Stage::Installing => &[],
        Stage::Complete | Stage::SwitchComplete => &[("Enter", "Exit")],
        Stage::Error if state.can_reset() => &[("Esc", "Back"), ("q", "Quit")],
        Stage::Error => &[("Enter", "Exit"), ("q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!("[{}]", key), theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", action), theme.muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

/// Split an area into a vertically centered band of `height` rows
pub(crate) fn centered_band(area: Rect, height: u16) -> Rect {
    let padding = area.height.saturating_sub(height) / 2;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(padding),
            Constraint::Min(0),
            Constraint::Length(padding),
        ])
        .split(area)[1]
}
