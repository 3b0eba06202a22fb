//! Model list, shared by the install and switch flows

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::spinner;
use crate::cli::tui::wizard::state::{Stage, WizardState};
use crate::cli::tui::wizard::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status
        ])
        .split(area);

    let heading = if state.stage == Stage::SwitchModel {
        "Select the model to switch to"
    } else {
        "Select the default model"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(heading, theme.highlight()))),
        chunks[0],
    );

    let items: Vec<ListItem> = state
        .selector
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == state.selector.selected();
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if item.disabled {
                theme.dim()
            } else if selected {
                theme.highlight()
            } else {
                theme.text()
            };

            let mut title = vec![
                Span::styled(marker, theme.highlight()),
                Span::styled(item.name.clone(), name_style),
            ];
            if let Some(badge) = item.badge {
                title.push(Span::raw("  "));
                title.push(Span::styled(badge, theme.success()));
            }

            ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(format!("    {}", item.description), theme.muted())),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selector.selected()));
    frame.render_stateful_widget(List::new(items), chunks[1], &mut list_state);

    if state.is_busy() {
        let status = Line::from(vec![
            Span::styled(spinner(state.tick), theme.highlight()),
            Span::styled(" Updating settings...", theme.text()),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[2]);
    } else if let Some(current) = &state.current_model {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("Current: {}", current), theme.muted())),
            chunks[2],
        );
    }
}
