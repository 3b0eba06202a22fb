use std::path::PathBuf;
use ratatui::crossterm::event::KeyEvent;

use crate::config::InstallConfig;
use crate::detector::SystemSnapshot;
use crate::installer::CommandOutcome;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),
    /// The terminal reader stopped; no more keys will arrive
    InputClosed(String),

    // Collaborator completion events
    DetectDone(Result<SystemSnapshot, String>),
    ConfigWritten(Result<PathBuf, String>),
    InstallDone(CommandOutcome),
    ModelUpdated(Result<(), String>),

    // UI events
    Tick, // spinner animation
}

/// Background work requested by the wizard. Each task produces exactly one
/// completion event.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Detect,
    WriteConfig {
        claude_dir: PathBuf,
        config: InstallConfig,
    },
    Install,
    UpdateModel {
        claude_dir: PathBuf,
        model: String,
    },
}

/// Kind of task currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Detect,
    WriteConfig,
    Install,
    UpdateModel,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Detect => TaskKind::Detect,
            Task::WriteConfig { .. } => TaskKind::WriteConfig,
            Task::Install => TaskKind::Install,
            Task::UpdateModel { .. } => TaskKind::UpdateModel,
        }
    }
}

impl AppEvent {
    /// The task kind this event completes, if any
    pub fn completes(&self) -> Option<TaskKind> {
        match self {
            AppEvent::DetectDone(_) => Some(TaskKind::Detect),
            AppEvent::ConfigWritten(_) => Some(TaskKind::WriteConfig),
            AppEvent::InstallDone(_) => Some(TaskKind::Install),
            AppEvent::ModelUpdated(_) => Some(TaskKind::UpdateModel),
            AppEvent::Key(_)
            | AppEvent::Resize(..)
            | AppEvent::InputClosed(_)
            | AppEvent::Tick => None,
        }
    }
}
