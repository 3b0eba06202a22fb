//! Wizard transition function
//!
//! [`Wizard::handle_event`] is the only place the wizard state changes. It
//! never performs I/O: work that needs a collaborator is returned as a
//! [`Task`], and its result comes back later as a completion event.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;

use super::events::{AppEvent, Task};
use super::state::{ErrorInfo, Stage, WizardState, MAX_KEY_LEN};
use crate::config::validate_api_key;
use crate::detector::SystemSnapshot;
use crate::installer::CommandOutcome;

pub const RUNTIME_MISSING_MESSAGE: &str = "Node.js or npm not found";
pub const RUNTIME_MISSING_DETAIL: &str =
    "Install Node.js 18+ first\nDownload: https://nodejs.org/";
pub const INVALID_KEY_MESSAGE: &str = "Invalid API key";
pub const WRITE_FAILED_MESSAGE: &str = "Failed to write configuration";
pub const INSTALL_FAILED_MESSAGE: &str = "Installation failed";
pub const SWITCH_FAILED_MESSAGE: &str = "Failed to switch model";
pub const DETECT_FAILED_MESSAGE: &str = "Environment detection failed";

/// The wizard engine
#[derive(Debug)]
pub struct Wizard {
    pub state: WizardState,
    pub should_quit: bool,
}

impl Wizard {
    pub fn new(state: WizardState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    pub fn full_install() -> Self {
        Self::new(WizardState::full_install())
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    /// Apply one event. Returns the background task to start, if any; the
    /// caller must feed the task's completion event back in.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<Task> {
        if let Some(kind) = event.completes() {
            if self.state.in_flight != Some(kind) {
                debug!(?kind, stage = ?self.state.stage, "Ignoring stale completion event");
                return None;
            }
            self.state.in_flight = None;
        }

        let before = self.state.stage;
        let task = match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(..) => None,
            AppEvent::InputClosed(reason) => {
                // Nothing can reach the wizard any more, even mid-install
                self.state.input_error = Some(reason);
                self.should_quit = true;
                None
            }
            AppEvent::Tick => {
                self.state.tick = self.state.tick.wrapping_add(1);
                None
            }
            AppEvent::DetectDone(result) => self.on_detect_done(result),
            AppEvent::ConfigWritten(result) => self.on_config_written(result),
            AppEvent::InstallDone(outcome) => self.on_install_done(outcome),
            AppEvent::ModelUpdated(result) => self.on_model_updated(result),
        };

        if before != self.state.stage {
            debug!(from = before.name(), to = self.state.stage.name(), "Stage transition");
        }
        if let Some(task) = &task {
            self.state.in_flight = Some(task.kind());
        }
        task
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Task> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.state.can_quit() {
                self.should_quit = true;
            }
            return None;
        }

        // ? is text while typing the key
        if key.code == KeyCode::Char('?') && self.state.stage != Stage::InputKey {
            self.state.show_help = !self.state.show_help;
            return None;
        }

        // Any key closes the overlay
        if self.state.show_help {
            self.state.show_help = false;
            return None;
        }

        match key.code {
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Esc => {
                if self.state.can_reset() {
                    self.reset();
                }
                None
            }
            _ if self.state.stage == Stage::InputKey => {
                self.handle_key_input(key);
                None
            }
            KeyCode::Char('q') => {
                if self.state.can_quit() {
                    self.should_quit = true;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') if self.state.stage.uses_selector() => {
                self.state.selector.prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') if self.state.stage.uses_selector() => {
                self.state.selector.next();
                None
            }
            _ => None,
        }
    }

    fn handle_key_input(&mut self, key: KeyEvent) {
        let at_limit = self.state.key_input.value().chars().count() >= MAX_KEY_LEN;
        if at_limit && matches!(key.code, KeyCode::Char(_)) {
            return;
        }
        self.state.key_input.handle_event(&Event::Key(key));
    }

    fn handle_enter(&mut self) -> Option<Task> {
        match self.state.stage {
            Stage::Welcome => {
                self.state.stage = Stage::Detecting;
                Some(Task::Detect)
            }

            Stage::InputKey => {
                let key = self.state.key_input.value().trim().to_string();
                if let Err(e) = validate_api_key(&key) {
                    self.state.error =
                        Some(ErrorInfo::with_detail(INVALID_KEY_MESSAGE, e.to_string()));
                    return None;
                }
                self.state.config.api_key = key;
                self.state.error = None;
                self.state.steps.complete();
                self.state.stage = Stage::SelectModel;
                self.state.selector.set_selected(crate::config::models::default_index());
                None
            }

            Stage::SelectModel => {
                let item = self.state.selector.selected_item()?;
                self.state.config.model = item.id.clone();
                self.state.steps.complete();
                self.state.stage = Stage::Confirm;
                None
            }

            Stage::Confirm => {
                let Some(snapshot) = &self.state.snapshot else {
                    self.state.fail(ErrorInfo::new(WRITE_FAILED_MESSAGE));
                    return None;
                };
                let claude_dir = snapshot.claude_dir.clone();
                self.state.settings_path = Some(snapshot.settings_path());
                self.state.steps.complete();
                self.state.stage = Stage::Installing;
                Some(Task::WriteConfig {
                    claude_dir,
                    config: self.state.config.clone(),
                })
            }

            Stage::SwitchModel => {
                if self.state.in_flight.is_some() {
                    return None;
                }
                let claude_dir = self.state.claude_dir.clone()?;
                let item = self.state.selector.selected_item()?;
                self.state.config.model = item.id.clone();
                Some(Task::UpdateModel {
                    claude_dir,
                    model: item.id.clone(),
                })
            }

            stage if stage.is_terminal() => {
                self.should_quit = true;
                None
            }

            _ => None,
        }
    }

    /// Error → Welcome
    fn reset(&mut self) {
        self.state.stage = Stage::Welcome;
        self.state.error = None;
        self.state.in_flight = None;
        self.state.steps = super::steps::StepIndicator::full_install();
    }

    fn on_detect_done(&mut self, result: Result<SystemSnapshot, String>) -> Option<Task> {
        match result {
            Err(message) => {
                self.state.fail(ErrorInfo::with_detail(DETECT_FAILED_MESSAGE, message));
            }
            Ok(snapshot) => {
                let needs_runtime = snapshot.needs_runtime();
                self.state.snapshot = Some(snapshot);
                if needs_runtime {
                    self.state.fail(ErrorInfo::with_detail(
                        RUNTIME_MISSING_MESSAGE,
                        RUNTIME_MISSING_DETAIL,
                    ));
                } else {
                    self.state.steps.complete();
                    self.state.stage = Stage::InputKey;
                }
            }
        }
        None
    }

    fn on_config_written(&mut self, result: Result<std::path::PathBuf, String>) -> Option<Task> {
        match result {
            Ok(path) => {
                self.state.settings_path = Some(path);
                Some(Task::Install)
            }
            Err(message) => {
                self.state.fail(ErrorInfo::with_detail(WRITE_FAILED_MESSAGE, message));
                None
            }
        }
    }

    fn on_install_done(&mut self, outcome: CommandOutcome) -> Option<Task> {
        if outcome.success {
            self.state.steps.complete();
            self.state.stage = Stage::Complete;
        } else {
            self.state
                .fail(ErrorInfo::with_detail(INSTALL_FAILED_MESSAGE, outcome.detail()));
        }
        self.state.install_result = Some(outcome);
        None
    }

    fn on_model_updated(&mut self, result: Result<(), String>) -> Option<Task> {
        match result {
            Ok(()) => {
                self.state.current_model = Some(self.state.config.model.clone());
                self.state.steps.complete();
                self.state.stage = Stage::SwitchComplete;
            }
            Err(message) => {
                self.state.fail(ErrorInfo::with_detail(SWITCH_FAILED_MESSAGE, message));
            }
        }
        None
    }
}
