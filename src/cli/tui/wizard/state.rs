use std::path::PathBuf;
use tui_input::Input;

use super::events::TaskKind;
use super::selector::ModelSelector;
use super::steps::StepIndicator;
use crate::config::InstallConfig;
use crate::detector::SystemSnapshot;
use crate::installer::CommandOutcome;

/// Maximum accepted API key input length
pub const MAX_KEY_LEN: usize = 128;

/// Wizard stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Detecting,
    InputKey,
    SelectModel,
    Confirm,
    Installing,
    Complete,
    Error,
    // switch-model mode
    SwitchModel,
    SwitchComplete,
}

impl Stage {
    /// Get the name of the stage
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::Detecting => "Detecting",
            Stage::InputKey => "API Key",
            Stage::SelectModel => "Select Model",
            Stage::Confirm => "Confirm",
            Stage::Installing => "Installing",
            Stage::Complete => "Complete",
            Stage::Error => "Error",
            Stage::SwitchModel => "Switch Model",
            Stage::SwitchComplete => "Switch Complete",
        }
    }

    /// Stages that only exit on confirm / quit
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Complete | Stage::Error | Stage::SwitchComplete)
    }

    /// Stages where up/down move the model highlight
    pub fn uses_selector(&self) -> bool {
        matches!(self, Stage::SelectModel | Stage::SwitchModel)
    }
}

/// Which flow the wizard runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    FullInstall,
    SwitchModel,
}

/// Error shown inline (InputKey) or on the Error stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub detail: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            message: message.into(),
            detail: if detail.trim().is_empty() {
                None
            } else {
                Some(detail)
            },
        }
    }
}

/// All mutable data of one wizard run
#[derive(Debug)]
pub struct WizardState {
    pub mode: AppMode,
    pub stage: Stage,
    pub steps: StepIndicator,
    pub error: Option<ErrorInfo>,

    // Collected data
    pub config: InstallConfig,
    pub snapshot: Option<SystemSnapshot>,
    pub install_result: Option<CommandOutcome>,
    pub settings_path: Option<PathBuf>,

    // Switch-model mode
    pub claude_dir: Option<PathBuf>,
    pub current_model: Option<String>,

    // UI state
    pub selector: ModelSelector,
    pub key_input: Input,
    pub show_help: bool,
    pub in_flight: Option<TaskKind>,
    pub tick: usize,
    /// Set when the terminal reader failed and the loop had to stop
    pub input_error: Option<String>,
}

impl WizardState {
    /// State for the full install flow, starting at Welcome
    pub fn full_install() -> Self {
        Self {
            mode: AppMode::FullInstall,
            stage: Stage::Welcome,
            steps: StepIndicator::full_install(),
            error: None,
            config: InstallConfig::default(),
            snapshot: None,
            install_result: None,
            settings_path: None,
            claude_dir: None,
            current_model: None,
            selector: ModelSelector::from_catalog(None),
            key_input: Input::default(),
            show_help: false,
            in_flight: None,
            tick: 0,
            input_error: None,
        }
    }

    /// State for switch-model mode over an existing settings directory
    pub fn switch_model(claude_dir: PathBuf, current_model: Option<String>) -> Self {
        let selector = ModelSelector::from_catalog(current_model.as_deref());
        Self {
            mode: AppMode::SwitchModel,
            stage: Stage::SwitchModel,
            steps: StepIndicator::switch_model(),
            settings_path: Some(crate::io::paths::settings_file_in(&claude_dir)),
            claude_dir: Some(claude_dir),
            current_model,
            selector,
            ..Self::full_install()
        }
    }

    /// Quitting is blocked while the install subprocess runs
    pub fn can_quit(&self) -> bool {
        self.stage != Stage::Installing
    }

    /// Whether Esc on the Error stage returns to Welcome
    pub fn can_reset(&self) -> bool {
        self.stage == Stage::Error && self.mode == AppMode::FullInstall
    }

    /// Whether the screen should show a busy spinner
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || matches!(self.stage, Stage::Detecting | Stage::Installing)
    }

    /// Enter the Error stage
    pub fn fail(&mut self, error: ErrorInfo) {
        self.error = Some(error);
        self.stage = Stage::Error;
        self.in_flight = None;
        self.steps.fail();
    }
}
