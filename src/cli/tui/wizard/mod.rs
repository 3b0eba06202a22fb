//! Interactive installer wizard
//!
//! `engine` holds the transition function, `backend` the collaborator seam,
//! `app` the terminal event loop and `screens` the presentation.

pub mod app;
pub mod backend;
pub mod engine;
pub mod events;
pub mod modal;
pub mod screens;
pub mod selector;
pub mod state;
pub mod steps;
pub mod theme;

use std::path::PathBuf;
use std::sync::Arc;

pub use backend::{Backend, SystemBackend};
pub use engine::Wizard;
pub use events::{AppEvent, Task, TaskKind};
pub use state::{AppMode, ErrorInfo, Stage, WizardState};
pub use theme::{Theme, ThemeName};

use crate::Result;

/// Options shared by both wizard modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    pub theme: ThemeName,
    pub use_mirror: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            use_mirror: true,
        }
    }
}

/// Run the full install wizard
pub async fn run_install_wizard(options: WizardOptions) -> Result<WizardState> {
    let backend = Arc::new(SystemBackend::new(options.use_mirror));
    app::App::new(
        WizardState::full_install(),
        Theme::from_name(options.theme),
        backend,
    )
    .run()
    .await
}

/// Run the switch-model wizard over an existing settings directory
pub async fn run_switch_wizard(
    options: WizardOptions,
    claude_dir: PathBuf,
    current_model: Option<String>,
) -> Result<WizardState> {
    let backend = Arc::new(SystemBackend::new(options.use_mirror));
    app::App::new(
        WizardState::switch_model(claude_dir, current_model),
        Theme::from_name(options.theme),
        backend,
    )
    .run()
    .await
}
