use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::cli::tui::wizard::{self, Stage, WizardOptions};
use crate::Result;

/// Handler for the default invocation: the full install wizard
pub struct InstallCommand {
    pub options: WizardOptions,
}

impl InstallCommand {
    pub fn new(options: WizardOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl CommandHandler for InstallCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let state = wizard::run_install_wizard(self.options).await?;

        // Failures were already shown on the wizard's error screen
        if state.stage != Stage::Complete {
            return Ok(CommandResult::Success(None));
        }

        let mut message = String::from("✓ Claude Code installed");
        if let Some(path) = &state.settings_path {
            message.push_str(&format!("\n  Settings: {}", path.display()));
        }
        message.push_str("\n\nRun `claude` in your project to get started");
        Ok(CommandResult::Success(Some(message)))
    }

    fn name(&self) -> &'static str {
        "install"
    }
}
