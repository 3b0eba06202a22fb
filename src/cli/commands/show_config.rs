use async_trait::async_trait;
use std::path::PathBuf;

use super::{CommandHandler, CommandResult, RUN_WIZARD_HINT};
use crate::config::{mask_api_key, models, read_existing, ExistingConfig};
use crate::{InstallerError, Result};

/// Handler for `--config`
pub struct ShowConfigCommand {
    pub claude_dir: PathBuf,
}

impl ShowConfigCommand {
    pub fn new(claude_dir: PathBuf) -> Self {
        Self { claude_dir }
    }

    /// Format an existing configuration, never showing the full key
    pub fn render(existing: &ExistingConfig) -> String {
        let mut out = String::from("Current configuration\n\n");
        out.push_str(&format!("  Settings file: {}\n", existing.file_path.display()));
        out.push_str(&format!("  Base URL:      {}\n", existing.base_url));
        out.push_str(&format!("  Model:         {}\n", existing.model));
        if let Some(model) = models::find_by_id(&existing.model) {
            out.push_str(&format!(
                "                 {} - {}\n",
                model.name, model.description
            ));
        }
        if existing.has_api_key() {
            out.push_str(&format!("  API key:       {}\n", mask_api_key(&existing.api_key)));
        } else {
            out.push_str("  API key:       (not set)\n");
        }
        out.push_str("\nSwitch model:\n  claude-installer --switch-model");
        out
    }
}

#[async_trait]
impl CommandHandler for ShowConfigCommand {
    async fn execute(&self) -> Result<CommandResult> {
        match read_existing(&self.claude_dir) {
            Ok(existing) => Ok(CommandResult::Success(Some(Self::render(&existing)))),
            Err(InstallerError::ConfigNotFound(_)) => Ok(CommandResult::Warning(format!(
                "✗ No settings file found\n\n{}",
                RUN_WIZARD_HINT
            ))),
            Err(e) => Ok(CommandResult::Error(format!("✗ Failed to read settings: {}", e))),
        }
    }

    fn name(&self) -> &'static str {
        "config"
    }
}
