use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{CommandHandler, CommandResult, RUN_WIZARD_HINT};
use crate::cli::tui::wizard::{self, Stage, WizardOptions};
use crate::config::{models, read_existing, update_model, ExistingConfig};
use crate::{InstallerError, Result};

/// Handler for `--switch-model [--model <ID_OR_ALIAS>]`
pub struct SwitchModelCommand {
    pub claude_dir: PathBuf,
    /// Switch directly instead of opening the selector
    pub model: Option<String>,
    pub options: WizardOptions,
}

impl SwitchModelCommand {
    pub fn new(claude_dir: PathBuf, model: Option<String>, options: WizardOptions) -> Self {
        Self {
            claude_dir,
            model,
            options,
        }
    }

    /// Switching needs a settings file that already holds an API key
    pub fn preflight(claude_dir: &Path) -> Result<ExistingConfig> {
        let existing = read_existing(claude_dir)?;
        if !existing.has_api_key() {
            return Err(InstallerError::MissingApiKey(existing.file_path));
        }
        Ok(existing)
    }

    fn switch_to(&self, alias: &str) -> Result<CommandResult> {
        let model = models::find_by_short_name(alias)
            .ok_or_else(|| InstallerError::UnknownModel(alias.to_string()))?;
        update_model(&self.claude_dir, model.id)?;
        info!(model = model.id, "Switched model");
        Ok(CommandResult::Success(Some(format!(
            "✓ Switched to {} ({})\nRestart claude to pick up the new model",
            model.name, model.id
        ))))
    }
}

#[async_trait]
impl CommandHandler for SwitchModelCommand {
    async fn execute(&self) -> Result<CommandResult> {
        let existing = match Self::preflight(&self.claude_dir) {
            Ok(existing) => existing,
            Err(e) if e.is_missing_setup() => {
                return Ok(CommandResult::Warning(format!("✗ {}\n\n{}", e, RUN_WIZARD_HINT)));
            }
            Err(e) => {
                return Ok(CommandResult::Error(format!("✗ Failed to read settings: {}", e)));
            }
        };

        if let Some(alias) = &self.model {
            return self.switch_to(alias);
        }

        let current = Some(existing.model).filter(|m| !m.is_empty());
        let state =
            wizard::run_switch_wizard(self.options, self.claude_dir.clone(), current).await?;
        if state.stage == Stage::SwitchComplete {
            Ok(CommandResult::Success(Some(format!(
                "✓ Model switched to {}",
                state.config.model
            ))))
        } else {
            Ok(CommandResult::Success(None))
        }
    }

    fn name(&self) -> &'static str {
        "switch-model"
    }
}
