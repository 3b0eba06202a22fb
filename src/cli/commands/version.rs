use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::config::settings::WANJIE_NAME;
use crate::version;
use crate::Result;

/// Handler for `--version`
pub struct VersionCommand;

impl VersionCommand {
    pub fn render() -> String {
        format!(
            "Claude Code Installer {}\n\nInstalls Claude Code and configures the {} proxy",
            version::full_version(),
            WANJIE_NAME
        )
    }
}

#[async_trait]
impl CommandHandler for VersionCommand {
    async fn execute(&self) -> Result<CommandResult> {
        Ok(CommandResult::Success(Some(Self::render())))
    }

    fn name(&self) -> &'static str {
        "version"
    }
}
