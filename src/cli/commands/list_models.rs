use async_trait::async_trait;

use super::{CommandHandler, CommandResult};
use crate::config::models;
use crate::Result;

/// Handler for `--list-models`
pub struct ListModelsCommand;

#[async_trait]
impl CommandHandler for ListModelsCommand {
    async fn execute(&self) -> Result<CommandResult> {
        Ok(CommandResult::Success(Some(
            models::list_models().trim_end().to_string(),
        )))
    }

    fn name(&self) -> &'static str {
        "list-models"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_every_model() {
        let result = ListModelsCommand.execute().await.unwrap();
        let text = result.message().unwrap();
        for model in models::SUPPORTED_MODELS.iter() {
            assert!(text.contains(model.id));
        }
        assert_eq!(text.matches("(default)").count(), 1);
    }
}
