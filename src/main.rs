use anyhow::Context;
use clap::Parser;
use claude_installer::{
    cli::commands::{
        install::InstallCommand, list_models::ListModelsCommand, show_config::ShowConfigCommand,
        switch_model::SwitchModelCommand, version::VersionCommand, CommandHandler, CommandResult,
    },
    cli::{Cli, Mode},
    io::ClaudePaths,
    logging,
};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();

    logging::init(cli.log_level, cli.log_file.as_deref(), mode.is_interactive())
        .context("Failed to initialize logging")?;
    debug!(mode = mode.name(), "Starting");

    let command: Box<dyn CommandHandler> = match mode {
        Mode::Version => Box::new(VersionCommand),
        Mode::ListModels => Box::new(ListModelsCommand),
        Mode::ShowConfig => Box::new(ShowConfigCommand::new(claude_dir()?)),
        Mode::SwitchModel { model } => Box::new(SwitchModelCommand::new(
            claude_dir()?,
            model,
            cli.wizard_options(),
        )),
        Mode::Install => Box::new(InstallCommand::new(cli.wizard_options())),
    };

    let result = command
        .execute()
        .await
        .with_context(|| format!("{} failed", command.name()))?;

    match &result {
        CommandResult::Success(Some(message)) | CommandResult::Warning(message) => {
            println!("{}", message)
        }
        CommandResult::Error(message) => eprintln!("{}", message),
        CommandResult::Success(None) => {}
    }

    if result.exit_code() != 0 {
        std::process::exit(result.exit_code());
    }
    Ok(())
}

fn claude_dir() -> anyhow::Result<std::path::PathBuf> {
    let paths = ClaudePaths::new().context("Cannot locate the Claude configuration directory")?;
    Ok(paths.claude_dir)
}
