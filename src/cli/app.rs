use clap::Parser;
use std::path::PathBuf;

use crate::cli::tui::wizard::{ThemeName, WizardOptions};
use crate::logging::LogLevel;

/// Claude Code installer: configure the Wanjie Data proxy and install Claude Code
#[derive(Parser, Debug)]
#[command(name = "claude-installer")]
#[command(about = "Interactive installer for Claude Code")]
#[command(long_about = concat!(
    "Detects Node.js and npm, collects an API key, writes ~/.claude/settings.json ",
    "and installs Claude Code with npm. Without flags the interactive wizard runs."
))]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'V', long)]
    pub version: bool,

    /// List the supported models
    #[arg(long, conflicts_with_all = ["version", "config", "switch_model"])]
    pub list_models: bool,

    /// Show the current configuration (API key masked)
    #[arg(long, conflicts_with_all = ["version", "switch_model"])]
    pub config: bool,

    /// Switch the model of an existing configuration
    #[arg(long, conflicts_with = "version")]
    pub switch_model: bool,

    /// Model id or alias to switch to without the interactive selector
    #[arg(long, value_name = "ID_OR_ALIAS", requires = "switch_model")]
    pub model: Option<String>,

    /// Color theme of the interactive wizard
    #[arg(long, value_enum, default_value_t = ThemeName::Opencode)]
    pub theme: ThemeName,

    /// Skip configuring the npm registry mirror
    #[arg(long)]
    pub no_mirror: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Mode selected by the flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Version,
    ListModels,
    ShowConfig,
    SwitchModel { model: Option<String> },
    Install,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.version {
            Mode::Version
        } else if self.list_models {
            Mode::ListModels
        } else if self.config {
            Mode::ShowConfig
        } else if self.switch_model {
            Mode::SwitchModel {
                model: self.model.clone(),
            }
        } else {
            Mode::Install
        }
    }

    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions {
            theme: self.theme,
            use_mirror: !self.no_mirror,
        }
    }
}

impl Mode {
    /// Get the mode name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Version => "version",
            Mode::ListModels => "list-models",
            Mode::ShowConfig => "config",
            Mode::SwitchModel { .. } => "switch-model",
            Mode::Install => "install",
        }
    }

    /// Modes that take over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Mode::Install | Mode::SwitchModel { model: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_is_install() {
        let cli = Cli::parse_from(["claude-installer"]);
        assert_eq!(cli.mode(), Mode::Install);
        assert!(cli.mode().is_interactive());
        assert_eq!(cli.theme, ThemeName::Opencode);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(cli.wizard_options().use_mirror);
    }

    #[test]
    fn test_version_flag() {
        let cli = Cli::parse_from(["claude-installer", "--version"]);
        assert_eq!(cli.mode(), Mode::Version);
        assert!(!cli.mode().is_interactive());
    }

    #[test]
    fn test_switch_model_with_alias() {
        let cli = Cli::parse_from(["claude-installer", "--switch-model", "--model", "opus-4.5"]);
        assert_eq!(
            cli.mode(),
            Mode::SwitchModel {
                model: Some("opus-4.5".to_string())
            }
        );
        assert!(!cli.mode().is_interactive());
    }

    #[test]
    fn test_model_requires_switch_model() {
        assert!(Cli::try_parse_from(["claude-installer", "--model", "opus-4.5"]).is_err());
    }

    #[test]
    fn test_conflicting_modes_rejected() {
        assert!(Cli::try_parse_from(["claude-installer", "--list-models", "--config"]).is_err());
    }

    #[test]
    fn test_wizard_options() {
        let cli = Cli::parse_from([
            "claude-installer",
            "--theme",
            "tokyonight",
            "--no-mirror",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/installer.log",
        ]);
        let options = cli.wizard_options();
        assert_eq!(options.theme, ThemeName::Tokyonight);
        assert!(!options.use_mirror);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/installer.log")));
        assert_eq!(cli.mode().name(), "install");
    }
}
