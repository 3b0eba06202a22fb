//! External command execution for the install flow
//!
//! Each operation runs a single command, captures stdout and stderr
//! separately, and reports a [`CommandOutcome`]. Nothing here returns `Err`:
//! a command that cannot be spawned is a failed outcome with the spawn
//! error in `stderr`.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// npm registry mirror used inside mainland China
pub const MIRROR_REGISTRY: &str = "https://registry.npmmirror.com";
/// Package providing the `claude` CLI
pub const PACKAGE_NAME: &str = "@anthropic-ai/claude-code";

/// Result of one external command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// Best text to show the user when the command failed
    pub fn detail(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        }
    }
}

/// Runs the npm / claude commands
#[derive(Debug, Clone)]
pub struct Installer {
    pub use_mirror: bool,
    pub registry: String,
    pub package: String,
    pub package_manager: String,
    pub tool: String,
}

impl Default for Installer {
    fn default() -> Self {
        Self {
            use_mirror: true,
            registry: MIRROR_REGISTRY.to_string(),
            package: PACKAGE_NAME.to_string(),
            package_manager: crate::detector::PACKAGE_MANAGER_PROGRAM.to_string(),
            tool: crate::detector::TOOL_PROGRAM.to_string(),
        }
    }
}

impl Installer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mirror(mut self, use_mirror: bool) -> Self {
        self.use_mirror = use_mirror;
        self
    }

    /// Configure the mirror (if enabled) and install the package.
    ///
    /// A mirror failure is logged and the install proceeds against whatever
    /// registry npm already uses.
    pub async fn install(&self) -> CommandOutcome {
        if self.use_mirror {
            let mirror = self.configure_mirror().await;
            if !mirror.success {
                warn!(
                    registry = %self.registry,
                    stderr = %mirror.stderr.trim(),
                    "Mirror configuration failed, continuing with the current registry"
                );
            }
        }

        self.install_package().await
    }

    /// `npm config set registry <mirror>`
    pub async fn configure_mirror(&self) -> CommandOutcome {
        run(
            &self.package_manager,
            &["config", "set", "registry", &self.registry],
            "Mirror configured",
            "Mirror configuration failed",
        )
        .await
    }

    /// `npm install -g <package>`
    pub async fn install_package(&self) -> CommandOutcome {
        info!(package = %self.package, "Installing package");
        run(
            &self.package_manager,
            &["install", "-g", &self.package],
            &format!("{} installed", self.package),
            &format!("{} installation failed", self.package),
        )
        .await
    }

    /// `claude --version`
    pub async fn verify_install(&self) -> CommandOutcome {
        let mut outcome = run(
            &self.tool,
            &["--version"],
            "Installed",
            "Verification failed",
        )
        .await;
        if outcome.success {
            outcome.message = format!("{} {} installed", self.tool, outcome.stdout.trim());
        }
        outcome
    }

    /// `claude doctor`
    pub async fn run_health_check(&self) -> CommandOutcome {
        run(
            &self.tool,
            &["doctor"],
            "Health check passed",
            "Health check did not pass",
        )
        .await
    }
}

fn build_command(program: &str, args: &[&str]) -> Command {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program);
        cmd
    } else {
        Command::new(program)
    };
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

async fn run(program: &str, args: &[&str], ok_message: &str, err_message: &str) -> CommandOutcome {
    let command_line = format!("{} {}", program, args.join(" "));

    match build_command(program, args).output().await {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if output.status.success() {
                info!(command = %command_line, "Command succeeded");
                CommandOutcome {
                    success: true,
                    message: ok_message.to_string(),
                    stdout,
                    stderr,
                }
            } else {
                warn!(command = %command_line, status = ?output.status, "Command failed");
                CommandOutcome {
                    success: false,
                    message: err_message.to_string(),
                    stdout,
                    stderr: format!("{}\n{}", output.status, stderr),
                }
            }
        }
        Err(e) => {
            warn!(command = %command_line, error = %e, "Failed to spawn command");
            CommandOutcome {
                success: false,
                message: err_message.to_string(),
                stdout: String::new(),
                stderr: format!("{}: {}", command_line, e),
            }
        }
    }
}
