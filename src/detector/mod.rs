//! Environment detection
//!
//! Probes the operating system, the Node.js runtime, npm, an existing Claude
//! Code install and reachability of the proxy host. Every probe is
//! best-effort: a missing program is reported as absence. Only failing to
//! resolve the home directory is an error.

use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

use crate::io::ClaudePaths;
use crate::Result;

/// Host probed for reachability (HEAD request)
pub const PROBE_URL: &str = "https://maas-openapi.wanjiedata.com";
/// Timeout for the reachability probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub const RUNTIME_PROGRAM: &str = "node";
pub const PACKAGE_MANAGER_PROGRAM: &str = "npm";
pub const TOOL_PROGRAM: &str = "claude";

/// Operating system family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Family of the running OS
    pub fn current() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    pub fn from_os_str(os: &str) -> Self {
        match os {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            other => OsFamily::Other(other.to_string()),
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
            OsFamily::Other(name) => name,
        }
    }
}

/// Point-in-time view of the local environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub os: OsFamily,
    pub home_dir: PathBuf,
    /// ~/.claude
    pub claude_dir: PathBuf,
    pub has_runtime: bool,
    pub runtime_version: String,
    pub has_package_manager: bool,
    pub package_manager_version: String,
    pub has_tool: bool,
    pub tool_version: String,
    pub can_reach_api: bool,
}

impl SystemSnapshot {
    /// Whether Node.js or npm still has to be installed by the user
    pub fn needs_runtime(&self) -> bool {
        !self.has_runtime || !self.has_package_manager
    }

    pub fn settings_path(&self) -> PathBuf {
        crate::io::paths::settings_file_in(&self.claude_dir)
    }

    pub fn os_name(&self) -> &str {
        self.os.display_name()
    }
}

/// Runs the environment probes
#[derive(Debug, Clone)]
pub struct Detector {
    home_override: Option<PathBuf>,
    runtime_program: String,
    package_manager_program: String,
    tool_program: String,
    probe_url: Option<String>,
    probe_timeout: Duration,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            home_override: None,
            runtime_program: RUNTIME_PROGRAM.to_string(),
            package_manager_program: PACKAGE_MANAGER_PROGRAM.to_string(),
            tool_program: TOOL_PROGRAM.to_string(),
            probe_url: Some(PROBE_URL.to_string()),
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed home directory instead of the user's
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_override = Some(home.into());
        self
    }

    /// Override the programs probed for runtime, package manager and tool
    pub fn with_programs(
        mut self,
        runtime: impl Into<String>,
        package_manager: impl Into<String>,
        tool: impl Into<String>,
    ) -> Self {
        self.runtime_program = runtime.into();
        self.package_manager_program = package_manager.into();
        self.tool_program = tool.into();
        self
    }

    /// Skip the network probe; `can_reach_api` will be false
    pub fn without_network_probe(mut self) -> Self {
        self.probe_url = None;
        self
    }

    pub async fn detect(&self) -> Result<SystemSnapshot> {
        let paths = match &self.home_override {
            Some(home) => ClaudePaths::for_home(home),
            None => ClaudePaths::new()?,
        };

        let (runtime, package_manager, tool, can_reach_api) = tokio::join!(
            probe_version(&self.runtime_program),
            probe_version(&self.package_manager_program),
            probe_version(&self.tool_program),
            self.probe_network(),
        );

        let snapshot = SystemSnapshot {
            os: OsFamily::current(),
            home_dir: paths.home_dir,
            claude_dir: paths.claude_dir,
            has_runtime: runtime.is_some(),
            runtime_version: runtime.unwrap_or_default(),
            has_package_manager: package_manager.is_some(),
            package_manager_version: package_manager.unwrap_or_default(),
            has_tool: tool.is_some(),
            tool_version: tool.unwrap_or_default(),
            can_reach_api,
        };

        info!(
            os = snapshot.os_name(),
            runtime = %snapshot.runtime_version,
            package_manager = %snapshot.package_manager_version,
            tool = %snapshot.tool_version,
            can_reach_api = snapshot.can_reach_api,
            "Environment detected"
        );
        Ok(snapshot)
    }

    async fn probe_network(&self) -> bool {
        let Some(url) = &self.probe_url else {
            return false;
        };

        let client = match reqwest::Client::builder()
            .timeout(self.probe_timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                debug!(error = %e, "Failed to build HTTP client");
                return false;
            }
        };

        match client.head(url).send().await {
            Ok(response) => response.status().as_u16() < 500,
            Err(e) => {
                debug!(url = %url, error = %e, "Reachability probe failed");
                false
            }
        }
    }
}

/// Run `<program> --version` and return the trimmed output on success
pub async fn probe_version(program: &str) -> Option<String> {
    let output = version_command(program).output().await;
    match output {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            debug!(program, status = ?output.status, "Version probe exited with failure");
            None
        }
        Err(e) => {
            debug!(program, error = %e, "Program not found");
            None
        }
    }
}

#[cfg(windows)]
fn version_command(program: &str) -> Command {
    // npm and claude are .cmd shims on Windows
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", program, "--version"]);
    cmd
}

#[cfg(not(windows))]
fn version_command(program: &str) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg("--version");
    cmd
}
