use crate::{InstallerError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Name of the Claude Code settings file inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Path management for the Claude Code configuration directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    /// User home directory
    pub home_dir: PathBuf,
    /// Claude Code configuration directory (~/.claude)
    pub claude_dir: PathBuf,
}

impl ClaudePaths {
    /// Resolve paths from the current user's home directory
    pub fn new() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or(InstallerError::HomeDirUnavailable)?;
        Ok(Self::for_home(dirs.home_dir()))
    }

    /// Create paths rooted at a specific home directory
    pub fn for_home(home_dir: &Path) -> Self {
        Self {
            home_dir: home_dir.to_path_buf(),
            claude_dir: home_dir.join(".claude"),
        }
    }

    /// Get the settings.json path
    pub fn settings_file(&self) -> PathBuf {
        settings_file_in(&self.claude_dir)
    }
}

/// Settings file path for a given Claude config directory
pub fn settings_file_in(claude_dir: &Path) -> PathBuf {
    claude_dir.join(SETTINGS_FILE_NAME)
}
