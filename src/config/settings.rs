//! Claude Code settings.json wire format and the full-write operation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::models;
use crate::io::paths::settings_file_in;
use crate::{InstallerError, Result};

/// Wanjie Data proxy endpoint
pub const WANJIE_BASE_URL: &str = "https://maas-openapi.wanjiedata.com/api/anthropic";
/// Provider label shown to the user
pub const WANJIE_NAME: &str = "Wanjie Data";

pub const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_MODEL: &str = "ANTHROPIC_MODEL";

/// Minimum accepted API key length, in characters
pub const MIN_API_KEY_LEN: usize = 10;

/// Top-level settings.json structure consumed by Claude Code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaudeSettings {
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

/// Tool permission lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,
}

/// Values collected by the wizard
#[derive(Debug, Clone, PartialEq)]
pub struct InstallConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub provider: String,
    pub permissions: Option<Permissions>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: models::default_model().id.to_string(),
            base_url: WANJIE_BASE_URL.to_string(),
            provider: WANJIE_NAME.to_string(),
            permissions: None,
        }
    }
}

impl InstallConfig {
    /// Build the settings.json content
    pub fn generate_settings(&self) -> ClaudeSettings {
        let mut env = BTreeMap::new();
        env.insert(ENV_BASE_URL.to_string(), self.base_url.clone());
        env.insert(ENV_API_KEY.to_string(), self.api_key.clone());
        env.insert(ENV_MODEL.to_string(), self.model.clone());

        ClaudeSettings {
            env,
            permissions: self.permissions.clone(),
        }
    }

    /// Write settings.json into `claude_dir`, creating the directory if needed.
    /// Returns the path written.
    pub fn write_settings(&self, claude_dir: &Path) -> Result<PathBuf> {
        if models::find_by_id(&self.model).is_none() {
            return Err(InstallerError::UnknownModel(self.model.clone()));
        }

        fs::create_dir_all(claude_dir)?;

        let settings_path = settings_file_in(claude_dir);
        let content = serde_json::to_string_pretty(&self.generate_settings())?;
        write_private(&settings_path, content.as_bytes())?;

        tracing::info!(path = %settings_path.display(), model = %self.model, "Wrote settings");
        Ok(settings_path)
    }
}

/// Check an API key. Only the length is checked; the proxy's key format is
/// not documented, so no charset or checksum validation is attempted.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.trim().chars().count() >= MIN_API_KEY_LEN {
        Ok(())
    } else {
        Err(InstallerError::Validation(format!(
            "API key must be at least {} characters",
            MIN_API_KEY_LEN
        )))
    }
}

/// Write a file readable and writable by the owner only
pub(crate) fn write_private(path: &Path, content: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;

    // mode() only applies on creation; tighten pre-existing files too
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
