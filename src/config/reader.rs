//! Reading and patching an existing settings.json

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::models;
use super::settings::{write_private, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL};
use crate::io::paths::settings_file_in;
use crate::{InstallerError, Result};

/// Snapshot of a previously written settings file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub file_path: PathBuf,
}

impl ExistingConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn read_settings_text(settings_path: &Path) -> Result<String> {
    fs::read_to_string(settings_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            InstallerError::ConfigNotFound(settings_path.to_path_buf())
        } else {
            InstallerError::Io(e)
        }
    })
}

/// Read settings.json from `claude_dir`.
///
/// Only the file itself has to be valid JSON. A missing or non-object `env`
/// and non-string values read as empty, matching what [`update_model`] accepts.
pub fn read_existing(claude_dir: &Path) -> Result<ExistingConfig> {
    let settings_path = settings_file_in(claude_dir);
    let content = read_settings_text(&settings_path)?;
    let settings: Value = serde_json::from_str(&content)?;
    let env = settings.get("env").and_then(Value::as_object);

    let get = |key: &str| {
        env.and_then(|env| env.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(ExistingConfig {
        api_key: get(ENV_API_KEY),
        base_url: get(ENV_BASE_URL),
        model: get(ENV_MODEL),
        file_path: settings_path,
    })
}

/// Replace only the model id in an existing settings file.
///
/// The file is patched as raw JSON so keys this installer does not know
/// about (hooks, other env vars, ...) survive the rewrite.
pub fn update_model(claude_dir: &Path, model_id: &str) -> Result<()> {
    if models::find_by_id(model_id).is_none() {
        return Err(InstallerError::UnknownModel(model_id.to_string()));
    }

    let settings_path = settings_file_in(claude_dir);
    let content = read_settings_text(&settings_path)?;
    let mut settings: Value = serde_json::from_str(&content)?;

    let root = settings.as_object_mut().ok_or_else(|| {
        InstallerError::Validation(format!(
            "{} does not contain a JSON object",
            settings_path.display()
        ))
    })?;

    let env = root
        .entry("env")
        .or_insert_with(|| Value::Object(Default::default()));
    if !env.is_object() {
        *env = Value::Object(Default::default());
    }
    if let Value::Object(env) = env {
        env.insert(ENV_MODEL.to_string(), Value::String(model_id.to_string()));
    }

    let new_content = serde_json::to_string_pretty(&settings)?;
    write_private(&settings_path, new_content.as_bytes())?;

    tracing::info!(path = %settings_path.display(), model = model_id, "Updated model");
    Ok(())
}

/// Mask an API key for display: first 4 + `****` + last 4, or `****` when
/// the key has 8 characters or fewer.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}
