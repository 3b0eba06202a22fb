//! Claude Code settings: the model catalog, the settings.json format and
//! the read / write / patch operations on it.

pub mod models;
pub mod reader;
pub mod settings;

pub use models::{ModelInfo, SUPPORTED_MODELS};
pub use reader::{mask_api_key, read_existing, update_model, ExistingConfig};
pub use settings::{validate_api_key, ClaudeSettings, InstallConfig, Permissions};
