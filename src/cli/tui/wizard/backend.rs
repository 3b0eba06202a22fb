//! Collaborator seam between the wizard and the outside world

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::events::{AppEvent, Task};
use crate::config::{self, InstallConfig};
use crate::detector::{Detector, SystemSnapshot};
use crate::installer::{CommandOutcome, Installer};
use crate::{InstallerError, Result};

/// Operations the wizard delegates. Implemented by [`SystemBackend`] for real
/// runs and by mocks in tests.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn detect(&self) -> Result<SystemSnapshot>;

    async fn write_settings(&self, claude_dir: &Path, config: &InstallConfig) -> Result<PathBuf>;

    async fn install(&self) -> CommandOutcome;

    async fn update_model(&self, claude_dir: &Path, model: &str) -> Result<()>;
}

/// Backend that talks to the real system
#[derive(Debug, Clone, Default)]
pub struct SystemBackend {
    pub detector: Detector,
    pub installer: Installer,
}

impl SystemBackend {
    pub fn new(use_mirror: bool) -> Self {
        Self {
            detector: Detector::new(),
            installer: Installer::new().with_mirror(use_mirror),
        }
    }
}

#[async_trait]
impl Backend for SystemBackend {
    async fn detect(&self) -> Result<SystemSnapshot> {
        self.detector.detect().await
    }

    async fn write_settings(&self, claude_dir: &Path, config: &InstallConfig) -> Result<PathBuf> {
        let claude_dir = claude_dir.to_path_buf();
        let config = config.clone();
        tokio::task::spawn_blocking(move || config.write_settings(&claude_dir))
            .await
            .map_err(|e| InstallerError::Generic(e.into()))?
    }

    async fn install(&self) -> CommandOutcome {
        let outcome = self.installer.install().await;
        if !outcome.success {
            return outcome;
        }

        // Informational only
        let verify = self.installer.verify_install().await;
        if verify.success {
            info!(message = %verify.message, "Install verified");
        } else {
            warn!(detail = %verify.detail(), "Install verification failed");
        }
        let doctor = self.installer.run_health_check().await;
        if doctor.success {
            info!("Health check passed");
        } else {
            warn!(detail = %doctor.detail(), "Health check did not pass");
        }

        outcome
    }

    async fn update_model(&self, claude_dir: &Path, model: &str) -> Result<()> {
        let claude_dir = claude_dir.to_path_buf();
        let model = model.to_string();
        tokio::task::spawn_blocking(move || config::update_model(&claude_dir, &model))
            .await
            .map_err(|e| InstallerError::Generic(e.into()))?
    }
}

/// Run a task to completion and produce its completion event
pub async fn run_task(backend: &dyn Backend, task: Task) -> AppEvent {
    info!(kind = ?task.kind(), "Starting task");
    match task {
        Task::Detect => AppEvent::DetectDone(backend.detect().await.map_err(|e| e.to_string())),
        Task::WriteConfig { claude_dir, config } => AppEvent::ConfigWritten(
            backend
                .write_settings(&claude_dir, &config)
                .await
                .map_err(|e| e.to_string()),
        ),
        Task::Install => AppEvent::InstallDone(backend.install().await),
        Task::UpdateModel { claude_dir, model } => AppEvent::ModelUpdated(
            backend
                .update_model(&claude_dir, &model)
                .await
                .map_err(|e| e.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_system_backend_writes_and_updates() {
        let temp = TempDir::new().unwrap();
        let claude_dir = temp.path().join(".claude");
        let backend = SystemBackend::new(false);

        let config = InstallConfig {
            api_key: "wj-1234567890".to_string(),
            ..InstallConfig::default()
        };
        let event = run_task(
            &backend,
            Task::WriteConfig {
                claude_dir: claude_dir.clone(),
                config,
            },
        )
        .await;
        let expected = claude_dir.join("settings.json");
        assert!(matches!(event, AppEvent::ConfigWritten(Ok(ref p)) if p == &expected));

        let event = run_task(
            &backend,
            Task::UpdateModel {
                claude_dir: claude_dir.clone(),
                model: "claude-haiku-4-5-20251001".to_string(),
            },
        )
        .await;
        assert!(matches!(event, AppEvent::ModelUpdated(Ok(()))));
        assert_eq!(
            config::read_existing(&claude_dir).unwrap().model,
            "claude-haiku-4-5-20251001"
        );
    }

    #[tokio::test]
    async fn test_update_without_settings_reports_error() {
        let temp = TempDir::new().unwrap();
        let event = run_task(
            &SystemBackend::new(false),
            Task::UpdateModel {
                claude_dir: temp.path().to_path_buf(),
                model: "claude-haiku-4-5-20251001".to_string(),
            },
        )
        .await;
        assert!(matches!(event, AppEvent::ModelUpdated(Err(_))));
    }
}
