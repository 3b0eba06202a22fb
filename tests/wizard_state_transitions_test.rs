use async_trait::async_trait;
use claude_installer::cli::tui::wizard::backend::{run_task, Backend};
use claude_installer::cli::tui::wizard::engine::RUNTIME_MISSING_MESSAGE;
use claude_installer::cli::tui::wizard::steps::StepStatus;
use claude_installer::cli::tui::wizard::{AppEvent, Stage, Task, Wizard};
use claude_installer::config::{models, InstallConfig};
use claude_installer::detector::{OsFamily, SystemSnapshot};
use claude_installer::installer::CommandOutcome;
use claude_installer::{InstallerError, Result};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Backend with canned results that records what it was asked to do
struct MockBackend {
    has_runtime: bool,
    install_ok: bool,
    written: Mutex<Vec<InstallConfig>>,
}

impl MockBackend {
    fn new(has_runtime: bool, install_ok: bool) -> Self {
        Self {
            has_runtime,
            install_ok,
            written: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn detect(&self) -> Result<SystemSnapshot> {
        Ok(SystemSnapshot {
            os: OsFamily::Linux,
            home_dir: PathBuf::from("/home/dev"),
            claude_dir: PathBuf::from("/home/dev/.claude"),
            has_runtime: self.has_runtime,
            runtime_version: if self.has_runtime { "v20.11.0".into() } else { String::new() },
            has_package_manager: self.has_runtime,
            package_manager_version: if self.has_runtime { "10.2.4".into() } else { String::new() },
            has_tool: false,
            tool_version: String::new(),
            can_reach_api: true,
        })
    }

    async fn write_settings(&self, claude_dir: &Path, config: &InstallConfig) -> Result<PathBuf> {
        self.written.lock().unwrap().push(config.clone());
        Ok(claude_dir.join("settings.json"))
    }

    async fn install(&self) -> CommandOutcome {
        CommandOutcome {
            success: self.install_ok,
            message: "done".into(),
            stdout: String::new(),
            stderr: if self.install_ok { String::new() } else { "npm ERR! code E404".into() },
        }
    }

    async fn update_model(&self, _claude_dir: &Path, model: &str) -> Result<()> {
        Err(InstallerError::UnknownModel(model.to_string()))
    }
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Feed an event and run any resulting tasks until the wizard is idle,
/// the way the event loop does.
async fn drive(wizard: &mut Wizard, backend: &MockBackend, event: AppEvent) {
    let mut next = wizard.handle_event(event);
    while let Some(task) = next {
        let completion = run_task(backend, task).await;
        next = wizard.handle_event(completion);
    }
}

async fn type_key(wizard: &mut Wizard, backend: &MockBackend, text: &str) {
    for c in text.chars() {
        drive(wizard, backend, key(KeyCode::Char(c))).await;
    }
}

#[tokio::test]
async fn test_full_install_end_to_end() {
    let backend = MockBackend::new(true, true);
    let mut wizard = Wizard::full_install();
    assert_eq!(wizard.stage(), Stage::Welcome);

    // Welcome -> Detecting issues a detect task
    assert_eq!(wizard.handle_event(key(KeyCode::Enter)), Some(Task::Detect));
    assert_eq!(wizard.stage(), Stage::Detecting);

    let detected = run_task(&backend, Task::Detect).await;
    assert_eq!(wizard.handle_event(detected), None);
    assert_eq!(wizard.stage(), Stage::InputKey);

    type_key(&mut wizard, &backend, "wj-1234567890").await;
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    assert_eq!(wizard.stage(), Stage::SelectModel);
    assert_eq!(wizard.state.selector.selected(), models::default_index());

    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    assert_eq!(wizard.stage(), Stage::Confirm);

    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    assert_eq!(wizard.stage(), Stage::Complete);
    assert!(wizard.state.error.is_none());

    let written = backend.written.lock().unwrap().clone();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].api_key, "wj-1234567890");
    assert_eq!(written[0].model, models::default_model().id);
    assert_eq!(
        wizard.state.settings_path,
        Some(PathBuf::from("/home/dev/.claude/settings.json"))
    );
    assert!(wizard
        .state
        .steps
        .steps()
        .iter()
        .take(5)
        .all(|s| s.status == StepStatus::Completed));

    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    assert!(wizard.should_quit);
}

#[tokio::test]
async fn test_selected_model_is_written() {
    let backend = MockBackend::new(true, true);
    let mut wizard = Wizard::full_install();
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    type_key(&mut wizard, &backend, "wj-1234567890").await;
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;

    // Up from the default wraps to the last entry
    drive(&mut wizard, &backend, key(KeyCode::Up)).await;
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;

    let written = backend.written.lock().unwrap().clone();
    assert_eq!(written[0].model, "claude-opus-4-5-20251101");
}

#[tokio::test]
async fn test_missing_runtime_never_reaches_input_key() {
    let backend = MockBackend::new(false, true);
    let mut wizard = Wizard::full_install();
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;

    assert_eq!(wizard.stage(), Stage::Error);
    assert_eq!(wizard.state.snapshot.as_ref().map(|s| s.has_runtime), Some(false));
    let error = wizard.state.error.clone().unwrap();
    assert_eq!(error.message, RUNTIME_MISSING_MESSAGE);
    assert!(error.detail.unwrap().contains("https://nodejs.org/"));

    // Esc starts over
    drive(&mut wizard, &backend, key(KeyCode::Esc)).await;
    assert_eq!(wizard.stage(), Stage::Welcome);
}

#[tokio::test]
async fn test_install_failure_surfaces_stderr() {
    let backend = MockBackend::new(true, false);
    let mut wizard = Wizard::full_install();
    drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    type_key(&mut wizard, &backend, "wj-1234567890").await;
    for _ in 0..3 {
        drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
    }

    assert_eq!(wizard.stage(), Stage::Error);
    assert_eq!(
        wizard.state.error.as_ref().and_then(|e| e.detail.clone()),
        Some("npm ERR! code E404".to_string())
    );
    assert!(wizard.state.steps.is_failed());
}

#[tokio::test]
async fn test_short_keys_are_rejected() {
    let backend = MockBackend::new(true, true);
    for len in 0..10 {
        let mut wizard = Wizard::full_install();
        drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
        type_key(&mut wizard, &backend, &"k".repeat(len)).await;
        let config_before = wizard.state.config.clone();

        drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
        assert_eq!(wizard.stage(), Stage::InputKey, "length {}", len);
        assert!(wizard.state.error.is_some());
        assert_eq!(wizard.state.config, config_before);
    }
}

#[tokio::test]
async fn test_long_enough_keys_are_accepted() {
    let backend = MockBackend::new(true, true);
    for len in [10, 11, 32, 128] {
        let mut wizard = Wizard::full_install();
        drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
        type_key(&mut wizard, &backend, &"k".repeat(len)).await;

        drive(&mut wizard, &backend, key(KeyCode::Enter)).await;
        assert_eq!(wizard.stage(), Stage::SelectModel, "length {}", len);
        assert_eq!(wizard.state.selector.selected(), models::default_index());
    }
}
