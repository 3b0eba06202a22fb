use claude_installer::config::{mask_api_key, read_existing, update_model, InstallConfig};
use claude_installer::InstallerError;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn install(dir: &std::path::Path) -> InstallConfig {
    let config = InstallConfig {
        api_key: "wj-1234567890".to_string(),
        ..InstallConfig::default()
    };
    config.write_settings(dir).unwrap();
    config
}

#[test]
fn test_update_then_read_round_trip() {
    let temp = TempDir::new().unwrap();
    let config = install(temp.path());
    let before = read_existing(temp.path()).unwrap();

    update_model(temp.path(), "claude-opus-4-5-20251101").unwrap();

    let after = read_existing(temp.path()).unwrap();
    assert_eq!(after.model, "claude-opus-4-5-20251101");
    assert_eq!(after.api_key, before.api_key);
    assert_eq!(after.base_url, before.base_url);
    assert_eq!(after.api_key, config.api_key);
    assert_eq!(after.file_path, temp.path().join("settings.json"));
}

#[test]
fn test_update_preserves_foreign_keys() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("settings.json"),
        r#"{
  "env": {
    "ANTHROPIC_API_KEY": "wj-1234567890",
    "ANTHROPIC_MODEL": "claude-sonnet-4-20250514",
    "HTTPS_PROXY": "http://127.0.0.1:7890"
  },
  "hooks": { "PreToolUse": [] },
  "permissions": { "deny": ["Bash(rm -rf /)"] }
}"#,
    )
    .unwrap();

    update_model(temp.path(), "claude-haiku-4-5-20251001").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("settings.json")).unwrap())
            .unwrap();
    assert_eq!(value["env"]["ANTHROPIC_MODEL"], "claude-haiku-4-5-20251001");
    assert_eq!(value["env"]["HTTPS_PROXY"], "http://127.0.0.1:7890");
    assert_eq!(value["hooks"], serde_json::json!({ "PreToolUse": [] }));
    assert_eq!(value["permissions"]["deny"][0], "Bash(rm -rf /)");
}

#[test]
fn test_update_without_file_fails() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        update_model(temp.path(), "claude-opus-4-5-20251101"),
        Err(InstallerError::ConfigNotFound(_))
    ));
    assert!(!temp.path().join("settings.json").exists());
}

#[test]
fn test_update_rejects_unknown_model() {
    let temp = TempDir::new().unwrap();
    install(temp.path());
    assert!(matches!(
        update_model(temp.path(), "claude-2.1"),
        Err(InstallerError::UnknownModel(_))
    ));
    assert_eq!(
        read_existing(temp.path()).unwrap().model,
        "claude-sonnet-4-20250514"
    );
}

#[test]
fn test_read_missing_and_corrupt() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        read_existing(temp.path()),
        Err(InstallerError::ConfigNotFound(_))
    ));

    fs::write(temp.path().join("settings.json"), "not json").unwrap();
    assert!(matches!(
        read_existing(temp.path()),
        Err(InstallerError::Json(_))
    ));
}

#[test]
fn test_read_accepts_what_update_accepts() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    fs::write(&path, r#"{"env": null, "hooks": {}}"#).unwrap();
    let existing = read_existing(temp.path()).unwrap();
    assert_eq!(existing.model, "");
    assert!(!existing.has_api_key());

    update_model(temp.path(), "claude-opus-4-5-20251101").unwrap();
    assert_eq!(
        read_existing(temp.path()).unwrap().model,
        "claude-opus-4-5-20251101"
    );

    fs::write(
        &path,
        r#"{"env": {"ANTHROPIC_API_KEY": "wj-1234567890", "API_TIMEOUT_MS": 600000}}"#,
    )
    .unwrap();
    let existing = read_existing(temp.path()).unwrap();
    assert_eq!(existing.api_key, "wj-1234567890");

    fs::write(&path, r#"{"env": {"ANTHROPIC_MODEL": 42}}"#).unwrap();
    assert_eq!(read_existing(temp.path()).unwrap().model, "");
}

#[cfg(unix)]
#[test]
fn test_update_keeps_owner_only_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    install(temp.path());
    update_model(temp.path(), "claude-opus-4-1-20250805").unwrap();

    let mode = fs::metadata(temp.path().join("settings.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_masking() {
    assert_eq!(mask_api_key("sk-ABCDEFGHIJKL"), "sk-A****IJKL");
    assert_eq!(mask_api_key("short"), "****");
    assert_eq!(mask_api_key("12345678"), "****");
    assert_eq!(mask_api_key("123456789"), "1234****6789");
}
