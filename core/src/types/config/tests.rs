use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig::load(&temp.path().join("absent.toml")).unwrap();

    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.public_base_url, None);
    assert_eq!(config.storage.backend, StorageBackend::Redb);
    assert_eq!(config.storage.data_dir, PathBuf::from("data"));
    assert!(config.validate().is_empty());
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pastebin.toml");
    std::fs::write(
        &path,
        "[server]\nport = 9000\n\n[storage]\nbackend = \"memory\"\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.data_dir, PathBuf::from("data"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pastebin.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    assert!(matches!(
        AppConfig::load(&path),
        Err(AppConfigError::Parse(_))
    ));
}

#[test]
fn validate_reports_every_problem() {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.server.bind = " ".to_string();
    config.server.public_base_url = Some("ftp://example.com".to_string());
    config.storage.data_dir = PathBuf::new();

    let errors = config.validate();
    assert_eq!(errors.len(), 4, "{errors:?}");
}

#[test]
fn memory_backend_does_not_need_a_data_dir() {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.storage.data_dir = PathBuf::new();

    assert!(config.validate().is_empty());
}

#[test]
fn backend_parses_case_insensitively() {
    assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
    assert_eq!(" redb ".parse::<StorageBackend>().unwrap(), StorageBackend::Redb);
    assert!(matches!(
        "sqlite".parse::<StorageBackend>(),
        Err(AppConfigError::UnknownBackend(name)) if name == "sqlite"
    ));
}

#[test]
fn store_config_points_into_data_dir() {
    let storage = StorageConfig {
        backend: StorageBackend::Redb,
        data_dir: PathBuf::from("/var/lib/pastebin"),
    };
    assert_eq!(
        storage.store_config().db_path(),
        PathBuf::from("/var/lib/pastebin/pastes.redb")
    );
}
