use proforma::config::{Config, ConfigStore};
use proforma::error::Error;
use proforma::kinds::Registry;
use proforma::renderer::MiniJinjaRenderer;
use std::fs;
use tempfile::TempDir;

fn initialise(store: &ConfigStore) -> Config {
    let registry = Registry::builtin();
    store.initialise(&MiniJinjaRenderer::new(), &registry.identifiers()).unwrap()
}

#[test]
fn test_initialise_bootstraps_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("proforma"));

    let config = initialise(&store);

    assert_eq!(config, Config::default());
    assert!(store.config_path().is_file());
    let profiles = store.profiles(&config);
    assert_eq!(profiles.list().unwrap(), vec!["default"]);

    let profile = profiles.load("default").unwrap();
    assert_eq!(profile.layout.files, Registry::builtin().identifiers());
}

#[test]
fn test_initialise_loads_existing_configuration() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.yaml"),
        "default_profile: work\nauto_update: false\nprofile_dir: mine\n",
    )
    .unwrap();
    let store = ConfigStore::new(temp_dir.path());

    let config = initialise(&store);

    assert_eq!(config.default_profile, "work");
    assert!(!config.auto_update);
    assert_eq!(store.profiles(&config).dir(), temp_dir.path().join("mine"));
    // An existing configuration is never bootstrapped again.
    assert!(!temp_dir.path().join("profiles").exists());
}

#[test]
fn test_invalid_configuration() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.yaml"), "default_profile: [oops").unwrap();
    let store = ConfigStore::new(temp_dir.path());

    assert!(matches!(store.load(), Err(Error::ConfigError(_))));
}

#[test]
fn test_set_default_profile() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path());
    let mut config = initialise(&store);
    store.profiles(&config).create("work", "title: work\n").unwrap();

    store.set_default_profile(&mut config, "work.yaml").unwrap();
    assert_eq!(config.default_profile, "work");
    assert_eq!(store.load().unwrap().default_profile, "work");

    match store.set_default_profile(&mut config, "ghost") {
        Err(Error::ProfileNotFoundError { name }) => assert_eq!(name, "ghost"),
        other => panic!("Expected ProfileNotFoundError, got {other:?}"),
    }
    assert_eq!(store.load().unwrap().default_profile, "work");
}

#[test]
fn test_resolve_profile_name() {
    let config = Config::default();
    assert_eq!(config.resolve_profile_name(Some("work")).unwrap(), "work");
    assert_eq!(config.resolve_profile_name(None).unwrap(), "default");
    assert_eq!(config.resolve_profile_name(Some("")).unwrap(), "default");

    let config = Config { default_profile: String::new(), ..Config::default() };
    assert!(matches!(config.resolve_profile_name(None), Err(Error::ConfigError(_))));
}
