//! Application configuration.
//! Locates the configuration directory, bootstraps it on first run and
//! loads `config.yaml`, which names the default profile.

use crate::constants::{APP_DIR, CONFIG_FILE, DEFAULT_PROFILE, PROFILE_DIR, PROFILE_EXTENSION};
use crate::error::{Error, Result};
use crate::profile::{create_private_dir, render_profile, write_private_file, Author, ProfileStore};
use crate::renderer::TemplateRenderer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used by `new` when none is given.
    #[serde(default)]
    pub default_profile: String,
    /// Stored for the user's benefit; proforma does not update itself.
    #[serde(default = "default_auto_update")]
    pub auto_update: bool,
    /// Profile directory, relative to the configuration directory.
    #[serde(default = "default_profile_dir")]
    pub profile_dir: String,
}

fn default_auto_update() -> bool {
    true
}

fn default_profile_dir() -> String {
    PROFILE_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: DEFAULT_PROFILE.to_string(),
            auto_update: default_auto_update(),
            profile_dir: default_profile_dir(),
        }
    }
}

impl Config {
    /// Picks the profile to build with: the explicit one if given,
    /// otherwise the configured default.
    pub fn resolve_profile_name(&self, explicit: Option<&str>) -> Result<String> {
        match explicit.filter(|name| !name.is_empty()) {
            Some(name) => Ok(name.to_string()),
            None if !self.default_profile.is_empty() => {
                println!("Loading default profile '{}'.", self.default_profile);
                Ok(self.default_profile.clone())
            }
            None => Err(Error::ConfigError(
                "no profile was specified, and no default profile was found".to_string(),
            )),
        }
    }
}

/// The configuration directory and the files it holds.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Uses the given directory, or `<user config dir>/proforma`.
    pub fn locate(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Ok(Self::new(dir)),
            None => dirs::config_dir()
                .map(|dir| Self::new(dir.join(APP_DIR)))
                .ok_or_else(|| {
                    Error::ConfigError(
                        "could not determine the user configuration directory".into(),
                    )
                }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn profiles(&self, config: &Config) -> ProfileStore {
        ProfileStore::new(self.root.join(&config.profile_dir))
    }

    /// Loads the configuration, creating the directory, the configuration
    /// file and the default profile when the file does not exist yet.
    pub fn initialise(&self, renderer: &dyn TemplateRenderer, kinds: &[&str]) -> Result<Config> {
        let path = self.config_path();
        if path.is_file() {
            return self.load();
        }

        debug!("Creating configuration in {}", self.root.display());
        create_private_dir(&self.root).map_err(|e| {
            Error::ConfigError(format!("could not create '{}': {e}", self.root.display()))
        })?;

        let config = Config::default();
        let content = serde_yaml::to_string(&config)
            .map_err(|e| Error::ConfigError(format!("could not serialize configuration: {e}")))?;
        write_private_file(&path, &content).map_err(|e| {
            Error::ConfigError(format!("could not write '{}': {e}", path.display()))
        })?;

        let profiles = self.profiles(&config);
        if !profiles.exists(&config.default_profile) {
            let content =
                render_profile(renderer, "default profile", &Author::default(), kinds)?;
            profiles.create(&config.default_profile, &content)?;
        }

        Ok(config)
    }

    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::ConfigError(format!("could not read '{}': {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("invalid configuration format: {e}")))
    }

    /// Rewrites the configuration file.
    pub fn save(&self, config: &Config) -> Result<()> {
        let path = self.config_path();
        let content = serde_yaml::to_string(config)
            .map_err(|e| Error::ConfigError(format!("could not serialize configuration: {e}")))?;
        std::fs::write(&path, content)
            .map_err(|e| Error::ConfigError(format!("could not write '{}': {e}", path.display())))
    }

    /// Makes `name` the default profile. The profile must exist.
    pub fn set_default_profile(&self, config: &mut Config, name: &str) -> Result<()> {
        let suffix = format!(".{PROFILE_EXTENSION}");
        let name = name.strip_suffix(suffix.as_str()).unwrap_or(name);
        if !self.profiles(config).exists(name) {
            return Err(Error::ProfileNotFoundError {
                name: name.to_string(),
            });
        }
        config.default_profile = name.to_string();
        self.save(config)
    }
}
