//! Profiles: named bundles of author metadata, layout and per-kind settings.
//! Profiles are stored as YAML (JSON is accepted too) in the profile
//! directory and are read-only once loaded.

use crate::constants::{DIR_MODE, FILE_MODE, PROFILE_EXTENSION};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Template used for new profiles and for the default profile.
pub const PROFILE_TEMPLATE: &str = include_str!("../templates/profile.yaml.j2");

/// The developer a profile is written for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
}

/// Directories and file kinds to create, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Layout {
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

/// A loaded profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub layout: Layout,
    /// Every other top-level table, looked up by dotted key.
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    /// Parses profile content. JSON is tried first, then YAML.
    pub fn parse<S: AsRef<str>>(name: &str, content: S) -> Result<Self> {
        let content = content.as_ref();
        match serde_json::from_str(content) {
            Ok(profile) => Ok(profile),
            Err(_) => serde_yaml::from_str(content).map_err(|e| Error::ProfileError {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Looks up a setting by dotted key, e.g. `git.url`.
    fn lookup(&self, key: &str) -> Option<&serde_json::Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = find_key(&self.settings, first)?;
        for segment in segments {
            current = find_key(current.as_object()?, segment)?;
        }
        Some(current)
    }

    /// Returns the string value of a setting, or an empty string when the
    /// setting is absent, null or not a scalar.
    pub fn get_str(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Returns the scalar items of a sequence setting. Absent settings
    /// and non-sequences yield an empty list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.lookup(key) {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    serde_json::Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

// Keys match exactly first, then ignoring ASCII case.
fn find_key<'a>(
    map: &'a serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Option<&'a serde_json::Value> {
    map.get(key)
        .or_else(|| map.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)).map(|(_, v)| v))
}

/// Renders the profile template for the given title and author.
pub fn render_profile(
    renderer: &dyn TemplateRenderer,
    title: &str,
    author: &Author,
    kinds: &[&str],
) -> Result<String> {
    let context = serde_json::json!({
        "title": title,
        "author": author,
        "kinds": kinds,
    });
    renderer.render("profile", PROFILE_TEMPLATE, &context)
}

/// Profile files on disk.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding the named profile. A name already ending
    /// in the profile extension is used as is.
    pub fn path_of(&self, name: &str) -> PathBuf {
        let suffix = format!(".{PROFILE_EXTENSION}");
        if name.ends_with(&suffix) {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{name}{suffix}"))
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Loads and parses the named profile.
    pub fn load(&self, name: &str) -> Result<Profile> {
        let path = self.path_of(name);
        debug!("Loading profile from {}", path.display());
        if !path.is_file() {
            return Err(Error::ProfileNotFoundError {
                name: name.to_string(),
            });
        }
        let content = fs::read_to_string(&path).map_err(|e| Error::ProfileError {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Profile::parse(name, content)
    }

    /// Returns the raw content of the named profile file.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(Error::ProfileNotFoundError {
                name: name.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Lists profile names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Writes a new profile file. Fails if the profile already exists.
    pub fn create(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_of(name);
        if path.exists() {
            return Err(Error::ProfileExistsError {
                name: name.to_string(),
            });
        }
        create_private_dir(&self.dir)?;
        write_private_file(&path, content)?;
        debug!("Profile written to {}", path.display());
        Ok(path)
    }
}

/// Creates a directory and its parents with owner-only permissions.
pub(crate) fn create_private_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path)
}

/// Creates a new file with owner-only permissions. Fails with
/// `AlreadyExists` rather than truncating an existing file.
pub(crate) fn write_private_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_prefers_exact_match() {
        let map = serde_json::json!({"URL": "upper", "url": "lower"});
        let map = map.as_object().unwrap();
        assert_eq!(find_key(map, "url").unwrap(), "lower");
        assert_eq!(find_key(map, "Url").unwrap(), "upper");
    }
}
