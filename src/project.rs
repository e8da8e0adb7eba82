//! Project assembly.
//! A `Project` pairs a profile with a name and a root directory and drives
//! a build: directories, files, then the external initializers.

use crate::error::{Error, Result};
use crate::init::{InitOutcome, Initializers};
use crate::layout::{Attempt, LayoutBuilder};
use crate::profile::{create_private_dir, Author, Layout, Profile};
use log::debug;
use std::path::{Path, PathBuf};

/// Everything needed to build one project. Lives for a single build.
#[derive(Debug)]
pub struct Project<'a> {
    pub profile: &'a Profile,
    pub name: String,
    /// Project root; layout paths are relative to it.
    pub path: PathBuf,
    pub layout: Layout,
    pub author: &'a Author,
}

/// Per-entry results of a build that reached the end.
#[derive(Debug)]
pub struct BuildReport {
    pub directories: Vec<Attempt>,
    pub files: Vec<Attempt>,
    pub manifest: InitOutcome,
    pub vcs: InitOutcome,
}

impl BuildReport {
    fn attempts(&self) -> impl Iterator<Item = &Attempt> {
        self.directories.iter().chain(self.files.iter())
    }

    pub fn created(&self) -> usize {
        self.attempts().filter(|a| a.is_created()).count()
    }

    pub fn skipped(&self) -> usize {
        self.attempts().filter(|a| a.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempts().filter(|a| a.is_failed()).count()
    }

    /// One-line summary printed at the end of a build.
    pub fn summary(&self) -> String {
        format!(
            "{} directories and {} files attempted: {} created, {} skipped, {} failed.",
            self.directories.len(),
            self.files.len(),
            self.created(),
            self.skipped(),
            self.failed()
        )
    }
}

impl<'a> Project<'a> {
    /// Creates a project rooted at `path`, taking its layout from the profile.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        profile: &'a Profile,
        name: S,
        path: P,
    ) -> Self {
        Self {
            profile,
            name: name.into(),
            path: path.into(),
            layout: profile.layout.clone(),
            author: &profile.author,
        }
    }

    /// Builds the layout, then initialises the dependency manifest and
    /// version control.
    ///
    /// # Errors
    /// Only initializer failures are returned; directory and file problems
    /// are recorded in the report.
    pub fn build(
        &self,
        layout: &LayoutBuilder,
        initializers: &Initializers,
    ) -> Result<BuildReport> {
        debug!("Building project '{}' in {}", self.name, self.path.display());

        let directories = layout.create_directories(&self.path, &self.layout.directories);
        let files = layout.create_files(self);

        let manifest = initializers.manifest.initialize(&self.path)?;
        let vcs = initializers.vcs.initialize(&self.path)?;

        Ok(BuildReport {
            directories,
            files,
            manifest,
            vcs,
        })
    }
}

/// Resolves the project name and root.
///
/// Without a name the project is built in `location` and named after it.
/// With a name, `<location>/<name>` is created (owner-only) and used.
pub fn prepare_project_dir<P: AsRef<Path>>(
    location: P,
    name: Option<&str>,
) -> Result<(String, PathBuf)> {
    let location = location.as_ref();
    match name {
        None => {
            let name = location
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::ConfigError(format!(
                        "cannot derive a project name from '{}'",
                        location.display()
                    ))
                })?;
            Ok((name, location.to_path_buf()))
        }
        Some(name) => {
            let root = location.join(name);
            create_private_dir(&root).map_err(|source| Error::DirectoryError {
                path: root.clone(),
                source,
            })?;
            println!("Build project directory {}", root.display());
            let name = Path::new(name)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(name)
                .to_string();
            Ok((name, root))
        }
    }
}
