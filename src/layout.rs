//! Directory and file layout construction.
//! Both passes are best effort: every declared entry is attempted once, in
//! declaration order, and a failing entry never stops the ones after it.

use crate::error::{Error, Result};
use crate::kinds::Registry;
use crate::profile::{create_private_dir, write_private_file};
use crate::project::Project;
use crate::renderer::TemplateRenderer;
use log::{debug, warn};
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

/// What happened to an entry that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    /// Something already existed at the target path and was left untouched.
    AlreadyExists(PathBuf),
}

/// Whether an attempt was for a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// The result of creating one declared directory or file.
#[derive(Debug)]
pub struct Attempt {
    pub index: usize,
    pub entry: EntryKind,
    /// Declared directory path or file kind identifier.
    pub name: String,
    pub result: Result<Outcome>,
}

impl Attempt {
    pub fn is_created(&self) -> bool {
        matches!(self.result, Ok(Outcome::Created(_)))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.result, Ok(Outcome::AlreadyExists(_)))
    }

    pub fn is_failed(&self) -> bool {
        self.result.is_err()
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.entry {
            EntryKind::Directory => "Building directory",
            EntryKind::File => "Building file",
        };
        write!(f, "\t> {} : {} {} ... ", self.index, action, self.name)?;
        match &self.result {
            Ok(Outcome::Created(_)) => write!(f, "success."),
            Ok(Outcome::AlreadyExists(path)) => {
                write!(f, "'{}' already exists. Skipping.", path.display())
            }
            Err(e) => write!(f, "error : {e}"),
        }
    }
}

/// Creates declared directories and renders declared files.
pub struct LayoutBuilder<'a> {
    registry: &'a Registry,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(registry: &'a Registry, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { registry, renderer }
    }

    /// Creates each directory, and its parents, under `root`.
    /// Entries must stay inside `root`: absolute paths and `..` segments
    /// fail with `DirectoryError`.
    pub fn create_directories<P: AsRef<Path>>(
        &self,
        root: P,
        directories: &[String],
    ) -> Vec<Attempt> {
        let root = root.as_ref();
        if !directories.is_empty() {
            println!("Creating directory layout.");
        }

        directories
            .iter()
            .enumerate()
            .map(|(index, directory)| {
                let attempt = Attempt {
                    index,
                    entry: EntryKind::Directory,
                    name: directory.clone(),
                    result: create_directory(root, directory),
                };
                report(&attempt);
                attempt
            })
            .collect()
    }

    /// Renders and writes every file kind declared in the project layout.
    pub fn create_files(&self, project: &Project) -> Vec<Attempt> {
        let files = &project.layout.files;
        if !files.is_empty() {
            println!("Creating files.");
        }

        files
            .iter()
            .enumerate()
            .map(|(index, identifier)| {
                let attempt = Attempt {
                    index,
                    entry: EntryKind::File,
                    name: identifier.clone(),
                    result: self.create_file(project, identifier),
                };
                report(&attempt);
                attempt
            })
            .collect()
    }

    fn create_file(&self, project: &Project, identifier: &str) -> Result<Outcome> {
        let constructor = self.registry.resolve(identifier)?;
        let mut descriptor = constructor(project)?;
        let target = project.path.join(descriptor.relative_path());
        let content = descriptor.render(self.renderer)?;

        if exists(&target) {
            return Ok(Outcome::AlreadyExists(target));
        }

        debug!("Writing file: {}", target.display());
        match write_private_file(&target, content) {
            Ok(()) => Ok(Outcome::Created(target)),
            // Lost a race with something else creating the file.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Ok(Outcome::AlreadyExists(target))
            }
            Err(source) => Err(Error::WriteError {
                path: target,
                source,
            }),
        }
    }
}

/// Joins a declared directory onto `root`, refusing paths that would
/// leave it.
fn confined(root: &Path, directory: &str) -> Result<PathBuf> {
    let relative = Path::new(directory);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(Error::DirectoryError {
            path: relative.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "directory must stay inside the project root",
            ),
        });
    }
    Ok(root.join(relative))
}

fn create_directory(root: &Path, directory: &str) -> Result<Outcome> {
    let path = confined(root, directory)?;
    if path.is_dir() {
        return Ok(Outcome::AlreadyExists(path));
    }
    debug!("Creating directory: {}", path.display());
    match create_private_dir(&path) {
        Ok(()) => Ok(Outcome::Created(path)),
        Err(source) => Err(Error::DirectoryError { path, source }),
    }
}

// Broken symlinks count as existing so they are never written through.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

fn report(attempt: &Attempt) {
    if let Err(e) = &attempt.result {
        warn!("{} '{}' failed: {}", attempt.index, attempt.name, e);
    }
    println!("{attempt}");
}
