//! Registered file kinds.
//!
//! Every kind owns a template and a value provider that pulls the fields it
//! needs out of the profile. The [`Registry`] maps the identifiers used in a
//! profile's `layout.files` to the kind's constructor.

use crate::descriptor::FileDescriptor;
use crate::error::{Error, Result};
use crate::profile::Profile;
use crate::project::Project;
use indexmap::IndexMap;
use serde::Serialize;

pub mod doc;
pub mod dockerfile;
pub mod fixed;
pub mod readme;
pub mod sonar;
pub mod travis;

/// Builds the descriptor of one file kind for a project.
pub type Constructor = fn(&Project) -> Result<FileDescriptor>;

/// Extracts the values a template needs from the profile.
///
/// Settings missing from the profile become empty strings; providing values
/// never fails.
pub trait ValueProvider: Serialize + Sized {
    fn provide(profile: &Profile, project_name: &str) -> Self;
}

/// Static description of where a kind's file goes and what it renders.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    pub identifier: &'static str,
    pub filename: &'static str,
    pub directory: &'static str,
    pub template: &'static str,
}

impl FileSpec {
    /// Target path relative to the project root, for display.
    pub fn target(&self) -> String {
        if self.directory == "." {
            self.filename.to_string()
        } else {
            format!("{}/{}", self.directory, self.filename)
        }
    }

    /// Binds the provider's values for `project` to this file kind.
    pub fn construct<V: ValueProvider>(&self, project: &Project) -> Result<FileDescriptor> {
        let values = V::provide(project.profile, &project.name);
        FileDescriptor::new(self.identifier, self.filename, self.directory, self.template, &values)
    }
}

/// Every supported file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Doc,
    Readme,
    Dockerfile,
    GitIgnore,
    GolangCi,
    Makefile,
    PreCommit,
    Sonar,
    Travis,
    Version,
}

impl FileKind {
    pub const ALL: [FileKind; 10] = [
        FileKind::Doc,
        FileKind::Readme,
        FileKind::Dockerfile,
        FileKind::GitIgnore,
        FileKind::GolangCi,
        FileKind::Makefile,
        FileKind::PreCommit,
        FileKind::Sonar,
        FileKind::Travis,
        FileKind::Version,
    ];

    pub fn spec(self) -> &'static FileSpec {
        match self {
            FileKind::Doc => &doc::SPEC,
            FileKind::Readme => &readme::SPEC,
            FileKind::Dockerfile => &dockerfile::SPEC,
            FileKind::GitIgnore => &fixed::GITIGNORE,
            FileKind::GolangCi => &fixed::GOLANGCI,
            FileKind::Makefile => &fixed::MAKEFILE,
            FileKind::PreCommit => &fixed::PRE_COMMIT,
            FileKind::Sonar => &sonar::SPEC,
            FileKind::Travis => &travis::SPEC,
            FileKind::Version => &fixed::VERSION,
        }
    }

    pub fn identifier(self) -> &'static str {
        self.spec().identifier
    }

    pub fn constructor(self) -> Constructor {
        match self {
            FileKind::Doc => doc::constructor,
            FileKind::Readme => readme::constructor,
            FileKind::Dockerfile => dockerfile::constructor,
            FileKind::GitIgnore => fixed::gitignore_constructor,
            FileKind::GolangCi => fixed::golangci_constructor,
            FileKind::Makefile => fixed::makefile_constructor,
            FileKind::PreCommit => fixed::pre_commit_constructor,
            FileKind::Sonar => sonar::constructor,
            FileKind::Travis => travis::constructor,
            FileKind::Version => fixed::version_constructor,
        }
    }
}

/// Identifier to file kind lookup. Read-only once built.
#[derive(Debug, Clone)]
pub struct Registry {
    kinds: IndexMap<&'static str, FileKind>,
}

impl Registry {
    /// Registry holding every built-in kind.
    pub fn builtin() -> Self {
        Self::with_kinds(&FileKind::ALL)
    }

    pub fn with_kinds(kinds: &[FileKind]) -> Self {
        Self {
            kinds: kinds.iter().map(|kind| (kind.identifier(), *kind)).collect(),
        }
    }

    /// Returns the kind registered under `identifier`.
    ///
    /// # Errors
    /// * `Error::NotRegisteredError` carrying the identifier
    pub fn kind(&self, identifier: &str) -> Result<FileKind> {
        self.kinds
            .get(identifier)
            .copied()
            .ok_or_else(|| Error::NotRegisteredError {
                identifier: identifier.to_string(),
            })
    }

    /// Returns the constructor registered under `identifier`.
    pub fn resolve(&self, identifier: &str) -> Result<Constructor> {
        self.kind(identifier).map(FileKind::constructor)
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.kinds.keys().copied().collect()
    }

    pub fn kinds(&self) -> impl Iterator<Item = FileKind> + '_ {
        self.kinds.values().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}
