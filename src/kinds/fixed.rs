//! Kinds whose templates take no values.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use serde::Serialize;

/// Empty context for templates without placeholders.
#[derive(Debug, Serialize)]
pub struct NoValues {}

impl ValueProvider for NoValues {
    fn provide(_profile: &Profile, _project_name: &str) -> Self {
        NoValues {}
    }
}

pub const GITIGNORE: FileSpec = FileSpec {
    identifier: "gitignore",
    filename: ".gitignore",
    directory: ".",
    template: include_str!("../../templates/gitignore.j2"),
};

pub const GOLANGCI: FileSpec = FileSpec {
    identifier: "golangci",
    filename: ".golangci.yml",
    directory: ".",
    template: include_str!("../../templates/golangci.yml.j2"),
};

pub const MAKEFILE: FileSpec = FileSpec {
    identifier: "makefile",
    filename: "Makefile",
    directory: ".",
    template: include_str!("../../templates/Makefile.j2"),
};

pub const PRE_COMMIT: FileSpec = FileSpec {
    identifier: "pre-commit",
    filename: ".pre-commit-config.yaml",
    directory: ".",
    template: include_str!("../../templates/pre-commit-config.yaml.j2"),
};

/// Version metadata source, placed in its own package.
pub const VERSION: FileSpec = FileSpec {
    identifier: "version",
    filename: "version.go",
    directory: "internal/version",
    template: include_str!("../../templates/version.go.j2"),
};

pub fn gitignore_constructor(project: &Project) -> Result<FileDescriptor> {
    GITIGNORE.construct::<NoValues>(project)
}

pub fn golangci_constructor(project: &Project) -> Result<FileDescriptor> {
    GOLANGCI.construct::<NoValues>(project)
}

pub fn makefile_constructor(project: &Project) -> Result<FileDescriptor> {
    MAKEFILE.construct::<NoValues>(project)
}

pub fn pre_commit_constructor(project: &Project) -> Result<FileDescriptor> {
    PRE_COMMIT.construct::<NoValues>(project)
}

pub fn version_constructor(project: &Project) -> Result<FileDescriptor> {
    VERSION.construct::<NoValues>(project)
}
