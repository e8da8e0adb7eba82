//! Continuous integration configuration.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use serde::Serialize;

pub const SPEC: FileSpec = FileSpec {
    identifier: "travis",
    filename: ".travis.yml",
    directory: ".",
    template: include_str!("../../templates/travis.yml.j2"),
};

#[derive(Debug, Serialize)]
pub struct TravisValues {
    pub repo_url: String,
    /// The scanner addon is only emitted when this is set.
    pub sonar_org: String,
}

impl ValueProvider for TravisValues {
    fn provide(profile: &Profile, _project_name: &str) -> Self {
        Self {
            repo_url: profile.get_str("git.url"),
            sonar_org: profile.get_str("sonar.org"),
        }
    }
}

pub fn constructor(project: &Project) -> Result<FileDescriptor> {
    SPEC.construct::<TravisValues>(project)
}
