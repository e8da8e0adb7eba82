//! Code quality scanner configuration.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use serde::Serialize;

pub const SPEC: FileSpec = FileSpec {
    identifier: "sonar",
    filename: "sonar-project.properties",
    directory: ".",
    template: include_str!("../../templates/sonar-project.properties.j2"),
};

#[derive(Debug, Serialize)]
pub struct SonarValues {
    pub organization_id: String,
    pub project_id: String,
    pub ci_link: String,
    pub repo_link: String,
}

impl ValueProvider for SonarValues {
    fn provide(profile: &Profile, project_name: &str) -> Self {
        Self {
            organization_id: profile.get_str("sonar.org"),
            project_id: project_name.to_string(),
            ci_link: profile.get_str("ci.url"),
            repo_link: profile.get_str("git.url"),
        }
    }
}

pub fn constructor(project: &Project) -> Result<FileDescriptor> {
    SPEC.construct::<SonarValues>(project)
}
