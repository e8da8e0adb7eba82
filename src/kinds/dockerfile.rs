//! Container build file.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use serde::Serialize;

pub const SPEC: FileSpec = FileSpec {
    identifier: "dockerfile",
    filename: "Dockerfile",
    directory: ".",
    template: include_str!("../../templates/Dockerfile.j2"),
};

#[derive(Debug, Serialize)]
pub struct DockerfileValues {
    pub maintainer: String,
    pub binary_name: String,
}

impl ValueProvider for DockerfileValues {
    fn provide(profile: &Profile, project_name: &str) -> Self {
        let mut maintainer = profile.get_str("docker.maintainer");
        let author = &profile.author;
        if maintainer.is_empty() && !author.name.is_empty() {
            maintainer = if author.contact.is_empty() {
                author.name.clone()
            } else {
                format!("{} <{}>", author.name, author.contact)
            };
        }
        Self {
            maintainer,
            binary_name: project_name.to_string(),
        }
    }
}

pub fn constructor(project: &Project) -> Result<FileDescriptor> {
    SPEC.construct::<DockerfileValues>(project)
}
