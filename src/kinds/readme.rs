//! Project README.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use serde::Serialize;

pub const SPEC: FileSpec = FileSpec {
    identifier: "readme",
    filename: "README.md",
    directory: ".",
    template: include_str!("../../templates/README.md.j2"),
};

#[derive(Debug, Serialize)]
pub struct ReadmeValues {
    pub project_name: String,
    pub contact: String,
    pub repo_url: String,
    /// Badge lines rendered under the title, one per entry.
    pub badges: Vec<String>,
}

impl ValueProvider for ReadmeValues {
    fn provide(profile: &Profile, project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            contact: profile.author.contact.clone(),
            repo_url: profile.get_str("git.url"),
            badges: profile.get_list("readme.badges"),
        }
    }
}

pub fn constructor(project: &Project) -> Result<FileDescriptor> {
    SPEC.construct::<ReadmeValues>(project)
}
