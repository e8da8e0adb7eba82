//! Package documentation stub.

use super::{FileSpec, ValueProvider};
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::profile::Profile;
use crate::project::Project;
use cruet::Inflector;
use serde::Serialize;

pub const SPEC: FileSpec = FileSpec {
    identifier: "doc",
    filename: "doc.go",
    directory: ".",
    template: include_str!("../../templates/doc.go.j2"),
};

#[derive(Debug, Serialize)]
pub struct DocValues {
    pub package_name: String,
}

impl ValueProvider for DocValues {
    fn provide(_profile: &Profile, project_name: &str) -> Self {
        Self {
            package_name: package_name(project_name),
        }
    }
}

/// Package names are lowercase identifiers, so `my-App` becomes `my_app`.
pub fn package_name(project_name: &str) -> String {
    project_name.to_snake_case()
}

pub fn constructor(project: &Project) -> Result<FileDescriptor> {
    SPEC.construct::<DocValues>(project)
}
