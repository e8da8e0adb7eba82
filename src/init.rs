//! Dependency manifest and version control initialisation.
//! Both run as external commands in the project root once the layout is
//! built. Unlike layout entries, their failures abort the build.

use crate::error::{Error, Result};
use crate::project::Project;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of a successful initializer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    /// The marker was already present; nothing was run.
    AlreadyInitialized(PathBuf),
}

/// A step that prepares the project root, e.g. `git init`.
pub trait Initializer {
    /// Name used in progress and error messages.
    fn name(&self) -> &str;

    /// Runs the step in `root`, skipping it when it was already done.
    fn initialize(&self, root: &Path) -> Result<InitOutcome>;
}

/// Runs a command unless its marker file or directory already exists.
#[derive(Debug, Clone)]
pub struct CommandInitializer {
    name: String,
    program: String,
    args: Vec<String>,
    marker: PathBuf,
}

impl CommandInitializer {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        program: S,
        args: Vec<String>,
        marker: P,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
            marker: marker.into(),
        }
    }

    /// Replaces the marker. An empty marker keeps the current one.
    pub fn with_marker(mut self, marker: &str) -> Self {
        if !marker.is_empty() {
            self.marker = PathBuf::from(marker);
        }
        self
    }

    /// Builds an initializer from a `[program, args...]` command line.
    /// Returns `None` for an empty command.
    pub fn from_command<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        command: &[String],
        marker: P,
    ) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(name.into(), program.clone(), args.to_vec(), marker))
    }

    /// `go mod init <module>`.
    pub fn go_modules(module: &str) -> Self {
        Self::new("go modules", "go", vec!["mod".into(), "init".into(), module.into()], "go.mod")
    }

    /// `git init`.
    pub fn git() -> Self {
        Self::new("git", "git", vec!["init".into()], ".git")
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn marker(&self) -> &Path {
        &self.marker
    }
}

impl Initializer for CommandInitializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&self, root: &Path) -> Result<InitOutcome> {
        println!("Initialising {}.", self.name);

        let marker = root.join(&self.marker);
        if marker.symlink_metadata().is_ok() {
            println!(
                "\t'{}' already exists. Skipping initialisation.",
                self.marker.display()
            );
            return Ok(InitOutcome::AlreadyInitialized(marker));
        }

        debug!("Running '{} {}' in {}", self.program, self.args.join(" "), root.display());
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::ExternalToolError {
                tool: self.name.clone(),
                reason: format!("could not run '{}': {e}", self.program),
            })?;

        if !status.success() {
            return Err(Error::ExternalToolError {
                tool: self.name.clone(),
                reason: format!("'{}' failed with {status}", self.program),
            });
        }

        Ok(InitOutcome::Initialized)
    }
}

/// The two initializers run at the end of a build, in order.
pub struct Initializers {
    pub manifest: Box<dyn Initializer>,
    pub vcs: Box<dyn Initializer>,
}

impl Initializers {
    pub fn new(manifest: Box<dyn Initializer>, vcs: Box<dyn Initializer>) -> Self {
        Self { manifest, vcs }
    }

    /// Default initializers, unless the profile overrides them with
    /// `init.manifest.command` / `init.vcs.command`. The `marker` keys
    /// apply to the default commands too.
    pub fn for_project(project: &Project) -> Self {
        let (manifest, vcs) = project_commands(project);
        Self::new(Box::new(manifest), Box::new(vcs))
    }
}

fn project_commands(project: &Project) -> (CommandInitializer, CommandInitializer) {
    let profile = project.profile;

    let manifest = CommandInitializer::from_command(
        "dependency manifest",
        &profile.get_list("init.manifest.command"),
        "go.mod",
    )
    .unwrap_or_else(|| CommandInitializer::go_modules(&module_path(project)))
    .with_marker(&profile.get_str("init.manifest.marker"));

    let vcs = CommandInitializer::from_command(
        "version control",
        &profile.get_list("init.vcs.command"),
        ".git",
    )
    .unwrap_or_else(CommandInitializer::git)
    .with_marker(&profile.get_str("init.vcs.marker"));

    (manifest, vcs)
}

/// Module path: `<git.url>/<name>` when the profile has a repository URL.
pub fn module_path(project: &Project) -> String {
    let base = project.profile.get_str("git.url");
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        project.name.clone()
    } else {
        format!("{base}/{}", project.name)
    }
}
