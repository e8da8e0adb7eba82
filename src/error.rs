//! Error handling for proforma.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading profiles or building a project.
///
/// Per-entry failures (`NotRegisteredError`, `RenderError`, `WriteError`,
/// `DirectoryError`) are collected in the build report and never abort a
/// build. `ExternalToolError` and the profile errors do.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The identifier declared in the layout has no registered file kind.
    #[error("'{identifier}' is not a registered project file.")]
    NotRegisteredError { identifier: String },

    /// Template parsing or execution failed for a file kind.
    #[error("could not render template for '{kind}': {source}.")]
    RenderError {
        kind: String,
        #[source]
        source: minijinja::Error,
    },

    /// A rendered file could not be written to its target path.
    #[error("could not write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A layout directory could not be created.
    #[error("could not create directory '{}': {source}.", path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dependency manifest or version control initializer failed.
    #[error("{tool} initialisation failed: {reason}.")]
    ExternalToolError { tool: String, reason: String },

    /// The profile exists but could not be read or parsed.
    #[error("Profile '{name}' could not be loaded: {reason}.")]
    ProfileError { name: String, reason: String },

    #[error("Profile '{name}' does not exist.")]
    ProfileNotFoundError { name: String },

    #[error("Profile '{name}' already exists.")]
    ProfileExistsError { name: String },

    /// Represents errors that occur while reading or writing the configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A value provider produced a context that cannot be used for rendering.
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
