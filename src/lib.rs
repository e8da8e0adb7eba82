//! proforma scaffolds new projects from profiles.
//! A profile declares author details, a directory layout and the file kinds
//! to generate; proforma renders each kind's template against values taken
//! from the profile, then initialises the dependency manifest and version
//! control.

/// Command-line interface module for the proforma application
pub mod cli;

/// Configuration directory handling (config.yaml, default profile)
pub mod config;

/// Common constants
pub mod constants;

/// A single file to generate and its rendered content
pub mod descriptor;

/// Error types and handling for the proforma application
pub mod error;

/// External initializers run after the layout is built
/// - dependency manifest (`go mod init` by default)
/// - version control (`git init` by default)
pub mod init;

/// Registered file kinds, their templates and value providers
pub mod kinds;

/// Best-effort directory and file creation
pub mod layout;

/// Logger initialisation
pub mod logger;

/// Profile parsing and storage
pub mod profile;

/// Project assembly and build orchestration
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;
