//! Command-line interface implementation for proforma.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for proforma.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "proforma: profile-driven project scaffolding",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration directory holding config.yaml and the profiles
    #[arg(long, global = true, env = "PROFORMA_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a profile
    New {
        /// Project name. Without it the project is built in the location
        /// directory itself and named after it
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Profile to use instead of the default one
        #[arg(short, long)]
        profile: Option<String>,

        /// Directory in which the project is created (current directory by default)
        #[arg(short, long, value_name = "DIR")]
        location: Option<PathBuf>,
    },

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// List the file kinds a profile can declare
    Kinds,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List registered profiles
    List,

    /// Create a new profile
    New {
        #[arg(value_name = "NAME")]
        name: String,

        /// Do not prompt for author details
        #[arg(long)]
        no_input: bool,
    },

    /// Set the default profile
    Default {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print a profile
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Prints the usage shown when a command or argument is missing.
pub fn print_usage() -> std::io::Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if let Err(err) = print_usage() {
                    eprintln!("{err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
