//! proforma's main application entry point.
//! Parses the command line, loads configuration and profiles, and
//! dispatches to the project builder or the profile commands.

use std::path::PathBuf;

use proforma::{
    cli::{get_args, Args, Commands, ProfileCommands},
    config::{Config, ConfigStore},
    error::{default_error_handler, Error, Result},
    init::Initializers,
    kinds::Registry,
    layout::LayoutBuilder,
    logger::init_logger,
    profile::{render_profile, Author},
    project::{prepare_project_dir, Project},
    prompt::{prompt_author, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the configuration directory, creating it on first run
/// 2. Dispatches to the requested command
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let registry = Registry::builtin();

    let store = ConfigStore::locate(args.config_dir)?;
    let mut config = store.initialise(&renderer, &registry.identifiers())?;
    log::debug!(
        "Configuration loaded from {} (auto update: {})",
        store.root().display(),
        config.auto_update
    );

    match args.command {
        Commands::New { name, profile, location } => {
            new_project(&store, &config, &registry, &renderer, name, profile, location)
        }
        Commands::Profile { command } => match command {
            ProfileCommands::List => list_profiles(&store, &config),
            ProfileCommands::New { name, no_input } => {
                new_profile(&store, &config, &registry, &renderer, &name, no_input)
            }
            ProfileCommands::Default { name } => {
                store.set_default_profile(&mut config, &name)?;
                println!("Default profile set to {name}.");
                Ok(())
            }
            ProfileCommands::Show { name } => {
                print!("{}", store.profiles(&config).read(&name)?);
                Ok(())
            }
        },
        Commands::Kinds => {
            for kind in registry.kinds() {
                let spec = kind.spec();
                println!("{:<12} {}", spec.identifier, spec.target());
            }
            Ok(())
        }
    }
}

fn new_project(
    store: &ConfigStore,
    config: &Config,
    registry: &Registry,
    renderer: &MiniJinjaRenderer,
    name: Option<String>,
    profile: Option<String>,
    location: Option<PathBuf>,
) -> Result<()> {
    let profile_name = config.resolve_profile_name(profile.as_deref())?;
    let profile = store.profiles(config).load(&profile_name)?;

    let location = match location {
        Some(location) => location,
        None => std::env::current_dir()?,
    };
    let location = if name.is_none() { location.canonicalize()? } else { location };
    let (name, root) = prepare_project_dir(&location, name.as_deref())?;

    let project = Project::new(&profile, name, root);
    let layout = LayoutBuilder::new(registry, renderer);
    let initializers = Initializers::for_project(&project);

    let report = project.build(&layout, &initializers)?;

    println!("{}", report.summary());
    println!("Project {} was successfully created.", project.name);
    Ok(())
}

fn list_profiles(store: &ConfigStore, config: &Config) -> Result<()> {
    let profiles = store.profiles(config).list()?;
    if profiles.is_empty() {
        println!("No profiles are registered.");
        return Ok(());
    }

    println!("Registered profiles :");
    for profile in profiles {
        if profile == config.default_profile {
            println!("\t- {profile} [default]");
        } else {
            println!("\t- {profile}");
        }
    }
    Ok(())
}

fn new_profile(
    store: &ConfigStore,
    config: &Config,
    registry: &Registry,
    renderer: &MiniJinjaRenderer,
    name: &str,
    no_input: bool,
) -> Result<()> {
    let profiles = store.profiles(config);
    if profiles.exists(name) {
        return Err(Error::ProfileExistsError {
            name: name.to_string(),
        });
    }

    let author = if no_input {
        Author::default()
    } else {
        prompt_author(&DialoguerPrompter::new(), &Author::default())?
    };

    let content = render_profile(renderer, name, &author, &registry.identifiers())?;
    let path = profiles.create(name, &content)?;
    println!("Profile {} was successfully created in {}.", name, path.display());
    Ok(())
}
