//! Common constants used throughout proforma.

/// Name of the application directory inside the user configuration directory
pub const APP_DIR: &str = "proforma";

/// Configuration file name inside the configuration directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Default directory holding profiles, relative to the configuration directory
pub const PROFILE_DIR: &str = "profiles";

/// Extension of profile files
pub const PROFILE_EXTENSION: &str = "yaml";

/// Name of the profile created on first run
pub const DEFAULT_PROFILE: &str = "default";

/// Permissions for generated directories: owner rwx only
pub const DIR_MODE: u32 = 0o700;

/// Permissions for generated files: owner rw only
pub const FILE_MODE: u32 = 0o600;
