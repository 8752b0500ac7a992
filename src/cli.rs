use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_PROPERTIES_PATH;

/// Command line arguments.
///
/// The port is kept as raw text so a bad value only disables the HTTP server
/// instead of aborting startup.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "helpbot")]
#[command(about = "Fireship Discord helpbot", long_about = None)]
pub struct Args {
    /// HTTP port for the static file server (only used in production mode)
    #[arg(allow_hyphen_values = true)]
    pub port: Option<String>,

    /// Properties resource read when no `token` environment variable is set
    #[arg(long, env = "APP_PROPERTIES", default_value = DEFAULT_PROPERTIES_PATH)]
    pub properties: PathBuf,

    /// Directory served at the HTTP root
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Log every loaded configuration entry (credentials redacted) outside production
    #[arg(long, env = "VERBOSE_CONFIG", default_value_t = false)]
    pub verbose_config: bool,
}
