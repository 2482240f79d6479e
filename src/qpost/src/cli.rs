//! CLI surface for scheduled invocations.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Environment variable naming the directory holding the default config file.
pub const CONF_DIR_ENV: &str = "QPOST_CONF_DIR";

/// File name looked up under [`CONF_DIR_ENV`] when `--configfile` is absent.
pub const DEFAULT_CONF_NAME: &str = "qpost.conf";

/// Places one message on a RabbitMQ bus, driven by a service profile in a
/// config file. Meant to run from cron: silent unless something fails.
#[derive(Parser, Debug)]
#[command(name = "qpost", version, about)]
pub struct Cli {
    /// Name of the service profile defined in the config file
    #[arg(short, long)]
    pub service: String,

    /// Full path to the config file
    #[arg(short = 'f', long)]
    pub configfile: Option<PathBuf>,

    /// Publish to a basic queue through the default exchange
    #[arg(short, long)]
    pub basic: bool,
}

impl Cli {
    /// `--configfile` wins; otherwise `$QPOST_CONF_DIR/qpost.conf`.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.configfile {
            return Ok(path.clone());
        }
        let base = std::env::var_os(CONF_DIR_ENV)
            .with_context(|| format!("no --configfile given and {CONF_DIR_ENV} is not set"))?;
        Ok(PathBuf::from(base).join(DEFAULT_CONF_NAME))
    }
}
