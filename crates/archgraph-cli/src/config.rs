//! Resolves the [`AppConfig`] a CLI run uses.
//!
//! The configuration file is the first one found among the `--config`
//! path, `archgraph/config.toml` in the working directory and
//! `config.toml` in the platform config directory. Without any file the
//! defaults apply. Command-line overrides are applied last.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use archgraph::{ArchGraphError, config::AppConfig};

use crate::Args;

const LOCAL_CONFIG: &str = "archgraph/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ArchGraphError {
    fn from(err: ConfigError) -> Self {
        ArchGraphError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Explicit(PathBuf),
    Local(PathBuf),
    System(PathBuf),
}

impl Source {
    fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => path,
        }
    }
}

/// Builds the configuration for `args`.
///
/// # Errors
///
/// Returns [`ArchGraphError::Config`] if `--config` names a file that does
/// not exist or if the selected file is not valid TOML.
pub fn load_config(args: &Args) -> Result<AppConfig, ArchGraphError> {
    let config = match locate(args.config.as_deref().map(Path::new)) {
        Some(source) => {
            info!(source:?; "Loading configuration");
            read(source.path())?
        }
        None => {
            debug!("No configuration file found, using default configuration");
            AppConfig::default()
        }
    };

    Ok(apply_overrides(config, args))
}

/// Picks the configuration file to read.
///
/// An explicit path is always returned, existing or not, so a typo in
/// `--config` is reported instead of silently falling back.
fn locate(explicit: Option<&Path>) -> Option<Source> {
    if let Some(path) = explicit {
        return Some(Source::Explicit(path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(Source::Local(local));
    }

    let Some(dirs) = ProjectDirs::from("com", "archgraph", "archgraph") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };

    let system = dirs.config_dir().join("config.toml");
    if system.is_file() {
        Some(Source::System(system))
    } else {
        debug!(path:? = system; "System configuration file not found");
        None
    }
}

fn read(path: &Path) -> Result<AppConfig, ArchGraphError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    Ok(config)
}

fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    match args.strategy {
        Some(strategy) => {
            info!(strategy:%; "Overriding layout strategy");
            config.with_strategy(strategy)
        }
        None => config,
    }
}
