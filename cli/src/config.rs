// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::Path, path::PathBuf, str::FromStr};

use eventorg_core::Config;

const EVENTORG_CONFIG_ENV: &str = "EVENTORG_CONFIG";

/// Loads the configuration.
///
/// The path given on the command line wins over `EVENTORG_CONFIG`. Without
/// either, the built-in defaults are used and no file is read.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = match path {
        Some(path) => path,
        None => match std::env::var(EVENTORG_CONFIG_ENV) {
            Ok(env_path) if !env_path.is_empty() => PathBuf::from(env_path),
            _ => {
                tracing::debug!("no config given, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let path = expand_path(&path)?;
    let mut config = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .0;

    config.normalize()?;
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

#[derive(Debug)]
struct ConfigRaw(Config);

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConfigRaw(toml::from_str(s)?))
    }
}

/// Handle tilde (~) in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}
