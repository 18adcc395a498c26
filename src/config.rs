//! Optional TOML configuration.
//!
//! Looked up from `--config <path>`, else `<config dir>/rpnsheet/config.toml`.
//! Problems with the file are reported as warnings and defaults apply.

use directories::ProjectDirs;
use log::LevelFilter;
use rpnsheet_core::DEFAULT_MAX_INPUT_BYTES;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    echo_dimensions: Option<bool>,
    max_input_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` leaves the choice to the command line default.
    pub log_level: Option<LevelFilter>,
    /// Print the dimensions line before the cell values.
    pub echo_dimensions: bool,
    pub max_input_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: None,
            echo_dimensions: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Load the configuration, collecting warnings instead of failing.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let file = match read_config_file(&path) {
        Ok(file) => file,
        Err(warning) => {
            warnings.push(warning);
            return (Config::default(), warnings);
        }
    };

    let mut config = Config::default();
    if let Some(level) = file.log_level.as_deref() {
        match LevelFilter::from_str(level.trim()) {
            Ok(level) => config.log_level = Some(level),
            Err(_) => warnings.push(format!(
                "Unknown log_level '{}' in {}; expected off, error, warn, info, debug or trace",
                level,
                path.display()
            )),
        }
    }
    if let Some(echo) = file.echo_dimensions {
        config.echo_dimensions = echo;
    }
    if let Some(max) = file.max_input_bytes {
        config.max_input_bytes = max;
    }

    (config, warnings)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    toml::from_str::<ConfigFile>(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "rpnsheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
