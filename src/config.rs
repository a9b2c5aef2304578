use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SecretToolError;

const CONFIG_DIR: &str = "secret-tool";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_SECURITY_PATH: &str = "/usr/bin/security";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The `security` binary to invoke.
    pub security_path: PathBuf,
    /// Keychain file appended to every `security` call. Defaults to the search list.
    pub keychain: Option<PathBuf>,
    /// Report the whole stderr of a failed call instead of its first line.
    pub full_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            security_path: PathBuf::from(DEFAULT_SECURITY_PATH),
            keychain: None,
            full_errors: false,
        }
    }
}

/// Returns the default config file path, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config. An explicit path must exist; a missing default file yields defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, SecretToolError> {
    match explicit {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.exists() => read(&path),
            _ => Ok(Config::default()),
        },
    }
}

/// Read and parse config from the given file.
pub fn read(path: &Path) -> Result<Config, SecretToolError> {
    if !path.exists() {
        return Err(SecretToolError::Config(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<Config, SecretToolError> {
    toml::from_str(raw).map_err(|e| SecretToolError::Config(e.to_string()))
}
