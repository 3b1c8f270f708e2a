//! Loader for the player RON configuration.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{PLAYER_CONFIG_SCHEMA_VERSION, PlayerConfigFile};

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the contents of a player config file. `file` is only used for
/// error reporting.
pub fn parse_player_config(contents: &str, file: &str) -> Result<PlayerConfigFile, ConfigLoadError> {
    let parsed: PlayerConfigFile = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if parsed.schema_version != PLAYER_CONFIG_SCHEMA_VERSION {
        return Err(ConfigLoadError {
            file: file.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                parsed.schema_version, PLAYER_CONFIG_SCHEMA_VERSION
            ),
        });
    }

    Ok(parsed)
}

pub fn load_player_config(path: &Path) -> Result<PlayerConfigFile, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_player_config(&contents, &file_name)
}
