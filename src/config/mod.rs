//! Config domain: player and physics tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::{PLAYER_CONFIG_SCHEMA_VERSION, PlayerConfigFile};
pub use loader::{ConfigLoadError, load_player_config, parse_player_config};
pub use validation::{ConfigValidationError, validate_player_config};

use bevy::prelude::*;
use std::path::Path;

use crate::player::{PlatformerTuning, PlayerTemplate};

/// Default location of the player configuration.
pub const PLAYER_CONFIG_PATH: &str = "assets/data/player.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_config_at_startup);
    }
}

/// Replace the default tuning with the file contents when it loads and
/// validates; keep the defaults otherwise.
fn load_config_at_startup(
    mut tuning: ResMut<PlatformerTuning>,
    mut template: ResMut<PlayerTemplate>,
) {
    let file = match load_player_config(Path::new(PLAYER_CONFIG_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using default player tuning", e);
            return;
        }
    };

    let errors = validate_player_config(&file);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid player config: {}", error);
        }
        warn!(
            "{} validation errors in {}; using default player tuning",
            errors.len(),
            PLAYER_CONFIG_PATH
        );
        return;
    }

    info!("Loaded player config from {}", PLAYER_CONFIG_PATH);
    *tuning = file.tuning;
    template.0 = file.player;
}
