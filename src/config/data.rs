//! Config domain: on-disk layout of `player.ron`.

use serde::{Deserialize, Serialize};

use crate::player::{PlatformerTuning, PlayerConfig};

pub const PLAYER_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfigFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: PlatformerTuning,
    #[serde(default)]
    pub player: PlayerConfig,
}
