//! Player domain: shared tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::PlayerConfig;

/// Pixels per gameplay unit. Speeds and distances are authored in units.
pub const UNIT: f32 = 32.0;

/// World-wide platformer physics tuning, injected wherever it is needed.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformerTuning {
    /// Scales the takeoff speed of every jump.
    pub jump_modifier: f32,
    /// Multiplier applied to rising velocity when jump is released early.
    pub jump_deceleration: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// Extra gravity scale while falling.
    pub gravity_modifier: f32,
    /// Falling below this height kills the player.
    pub kill_y: f32,
    pub respawn_delay: f32,
    pub hurt_invulnerability: f32,
}

impl Default for PlatformerTuning {
    fn default() -> Self {
        Self {
            jump_modifier: 1.5,
            jump_deceleration: 0.5,
            gravity: 9.81 * UNIT,
            gravity_modifier: 1.0,
            kill_y: -12.0 * UNIT,
            respawn_delay: 2.0,
            hurt_invulnerability: 1.0,
        }
    }
}

/// Configuration used for newly spawned players.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerTemplate(pub PlayerConfig);

/// One frame of sampled input.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerInput {
    pub axis_x: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
}
