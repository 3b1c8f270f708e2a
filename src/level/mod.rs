//! Level domain: the demo scene the player runs around in.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Enemy, Ground, Patrol, SpawnPoint};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::level::spawn::{spawn_level, spawn_player};
use crate::level::systems::patrol_enemies;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_level, spawn_player).chain())
            .add_systems(Update, patrol_enemies.run_if(gameplay_active));
    }
}
