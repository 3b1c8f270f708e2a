//! Core domain: camera, pause handling and the level seed.

mod layers;
mod resources;
mod systems;


pub use layers::GameLayer;
pub use resources::{GameplayPaused, LevelSeed, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .init_resource::<LevelSeed>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause);
    }
}
