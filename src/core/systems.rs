//! Core domain: camera setup and pause toggling.

use bevy::prelude::*;

use crate::core::resources::{GameplayPaused, PAUSE_MENU_SOURCE};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Escape toggles the pause menu source and freezes virtual time with it,
/// which also halts the physics clock.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    paused.toggle(PAUSE_MENU_SOURCE);
    if paused.is_paused() {
        time.pause();
    } else {
        time.unpause();
    }
    info!("Gameplay paused: {}", paused.is_paused());
}
