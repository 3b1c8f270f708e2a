//! Player domain: debug gizmos for ground contact and the enemy radius.

use bevy::prelude::*;

use crate::player::{JumpState, Player, PlayerConfig, PlayerController};

pub(crate) fn draw_controller_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &PlayerConfig, &PlayerController), With<Player>>,
) {
    for (transform, config, controller) in &query {
        let position = transform.translation.truncate();

        let color = match controller.jump_state {
            JumpState::Grounded => Color::srgb(0.3, 0.9, 0.3),
            JumpState::PrepareToJump | JumpState::Jumping => Color::srgb(0.9, 0.9, 0.3),
            JumpState::InFlight => Color::srgb(0.3, 0.6, 0.9),
            JumpState::Landed => Color::srgb(0.9, 0.5, 0.2),
        };
        gizmos.circle_2d(position, config.enemy_detection_distance, color);

        if controller.grounded {
            gizmos.line_2d(position, position - Vec2::new(0.0, 24.0), color);
        }
    }
}
