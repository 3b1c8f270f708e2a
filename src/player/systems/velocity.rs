//! Player domain: velocity, body integration and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    AnimatorParams, Facing, PlatformerTuning, Player, PlayerConfig, PlayerController,
};

/// Vertical velocity after the takeoff impulse or early-release damping.
/// Consumes whichever one-frame flag was applied.
pub(crate) fn jump_velocity(
    controller: &mut PlayerController,
    velocity_y: f32,
    jump_take_off_speed: f32,
    tuning: &PlatformerTuning,
) -> f32 {
    if controller.jump && controller.grounded {
        controller.jump = false;
        jump_take_off_speed * tuning.jump_modifier
    } else if controller.stop_jump {
        controller.stop_jump = false;
        if velocity_y > 0.0 {
            velocity_y * tuning.jump_deceleration
        } else {
            velocity_y
        }
    } else {
        velocity_y
    }
}

/// |vx| normalised by the configured top speed.
pub(crate) fn normalized_speed(velocity_x: f32, max_speed: f32) -> f32 {
    if max_speed <= 0.0 {
        return 0.0;
    }
    velocity_x.abs() / max_speed
}

pub(crate) fn compute_velocity(
    tuning: Res<PlatformerTuning>,
    mut query: Query<
        (
            &mut PlayerController,
            &PlayerConfig,
            &mut LinearVelocity,
            &mut Facing,
            &mut AnimatorParams,
        ),
        With<Player>,
    >,
) {
    for (mut controller, config, mut velocity, mut facing, mut params) in &mut query {
        velocity.y = jump_velocity(
            &mut controller,
            velocity.y,
            config.jump_take_off_speed,
            &tuning,
        );

        if let Some(new_facing) = Facing::from_input(controller.move_x) {
            facing.set_if_neq(new_facing);
        }

        params.grounded = controller.grounded;
        params.velocity_x = normalized_speed(velocity.x, config.max_speed);
    }
}

/// Apply gravity and drive vx toward the input target; contacts are left to
/// the physics solver.
pub(crate) fn integrate_velocity(
    time: Res<Time>,
    tuning: Res<PlatformerTuning>,
    mut query: Query<(&PlayerController, &PlayerConfig, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (controller, config, mut velocity) in &mut query {
        let gravity_scale = if velocity.y < 0.0 {
            tuning.gravity_modifier
        } else {
            1.0
        };
        velocity.y -= tuning.gravity * gravity_scale * dt;
        velocity.x = controller.move_x * config.max_speed;
    }
}

pub(crate) fn sync_facing(mut query: Query<(&Facing, &mut Sprite), (With<Player>, Changed<Facing>)>) {
    for (facing, mut sprite) in &mut query {
        sprite.flip_x = *facing == Facing::Left;
    }
}
