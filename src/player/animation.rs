//! Player domain: animation state derived from animator parameters.
//!
//! The placeholder sprite has no frames, so each state is shown as a tint.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{AnimatorParams, Invulnerable, Player};

/// Normalised speed above which the player counts as running.
const RUN_THRESHOLD: f32 = 0.1;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimation {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Hurt,
    Dead,
}

impl PlayerAnimation {
    /// Pick the animation for this frame. Death and hurt override movement.
    pub fn select(params: &AnimatorParams, velocity_y: f32) -> Self {
        if params.dead {
            PlayerAnimation::Dead
        } else if params.hurt {
            PlayerAnimation::Hurt
        } else if !params.grounded {
            if velocity_y > 0.0 {
                PlayerAnimation::Jump
            } else {
                PlayerAnimation::Fall
            }
        } else if params.velocity_x > RUN_THRESHOLD {
            PlayerAnimation::Run
        } else {
            PlayerAnimation::Idle
        }
    }

    pub fn tint(self) -> Color {
        match self {
            PlayerAnimation::Idle => Color::srgb(0.9, 0.9, 0.9),
            PlayerAnimation::Run => Color::srgb(0.85, 0.95, 0.85),
            PlayerAnimation::Jump => Color::srgb(0.85, 0.85, 0.95),
            PlayerAnimation::Fall => Color::srgb(0.75, 0.75, 0.95),
            PlayerAnimation::Hurt => Color::srgb(1.0, 0.5, 0.5),
            PlayerAnimation::Dead => Color::srgb(0.4, 0.4, 0.4),
        }
    }
}

pub(crate) fn update_animation(
    mut query: Query<
        (
            &mut AnimatorParams,
            &Invulnerable,
            &LinearVelocity,
            &mut PlayerAnimation,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    for (mut params, invuln, velocity, mut animation, mut sprite) in &mut query {
        params.hurt = invuln.is_invulnerable();

        let next = PlayerAnimation::select(&params, velocity.y);
        if *animation != next {
            debug!("Animation {:?} -> {:?}", *animation, next);
            *animation = next;
            sprite.color = next.tint();
        }
    }
}
