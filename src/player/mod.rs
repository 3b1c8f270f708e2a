//! Player domain: the platformer avatar controller.
//!
//! One chained update per frame: input, ground check, jump state machine,
//! velocity, then timer-driven feedback. Health, death and respawn run after
//! the control chain and animation selection runs last.

mod animation;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod state;
mod systems;


pub use animation::PlayerAnimation;
pub use components::{
    AnimatorParams, Facing, FeedbackTimers, Health, InputEdge, Invulnerable, PendingRespawn,
    Player, PlayerConfig, PlayerController,
};
pub use events::{PlayerDied, PlayerHurt, PlayerJumped, PlayerLanded, PlayerSpawned, PlayerStopJump};
pub use resources::{PlatformerTuning, PlayerInput, PlayerTemplate, UNIT};
pub use state::{JumpEffect, JumpState};

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::player::animation::update_animation;
use crate::player::systems::{
    apply_hurt, check_kill_plane, check_nearby_enemies, compute_velocity, detect_enemy_contact,
    detect_ground, handle_death, integrate_velocity, read_input, sample_player_input,
    sync_facing, tick_footsteps, tick_invulnerability, tick_respawn, update_jump_state,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlatformerTuning>()
            .init_resource::<PlayerTemplate>()
            .init_resource::<PlayerInput>()
            .add_message::<PlayerJumped>()
            .add_message::<PlayerLanded>()
            .add_message::<PlayerStopJump>()
            .add_message::<PlayerHurt>()
            .add_message::<PlayerDied>()
            .add_message::<PlayerSpawned>()
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    sample_player_input,
                    update_jump_state,
                    compute_velocity,
                    integrate_velocity,
                    sync_facing,
                    tick_footsteps,
                    check_nearby_enemies,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (
                    tick_invulnerability,
                    detect_enemy_contact,
                    check_kill_plane,
                    apply_hurt,
                    handle_death,
                    tick_respawn,
                    update_animation,
                )
                    .chain()
                    .after(check_nearby_enemies)
                    .run_if(gameplay_active),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_controller_gizmos);
    }
}
