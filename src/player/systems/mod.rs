//! Player domain: system modules for the per-frame controller update.

pub(crate) mod collisions;
pub(crate) mod feedback;
pub(crate) mod health;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod velocity;

pub(crate) use collisions::detect_ground;
pub(crate) use feedback::{check_nearby_enemies, tick_footsteps};
pub(crate) use health::{
    apply_hurt, check_kill_plane, detect_enemy_contact, handle_death, tick_invulnerability,
    tick_respawn,
};
pub(crate) use input::{read_input, sample_player_input};
pub(crate) use jump::update_jump_state;
pub(crate) use velocity::{compute_velocity, integrate_velocity, sync_facing};
