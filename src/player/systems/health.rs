//! Player domain: hurt, death and respawn flow.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AudioCue, AudioCueRequested};
use crate::core::GameLayer;
use crate::level::SpawnPoint;
use crate::player::{
    AnimatorParams, FeedbackTimers, Health, Invulnerable, PendingRespawn, PlatformerTuning,
    Player, PlayerController, PlayerDied, PlayerHurt, PlayerSpawned,
};

/// Damage dealt by touching an enemy.
const ENEMY_CONTACT_DAMAGE: i32 = 1;

pub(crate) fn detect_enemy_contact(
    spatial_query: SpatialQuery,
    query: Query<(Entity, &Transform, &Collider, &Invulnerable, &PlayerController), With<Player>>,
    mut hurt: MessageWriter<PlayerHurt>,
) {
    let enemy_filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (player, transform, collider, invuln, controller) in &query {
        if invuln.is_invulnerable() || !controller.control_enabled {
            continue;
        }

        let touching = spatial_query.shape_intersections(
            collider,
            transform.translation.truncate(),
            0.0,
            &enemy_filter,
        );

        if !touching.is_empty() {
            hurt.write(PlayerHurt {
                player,
                amount: ENEMY_CONTACT_DAMAGE,
            });
        }
    }
}

pub(crate) fn check_kill_plane(
    tuning: Res<PlatformerTuning>,
    query: Query<(Entity, &Transform), (With<Player>, Without<PendingRespawn>)>,
    mut died: MessageWriter<PlayerDied>,
) {
    for (player, transform) in &query {
        if transform.translation.y < tuning.kill_y {
            info!("Player fell out of the world at y={}", transform.translation.y);
            died.write(PlayerDied { player });
        }
    }
}

pub(crate) fn apply_hurt(
    tuning: Res<PlatformerTuning>,
    mut hurt_events: MessageReader<PlayerHurt>,
    mut query: Query<(&mut Health, &mut Invulnerable), With<Player>>,
    mut died: MessageWriter<PlayerDied>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    for event in hurt_events.read() {
        let Ok((mut health, mut invuln)) = query.get_mut(event.player) else {
            continue;
        };
        if invuln.is_invulnerable() || !health.is_alive() {
            continue;
        }

        let lost = health.take_damage(event.amount);
        invuln.timer = tuning.hurt_invulnerability;
        debug!(
            "Player hurt for {}, health {}/{}",
            lost, health.current, health.max
        );

        // A lethal hit gets its ouch from the death handler
        if health.is_alive() {
            cues.write(AudioCueRequested {
                player: event.player,
                cue: AudioCue::Ouch,
            });
        } else {
            died.write(PlayerDied {
                player: event.player,
            });
        }
    }
}

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();

    for mut invuln in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
    }
}

/// Disable control and schedule a respawn. Repeated deaths before the
/// respawn are ignored.
pub(crate) fn handle_death(
    mut commands: Commands,
    tuning: Res<PlatformerTuning>,
    mut died_events: MessageReader<PlayerDied>,
    mut query: Query<(&mut PlayerController, &mut Health, &mut AnimatorParams), With<Player>>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    for event in died_events.read() {
        let Ok((mut controller, mut health, mut params)) = query.get_mut(event.player) else {
            continue;
        };
        if params.dead {
            continue;
        }

        controller.control_enabled = false;
        health.die();
        params.dead = true;
        cues.write(AudioCueRequested {
            player: event.player,
            cue: AudioCue::Ouch,
        });
        commands
            .entity(event.player)
            .insert(PendingRespawn(tuning.respawn_delay));

        info!("Player died, respawning in {}s", tuning.respawn_delay);
    }
}

pub(crate) fn tick_respawn(
    mut commands: Commands,
    time: Res<Time>,
    spawn_points: Query<&Transform, (With<SpawnPoint>, Without<Player>)>,
    mut query: Query<
        (
            Entity,
            &mut PendingRespawn,
            &mut Transform,
            &mut LinearVelocity,
            &mut PlayerController,
            &mut Health,
            &mut AnimatorParams,
            &mut FeedbackTimers,
            &mut Invulnerable,
        ),
        With<Player>,
    >,
    mut spawned: MessageWriter<PlayerSpawned>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    let dt = time.delta_secs();
    let spawn_position = spawn_points
        .iter()
        .next()
        .map(|t| t.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    for (
        player,
        mut pending,
        mut transform,
        mut velocity,
        mut controller,
        mut health,
        mut params,
        mut timers,
        mut invuln,
    ) in &mut query
    {
        pending.0 -= dt;
        if pending.0 > 0.0 {
            continue;
        }

        transform.translation.x = spawn_position.x;
        transform.translation.y = spawn_position.y;
        velocity.0 = Vec2::ZERO;
        controller.reset();
        health.restore();
        *params = AnimatorParams::default();
        timers.footstep_timer = 0.0;
        invuln.timer = 0.0;

        commands.entity(player).remove::<PendingRespawn>();
        cues.write(AudioCueRequested {
            player,
            cue: AudioCue::Respawn,
        });
        spawned.write(PlayerSpawned { player });

        info!("Player respawned at {:?}", spawn_position);
    }
}
