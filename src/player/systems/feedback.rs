//! Player domain: footstep and enemy-proximity cues.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{AudioCue, AudioCueRequested};
use crate::core::GameLayer;
use crate::player::{FeedbackTimers, Player, PlayerConfig, PlayerController};

pub(crate) fn tick_footsteps(
    time: Res<Time>,
    mut query: Query<(Entity, &PlayerController, &PlayerConfig, &mut FeedbackTimers), With<Player>>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    let dt = time.delta_secs();

    for (player, controller, config, mut timers) in &mut query {
        if timers.tick_footstep(
            dt,
            controller.grounded,
            controller.move_x,
            config.footstep_interval,
        ) {
            cues.write(AudioCueRequested {
                player,
                cue: AudioCue::Footstep,
            });
        }
    }
}

/// Poll for enemies around the player, at most once per sound interval.
pub(crate) fn check_nearby_enemies(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &PlayerConfig, &mut FeedbackTimers), With<Player>>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    let now = time.elapsed_secs();
    let enemy_filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (player, transform, config, mut timers) in &mut query {
        if !timers.enemy_check_due(now, config.enemy_sound_interval) {
            continue;
        }

        let detection_area = Collider::circle(config.enemy_detection_distance);
        let nearby = spatial_query.shape_intersections(
            &detection_area,
            transform.translation.truncate(),
            0.0,
            &enemy_filter,
        );

        if nearby.is_empty() {
            continue;
        }

        debug!("{} enemies near the player", nearby.len());
        cues.write(AudioCueRequested {
            player,
            cue: AudioCue::EnemyNearby,
        });
        timers.mark_enemy_sound(now);
    }
}
