//! Player domain: per-frame jump state machine step.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{AudioCue, AudioCueRequested};
use crate::player::{JumpEffect, Player, PlayerController, PlayerJumped, PlayerLanded};

pub(crate) fn update_jump_state(
    mut query: Query<(Entity, &mut PlayerController), With<Player>>,
    mut jumped: MessageWriter<PlayerJumped>,
    mut landed: MessageWriter<PlayerLanded>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    for (player, mut controller) in &mut query {
        let Some(transition) = controller.advance() else {
            continue;
        };

        debug!(
            "Jump state {:?} -> {:?}",
            transition.from, transition.to
        );

        match transition.effect {
            Some(JumpEffect::Jumped) => {
                jumped.write(PlayerJumped { player });
            }
            Some(JumpEffect::Landed) => {
                landed.write(PlayerLanded { player });
                cues.write(AudioCueRequested {
                    player,
                    cue: AudioCue::Landing,
                });
            }
            // Takeoff is armed inside the controller; the jump sound was
            // already requested when the press was sampled.
            Some(JumpEffect::ArmJump) | Some(JumpEffect::JumpSound) | None => {}
        }
    }
}
