//! Player domain: input sampling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{AudioCue, AudioCueRequested};
use crate::player::{InputEdge, Player, PlayerController, PlayerInput, PlayerStopJump};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let jump_keys = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

    input.axis_x = x;
    input.jump_pressed = keyboard.any_just_pressed(jump_keys);
    input.jump_released = keyboard.any_just_released(jump_keys);
}

/// Feed the frame's input into every controller and react to jump edges.
pub(crate) fn sample_player_input(
    input: Res<PlayerInput>,
    mut query: Query<(Entity, &mut PlayerController), With<Player>>,
    mut stop_jump: MessageWriter<PlayerStopJump>,
    mut cues: MessageWriter<AudioCueRequested>,
) {
    for (player, mut controller) in &mut query {
        match controller.sample_input(&input) {
            Some(InputEdge::JumpStarted) => {
                cues.write(AudioCueRequested {
                    player,
                    cue: AudioCue::Jump,
                });
            }
            Some(InputEdge::JumpReleased) => {
                stop_jump.write(PlayerStopJump { player });
            }
            None => {}
        }
    }
}
