//! Audio domain: one-shot sound cues requested by gameplay.

mod cues;
mod systems;


pub use cues::{AudioCue, AudioCueRequested, AudioEvents, PlayerAudio};

use bevy::prelude::*;

use crate::audio::systems::play_audio_cues;

pub struct PlayerAudioPlugin;

impl Plugin for PlayerAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AudioCueRequested>()
            .add_systems(PostUpdate, play_audio_cues);
    }
}
