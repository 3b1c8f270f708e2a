//! Audio domain: playback of requested cues.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::audio::cues::{AudioCueRequested, PlayerAudio};

/// Spawn a self-despawning audio player for every requested cue that has a
/// loaded handle. Cues without a handle are dropped silently.
pub(crate) fn play_audio_cues(
    mut commands: Commands,
    mut requests: MessageReader<AudioCueRequested>,
    players: Query<&PlayerAudio>,
) {
    for request in requests.read() {
        let Ok(audio) = players.get(request.player) else {
            continue;
        };
        let Some(handle) = audio.handle(request.cue) else {
            continue;
        };

        debug!("Playing {:?} for {:?}", request.cue, request.player);
        commands.spawn((
            Name::new(format!("sfx {:?}", request.cue)),
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
