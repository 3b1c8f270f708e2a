//! Audio domain: cue identifiers, asset paths and loaded handles.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Jump,
    Respawn,
    Ouch,
    Footstep,
    Landing,
    EnemyNearby,
}

/// Gameplay asks for a cue to be played for a player.
#[derive(Debug)]
pub struct AudioCueRequested {
    pub player: Entity,
    pub cue: AudioCue,
}

impl Message for AudioCueRequested {}

/// Asset paths for each cue. An empty path leaves the cue silent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioEvents {
    pub jump: String,
    pub respawn: String,
    pub ouch: String,
    pub footsteps: String,
    pub landing: String,
    pub enemy_nearby: Option<String>,
}

/// Audio handles owned by a player, created once at spawn.
#[derive(Component, Debug, Default)]
pub struct PlayerAudio {
    pub jump: Option<Handle<AudioSource>>,
    pub respawn: Option<Handle<AudioSource>>,
    pub ouch: Option<Handle<AudioSource>>,
    pub footsteps: Option<Handle<AudioSource>>,
    pub landing: Option<Handle<AudioSource>>,
    pub enemy_nearby: Option<Handle<AudioSource>>,
}

impl PlayerAudio {
    pub fn load(events: &AudioEvents, asset_server: &AssetServer) -> Self {
        Self::from_events(events, |path| asset_server.load(path.to_string()))
    }

    /// Build handles with a custom loader; empty paths are skipped.
    pub fn from_events(
        events: &AudioEvents,
        mut load: impl FnMut(&str) -> Handle<AudioSource>,
    ) -> Self {
        let mut load_path = |path: &str| (!path.is_empty()).then(|| load(path));

        Self {
            jump: load_path(&events.jump),
            respawn: load_path(&events.respawn),
            ouch: load_path(&events.ouch),
            footsteps: load_path(&events.footsteps),
            landing: load_path(&events.landing),
            enemy_nearby: events.enemy_nearby.as_deref().and_then(&mut load_path),
        }
    }

    pub fn handle(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        match cue {
            AudioCue::Jump => self.jump.as_ref(),
            AudioCue::Respawn => self.respawn.as_ref(),
            AudioCue::Ouch => self.ouch.as_ref(),
            AudioCue::Footstep => self.footsteps.as_ref(),
            AudioCue::Landing => self.landing.as_ref(),
            AudioCue::EnemyNearby => self.enemy_nearby.as_ref(),
        }
    }
}
