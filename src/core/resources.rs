//! Core domain: shared resources for pause state and level generation.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// Source name used by the pause key.
pub const PAUSE_MENU_SOURCE: &str = "pause_menu";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Flip a single source, returning whether it is now paused.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if self.sources.remove(&source) {
            false
        } else {
            self.sources.insert(source);
            true
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Seed for the demo level's enemy placement.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelSeed(pub u64);

impl Default for LevelSeed {
    fn default() -> Self {
        Self(rand::rng().random())
    }
}
