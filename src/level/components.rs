//! Level domain: markers and enemy patrol state.

use bevy::prelude::*;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug)]
pub struct Enemy;

/// Where the player appears at startup and after dying.
#[derive(Component, Debug)]
pub struct SpawnPoint;

/// Back-and-forth horizontal walk around an origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct Patrol {
    pub origin_x: f32,
    pub range: f32,
    pub speed: f32,
    pub direction: f32,
}

impl Patrol {
    /// Direction to walk next given the current x position. Turns around
    /// once the walker is past either end of its range.
    pub fn direction_at(&self, x: f32) -> f32 {
        let offset = x - self.origin_x;
        if offset > self.range {
            -1.0
        } else if offset < -self.range {
            1.0
        } else {
            self.direction
        }
    }
}
