//! Player domain: messages emitted and consumed by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The player left the ground after a takeoff.
#[derive(Debug)]
pub struct PlayerJumped {
    pub player: Entity,
}

impl Message for PlayerJumped {}

/// The player touched down after being in flight.
#[derive(Debug)]
pub struct PlayerLanded {
    pub player: Entity,
}

impl Message for PlayerLanded {}

/// The jump button was released.
#[derive(Debug)]
pub struct PlayerStopJump {
    pub player: Entity,
}

impl Message for PlayerStopJump {}

/// Request to damage the player.
#[derive(Debug)]
pub struct PlayerHurt {
    pub player: Entity,
    pub amount: i32,
}

impl Message for PlayerHurt {}

#[derive(Debug)]
pub struct PlayerDied {
    pub player: Entity,
}

impl Message for PlayerDied {}

#[derive(Debug)]
pub struct PlayerSpawned {
    pub player: Entity,
}

impl Message for PlayerSpawned {}
