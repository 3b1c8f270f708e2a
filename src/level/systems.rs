//! Level domain: enemy patrol movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::components::{Enemy, Patrol};

pub(crate) fn patrol_enemies(
    mut query: Query<(&Transform, &mut Patrol, &mut LinearVelocity), With<Enemy>>,
) {
    for (transform, mut patrol, mut velocity) in &mut query {
        patrol.direction = patrol.direction_at(transform.translation.x);
        velocity.x = patrol.direction * patrol.speed;
    }
}
