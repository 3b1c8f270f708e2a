//! Player domain: ground check by ray cast.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::player::{Player, PlayerController};

/// Length of the ground ray below the player's feet.
const GROUND_RAY_LENGTH: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut PlayerController), With<Player>>,
) {
    // Only ground counts; enemies and the player itself are ignored
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut controller) in &mut query {
        let was_grounded = controller.grounded;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 16.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            GROUND_RAY_LENGTH,
            true,
            &ground_filter,
        );

        controller.grounded = hit.is_some();

        if controller.grounded != was_grounded {
            debug!(
                "Grounded changed: {} -> {} in {:?}",
                was_grounded, controller.grounded, controller.jump_state
            );
        }
    }
}
