//! Level domain: unit tests for enemy patrols.

use super::Patrol;

fn patrol(direction: f32) -> Patrol {
    Patrol {
        origin_x: 100.0,
        range: 50.0,
        speed: 64.0,
        direction,
    }
}

#[test]
fn test_patrol_keeps_direction_inside_range() {
    assert_eq!(patrol(1.0).direction_at(120.0), 1.0);
    assert_eq!(patrol(-1.0).direction_at(80.0), -1.0);
}

#[test]
fn test_patrol_turns_around_past_either_end() {
    assert_eq!(patrol(1.0).direction_at(151.0), -1.0);
    assert_eq!(patrol(-1.0).direction_at(49.0), 1.0);
}
