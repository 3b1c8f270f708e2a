//! Level domain: scene and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::audio::PlayerAudio;
use crate::core::{GameLayer, LevelSeed};
use crate::level::components::{Enemy, Ground, Patrol, SpawnPoint};
use crate::player::{
    AnimatorParams, Facing, FeedbackTimers, Health, Invulnerable, Player, PlayerAnimation,
    PlayerController, PlayerTemplate, UNIT,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 40.0);
const ENEMY_SIZE: Vec2 = Vec2::new(28.0, 28.0);
const SPAWN_POSITION: Vec2 = Vec2::new(-300.0, -120.0);

fn spawn_ground(commands: &mut Commands, position: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_level(mut commands: Commands, seed: Res<LevelSeed>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    spawn_ground(
        &mut commands,
        Vec2::new(0.0, -200.0),
        Vec2::new(900.0, 40.0),
        ground_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(-150.0, -60.0),
        Vec2::new(160.0, 20.0),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(200.0, 40.0),
        Vec2::new(160.0, 20.0),
        platform_color,
    );

    commands.spawn((
        SpawnPoint,
        Transform::from_translation(SPAWN_POSITION.extend(0.0)),
    ));

    let mut rng = ChaCha8Rng::seed_from_u64(seed.0);
    let floor_y = -180.0 + ENEMY_SIZE.y * 0.5;
    for origin_x in [50.0, 300.0] {
        let start_x = origin_x + rng.random_range(-UNIT..UNIT);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        commands.spawn((
            Enemy,
            Patrol {
                origin_x,
                range: 3.0 * UNIT,
                speed: 2.0 * UNIT,
                direction,
            },
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_xyz(start_x, floor_y, 0.0),
            RigidBody::Kinematic,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            LinearVelocity::default(),
            // Found by spatial queries only; nothing collides with enemies
            CollisionLayers::new(GameLayer::Enemy, LayerMask::NONE),
        ));
    }

    info!("Spawned level with seed {}", seed.0);
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    template: Res<PlayerTemplate>,
) {
    let config = template.0.clone();
    let audio = PlayerAudio::load(&config.audio, &asset_server);

    info!(
        "Spawning player: max_speed={}, jump_take_off_speed={}, health={}",
        config.max_speed, config.jump_take_off_speed, config.max_health
    );

    commands.spawn((
        // Controller
        (
            Player,
            Name::new("Player"),
            PlayerController::default(),
            Health::new(config.max_health),
            Invulnerable::default(),
            FeedbackTimers::default(),
            audio,
            config,
        ),
        // Presentation
        (
            Facing::default(),
            AnimatorParams::default(),
            PlayerAnimation::default(),
            Sprite {
                color: PlayerAnimation::Idle.tint(),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(SPAWN_POSITION.extend(1.0)),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
