//! Player domain: controller, configuration and feedback components.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::AudioEvents;
use crate::player::resources::{PlayerInput, UNIT};
use crate::player::state::{JumpEffect, JumpState, JumpTransition};

/// Horizontal input below this magnitude counts as no input.
pub const MOVE_DEADZONE: f32 = 0.01;

#[derive(Component, Debug)]
pub struct Player;

/// What input sampling did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdge {
    /// Jump pressed while grounded; the machine entered `PrepareToJump`.
    JumpStarted,
    /// Jump released; the stop-jump flag is armed.
    JumpReleased,
}

#[derive(Component, Debug)]
pub struct PlayerController {
    pub jump_state: JumpState,
    pub move_x: f32,
    /// One-frame takeoff impulse request.
    pub jump: bool,
    /// One-frame request to damp rising velocity.
    pub stop_jump: bool,
    pub grounded: bool,
    pub control_enabled: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            jump_state: JumpState::Grounded,
            move_x: 0.0,
            jump: false,
            stop_jump: false,
            grounded: false,
            control_enabled: true,
        }
    }
}

impl PlayerController {
    /// Read one frame of input. A press while grounded takes priority over a
    /// release in the same frame.
    pub fn sample_input(&mut self, input: &PlayerInput) -> Option<InputEdge> {
        if !self.control_enabled {
            self.move_x = 0.0;
            return None;
        }

        self.move_x = input.axis_x;

        if input.jump_pressed {
            if let Some(transition) = self.jump_state.press_jump() {
                self.jump_state = transition.to;
                return Some(InputEdge::JumpStarted);
            }
        }

        if input.jump_released {
            self.stop_jump = true;
            return Some(InputEdge::JumpReleased);
        }

        None
    }

    /// Advance the jump state machine by one frame.
    pub fn advance(&mut self) -> Option<JumpTransition> {
        self.jump = false;

        let transition = self.jump_state.step(self.grounded)?;
        self.jump_state = transition.to;
        if transition.effect == Some(JumpEffect::ArmJump) {
            self.jump = true;
            self.stop_jump = false;
        }

        Some(transition)
    }

    /// Back to a fresh grounded state, as after a respawn.
    pub fn reset(&mut self) {
        *self = Self {
            grounded: self.grounded,
            ..default()
        };
    }
}

/// Per-player configuration, usually loaded from `assets/data/player.ron`.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    pub max_health: i32,
    /// Seconds between footstep sounds while walking.
    pub footstep_interval: f32,
    pub enemy_detection_distance: f32,
    /// Minimum seconds between two enemy-nearby sounds.
    pub enemy_sound_interval: f32,
    pub audio: AudioEvents,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 7.0 * UNIT,
            jump_take_off_speed: 7.0 * UNIT,
            max_health: 3,
            footstep_interval: 0.5,
            enemy_detection_distance: 2.0 * UNIT,
            enemy_sound_interval: 2.0,
            audio: AudioEvents::default(),
        }
    }
}

/// Timers behind the periodic footstep and enemy-nearby cues.
#[derive(Component, Debug, Default)]
pub struct FeedbackTimers {
    pub footstep_timer: f32,
    /// Elapsed time at which the enemy-nearby cue last fired.
    pub last_enemy_sound_time: f32,
}

impl FeedbackTimers {
    /// Accumulate walking time; returns true when a footstep is due.
    pub fn tick_footstep(&mut self, dt: f32, grounded: bool, move_x: f32, interval: f32) -> bool {
        if !grounded || move_x.abs() <= MOVE_DEADZONE {
            return false;
        }

        self.footstep_timer += dt;
        if self.footstep_timer >= interval {
            self.footstep_timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn enemy_check_due(&self, now: f32, interval: f32) -> bool {
        now - self.last_enemy_sound_time >= interval
    }

    pub fn mark_enemy_sound(&mut self, now: f32) {
        self.last_enemy_sound_time = now;
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// New facing for this input, or `None` inside the deadzone.
    pub fn from_input(move_x: f32) -> Option<Facing> {
        if move_x > MOVE_DEADZONE {
            Some(Facing::Right)
        } else if move_x < -MOVE_DEADZONE {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Parameters the animation selection reads each frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimatorParams {
    pub grounded: bool,
    /// |vx| / max_speed
    pub velocity_x: f32,
    pub hurt: bool,
    pub dead: bool,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Remove hit points, returning how many were actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current);
        self.current -= actual;
        actual
    }

    pub fn die(&mut self) {
        self.current = 0;
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }
}

#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Seconds until a dead player comes back.
#[derive(Component, Debug)]
pub struct PendingRespawn(pub f32);
