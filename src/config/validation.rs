//! Validation of loaded tuning values.

use super::data::PlayerConfigFile;

/// A tuning value outside its allowed range.
#[derive(Debug)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

macro_rules! check {
    ($errors:expr, $field:expr, $value:expr, $cond:expr, $requirement:expr) => {
        if !$cond {
            $errors.push(ConfigValidationError {
                field: $field,
                value: $value as f32,
                requirement: $requirement,
            });
        }
    };
}

/// Returns every out-of-range value, empty when the file is usable.
pub fn validate_player_config(file: &PlayerConfigFile) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    let player = &file.player;
    let tuning = &file.tuning;

    check!(errors, "player.max_speed", player.max_speed, player.max_speed > 0.0, "positive");
    check!(
        errors,
        "player.jump_take_off_speed",
        player.jump_take_off_speed,
        player.jump_take_off_speed >= 0.0,
        "non-negative"
    );
    check!(errors, "player.max_health", player.max_health, player.max_health > 0, "positive");
    check!(
        errors,
        "player.footstep_interval",
        player.footstep_interval,
        player.footstep_interval > 0.0,
        "positive"
    );
    check!(
        errors,
        "player.enemy_detection_distance",
        player.enemy_detection_distance,
        player.enemy_detection_distance > 0.0,
        "positive"
    );
    check!(
        errors,
        "player.enemy_sound_interval",
        player.enemy_sound_interval,
        player.enemy_sound_interval >= 0.0,
        "non-negative"
    );
    check!(
        errors,
        "tuning.jump_deceleration",
        tuning.jump_deceleration,
        (0.0..=1.0).contains(&tuning.jump_deceleration),
        "between 0 and 1"
    );
    check!(errors, "tuning.gravity", tuning.gravity, tuning.gravity > 0.0, "positive");
    check!(
        errors,
        "tuning.gravity_modifier",
        tuning.gravity_modifier,
        tuning.gravity_modifier > 0.0,
        "positive"
    );
    check!(
        errors,
        "tuning.respawn_delay",
        tuning.respawn_delay,
        tuning.respawn_delay >= 0.0,
        "non-negative"
    );
    check!(
        errors,
        "tuning.hurt_invulnerability",
        tuning.hurt_invulnerability,
        tuning.hurt_invulnerability >= 0.0,
        "non-negative"
    );

    errors
}
