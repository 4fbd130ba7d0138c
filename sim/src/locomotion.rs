use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::Time;

use crate::{
    config::SimConfig,
    constants::PLAYER_EYE_HEIGHT,
    input::{Action, InputState},
    session::GameSession,
};

// ============================================================================
// Player
// ============================================================================

// Player eye position and look direction. The host writes `facing` from the camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub facing: Vec3,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            facing: Vec3::NEG_Z,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

// Negative or non-finite frame deltas count as no time passing.
#[must_use]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 { delta } else { 0.0 }
}

// Facing projected onto the ground plane. Zero when looking straight up or down.
#[must_use]
pub fn forward_axis(facing: Vec3) -> Vec3 {
    Vec3::new(facing.x, 0.0, facing.z).normalize_or_zero()
}

// Up x forward. For forward = -Z this is -X, which is why "right" moves along -right.
#[must_use]
pub fn right_axis(forward: Vec3) -> Vec3 {
    Vec3::Y.cross(forward).normalize_or_zero()
}

// Position delta for one frame. Contributions are summed in a fixed order so the
// result only depends on the inputs.
#[must_use]
pub fn movement_delta(facing: Vec3, input: &InputState, speed: f32, delta: f32) -> Vec3 {
    let step = speed * sanitize_delta(delta);
    let forward = forward_axis(facing);
    let right = right_axis(forward);

    let mut offset = Vec3::ZERO;
    if input.is_held(Action::Forward) {
        offset += forward * step;
    }
    if input.is_held(Action::Backward) {
        offset += forward * -step;
    }
    if input.is_held(Action::Left) {
        offset += right * step;
    }
    if input.is_held(Action::Right) {
        offset += right * -step;
    }
    offset
}

// ============================================================================
// Locomotion System
// ============================================================================

pub fn locomotion_system(
    time: Res<Time>,
    session: Res<GameSession>,
    input: Res<InputState>,
    config: Res<SimConfig>,
    mut player: ResMut<Player>,
) {
    // Movement only while look/move capture is active
    if !session.controls_locked {
        return;
    }

    let offset = movement_delta(player.facing, &input, config.player_speed, time.delta_secs());
    if offset != Vec3::ZERO {
        player.position += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PHYSICS_EPSILON, PLAYER_SPEED};

    fn holding(keys: &[&str]) -> InputState {
        let mut input = InputState::default();
        for key in keys {
            input.key_down(key);
        }
        input
    }

    #[test]
    fn forward_moves_along_facing() {
        let offset = movement_delta(Vec3::NEG_Z, &holding(&["w"]), PLAYER_SPEED, 0.5);
        assert!((offset - Vec3::new(0.0, 0.0, -5.0)).length() < PHYSICS_EPSILON);
    }

    #[test]
    fn forward_ignores_pitch() {
        let facing = Vec3::new(0.0, -1.0, -1.0).normalize();
        let offset = movement_delta(facing, &holding(&["w"]), PLAYER_SPEED, 1.0);
        assert!((offset - Vec3::new(0.0, 0.0, -10.0)).length() < PHYSICS_EPSILON);
    }

    #[test]
    fn strafe_sign_convention() {
        let left = movement_delta(Vec3::NEG_Z, &holding(&["a"]), PLAYER_SPEED, 1.0);
        let right = movement_delta(Vec3::NEG_Z, &holding(&["d"]), PLAYER_SPEED, 1.0);
        assert!((left - Vec3::new(-10.0, 0.0, 0.0)).length() < PHYSICS_EPSILON);
        assert!((right - Vec3::new(10.0, 0.0, 0.0)).length() < PHYSICS_EPSILON);
    }

    #[test]
    fn opposite_keys_cancel() {
        let offset = movement_delta(Vec3::X, &holding(&["w", "s", "a", "d"]), PLAYER_SPEED, 0.25);
        assert_eq!(offset, Vec3::ZERO);
    }

    #[test]
    fn looking_straight_up_does_not_move_or_produce_nan() {
        let offset = movement_delta(Vec3::Y, &holding(&["w", "a"]), PLAYER_SPEED, 1.0);
        assert_eq!(offset, Vec3::ZERO);
        assert_eq!(forward_axis(Vec3::NEG_Y), Vec3::ZERO);
        assert_eq!(right_axis(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn bad_delta_is_treated_as_zero() {
        let input = holding(&["w"]);
        assert_eq!(movement_delta(Vec3::NEG_Z, &input, PLAYER_SPEED, -1.0), Vec3::ZERO);
        assert_eq!(movement_delta(Vec3::NEG_Z, &input, PLAYER_SPEED, f32::NAN), Vec3::ZERO);
        assert_eq!(movement_delta(Vec3::NEG_Z, &input, PLAYER_SPEED, f32::INFINITY), Vec3::ZERO);
    }

    #[test]
    fn movement_is_reproducible() {
        let facing = Vec3::new(0.3, 0.2, -0.7);
        let input = holding(&["w", "d"]);
        let a = movement_delta(facing, &input, PLAYER_SPEED, 0.016_667);
        let b = movement_delta(facing, &input, PLAYER_SPEED, 0.016_667);
        assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
    }
}
