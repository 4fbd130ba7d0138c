use std::time::Duration;

use anyhow::{Result, ensure};
use bevy_ecs::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::constants::*;

// ============================================================================
// Simulation Tunables
// ============================================================================

// Runtime tunables for the simulation. Defaults are the reference values.
#[derive(Resource, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub player_speed: f32,         // units per second
    pub projectile_speed: f32,     // units per second
    pub projectile_max_range: f32, // units from the player
    pub projectile_radius: f32,
    pub target_size: f32,
    pub target_height: f32,
    pub target_spread_x: f32,
    pub target_min_distance: f32,
    pub target_max_distance: f32,
    pub respawn_delay: f32,    // seconds
    pub message_duration: f32, // seconds
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            projectile_max_range: PROJECTILE_MAX_RANGE,
            projectile_radius: PROJECTILE_RADIUS,
            target_size: TARGET_SIZE,
            target_height: TARGET_HEIGHT,
            target_spread_x: TARGET_SPREAD_X,
            target_min_distance: TARGET_MIN_DISTANCE,
            target_max_distance: TARGET_MAX_DISTANCE,
            respawn_delay: TARGET_RESPAWN_DELAY,
            message_duration: MISSION_TEXT_DURATION,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.player_speed.is_finite() && self.player_speed >= 0.0,
            "player speed must be a non-negative number, got {}",
            self.player_speed
        );
        ensure!(
            self.projectile_speed.is_finite() && self.projectile_speed >= 0.0,
            "projectile speed must be a non-negative number, got {}",
            self.projectile_speed
        );
        ensure!(
            self.projectile_max_range.is_finite() && self.projectile_max_range > 0.0,
            "projectile range must be positive, got {}",
            self.projectile_max_range
        );
        ensure!(
            self.projectile_radius.is_finite() && self.projectile_radius >= 0.0,
            "projectile radius must be non-negative, got {}",
            self.projectile_radius
        );
        ensure!(
            self.target_size.is_finite() && self.target_size > 0.0,
            "target size must be positive, got {}",
            self.target_size
        );
        ensure!(
            self.target_spread_x.is_finite() && self.target_spread_x >= 0.0,
            "target spread must be non-negative, got {}",
            self.target_spread_x
        );
        ensure!(
            self.target_min_distance.is_finite()
                && self.target_max_distance.is_finite()
                && 0.0 <= self.target_min_distance
                && self.target_min_distance <= self.target_max_distance,
            "target distance band [{}, {}] is invalid",
            self.target_min_distance,
            self.target_max_distance
        );
        ensure!(
            self.target_height.is_finite(),
            "target height must be a number, got {}",
            self.target_height
        );
        ensure!(
            (0.0..=MAX_TIMER_DELAY).contains(&self.respawn_delay),
            "respawn delay must be between 0 and {MAX_TIMER_DELAY} seconds, got {}",
            self.respawn_delay
        );
        ensure!(
            (0.0..=MAX_TIMER_DELAY).contains(&self.message_duration),
            "message duration must be between 0 and {MAX_TIMER_DELAY} seconds, got {}",
            self.message_duration
        );
        Ok(())
    }

    #[must_use]
    pub fn respawn_delay(&self) -> Duration {
        seconds_to_duration(self.respawn_delay)
    }

    #[must_use]
    pub fn message_duration(&self) -> Duration {
        seconds_to_duration(self.message_duration)
    }
}

// Unvalidated delays that no `Duration` can hold count as zero.
fn seconds_to_duration(seconds: f32) -> Duration {
    Duration::try_from_secs_f32(seconds).unwrap_or_default()
}

// ============================================================================
// Randomness
// ============================================================================

// RNG used for target placement. Seed it to make spawn positions reproducible.
#[derive(Resource)]
pub struct TargetRng(pub StdRng);

impl TargetRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_distance_band() {
        let config = SimConfig {
            target_min_distance: 20.0,
            target_max_distance: 10.0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distance band"));
    }

    #[test]
    fn rejects_non_finite_speed() {
        let config = SimConfig {
            player_speed: f32::NAN,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_target_height() {
        let config = SimConfig {
            target_height: f32::INFINITY,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_delays_beyond_the_limit() {
        let config = SimConfig {
            respawn_delay: f32::MAX,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("respawn delay"));

        let config = SimConfig {
            message_duration: MAX_TIMER_DELAY + 1.0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unrepresentable_delays_do_not_panic() {
        let config = SimConfig {
            respawn_delay: f32::MAX,
            message_duration: -1.0,
            ..SimConfig::default()
        };
        assert_eq!(config.respawn_delay(), Duration::ZERO);
        assert_eq!(config.message_duration(), Duration::ZERO);
    }

    #[test]
    fn durations_convert_from_seconds() {
        let config = SimConfig::default();
        assert_eq!(config.respawn_delay(), Duration::from_millis(2000));
        assert_eq!(config.message_duration(), Duration::from_millis(3000));
    }
}
