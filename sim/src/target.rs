use bevy_ecs::prelude::*;
use bevy_math::{Vec3, bounding::Aabb3d};
use rand::Rng;
use tracing::debug;

use crate::config::SimConfig;

// ============================================================================
// Target State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TargetState {
    #[default]
    Absent,
    Alive {
        position: Vec3,
    },
}

// The single enemy. Starts absent until the game spawns it.
#[derive(Resource, Debug, Default)]
pub struct Target {
    state: TargetState,
}

impl Target {
    #[must_use]
    pub const fn state(&self) -> TargetState {
        self.state
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        matches!(self.state, TargetState::Alive { .. })
    }

    #[must_use]
    pub const fn position(&self) -> Option<Vec3> {
        match self.state {
            TargetState::Alive { position } => Some(position),
            TargetState::Absent => None,
        }
    }

    // Absent -> Alive. Ignored while a target is already alive.
    pub fn spawn<R: Rng>(&mut self, player_position: Vec3, config: &SimConfig, rng: &mut R) -> Option<Vec3> {
        if self.is_alive() {
            debug!("target already alive, ignoring spawn");
            return None;
        }

        let position = spawn_position(player_position, config, rng);
        self.state = TargetState::Alive { position };
        debug!("target spawned at {position}");
        Some(position)
    }

    // Alive -> Absent. Returns where the target was.
    pub fn destroy(&mut self) -> Option<Vec3> {
        let TargetState::Alive { position } = self.state else {
            debug!("no target to destroy");
            return None;
        };
        self.state = TargetState::Absent;
        debug!("target destroyed at {position}");
        Some(position)
    }

    // Drop the target without the destroy bookkeeping (used by reset).
    pub fn clear(&mut self) {
        self.state = TargetState::Absent;
    }

    #[must_use]
    pub fn bounding_volume(&self, size: f32) -> Option<Aabb3d> {
        self.position().map(|position| target_volume(position, size))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

#[must_use]
pub fn target_volume(position: Vec3, size: f32) -> Aabb3d {
    Aabb3d::new(position, Vec3::splat(size / 2.0))
}

// Random position in a band in front of the player (towards -Z) at fixed height.
pub fn spawn_position<R: Rng>(player_position: Vec3, config: &SimConfig, rng: &mut R) -> Vec3 {
    let offset_x = rng.random_range(-config.target_spread_x..=config.target_spread_x);
    let distance = rng.random_range(config.target_min_distance..=config.target_max_distance);
    Vec3::new(
        player_position.x + offset_x,
        config.target_height,
        player_position.z - distance,
    )
}
