use bevy_ecs::prelude::*;
use bevy_math::{Vec3, bounding::Aabb3d};
use bevy_time::Time;
use tracing::trace;

use crate::{
    config::SimConfig,
    locomotion::{Player, sanitize_delta},
};

// ============================================================================
// Projectile
// ============================================================================

// Stable handle so render services can track the visual for a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec3,
    pub direction: Vec3, // unit length, fixed at creation
}

impl Projectile {
    #[must_use]
    pub fn bounding_volume(&self, radius: f32) -> Aabb3d {
        Aabb3d::new(self.position, Vec3::splat(radius))
    }
}

// ============================================================================
// Projectile Manager
// ============================================================================

// Live projectiles in creation order.
#[derive(Resource, Debug, Default)]
pub struct Projectiles {
    live: Vec<Projectile>,
    next_id: u64,
}

impl Projectiles {
    // Create a projectile travelling along `facing`. A facing that cannot be
    // normalized spawns nothing.
    pub fn spawn(&mut self, origin: Vec3, facing: Vec3) -> Option<ProjectileId> {
        let direction = facing.try_normalize()?;
        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.live.push(Projectile {
            id,
            position: origin,
            direction,
        });
        Some(id)
    }

    // Move every projectile, then drop the ones farther than `max_range` from the
    // player. Returns the ids that expired.
    pub fn advance(&mut self, delta: f32, player_position: Vec3, speed: f32, max_range: f32) -> Vec<ProjectileId> {
        let step = speed * sanitize_delta(delta);
        for projectile in &mut self.live {
            projectile.position += projectile.direction * step;
        }

        let mut expired = Vec::new();
        self.live.retain(|projectile| {
            let in_range = projectile.position.distance(player_position) <= max_range;
            if !in_range {
                expired.push(projectile.id);
            }
            in_range
        });
        expired
    }

    pub fn remove(&mut self, id: ProjectileId) -> Option<Projectile> {
        let index = self.live.iter().position(|projectile| projectile.id == id)?;
        Some(self.live.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.live.iter().find(|projectile| projectile.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Projectile> {
        self.live.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    // Ids keep counting up so stale visuals never match a new projectile.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

// ============================================================================
// Projectiles System
// ============================================================================

pub fn projectiles_system(
    time: Res<Time>,
    config: Res<SimConfig>,
    player: Res<Player>,
    mut projectiles: ResMut<Projectiles>,
) {
    if projectiles.is_empty() {
        return;
    }

    let expired = projectiles.advance(
        time.delta_secs(),
        player.position,
        config.projectile_speed,
        config.projectile_max_range,
    );
    if !expired.is_empty() {
        trace!("{} projectile(s) out of range", expired.len());
    }
}
