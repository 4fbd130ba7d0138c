use bevy_math::{Vec3, bounding::IntersectsVolume};
use tracing::debug;

use crate::{
    config::SimConfig,
    projectiles::{ProjectileId, Projectiles},
    session::SimContext,
    target::{Target, target_volume},
};

// ============================================================================
// Hit Detection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: ProjectileId,
    pub target_position: Vec3,
}

// First projectile (newest first) whose box overlaps the target's box.
// Discrete test only: a projectile that moves further than the target's extent
// plus its own radius in one frame can pass through without a hit.
#[must_use]
pub fn find_hit(projectiles: &Projectiles, target: &Target, config: &SimConfig) -> Option<Hit> {
    let target_position = target.position()?;
    let target_box = target_volume(target_position, config.target_size);

    projectiles
        .iter()
        .rev()
        .find(|projectile| {
            projectile
                .bounding_volume(config.projectile_radius)
                .intersects(&target_box)
        })
        .map(|projectile| Hit {
            projectile: projectile.id,
            target_position,
        })
}

// ============================================================================
// Collision System
// ============================================================================

// At most one kill per frame: once the target is gone nothing else can hit.
pub fn resolve_collisions(ctx: &mut SimContext) -> Option<Hit> {
    let hit = find_hit(&ctx.projectiles, &ctx.target, &ctx.config)?;

    debug!("projectile {:?} hit target at {}", hit.projectile, hit.target_position);
    ctx.projectiles.remove(hit.projectile);
    ctx.eliminate_target();
    Some(hit)
}

pub fn collision_system(mut ctx: SimContext) {
    resolve_collisions(&mut ctx);
}
