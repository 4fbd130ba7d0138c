use bevy::prelude::*;
use std::collections::HashMap;

use sim::{SoundEffect, input::Action, projectiles::ProjectileId};

// ============================================================================
// Asset Handles
// ============================================================================

// Sound effect handles, loaded once at startup
#[derive(Resource)]
pub struct SoundAssets {
    pub shoot: Handle<AudioSource>,
    pub hit: Handle<AudioSource>,
}

impl SoundAssets {
    #[must_use]
    pub fn handle(&self, effect: SoundEffect) -> Handle<AudioSource> {
        match effect {
            SoundEffect::Shoot => self.shoot.clone(),
            SoundEffect::Hit => self.hit.clone(),
        }
    }
}

// Shared meshes and materials for simulation visuals
#[derive(Resource)]
pub struct VisualAssets {
    pub projectile_mesh: Handle<Mesh>,
    pub projectile_material: Handle<StandardMaterial>,
    pub target_mesh: Handle<Mesh>,
    pub target_material: Handle<StandardMaterial>,
}

// ============================================================================
// Visual Bookkeeping
// ============================================================================

// Projectile id -> sphere entity currently drawn for it
#[derive(Resource, Default)]
pub struct ProjectileVisuals(pub HashMap<ProjectileId, Entity>);

// Cube entity drawn for the alive target
#[derive(Resource, Default)]
pub struct TargetVisual(pub Option<Entity>);

// Sound effect -> entity playing the most recent instance of it
#[derive(Resource, Default)]
pub struct ActiveSounds(pub HashMap<SoundEffect, Entity>);

// ============================================================================
// Camera Look
// ============================================================================

// Accumulated mouse look. Yaw 0 looks down -Z.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    // Unit view direction, pitch included
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

// ============================================================================
// Menu State
// ============================================================================

// Rebind flow in the start menu: captures one key per action in order
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebindFlow {
    step: Option<usize>,
}

impl RebindFlow {
    pub const fn begin(&mut self) {
        self.step = Some(0);
    }

    pub const fn cancel(&mut self) {
        self.step = None;
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.step.is_some()
    }

    // Action waiting for a key, if the flow is running
    #[must_use]
    pub fn current(&self) -> Option<Action> {
        self.step.and_then(|step| Action::ALL.get(step).copied())
    }

    // Move to the next action; the flow ends after the last one
    pub fn advance(&mut self) {
        self.step = self
            .step
            .map(|step| step + 1)
            .filter(|step| *step < Action::ALL.len());
    }
}
