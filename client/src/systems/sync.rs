use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};
use std::collections::HashSet;

use crate::{
    markers::{MainCameraMarker, ProjectileMarker, TargetMarker},
    resources::{LookAngles, ProjectileVisuals, TargetVisual, VisualAssets},
};
use sim::{locomotion::Player, projectiles::Projectiles, session::GameSession, target::Target};

// ============================================================================
// Sync Systems
// ============================================================================

// Camera sits at the player's eye and looks along the mouse-look angles
pub fn sync_camera_system(
    player: Res<Player>,
    look: Res<LookAngles>,
    mut camera: Single<&mut Transform, With<MainCameraMarker>>,
) {
    camera.translation = player.position;
    camera.rotation = look.rotation();
}

// Reconcile projectile spheres with the simulation by id: move survivors,
// spawn new ones, despawn those the simulation dropped.
pub fn sync_projectiles_system(
    mut commands: Commands,
    projectiles: Res<Projectiles>,
    assets: Res<VisualAssets>,
    mut visuals: ResMut<ProjectileVisuals>,
    mut transforms: Query<&mut Transform, With<ProjectileMarker>>,
) {
    let mut live = HashSet::with_capacity(projectiles.len());

    for projectile in projectiles.iter() {
        live.insert(projectile.id);

        if let Some(&entity) = visuals.0.get(&projectile.id)
            && let Ok(mut transform) = transforms.get_mut(entity)
        {
            transform.translation = projectile.position;
            continue;
        }

        let entity = commands
            .spawn((
                Mesh3d(assets.projectile_mesh.clone()),
                MeshMaterial3d(assets.projectile_material.clone()),
                Transform::from_translation(projectile.position),
                ProjectileMarker,
            ))
            .id();
        visuals.0.insert(projectile.id, entity);
    }

    visuals.0.retain(|id, entity| {
        let keep = live.contains(id);
        if !keep {
            commands.entity(*entity).despawn();
        }
        keep
    });
}

// Show the cube while the target is alive, remove it while it is absent
pub fn sync_target_system(
    mut commands: Commands,
    target: Res<Target>,
    assets: Res<VisualAssets>,
    mut visual: ResMut<TargetVisual>,
    mut transforms: Query<&mut Transform, With<TargetMarker>>,
) {
    match (target.position(), visual.0) {
        (Some(position), Some(entity)) => {
            if let Ok(mut transform) = transforms.get_mut(entity) {
                transform.translation = position;
            }
        }
        (Some(position), None) => {
            let entity = commands
                .spawn((
                    Mesh3d(assets.target_mesh.clone()),
                    MeshMaterial3d(assets.target_material.clone()),
                    Transform::from_translation(position),
                    TargetMarker,
                ))
                .id();
            visual.0 = Some(entity);
        }
        (None, Some(entity)) => {
            commands.entity(entity).despawn();
            visual.0 = None;
        }
        (None, None) => {}
    }
}

// Hide and grab the cursor exactly while the controls are locked
pub fn sync_cursor_system(session: Res<GameSession>, mut cursor_options: Single<&mut CursorOptions>) {
    if !session.is_changed() {
        return;
    }

    let locked = session.controls_locked;
    cursor_options.visible = !locked;
    cursor_options.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
}
