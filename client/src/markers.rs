use bevy::prelude::*;

// ============================================================================
// World Markers
// ============================================================================

// Marker component for the first-person camera
#[derive(Component)]
pub struct MainCameraMarker;

// Marker component for the target cube
#[derive(Component)]
pub struct TargetMarker;

// Marker component for projectile spheres
#[derive(Component)]
pub struct ProjectileMarker;

// ============================================================================
// UI Markers
// ============================================================================

// Marker component for the crosshair UI
#[derive(Component)]
pub struct CrosshairUIMarker;

// Marker component for the mission text
#[derive(Component)]
pub struct MissionTextUIMarker;

// Marker component for the start menu overlay
#[derive(Component)]
pub struct MenuUIMarker;

// Marker component for the controls list inside the menu
#[derive(Component)]
pub struct ControlsListUIMarker;

// Marker component for the rebind prompt inside the menu
#[derive(Component)]
pub struct RebindPromptUIMarker;
