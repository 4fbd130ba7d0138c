use bevy::prelude::{Color, Vec3};

// ============================================================================
// Client Constants
// ============================================================================

// Default log filter, overridable with --log-filter
pub const LOG_FILTER: &str = "wgpu=error,naga=warn";

pub const WINDOW_TITLE: &str = "Target Range";

// ============================================================================
// Camera Settings
// ============================================================================

pub const CAMERA_FOV_DEGREES: f32 = 75.0; // Vertical field of view
pub const CAMERA_NEAR: f32 = 0.1; // meters
pub const CAMERA_FAR: f32 = 1000.0; // meters

// Mouse sensitivity as radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// Keep the camera just short of looking straight up or down
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

// ============================================================================
// Scene Settings
// ============================================================================

pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922); // Light sky blue
pub const GROUND_SIZE: f32 = 200.0; // meters per side
pub const GROUND_COLOR: Color = Color::srgb(0.0, 0.5, 0.0);
pub const TARGET_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PROJECTILE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

pub const LIGHT_AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const LIGHT_DIRECTIONAL_BRIGHTNESS: f32 = 8000.0;
pub const LIGHT_DIRECTIONAL_POSITION: Vec3 = Vec3::new(10.0, 20.0, 0.0);

// ============================================================================
// Audio Settings
// ============================================================================

pub const SOUND_SHOOT: &str = "sounds/shoot.ogg";
pub const SOUND_HIT: &str = "sounds/hit.ogg";
pub const SOUND_VOLUME: f32 = 0.5; // Linear gain

// ============================================================================
// UI Settings
// ============================================================================

pub const MISSION_FONT_SIZE: f32 = 32.0;
pub const MENU_TITLE_FONT_SIZE: f32 = 40.0;
pub const MENU_FONT_SIZE: f32 = 20.0;
pub const CROSSHAIR_SIZE: f32 = 20.0; // pixels
pub const CROSSHAIR_THICKNESS: f32 = 2.0; // pixels
