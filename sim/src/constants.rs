// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons in tests and guards.
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_SPEED: f32 = 10.0; // units per second
pub const PLAYER_EYE_HEIGHT: f32 = 2.0; // camera height above the ground plane

// ============================================================================
// Projectiles
// ============================================================================

pub const PROJECTILE_SPEED: f32 = 50.0; // units per second
pub const PROJECTILE_MAX_RANGE: f32 = 100.0; // distance from the player before expiry
pub const PROJECTILE_RADIUS: f32 = 0.1; // half-extent of the projectile bounding box

// ============================================================================
// Target
// ============================================================================

pub const TARGET_SIZE: f32 = 1.0; // cube edge length
pub const TARGET_HEIGHT: f32 = 0.5; // centre height, so the cube rests on the ground
pub const TARGET_SPREAD_X: f32 = 10.0; // max sideways offset from the player
pub const TARGET_MIN_DISTANCE: f32 = 10.0; // min distance in front of the player (-Z)
pub const TARGET_MAX_DISTANCE: f32 = 20.0; // max distance in front of the player (-Z)
pub const TARGET_RESPAWN_DELAY: f32 = 2.0; // seconds

// ============================================================================
// Mission Text
// ============================================================================

pub const MISSION_TEXT_DURATION: f32 = 3.0; // seconds
pub const MAX_TIMER_DELAY: f32 = 3600.0; // seconds, upper bound for configured delays
pub const MISSION_START_TEXT: &str = "Mission 1: Eliminate the target!";
pub const MISSION_COMPLETE_TEXT: &str = "Target Eliminated! New Mission...";

// ============================================================================
// Default Key Bindings
// ============================================================================

pub const DEFAULT_KEY_FORWARD: &str = "w";
pub const DEFAULT_KEY_BACKWARD: &str = "s";
pub const DEFAULT_KEY_LEFT: &str = "a";
pub const DEFAULT_KEY_RIGHT: &str = "d";
