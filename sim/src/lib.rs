//! Headless simulation core for the target range.
//!
//! All game state lives in ECS resources, so a `World` is the simulation
//! context. A frame is these systems chained in order:
//!
//! ```text
//! delayed_tasks_system -> control_events_system -> locomotion_system
//!     -> projectiles_system -> collision_system
//! ```
//!
//! Register the `ControlEvent` and `SoundEffect` messages before calling
//! [`init_world`].

use bevy_ecs::prelude::*;

pub mod collision;
pub mod config;
pub mod constants;
pub mod input;
pub mod locomotion;
pub mod messages;
pub mod mission;
pub mod projectiles;
pub mod session;
pub mod target;
pub mod tasks;

pub use collision::collision_system;
pub use config::{SimConfig, TargetRng};
pub use input::InputState;
pub use locomotion::locomotion_system;
pub use messages::{ControlEvent, SoundEffect};
pub use projectiles::projectiles_system;
pub use session::control_events_system;
pub use tasks::delayed_tasks_system;

// Insert every simulation resource in its initial state.
pub fn init_world(world: &mut World, config: SimConfig, input: InputState, rng: TargetRng) {
    world.insert_resource(config);
    world.insert_resource(input);
    world.insert_resource(rng);
    world.init_resource::<session::GameSession>();
    world.init_resource::<locomotion::Player>();
    world.init_resource::<projectiles::Projectiles>();
    world.init_resource::<target::Target>();
    world.init_resource::<mission::MissionText>();
    world.init_resource::<tasks::DelayedTasks>();
}
