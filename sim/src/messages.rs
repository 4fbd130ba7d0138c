use bevy_ecs::prelude::*;

use crate::input::Action;

// ============================================================================
// Messages Into the Simulation
// ============================================================================

// Host input translated into simulation terms. Drained at the start of each frame.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    KeyDown(String),
    KeyUp(String),
    Fire,
    StartGame,
    SetControlsLocked(bool),
    Rebind { action: Action, key: String },
    Reset,
}

// ============================================================================
// Messages Out of the Simulation
// ============================================================================

// Sound effect play requests. The sound service stops a playing instance of the
// same effect before starting it again.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Shoot,
    Hit,
}

impl SoundEffect {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shoot => "shoot",
            Self::Hit => "hit",
        }
    }
}
