use bevy::{input::mouse::MouseMotion, prelude::*};

use crate::{constants::*, resources::LookAngles};
use sim::{locomotion::Player, session::GameSession};

// ============================================================================
// Mouse Look System
// ============================================================================

// Turn the view with the mouse while controls are locked and hand the new view
// direction to the simulation as the player's facing.
pub fn input_look_system(
    mut mouse_motion: MessageReader<MouseMotion>,
    session: Res<GameSession>,
    mut look: ResMut<LookAngles>,
    mut player: ResMut<Player>,
) {
    if !session.controls_locked {
        // Drain pending mouse events so they don't jump the view on relock
        mouse_motion.clear();
        return;
    }

    let mut angles = *look;
    for motion in mouse_motion.read() {
        angles = apply_mouse_delta(angles, motion.delta);
    }

    if angles != *look {
        *look = angles;
    }
    let facing = look.facing();
    if player.facing != facing {
        player.facing = facing;
    }
}

#[must_use]
pub fn apply_mouse_delta(look: LookAngles, delta: Vec2) -> LookAngles {
    LookAngles {
        yaw: delta.x.mul_add(-MOUSE_SENSITIVITY, look.yaw),
        pitch: delta
            .y
            .mul_add(-MOUSE_SENSITIVITY, look.pitch)
            .clamp(-MAX_PITCH, MAX_PITCH),
    }
}
