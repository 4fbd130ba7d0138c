use bevy::{input::mouse::MouseButton, prelude::*};

use sim::{ControlEvent, session::GameSession};

// ============================================================================
// Input Shooting System
// ============================================================================

// Left click fires once the game has started. A click while unlocked also
// recaptures the controls; the shot goes out either way.
pub fn input_shooting_system(
    mouse: Res<ButtonInput<MouseButton>>,
    session: Res<GameSession>,
    mut control: MessageWriter<ControlEvent>,
) {
    if !session.started || !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if !session.controls_locked {
        control.write(ControlEvent::SetControlsLocked(true));
    }
    control.write(ControlEvent::Fire);
}
