use bevy::{prelude::*, window::WindowFocused};

use crate::resources::LookAngles;
use sim::{ControlEvent, session::GameSession};

// ============================================================================
// Input Toggle Systems
// ============================================================================

// Escape releases the controls, and so does losing window focus
pub fn input_unlock_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut focus_events: MessageReader<WindowFocused>,
    session: Res<GameSession>,
    mut control: MessageWriter<ControlEvent>,
) {
    let focus_lost = focus_events.read().any(|event| !event.focused);
    if session.controls_locked && (focus_lost || keyboard.just_pressed(KeyCode::Escape)) {
        control.write(ControlEvent::SetControlsLocked(false));
    }
}

// F5 drops the running game and returns to the start menu
pub fn input_reset_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Res<GameSession>,
    mut look: ResMut<LookAngles>,
    mut control: MessageWriter<ControlEvent>,
) {
    if session.started && keyboard.just_pressed(KeyCode::F5) {
        *look = LookAngles::default();
        control.write(ControlEvent::Reset);
    }
}
