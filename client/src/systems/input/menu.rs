use bevy::{
    input::{ButtonState, keyboard::KeyboardInput},
    prelude::*,
};

use super::keys::key_identifier;
use crate::resources::RebindFlow;
use sim::{ControlEvent, session::GameSession};

// ============================================================================
// Start Menu Input System
// ============================================================================

// Enter starts the game, C walks through the controls asking for a new key for
// each. While rebinding, Backspace keeps the current key and Escape stops.
pub fn input_menu_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut keyboard_events: MessageReader<KeyboardInput>,
    session: Res<GameSession>,
    mut rebind_flow: ResMut<RebindFlow>,
    mut control: MessageWriter<ControlEvent>,
) {
    if session.started {
        keyboard_events.clear();
        return;
    }

    if !rebind_flow.is_active() {
        keyboard_events.clear();
        if keyboard.just_pressed(KeyCode::Enter) {
            control.write(ControlEvent::StartGame);
        } else if keyboard.just_pressed(KeyCode::KeyC) {
            rebind_flow.begin();
        }
        return;
    }

    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed || event.repeat {
            continue;
        }
        let Some(action) = rebind_flow.current() else {
            break;
        };

        match event.key_code {
            KeyCode::Escape => {
                debug!("rebinding cancelled");
                rebind_flow.cancel();
            }
            KeyCode::Backspace => {
                debug!("keeping current key for {}", action.label());
                rebind_flow.advance();
            }
            _ => {
                let Some(key) = key_identifier(&event.logical_key) else {
                    continue;
                };
                control.write(ControlEvent::Rebind { action, key });
                rebind_flow.advance();
            }
        }
    }
}
