use bevy::{
    input::{
        ButtonState,
        keyboard::{Key, KeyboardInput},
    },
    prelude::*,
};

use crate::resources::RebindFlow;
use sim::{ControlEvent, session::GameSession};

// ============================================================================
// Key Identifiers
// ============================================================================

// Case-folded identifier for a logical key: the character itself for printable
// keys, a fixed lowercase name for the named keys that can be bound. Other keys
// have no identifier and cannot drive an action.
#[must_use]
pub fn key_identifier(key: &Key) -> Option<String> {
    if let Key::Character(text) = key {
        return sim::input::fold_key(text);
    }
    named_key_identifier(key).map(str::to_string)
}

fn named_key_identifier(key: &Key) -> Option<&'static str> {
    let name = match key {
        Key::ArrowUp => "arrowup",
        Key::ArrowDown => "arrowdown",
        Key::ArrowLeft => "arrowleft",
        Key::ArrowRight => "arrowright",
        Key::Space => "space",
        Key::Enter => "enter",
        Key::Tab => "tab",
        Key::Shift => "shift",
        Key::Control => "control",
        Key::Alt => "alt",
        Key::CapsLock => "capslock",
        Key::Backspace => "backspace",
        Key::Delete => "delete",
        Key::Insert => "insert",
        Key::Home => "home",
        Key::End => "end",
        Key::PageUp => "pageup",
        Key::PageDown => "pagedown",
        _ => return None,
    };
    Some(name)
}

// ============================================================================
// Gameplay Keyboard System
// ============================================================================

// Forward key presses and releases to the simulation once the game runs.
// The start menu owns the keyboard until then.
pub fn input_keyboard_system(
    mut keyboard_events: MessageReader<KeyboardInput>,
    session: Res<GameSession>,
    rebind_flow: Res<RebindFlow>,
    mut control: MessageWriter<ControlEvent>,
) {
    if !session.started || rebind_flow.is_active() {
        keyboard_events.clear();
        return;
    }

    for event in keyboard_events.read() {
        if event.repeat {
            continue;
        }
        let Some(key) = key_identifier(&event.logical_key) else {
            continue;
        };

        control.write(match event.state {
            ButtonState::Pressed => ControlEvent::KeyDown(key),
            ButtonState::Released => ControlEvent::KeyUp(key),
        });
    }
}
