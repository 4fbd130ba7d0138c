mod keys;
mod look;
mod menu;
mod shooting;
mod toggles;

pub use keys::{input_keyboard_system, key_identifier};
pub use look::{apply_mouse_delta, input_look_system};
pub use menu::input_menu_system;
pub use shooting::input_shooting_system;
pub use toggles::{input_reset_system, input_unlock_system};
