use bevy_ecs::prelude::*;
use tracing::{debug, warn};

use crate::constants::*;

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Self; 4] = [Self::Forward, Self::Backward, Self::Left, Self::Right];

    const fn index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "Move Forward",
            Self::Backward => "Move Backward",
            Self::Left => "Move Left",
            Self::Right => "Move Right",
        }
    }
}

// Case-fold a key identifier. Blank input yields None.
#[must_use]
pub fn fold_key(key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_lowercase())
    }
}

// ============================================================================
// Key Bindings
// ============================================================================

// One key identifier per action. Keys are stored case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings {
    forward: String,
    backward: String,
    left: String,
    right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: DEFAULT_KEY_FORWARD.to_string(),
            backward: DEFAULT_KEY_BACKWARD.to_string(),
            left: DEFAULT_KEY_LEFT.to_string(),
            right: DEFAULT_KEY_RIGHT.to_string(),
        }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn get(&self, action: Action) -> &str {
        match action {
            Action::Forward => &self.forward,
            Action::Backward => &self.backward,
            Action::Left => &self.left,
            Action::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut String {
        match action {
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
        }
    }

    // Actions bound to the given (already folded) key.
    pub fn actions_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Action> + 'a {
        Action::ALL.into_iter().filter(move |action| self.get(*action) == key)
    }

    // Pairs of actions that share a key.
    #[must_use]
    pub fn aliased_actions(&self) -> Vec<(Action, Action)> {
        let mut pairs = Vec::new();
        for (i, a) in Action::ALL.iter().enumerate() {
            for b in &Action::ALL[i + 1..] {
                if self.get(*a) == self.get(*b) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}

// ============================================================================
// Input State
// ============================================================================

// Held flags for each action plus the bindings that drive them.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    bindings: KeyBindings,
    held: [bool; 4],
}

impl InputState {
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: [false; 4],
        }
    }

    #[must_use]
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    #[must_use]
    pub fn binding(&self, action: Action) -> &str {
        self.bindings.get(action)
    }

    #[must_use]
    pub const fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn key_down(&mut self, key: &str) {
        self.set_held_for_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set_held_for_key(key, false);
    }

    // Every action bound to the key follows it, so aliased keys drive several actions.
    fn set_held_for_key(&mut self, key: &str, held: bool) {
        let Some(key) = fold_key(key) else {
            return;
        };
        let actions: Vec<Action> = self.bindings.actions_for(&key).collect();
        for action in actions {
            self.held[action.index()] = held;
        }
    }

    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    // Replace the binding for an action. Blank input keeps the current binding.
    // Returns true if the action ends up bound to the requested key.
    pub fn rebind(&mut self, action: Action, new_key: &str) -> bool {
        let Some(key) = fold_key(new_key) else {
            debug!("blank key for {:?}, keeping '{}'", action, self.binding(action));
            return false;
        };

        if self.bindings.get(action) == key {
            return true;
        }

        debug!("rebinding {:?}: '{}' -> '{}'", action, self.binding(action), key);
        *self.bindings.slot_mut(action) = key;
        // The old key may still be physically held
        self.held[action.index()] = false;

        for (a, b) in self.bindings.aliased_actions() {
            if a == action || b == action {
                warn!("{:?} and {:?} are both bound to '{}'", a, b, self.binding(action));
            }
        }
        true
    }

    // Apply up to four rebinds. None or blank entries are skipped.
    pub fn rebind_controls(
        &mut self,
        forward: Option<&str>,
        backward: Option<&str>,
        left: Option<&str>,
        right: Option<&str>,
    ) -> usize {
        let mut applied = 0;
        for (action, key) in Action::ALL.into_iter().zip([forward, backward, left, right]) {
            if let Some(key) = key
                && self.rebind(action, key)
            {
                applied += 1;
            }
        }
        applied
    }
}
