use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeyBindings {
    /// Maps action → key string (e.g. `ResetCamera` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings =
            HashMap::from([(KeyAction::ResetCamera, "Space".into())]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

// The reverse map is a cache; equality is decided by the bindings alone.
impl PartialEq for KeyBindings {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeyBindings {}

impl KeyBindings {
    /// Bind `action` to `key`, replacing any previous key for it.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_resets_by_default() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("Space"), Some(KeyAction::ResetCamera));
        assert_eq!(keys.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_drops_the_old_key() {
        let mut keys = KeyBindings::default();
        keys.bind(KeyAction::ResetCamera, "KeyR");
        assert_eq!(keys.lookup("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(keys.lookup("Space"), None);
    }

    #[test]
    fn reverse_map_is_rebuilt_after_deserialize() {
        let mut keys: KeyBindings =
            toml::from_str("[bindings]\nreset_camera = \"Home\"\n").unwrap();
        assert_eq!(keys.lookup("Home"), None);
        keys.rebuild_reverse_map();
        assert_eq!(keys.lookup("Home"), Some(KeyAction::ResetCamera));
    }
}
