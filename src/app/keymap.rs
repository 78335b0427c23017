use super::action::Action;
use super::persistence;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
        }
    }
}

impl KeyConfig {
    /// Load the key profile from `~/.config/halfsheet/keys.toml`, silently
    /// falling back to the default profile.
    pub fn load() -> Self {
        let Some(path) = persistence::keys_config_path() else {
            return Self::default();
        };
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str::<Self>(&content) {
                return config;
            }
        }
        Self::default()
    }
}

#[derive(Debug)]
pub struct KeyMap {
    // Normal-mode bindings. Edit mode is handled directly in input mapping
    // because almost every key there is text.
    pub normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut normal = HashMap::new();

        normal.insert(key(KeyCode::Down), Action::FocusNext);
        normal.insert(key(KeyCode::Up), Action::FocusPrev);
        normal.insert(key(KeyCode::Tab), Action::FocusNext);
        normal.insert(key(KeyCode::BackTab), Action::FocusPrev);
        normal.insert(key(KeyCode::Home), Action::FocusFirst);
        normal.insert(key(KeyCode::End), Action::FocusLast);
        normal.insert(key(KeyCode::Enter), Action::StartEdit);
        normal.insert(key(KeyCode::Delete), Action::ClearField);
        normal.insert(ch('?'), Action::ToggleHelp);
        normal.insert(key(KeyCode::Esc), Action::CancelMode);

        // Digit keys toggle the shortcut buttons of the focused row.
        for (i, c) in ('1'..='9').enumerate() {
            normal.insert(ch(c), Action::ToggleShortcut(i));
        }

        if config.profile != "plain" {
            // The default "vim" profile.
            normal.insert(ch('j'), Action::FocusNext);
            normal.insert(ch('k'), Action::FocusPrev);
            normal.insert(ch('g'), Action::FocusFirst);
            normal.insert(ch('G'), Action::FocusLast);
            normal.insert(ch('i'), Action::StartEdit);
            normal.insert(ch('a'), Action::StartEdit);
            normal.insert(ch('x'), Action::ClearField);
            normal.insert(ch('y'), Action::ToggleShareLink);
            normal.insert(ch('s'), Action::Save);
            normal.insert(ch('q'), Action::Quit);
        }

        Self { normal }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        if let Some(action) = self.normal.get(&event) {
            return Some(action.clone());
        }
        // Shifted characters arrive with the SHIFT modifier set on some
        // terminals; fall back to a modifier-less lookup for those.
        if let KeyCode::Char(c) = event.code {
            if event.modifiers == KeyModifiers::SHIFT {
                return self.normal.get(&ch(c)).cloned();
            }
        }
        None
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_shortcut_indices() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(ch('1')), Some(Action::ToggleShortcut(0)));
        assert_eq!(map.get_action(ch('5')), Some(Action::ToggleShortcut(4)));
    }

    #[test]
    fn letter_bindings_resolve_in_the_vim_profile() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(ch('j')), Some(Action::FocusNext));
        assert_eq!(map.get_action(ch('q')), Some(Action::Quit));
        assert_eq!(map.get_action(ch('?')), Some(Action::ToggleHelp));
    }

    #[test]
    fn plain_profile_drops_letter_bindings() {
        let map = KeyMap::from_config(&KeyConfig {
            profile: "plain".to_string(),
        });
        assert_eq!(map.get_action(ch('j')), None);
        assert_eq!(map.get_action(key(KeyCode::Down)), Some(Action::FocusNext));
    }

    #[test]
    fn shifted_char_falls_back_to_bare_lookup() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(map.get_action(shifted), Some(Action::FocusLast));
    }
}
