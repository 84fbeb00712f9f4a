//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub open_in_browser: Vec<String>,
    pub refresh: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            next_page: keys(&["n", "PageDown"]),
            prev_page: keys(&["p", "PageUp"]),
            open_in_browser: keys(&["Enter", "o"]),
            refresh: keys(&["R"]),
        }
    }
}

impl KeybindingConfig {
    /// Get the action for a key event. Earlier entries win on conflicts.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 7] = [
            (self.quit.as_slice(), Action::Quit),
            (self.move_up.as_slice(), Action::MoveUp),
            (self.move_down.as_slice(), Action::MoveDown),
            (self.next_page.as_slice(), Action::NextPage),
            (self.prev_page.as_slice(), Action::PrevPage),
            (self.open_in_browser.as_slice(), Action::OpenInBrowser),
            (self.refresh.as_slice(), Action::Refresh),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| matches_any(key, bindings))
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }
}

fn matches_any(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|binding| parse_key_string(binding).ok())
        .any(|parsed| parsed.matches(key))
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored on the event side so "R" matches Shift+R.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse "j", "PageDown", "Ctrl+c", "Ctrl+Shift+a" and the like.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let (modifier_part, key_part) = match s.rsplit_once('+') {
        // "+" on its own is a key, not a separator
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lower.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_char() {
        let binding = parse_key_string("j").unwrap();
        assert_eq!(binding.code, KeyCode::Char('j'));
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("pagedown").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_string("F1").unwrap().code, KeyCode::F(1));
        assert_eq!(parse_key_string("F12").unwrap().code, KeyCode::F(12));
        assert!(parse_key_string("F13").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert_eq!(binding.code, KeyCode::Char('c'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL);

        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(
            binding.modifiers,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        );

        assert!(parse_key_string("Hyper+a").is_err());
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = parse_key_string("+").unwrap();
        assert_eq!(binding.code, KeyCode::Char('+'));
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_keybinding_matches() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));

        let binding = parse_key_string("R").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_keybinding_config_get_action() {
        let config = KeybindingConfig::default();
        let action = |code, modifiers| config.get_action(&KeyEvent::new(code, modifiers));

        assert_eq!(action(KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit);
        assert_eq!(action(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(action(KeyCode::Char('j'), KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(action(KeyCode::Up, KeyModifiers::NONE), Action::MoveUp);
        assert_eq!(action(KeyCode::PageDown, KeyModifiers::NONE), Action::NextPage);
        assert_eq!(action(KeyCode::Enter, KeyModifiers::NONE), Action::OpenInBrowser);
        assert_eq!(action(KeyCode::Char('o'), KeyModifiers::NONE), Action::OpenInBrowser);
        assert_eq!(action(KeyCode::Char('R'), KeyModifiers::SHIFT), Action::Refresh);
        assert_eq!(action(KeyCode::Char('x'), KeyModifiers::NONE), Action::None);
    }
}
