//! Keybindings: command -> key strings, with parsing and display helpers

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bindable commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Add,
    RemoveLast,
    Increment,
    DismissWarning,
    SelectNext,
    SelectPrev,
    Quit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::RemoveLast,
        Command::Increment,
        Command::DismissWarning,
        Command::SelectNext,
        Command::SelectPrev,
        Command::Quit,
    ];

    /// Config-file name of the command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::RemoveLast => "remove_last",
            Command::Increment => "increment",
            Command::DismissWarning => "dismiss_warning",
            Command::SelectNext => "select_next",
            Command::SelectPrev => "select_prev",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key strings bound to each command
///
/// Serialises as a plain map, e.g. `{"add": ["a", "+"], "quit": ["q"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybindings {
    bindings: HashMap<Command, Vec<String>>,
}

impl Keybindings {
    /// Empty bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in bindings
    pub fn defaults() -> Self {
        let mut kb = Self::new();
        kb.bind(Command::Add, ["a", "+"]);
        kb.bind(Command::RemoveLast, ["r", "-", "backspace"]);
        kb.bind(Command::Increment, ["enter", "space"]);
        kb.bind(Command::DismissWarning, ["esc"]);
        kb.bind(Command::SelectNext, ["j", "down"]);
        kb.bind(Command::SelectPrev, ["k", "up"]);
        kb.bind(Command::Quit, ["q", "ctrl+c"]);
        kb
    }

    /// Replace the keys bound to `command`
    pub fn bind<I, S>(&mut self, command: Command, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bindings
            .insert(command, keys.into_iter().map(Into::into).collect());
    }

    /// Keys bound to `command`, in configured order
    pub fn keys(&self, command: Command) -> &[String] {
        self.bindings
            .get(&command)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First key bound to `command`, formatted for display
    pub fn display_key(&self, command: Command) -> Option<String> {
        self.keys(command)
            .first()
            .map(|key| format_key_for_display(key))
    }

    /// Command bound to `key`, if any
    pub fn get_command(&self, key: &KeyEvent) -> Option<Command> {
        // `validate` rejects keys shared between commands
        Command::ALL.into_iter().find(|command| {
            self.keys(*command)
                .iter()
                .filter_map(|s| parse_key_string(s))
                .any(|bound| keys_match(&bound, key))
        })
    }

    /// Overlay `user` onto `defaults`, command by command
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        for (command, keys) in user.bindings {
            defaults.bindings.insert(command, keys);
        }
        defaults
    }

    /// Reject key strings that do not parse and keys bound to two commands
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<(Command, KeyEvent)> = Vec::new();

        for command in Command::ALL {
            for key in self.keys(command) {
                let parsed = parse_key_string(key).ok_or_else(|| ConfigError::InvalidKey {
                    command: command.name().to_string(),
                    key: key.clone(),
                })?;

                if let Some((other, _)) = seen
                    .iter()
                    .find(|(other, bound)| *other != command && keys_match(bound, &parsed))
                {
                    return Err(ConfigError::DuplicateKey {
                        key: key.clone(),
                        first: other.name().to_string(),
                        second: command.name().to_string(),
                    });
                }
                seen.push((command, parsed));
            }
        }
        Ok(())
    }
}

/// Compare code and modifiers, ignoring kind and state
///
/// Shift is ignored for character keys since terminals disagree on whether
/// `+` arrives with it.
fn keys_match(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
    match (bound.code, pressed.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => {
            let strip = |m: KeyModifiers| m.difference(KeyModifiers::SHIFT);
            a.to_lowercase().eq(b.to_lowercase())
                && strip(bound.modifiers) == strip(pressed.modifiers)
        }
        (a, b) => a == b && bound.modifiers == pressed.modifiers,
    }
}

/// Parse a key string like "q", "esc", "ctrl+c", "space" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    // "+" alone is the plus key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) if !mods.is_empty() => (mods.trim_end_matches('+'), "+"),
        Some(("", "")) | None => ("", key_str.as_str()),
        Some((mods, key)) => (mods, key),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Format a key string for display ("ctrl+c" -> "^C", "esc" -> "Esc")
pub fn format_key_for_display(key_str: &str) -> String {
    let Some(key) = parse_key_string(key_str) else {
        return key_str.to_string();
    };

    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push('^');
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }

    match key.code {
        KeyCode::Char(' ') => out.push_str("Space"),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            out.extend(c.to_uppercase())
        }
        KeyCode::Char(c) => out.push(c),
        KeyCode::Esc => out.push_str("Esc"),
        KeyCode::Enter => out.push_str("Enter"),
        KeyCode::Tab => out.push_str("Tab"),
        KeyCode::Backspace => out.push_str("Bksp"),
        KeyCode::Delete => out.push_str("Del"),
        KeyCode::Up => out.push('↑'),
        KeyCode::Down => out.push('↓'),
        KeyCode::Left => out.push('←'),
        KeyCode::Right => out.push('→'),
        KeyCode::Home => out.push_str("Home"),
        KeyCode::End => out.push_str("End"),
        other => out.push_str(&format!("{:?}", other)),
    }
    out
}
