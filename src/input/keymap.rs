use std::collections::BTreeMap;

/// A logical key press delivered by the host window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Right arrow.
    Right,
    /// Left arrow.
    Left,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Any printable character.
    Char(char),
}

/// What the presenter should do in response to input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reveal the next build group or move to the next slide.
    Advance,
    /// Hide the last build group or move to the previous slide.
    Retreat,
    /// Go to the first slide.
    JumpToStart,
    /// Start capturing a jump target.
    BeginJump,
    /// Append a character to the jump buffer.
    JumpChar(char),
    /// Resolve the jump buffer and leave capture mode.
    ConfirmJump,
    /// Discard the jump buffer and leave capture mode.
    CancelJump,
    /// Go back to the position held before the last jump.
    ReturnToPrevious,
}

/// Key bindings for idle mode.
///
/// Jump capture mode is not configurable: `Enter` confirms, `Escape` cancels and every printable
/// character (space included) is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    idle: BTreeMap<Key, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::empty()
            .bind(Key::Right, Command::Advance)
            .bind(Key::Space, Command::Advance)
            .bind(Key::Left, Command::Retreat)
            .bind(Key::Char('z'), Command::JumpToStart)
            .bind(Key::Char('g'), Command::BeginJump)
            .bind(Key::Char('b'), Command::ReturnToPrevious)
    }
}

impl KeyMap {
    /// Map with no idle bindings.
    pub fn empty() -> Self {
        Self {
            idle: BTreeMap::new(),
        }
    }

    /// Bind `key` to `command` in idle mode, replacing any previous binding.
    pub fn bind(mut self, key: Key, command: Command) -> Self {
        self.idle.insert(key, command);
        self
    }

    /// Command for `key`, or `None` when the key does nothing in the current mode.
    pub fn resolve(&self, key: Key, capturing: bool) -> Option<Command> {
        if !capturing {
            return self.idle.get(&key).copied();
        }
        match key {
            Key::Enter => Some(Command::ConfirmJump),
            Key::Escape => Some(Command::CancelJump),
            Key::Space => Some(Command::JumpChar(' ')),
            Key::Char(c) => Some(Command::JumpChar(c)),
            Key::Right | Key::Left => None,
        }
    }
}

/// Parse a whitespace-separated key script such as `"right right g 1 2 enter"`.
///
/// `right`, `left`, `space`, `enter` and `esc` (or `escape`) name special keys, case-insensitively.
/// Any other token is typed one character at a time.
pub fn parse_keys(script: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    for token in script.split_whitespace() {
        let named = match token.to_ascii_lowercase().as_str() {
            "right" => Some(Key::Right),
            "left" => Some(Key::Left),
            "space" => Some(Key::Space),
            "enter" => Some(Key::Enter),
            "esc" | "escape" => Some(Key::Escape),
            _ => None,
        };
        match named {
            Some(key) => keys.push(key),
            None => keys.extend(token.chars().map(Key::Char)),
        }
    }
    keys
}

#[cfg(test)]
#[path = "../../tests/unit/input/keymap.rs"]
mod tests;
