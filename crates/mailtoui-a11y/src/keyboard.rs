//! Keyboard input
//!
//! Classifies key presses that matter to an open dialog.

/// Keys the dialog reacts to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    Escape,
    Other(String),
}

impl Key {
    /// Map a legacy `keyCode`
    pub fn from_code(code: u32) -> Self {
        match code {
            9 => Self::Tab,
            27 => Self::Escape,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A key press with the modifier the focus trap cares about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn from_key_code(code: u32, shift: bool) -> Self {
        Self { key: Key::from_code(code), shift }
    }

    pub fn tab() -> Self {
        Self::new(Key::Tab)
    }

    pub fn escape() -> Self {
        Self::new(Key::Escape)
    }

    pub fn is_tab(&self) -> bool {
        self.key == Key::Tab
    }

    pub fn is_escape(&self) -> bool {
        self.key == Key::Escape
    }

    pub fn display(&self) -> String {
        let key = match &self.key {
            Key::Tab => "Tab",
            Key::Escape => "Escape",
            Key::Other(name) => name.as_str(),
        };
        if self.shift { format!("Shift+{key}") } else { key.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert!(KeyPress::from_key_code(9, false).is_tab());
        assert!(KeyPress::from_key_code(27, false).is_escape());
        assert_eq!(KeyPress::from_key_code(13, false).key, Key::Other("13".into()));
        assert!(KeyPress::from_key_code(9, true).shift);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyPress::tab().shift().display(), "Shift+Tab");
        assert_eq!(KeyPress::escape().display(), "Escape");
    }
}
