//! ARIA Support
//!
//! Role names and state values written onto dialog markup.

/// ARIA roles used by the chooser dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Dialog,
    Button,
}

impl AriaRole {
    /// Attribute value for `role`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Button => "button",
        }
    }
}

/// Value for the `aria-hidden` attribute
pub fn aria_hidden_value(hidden: bool) -> &'static str {
    if hidden { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(AriaRole::Dialog.as_str(), "dialog");
        assert_eq!(AriaRole::Button.as_str(), "button");
    }

    #[test]
    fn test_hidden_value() {
        assert_eq!(aria_hidden_value(true), "true");
        assert_eq!(aria_hidden_value(false), "false");
    }
}
