//! ClassList
//!
//! Space-separated class tokens backing the `class` attribute.

/// Token list for the `class` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string
    pub fn parse(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Get number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token, ignoring duplicates and empty input
    pub fn add(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Remove a token
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    /// Get value as string
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedups() {
        let list = ClassList::parse("  mailtoui  mailtoui-client mailtoui ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "mailtoui mailtoui-client");
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        list.add("a");
        list.add("");
        list.add("b");
        list.remove("a");

        assert!(!list.contains("a"));
        assert!(list.contains("b"));
        assert_eq!(list.to_string(), "b");
    }
}
