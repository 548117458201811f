//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered attribute collection
///
/// Elements carry a handful of attributes, so lookups are linear scans
/// and insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attributes: Vec<Attr>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value.to_string()));
        }
        self.attributes.push(Attr::new(name, value));
        None
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
