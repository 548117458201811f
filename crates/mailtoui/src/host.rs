//! Host UI capabilities
//!
//! The widget never touches a concrete UI toolkit. Everything it needs
//! from the page (element lookup, attributes, focus, mounting subtrees,
//! clipboard) goes through [`UiHost`].

use std::fmt::Debug;
use std::hash::Hash;

use mailtoui_dom::ElementSpec;

use crate::ClipboardError;

/// Capability interface over the host page
pub trait UiHost {
    /// Handle to an element in the host tree
    type Node: Copy + Eq + Hash + Debug;

    fn head(&self) -> Self::Node;

    fn body(&self) -> Self::Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Elements carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// Elements with tag `tag`, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node>;

    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Set an attribute, returning the previous value
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Option<String>;

    /// Remove an attribute, returning the previous value
    fn remove_attribute(&mut self, node: Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Element children, in order
    fn element_children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Element descendants in document order, `node` excluded
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Build `spec` under `parent`, before `before` or appended when `None`
    fn mount(&mut self, parent: Self::Node, before: Option<Self::Node>, spec: &ElementSpec) -> Self::Node;

    fn text(&self, node: Self::Node) -> String;

    fn set_text(&mut self, node: Self::Node, text: &str);

    fn active_element(&self) -> Option<Self::Node>;

    fn focus(&mut self, node: Self::Node);

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Nearest inclusive ancestor with tag `tag`
    fn closest_tag(&self, node: Self::Node, tag: &str) -> Option<Self::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.tag_name(n).is_some_and(|t| t.eq_ignore_ascii_case(tag)) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Nearest inclusive ancestor carrying `class`
    fn closest_class(&self, node: Self::Node, class: &str) -> Option<Self::Node> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.has_class(n, class) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// First child element of `node`
    fn first_element_child(&self, node: Self::Node) -> Option<Self::Node> {
        self.element_children(node).into_iter().next()
    }
}
