//! Page - In-memory host backed by a [`Document`]

use mailtoui_dom::{Document, ElementSpec, NodeId};

use crate::{ClipboardError, MemoryClipboard, UiHost};

/// A page the widget can run against without a browser
#[derive(Debug, Default)]
pub struct Page {
    pub document: Document,
    pub clipboard: MemoryClipboard,
}

impl Page {
    /// Create a page with an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subtree to <body>
    pub fn append_to_body(&mut self, spec: &ElementSpec) -> NodeId {
        let body = self.document.body();
        self.document.mount(body, NodeId::NONE, spec)
    }

    /// Append a subtree to <head>
    pub fn append_to_head(&mut self, spec: &ElementSpec) -> NodeId {
        let head = self.document.head();
        self.document.mount(head, NodeId::NONE, spec)
    }
}

impl UiHost for Page {
    type Node = NodeId;

    fn head(&self) -> NodeId {
        self.document.head()
    }

    fn body(&self) -> NodeId {
        self.document.body()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document.get_elements_by_class_name(class)
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.document.get_elements_by_tag_name(tag)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.document.tree().element(node).map(|e| e.tag.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.document.tree().get_attribute(node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Option<String> {
        self.document.tree_mut().set_attribute(node, name, value)
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.document.tree_mut().remove_attribute(node, name)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.document.tree().element(node).is_some_and(|e| e.has_class(class))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.document.tree().parent(node)
    }

    fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.document
            .tree()
            .children(node)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect()
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let tree = self.document.tree();
        tree.descendants(node)
            .into_iter()
            .filter(|&id| tree.element(id).is_some())
            .collect()
    }

    fn mount(&mut self, parent: NodeId, before: Option<NodeId>, spec: &ElementSpec) -> NodeId {
        self.document.mount(parent, before.unwrap_or(NodeId::NONE), spec)
    }

    fn text(&self, node: NodeId) -> String {
        self.document.tree().text_content(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.document.tree_mut().set_text_content(node, text);
    }

    fn active_element(&self) -> Option<NodeId> {
        self.document.active_element()
    }

    fn focus(&mut self, node: NodeId) {
        self.document.focus(node);
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.write(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_helpers() {
        let mut page = Page::new();
        let link = page.append_to_body(
            &ElementSpec::new("a")
                .class("mailtoui")
                .attr("href", "mailto:a@b.c")
                .child(ElementSpec::new("span").class("inner")),
        );
        let span = page.descendants(link)[0];

        assert_eq!(page.closest_tag(span, "A"), Some(link));
        assert_eq!(page.closest_class(span, "mailtoui"), Some(link));
        assert_eq!(page.closest_class(span, "missing"), None);
        assert_eq!(page.first_element_child(link), Some(span));
    }

    #[test]
    fn test_mount_before_first_child() {
        let mut page = Page::new();
        let existing = page.append_to_body(&ElementSpec::new("main"));
        let body = page.body();
        let first = page.mount(body, page.first_element_child(body), &ElementSpec::new("div"));

        assert_eq!(page.element_children(body), vec![first, existing]);
    }
}
