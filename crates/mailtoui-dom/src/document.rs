//! Document - High-level document API

use crate::{DomTree, ElementSpec, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding keyboard focus
    active_element: Option<NodeId>,
}

impl Document {
    /// Create a new document with html/head/body
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            active_element: None,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .find(|&node| self.tree.element(node).and_then(|e| e.id()) == Some(id))
    }

    /// Get elements carrying a class, in document order
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&node| self.tree.element(node).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Get elements by tag name, in document order
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.elements()
            .filter(|&node| self.tree.element(node).is_some_and(|e| e.is(tag)))
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter(move |&node| self.tree.element(node).is_some())
    }

    /// Build `spec` and insert it under `parent` before `before`
    /// ([`NodeId::NONE`] appends). Returns the subtree root.
    pub fn mount(&mut self, parent: NodeId, before: NodeId, spec: &ElementSpec) -> NodeId {
        let root = self.build(spec);
        self.tree.insert_before(parent, root, before);
        tracing::trace!("Mounted <{}> under node {}", spec.tag(), parent.index());
        root
    }

    fn build(&mut self, spec: &ElementSpec) -> NodeId {
        let node = self.tree.create_element(spec.tag());
        for (name, value) in spec.attributes() {
            self.tree.set_attribute(node, name, value);
        }
        if let Some(text) = spec.text_content() {
            let text = self.tree.create_text(text);
            self.tree.append_child(node, text);
        }
        for child in spec.children() {
            let child = self.build(child);
            self.tree.append_child(node, child);
        }
        node
    }

    /// Currently focused element
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
    }

    /// Move focus to an element
    pub fn focus(&mut self, id: NodeId) {
        if self.tree.element(id).is_some() {
            self.active_element = Some(id);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
