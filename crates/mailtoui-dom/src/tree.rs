//! DOM Tree (arena-based allocation)

use crate::{ElementData, Node, NodeId};

/// Arena-based DOM tree
///
/// Nodes are never freed; detaching a node only unlinks it, so ids handed
/// out earlier stay valid for the lifetime of the tree.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_before(parent, child, NodeId::NONE);
    }

    /// Insert `child` under `parent` before `reference`
    ///
    /// A `reference` of [`NodeId::NONE`] (or one that is not a child of
    /// `parent`) appends.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        self.detach(child);

        let reference = match self.get(reference) {
            Some(node) if node.parent == parent => reference,
            _ => NodeId::NONE,
        };

        let prev = if reference.is_valid() {
            self.nodes[reference.0 as usize].prev_sibling
        } else {
            self.nodes[parent.0 as usize].last_child
        };

        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }

        if reference.is_valid() {
            self.nodes[reference.0 as usize].prev_sibling = child;
        } else {
            self.nodes[parent.0 as usize].last_child = child;
        }
    }

    /// Unlink a node from its parent
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Next sibling that is an element
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.get(id)?.next_sibling;
        while let Some(node) = self.get(current) {
            if node.is_element() {
                return Some(current);
            }
            current = node.next_sibling;
        }
        None
    }

    /// The node itself followed by its ancestors, nearest first
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |&current| self.parent(current))
    }

    /// Whether `node` is `ancestor` or lies beneath it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).any(|id| id == ancestor)
    }

    /// All descendants in document (pre-)order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let before = stack.len();
            stack.extend(self.children(current).map(|(child, _)| child));
            stack[before..].reverse();
        }
        out
    }

    /// Element data for a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Mutable element data for a node
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    /// Set an attribute, returning the previous value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Option<String> {
        self.element_mut(id).and_then(|e| e.set_attr(name, value))
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)
            .and_then(|e| e.attrs.remove(name))
            .map(|attr| attr.value)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|d| self.get(d).and_then(Node::as_text))
            .collect()
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            return;
        }
        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        for child in children {
            self.detach(child);
        }
        if !text.is_empty() {
            let node = self.create_text(text);
            self.append_child(id, node);
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
