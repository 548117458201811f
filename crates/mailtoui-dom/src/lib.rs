//! MailtoUI DOM - Document Object Model
//!
//! Arena-backed DOM tree that plays the host page for the widget.
//! Elements are addressed by [`NodeId`]; subtrees are described with
//! [`ElementSpec`] and mounted in one step.

mod attributes;
mod classlist;
mod document;
mod fragment;
mod node;
mod tree;

pub use attributes::{Attr, Attributes};
pub use classlist::ClassList;
pub use document::Document;
pub use fragment::ElementSpec;
pub use node::{ElementData, Node, NodeData};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    pub fn index(self) -> u32 {
        self.0
    }
}
