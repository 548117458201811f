//! Qualifying link discovery

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::scheme::{self, ParsedFields};
use crate::{Options, UiHost};

/// Stable per-link identifier, assigned in discovery order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub u32);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view over one qualifying link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    id: LinkId,
    raw_scheme: String,
}

impl LinkDescriptor {
    /// Descriptor over an already stripped raw scheme, kept verbatim
    pub fn new(id: LinkId, raw_scheme: &str) -> Self {
        Self {
            id,
            raw_scheme: raw_scheme.to_string(),
        }
    }

    /// Capture a link from its `href`; one `mailto:` prefix is dropped
    pub fn from_href(id: LinkId, href: &str) -> Self {
        Self::new(id, scheme::strip_transport(href))
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Everything after the scheme prefix
    pub fn raw_scheme(&self) -> &str {
        &self.raw_scheme
    }

    pub fn parse_fields(&self) -> ParsedFields {
        ParsedFields::from_scheme(&self.raw_scheme)
    }
}

/// Every qualifying link on the page, fixed at start-up
#[derive(Debug)]
pub struct LinkIndex<N> {
    links: Vec<(N, LinkDescriptor)>,
    by_node: HashMap<N, usize>,
}

impl<N: Copy + Eq + Hash> LinkIndex<N> {
    /// Enumerate elements carrying the configured link class
    pub fn discover<H: UiHost<Node = N>>(host: &H, options: &Options) -> Self {
        let mut index = Self {
            links: Vec::new(),
            by_node: HashMap::new(),
        };
        for node in host.elements_by_class(&options.link_class) {
            let id = LinkId(index.links.len() as u32);
            let href = host.attribute(node, "href").unwrap_or_default();
            index.by_node.insert(node, index.links.len());
            index.links.push((node, LinkDescriptor::from_href(id, href)));
        }
        index
    }

    pub fn descriptor(&self, id: LinkId) -> Option<&LinkDescriptor> {
        self.links.get(id.0 as usize).map(|(_, d)| d)
    }

    pub fn by_node(&self, node: N) -> Option<&LinkDescriptor> {
        self.by_node.get(&node).and_then(|&i| self.links.get(i)).map(|(_, d)| d)
    }

    /// The link element for an id
    pub fn node(&self, id: LinkId) -> Option<N> {
        self.links.get(id.0 as usize).map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkDescriptor> {
        self.links.iter().map(|(_, d)| d)
    }
}
