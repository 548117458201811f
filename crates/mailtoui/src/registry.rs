//! Dialog registry
//!
//! One shared container per page, one dialog per qualifying link. Dialogs
//! are built on first need and never rebuilt.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use mailtoui_a11y::{FocusCandidate, FocusTrap, TabIndex, aria_hidden_value};
use mailtoui_dom::ElementSpec;

use crate::template::{self, DialogIds, suffix};
use crate::{LinkDescriptor, LinkId, Options, UiHost};

/// Inline style of a hidden dialog
pub const HIDDEN_STYLE: &str = "display: none;";
/// Inline style of a visible dialog
pub const VISIBLE_STYLE: &str = "display: block;";

/// A built dialog and the focus order captured at its latest open
#[derive(Debug)]
pub struct DialogState<N> {
    link: LinkId,
    element: N,
    focus_trap: FocusTrap<N>,
}

impl<N: Copy + Eq + Hash + Debug> DialogState<N> {
    pub fn link(&self) -> LinkId {
        self.link
    }

    /// Root (backdrop) element of the dialog
    pub fn element(&self) -> N {
        self.element
    }

    pub fn focus_trap(&self) -> &FocusTrap<N> {
        &self.focus_trap
    }

    /// Re-read focusable descendants from the host
    pub fn capture_focus_order<H: UiHost<Node = N>>(&mut self, host: &H) {
        let candidates: Vec<(N, FocusCandidate<'_>)> = host
            .descendants(self.element)
            .into_iter()
            .filter_map(|node| {
                let tag = host.tag_name(node)?;
                Some((
                    node,
                    FocusCandidate {
                        tag,
                        has_href: host.attribute(node, "href").is_some(),
                        disabled: host.attribute(node, "disabled").is_some(),
                        tab_index: host.attribute(node, "tabindex").map(TabIndex::parse),
                    },
                ))
            })
            .collect();
        self.focus_trap = FocusTrap::capture(candidates);
    }
}

/// Lazily built dialogs keyed by link
#[derive(Debug)]
pub struct DialogRegistry<N> {
    container: N,
    dialogs: HashMap<LinkId, DialogState<N>>,
}

impl<N: Copy + Eq + Hash + Debug> DialogRegistry<N> {
    /// Mount the shared container as the first child of <body>
    ///
    /// An existing container with the same id is reused.
    pub fn attach<H: UiHost<Node = N>>(host: &mut H, options: &Options) -> Self {
        let id = options.prefix(suffix::MODALS);
        let container = match host.element_by_id(&id) {
            Some(existing) => existing,
            None => {
                let body = host.body();
                let first = host.first_element_child(body);
                let spec = ElementSpec::new("div").id(&id).class(&options.prefix(suffix::MODALS));
                host.mount(body, first, &spec)
            }
        };
        Self {
            container,
            dialogs: HashMap::new(),
        }
    }

    pub fn container(&self) -> N {
        self.container
    }

    /// The dialog for `descriptor`, building it on first call
    pub fn ensure_dialog<H: UiHost<Node = N>>(
        &mut self,
        host: &mut H,
        options: &Options,
        descriptor: &LinkDescriptor,
    ) -> &mut DialogState<N> {
        let container = self.container;
        match self.dialogs.entry(descriptor.id()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let fields = descriptor.parse_fields();
                let ids = DialogIds::new(options, descriptor.id());
                let spec = ElementSpec::new("div")
                    .id(&ids.dialog)
                    .class(&options.prefix(suffix::MODAL))
                    .attr("style", HIDDEN_STYLE)
                    .attr("aria-hidden", aria_hidden_value(true))
                    .child(template::build_dialog(options, descriptor, &fields));
                let element = host.mount(container, None, &spec);
                tracing::debug!("Built dialog {} for link {}", ids.dialog, descriptor.id());
                entry.insert(DialogState {
                    link: descriptor.id(),
                    element,
                    focus_trap: FocusTrap::default(),
                })
            }
        }
    }

    pub fn get(&self, link: LinkId) -> Option<&DialogState<N>> {
        self.dialogs.get(&link)
    }

    pub fn is_built(&self, link: LinkId) -> bool {
        self.dialogs.contains_key(&link)
    }

    /// The link whose dialog contains `node`
    pub fn link_for_element<H: UiHost<Node = N>>(&self, host: &H, node: N) -> Option<LinkId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if let Some(dialog) = self.dialogs.values().find(|d| d.element == n) {
                return Some(dialog.link);
            }
            current = host.parent(n);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Page;
    use mailtoui_dom::NodeId;

    fn setup() -> (Page, DialogRegistry<NodeId>, Options) {
        let mut page = Page::new();
        page.append_to_body(&ElementSpec::new("main").text("content"));
        let options = Options::default();
        let registry = DialogRegistry::attach(&mut page, &options);
        (page, registry, options)
    }

    #[test]
    fn test_container_is_first_body_child() {
        let (mut page, registry, options) = setup();
        let body = page.body();
        assert_eq!(page.first_element_child(body), Some(registry.container()));

        let again = DialogRegistry::attach(&mut page, &options);
        assert_eq!(again.container(), registry.container());
        assert_eq!(page.elements_by_class("mailtoui-modals").len(), 1);
    }

    #[test]
    fn test_ensure_dialog_builds_once() {
        let (mut page, mut registry, options) = setup();
        let descriptor = LinkDescriptor::from_href(LinkId(0), "mailto:jane@example.com");

        let first = registry.ensure_dialog(&mut page, &options, &descriptor).element();
        let second = registry.ensure_dialog(&mut page, &options, &descriptor).element();

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(page.elements_by_class("mailtoui-modal").len(), 1);
        assert_eq!(page.parent(first), Some(registry.container()));
    }

    #[test]
    fn test_new_dialog_is_hidden() {
        let (mut page, mut registry, options) = setup();
        let descriptor = LinkDescriptor::from_href(LinkId(5), "mailto:jane@example.com");
        let element = registry.ensure_dialog(&mut page, &options, &descriptor).element();

        assert_eq!(page.element_by_id("mailtoui-modal-5"), Some(element));
        assert_eq!(page.attribute(element, "style"), Some(HIDDEN_STYLE));
        assert_eq!(page.attribute(element, "aria-hidden"), Some("true"));
    }

    #[test]
    fn test_capture_focus_order() {
        let (mut page, mut registry, options) = setup();
        let descriptor = LinkDescriptor::from_href(LinkId(0), "mailto:jane@example.com");
        let dialog = registry.ensure_dialog(&mut page, &options, &descriptor);
        assert!(dialog.focus_trap().is_empty());

        dialog.capture_focus_order(&page);
        let order: Vec<Option<&str>> = dialog
            .focus_trap()
            .nodes()
            .iter()
            .map(|&n| page.attribute(n, "id"))
            .collect();
        assert_eq!(
            order,
            vec![
                Some("mailtoui-modal-close-0"),
                Some("mailtoui-client-0-gmail"),
                Some("mailtoui-client-0-outlook"),
                Some("mailtoui-client-0-yahoo"),
                Some("mailtoui-client-0-default"),
                Some("mailtoui-copy-button-0"),
                Some("mailtoui-copy-email-address-0"),
            ]
        );
    }

    #[test]
    fn test_link_for_element() {
        let (mut page, mut registry, options) = setup();
        let descriptor = LinkDescriptor::from_href(LinkId(2), "mailto:jane@example.com");
        registry.ensure_dialog(&mut page, &options, &descriptor);

        let button = page.element_by_id("mailtoui-copy-button-2").unwrap();
        assert_eq!(registry.link_for_element(&page, button), Some(LinkId(2)));
        assert_eq!(registry.link_for_element(&page, page.body()), None);
    }
}
