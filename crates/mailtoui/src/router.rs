//! Event routing
//!
//! Maps raw UI events to exactly one controller transition. Routing only
//! reads the host; executing the resulting [`Command`] is up to the caller.

use mailtoui_a11y::KeyPress;

use crate::registry::DialogRegistry;
use crate::template::suffix;
use crate::{LinkId, LinkIndex, Options, UiHost};

/// Raw events delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent<N> {
    /// Activation (click/tap) on `target`
    Click { target: N },
    KeyDown(KeyPress),
}

/// Transition requested by an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<N> {
    Open(LinkId),
    Close,
    Escape,
    ClientChosen,
    OutsideClick(N),
    Tab(KeyPress),
    Copy(LinkId),
}

/// Stateless adapter from events to commands
#[derive(Debug, Clone)]
pub struct EventRouter {
    client_class: String,
    close_class: String,
    copy_button_class: String,
    backdrop_class: String,
}

impl EventRouter {
    pub fn new(options: &Options) -> Self {
        Self {
            client_class: options.prefix(suffix::CLIENT),
            close_class: options.prefix(suffix::CLOSE),
            copy_button_class: options.prefix(suffix::COPY_BUTTON),
            backdrop_class: options.prefix(suffix::MODAL),
        }
    }

    pub fn route<H: UiHost>(
        &self,
        host: &H,
        links: &LinkIndex<H::Node>,
        registry: &DialogRegistry<H::Node>,
        event: &UiEvent<H::Node>,
    ) -> Option<Command<H::Node>> {
        match event {
            UiEvent::Click { target } => self.route_click(host, links, registry, *target),
            UiEvent::KeyDown(key) if key.is_escape() => Some(Command::Escape),
            UiEvent::KeyDown(key) if key.is_tab() => Some(Command::Tab(key.clone())),
            UiEvent::KeyDown(_) => None,
        }
    }

    fn route_click<H: UiHost>(
        &self,
        host: &H,
        links: &LinkIndex<H::Node>,
        registry: &DialogRegistry<H::Node>,
        target: H::Node,
    ) -> Option<Command<H::Node>> {
        // Clicks often land on an element nested inside the anchor.
        if let Some(anchor) = host.closest_tag(target, "a") {
            if let Some(descriptor) = links.by_node(anchor) {
                return Some(Command::Open(descriptor.id()));
            }
            if host.has_class(anchor, &self.client_class) {
                return Some(Command::ClientChosen);
            }
        }
        if host.closest_class(target, &self.close_class).is_some() {
            return Some(Command::Close);
        }
        if let Some(button) = host.closest_class(target, &self.copy_button_class) {
            return registry.link_for_element(host, button).map(Command::Copy);
        }
        if host.has_class(target, &self.backdrop_class) {
            return Some(Command::OutsideClick(target));
        }
        None
    }
}
