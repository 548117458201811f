//! Modal controller
//!
//! Owns the single "which dialog is open" session and sequences the
//! open/close transitions: visibility, focus placement and restoration,
//! and `aria-hidden` signaling for the dialog and the page behind it.

use std::fmt::Debug;
use std::hash::Hash;

use mailtoui_a11y::{KeyPress, TrapAction, aria_hidden_value};

use crate::registry::{DialogRegistry, HIDDEN_STYLE, VISIBLE_STYLE};
use crate::{LinkId, LinkIndex, MailtoUiError, Options, Result, UiHost};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Idle,
    Open(LinkId),
}

/// Mutable session shared by the transitions
#[derive(Debug)]
pub struct ModalSession<N> {
    active: Option<LinkId>,
    restore_focus: Option<N>,
    /// Background elements hidden on open, with their previous
    /// `aria-hidden` value
    background: Vec<(N, Option<String>)>,
}

impl<N> Default for ModalSession<N> {
    fn default() -> Self {
        Self {
            active: None,
            restore_focus: None,
            background: Vec::new(),
        }
    }
}

impl<N: Copy> ModalSession<N> {
    pub fn state(&self) -> ModalState {
        match self.active {
            Some(link) => ModalState::Open(link),
            None => ModalState::Idle,
        }
    }

    pub fn active_dialog(&self) -> Option<LinkId> {
        self.active
    }

    /// Element that had focus before the open dialog was opened
    pub fn restore_focus_target(&self) -> Option<N> {
        self.restore_focus
    }
}

/// Open/close state machine over the dialog registry
#[derive(Debug)]
pub struct ModalController<N> {
    session: ModalSession<N>,
    registry: DialogRegistry<N>,
    options: Options,
}

impl<N: Copy + Eq + Hash + Debug> ModalController<N> {
    pub fn new(registry: DialogRegistry<N>, options: Options) -> Self {
        Self {
            session: ModalSession::default(),
            registry,
            options,
        }
    }

    pub fn state(&self) -> ModalState {
        self.session.state()
    }

    pub fn session(&self) -> &ModalSession<N> {
        &self.session
    }

    pub fn registry(&self) -> &DialogRegistry<N> {
        &self.registry
    }

    /// Root element of the open dialog
    pub fn active_element(&self) -> Option<N> {
        self.session
            .active
            .and_then(|link| self.registry.get(link))
            .map(|dialog| dialog.element())
    }

    /// Open the dialog for `link`
    ///
    /// Fails with [`MailtoUiError::DialogNotFound`] when the link was never
    /// discovered.
    pub fn open<H: UiHost<Node = N>>(&mut self, host: &mut H, links: &LinkIndex<N>, link: LinkId) -> Result<()> {
        let Some(descriptor) = links.descriptor(link) else {
            tracing::error!("Open requested for undiscovered link {}", link);
            return Err(MailtoUiError::DialogNotFound { link });
        };

        if let ModalState::Open(current) = self.state() {
            if current == link {
                return Ok(());
            }
            tracing::warn!("Dialog {} still open while opening {}", current, link);
            self.close(host);
        }

        self.session.restore_focus = host.active_element();

        let dialog = self.registry.ensure_dialog(host, &self.options, descriptor);
        let element = dialog.element();
        host.set_attribute(element, "style", VISIBLE_STYLE);
        dialog.capture_focus_order(host);
        let target = dialog.focus_trap().first().unwrap_or(element);
        host.focus(target);

        self.hide_background(host, element);
        host.set_attribute(element, "aria-hidden", aria_hidden_value(false));

        self.session.active = Some(link);
        tracing::debug!("Opened dialog for link {}", link);
        Ok(())
    }

    /// Close the open dialog; no-op when idle
    pub fn close<H: UiHost<Node = N>>(&mut self, host: &mut H) {
        let Some(link) = self.session.active.take() else {
            return;
        };

        if let Some(dialog) = self.registry.get(link) {
            let element = dialog.element();
            host.set_attribute(element, "aria-hidden", aria_hidden_value(true));
            self.restore_background(host);
            host.set_attribute(element, "style", HIDDEN_STYLE);
        } else {
            self.restore_background(host);
        }

        if let Some(target) = self.session.restore_focus.take() {
            host.focus(target);
        }
        tracing::debug!("Closed dialog for link {}", link);
    }

    /// Cancellation key
    pub fn escape<H: UiHost<Node = N>>(&mut self, host: &mut H) {
        self.close(host);
    }

    /// A client choice inside the open dialog was activated
    pub fn client_chosen<H: UiHost<Node = N>>(&mut self, host: &mut H) {
        if self.options.auto_close {
            self.close(host);
        }
    }

    /// Activation somewhere in the page; closes only on the backdrop itself
    pub fn outside_click<H: UiHost<Node = N>>(&mut self, host: &mut H, target: N) {
        if self.active_element() == Some(target) {
            self.close(host);
        }
    }

    /// Confine Tab traversal to the open dialog
    ///
    /// Returns `true` when default traversal must be cancelled.
    pub fn trap_tab<H: UiHost<Node = N>>(&mut self, host: &mut H, key: &KeyPress) -> bool {
        let Some(dialog) = self.session.active.and_then(|link| self.registry.get(link)) else {
            return false;
        };
        match dialog.focus_trap().advance(key, host.active_element()) {
            TrapAction::Redirect(target) => {
                host.focus(target);
                tracing::trace!("Wrapped focus ({})", key.display());
                true
            }
            TrapAction::PassThrough => false,
        }
    }

    fn hide_background<H: UiHost<Node = N>>(&mut self, host: &mut H, dialog: N) {
        let container = self.registry.container();
        let Some(parent) = host.parent(container) else {
            return;
        };
        for sibling in host.element_children(parent) {
            if sibling == container || sibling == dialog {
                continue;
            }
            let previous = host.set_attribute(sibling, "aria-hidden", aria_hidden_value(true));
            self.session.background.push((sibling, previous));
        }
    }

    fn restore_background<H: UiHost<Node = N>>(&mut self, host: &mut H) {
        for (node, previous) in self.session.background.drain(..) {
            match previous {
                Some(value) => host.set_attribute(node, "aria-hidden", &value),
                None => host.remove_attribute(node, "aria-hidden"),
            };
        }
    }
}
