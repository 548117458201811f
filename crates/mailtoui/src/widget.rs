//! The assembled widget
//!
//! [`MailtoUi`] wires discovery, the dialog registry, the modal controller,
//! the event router and copy feedback together behind a single
//! `handle_event` entry point.

use std::time::Instant;

use crate::clipboard::CopyFeedback;
use crate::controller::{ModalController, ModalState};
use crate::registry::DialogRegistry;
use crate::router::{Command, EventRouter, UiEvent};
use crate::style::embed_stylesheet;
use crate::{LinkIndex, Options, Result, UiHost};

/// What the host should do with the native event after handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the host's default action (link navigation, focus move)
    pub prevent_default: bool,
}

impl EventResponse {
    fn prevent(prevent_default: bool) -> Self {
        Self { prevent_default }
    }
}

/// A running mailto chooser bound to one host page
#[derive(Debug)]
pub struct MailtoUi<N> {
    options: Options,
    links: LinkIndex<N>,
    controller: ModalController<N>,
    router: EventRouter,
    feedback: CopyFeedback<N>,
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> MailtoUi<N> {
    /// Start with options read from the page's last script tag
    pub fn start<H: UiHost<Node = N>>(host: &mut H) -> Self {
        let options = Options::from_script_tag(host);
        Self::start_with_options(host, options)
    }

    pub fn start_with_options<H: UiHost<Node = N>>(host: &mut H, options: Options) -> Self {
        embed_stylesheet(host, &options);
        let registry = DialogRegistry::attach(host, &options);
        let links = LinkIndex::discover(host, &options);

        tracing::info!(
            "MailtoUI started: {} link(s) with class '{}', auto close {}",
            links.len(),
            options.link_class,
            options.auto_close
        );

        Self {
            router: EventRouter::new(&options),
            controller: ModalController::new(registry, options.clone()),
            feedback: CopyFeedback::new(),
            links,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn links(&self) -> &LinkIndex<N> {
        &self.links
    }

    pub fn controller(&self) -> &ModalController<N> {
        &self.controller
    }

    pub fn state(&self) -> ModalState {
        self.controller.state()
    }

    pub fn feedback(&self) -> &CopyFeedback<N> {
        &self.feedback
    }

    /// Route and execute one host event
    pub fn handle_event<H: UiHost<Node = N>>(
        &mut self,
        host: &mut H,
        event: &UiEvent<N>,
        now: Instant,
    ) -> Result<EventResponse> {
        let Some(command) = self.router.route(host, &self.links, self.controller.registry(), event) else {
            return Ok(EventResponse::default());
        };
        tracing::trace!("Routed {:?} to {:?}", event, command);
        self.execute(host, command, now)
    }

    /// Run a command directly, bypassing routing
    pub fn execute<H: UiHost<Node = N>>(
        &mut self,
        host: &mut H,
        command: Command<N>,
        now: Instant,
    ) -> Result<EventResponse> {
        let prevent_default = match command {
            Command::Open(link) => {
                self.controller.open(host, &self.links, link)?;
                true
            }
            Command::Close => {
                self.controller.close(host);
                false
            }
            Command::Escape => {
                self.controller.escape(host);
                false
            }
            // Navigation to the client must proceed.
            Command::ClientChosen => {
                self.controller.client_chosen(host);
                false
            }
            Command::OutsideClick(target) => {
                self.controller.outside_click(host, target);
                false
            }
            Command::Tab(key) => self.controller.trap_tab(host, &key),
            Command::Copy(link) => {
                self.feedback.copy(host, &self.options, link, now);
                false
            }
        };
        Ok(EventResponse::prevent(prevent_default))
    }

    /// Advance timers (copy acknowledgement labels)
    pub fn tick<H: UiHost<Node = N>>(&mut self, host: &mut H, now: Instant) {
        self.feedback.tick(host, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkId, Page};
    use mailtoui_dom::{ElementSpec, NodeId};

    fn page_with_link(href: &str) -> (Page, NodeId) {
        let mut page = Page::new();
        let link = page.append_to_body(&ElementSpec::new("a").class("mailtoui").attr("href", href));
        (page, link)
    }

    #[test]
    fn test_start_prepares_page() {
        let (mut page, _) = page_with_link("mailto:a@b.c");
        let ui = MailtoUi::start(&mut page);
        assert_eq!(ui.links().len(), 1);
        assert!(page.element_by_id("mailtoui-style").is_some());
        assert!(page.element_by_id("mailtoui-modals").is_some());
        assert_eq!(ui.state(), ModalState::Idle);
        assert!(ui.controller().registry().is_empty());
    }

    #[test]
    fn test_click_link_prevents_navigation() {
        let (mut page, link) = page_with_link("mailto:a@b.c");
        let mut ui = MailtoUi::start(&mut page);
        let response = ui
            .handle_event(&mut page, &UiEvent::Click { target: link }, Instant::now())
            .unwrap();
        assert!(response.prevent_default);
        assert_eq!(ui.state(), ModalState::Open(LinkId(0)));
    }

    #[test]
    fn test_unrouted_event_is_ignored() {
        let (mut page, _) = page_with_link("mailto:a@b.c");
        let mut ui = MailtoUi::start(&mut page);
        let body = page.body();
        let response = ui
            .handle_event(&mut page, &UiEvent::Click { target: body }, Instant::now())
            .unwrap();
        assert_eq!(response, EventResponse::default());
    }

    #[test]
    fn test_execute_unknown_link_fails() {
        let (mut page, _) = page_with_link("mailto:a@b.c");
        let mut ui = MailtoUi::start(&mut page);
        let result = ui.execute(&mut page, Command::Open(LinkId(9)), Instant::now());
        assert!(result.is_err());
        assert_eq!(ui.state(), ModalState::Idle);
    }
}
