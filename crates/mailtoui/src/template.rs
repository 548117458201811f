//! Dialog markup
//!
//! Builds the chooser content for one link as an [`ElementSpec`]. Every
//! class and id is namespaced through [`Options::prefix`].

use mailtoui_a11y::AriaRole;
use mailtoui_dom::ElementSpec;
use urlencoding::encode;

use crate::scheme::ParsedFields;
use crate::{LinkDescriptor, LinkId, Options};

/// Class and id suffixes appended to the link class
pub mod suffix {
    pub const MODALS: &str = "-modals";
    pub const MODAL: &str = "-modal";
    pub const CONTENT: &str = "-modal-content";
    pub const HEAD: &str = "-modal-head";
    pub const TITLE: &str = "-modal-title";
    pub const CLOSE: &str = "-modal-close";
    pub const BODY: &str = "-modal-body";
    pub const CLIENTS: &str = "-clients";
    pub const CLIENT: &str = "-client";
    pub const LABEL: &str = "-label";
    pub const LABEL_ICON: &str = "-label-icon";
    pub const LABEL_TEXT: &str = "-label-text";
    pub const COPY: &str = "-copy";
    pub const COPY_BUTTON: &str = "-copy-button";
    pub const COPY_ADDRESS: &str = "-copy-email-address";
    pub const STYLE: &str = "-style";
}

pub const TITLE_TEXT: &str = "Compose new email";
pub const CLOSE_TEXT: &str = "\u{00D7}";
pub const CLIENT_ICON: &str = "\u{279A}";
pub const COPY_LABEL: &str = "Copy";

/// Mail destinations offered by every dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailClient {
    Gmail,
    Outlook,
    Yahoo,
    /// The platform's own mailto handler
    Default,
}

impl MailClient {
    pub const ALL: [MailClient; 4] = [Self::Gmail, Self::Outlook, Self::Yahoo, Self::Default];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gmail => "Gmail",
            Self::Outlook => "Outlook",
            Self::Yahoo => "Yahoo",
            Self::Default => "local email app",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Gmail => "gmail",
            Self::Outlook => "outlook",
            Self::Yahoo => "yahoo",
            Self::Default => "default",
        }
    }

    /// Web clients open in a new browsing context
    pub fn is_web(&self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Compose target carrying the address and fields
    pub fn compose_url(&self, fields: &ParsedFields) -> String {
        let to = encode(fields.address());
        let subject = encode(fields.subject());
        let cc = encode(fields.cc());
        let bcc = encode(fields.bcc());
        let body = encode(fields.body());
        match self {
            Self::Gmail => format!(
                "https://mail.google.com/mail/?view=cm&fs=1&to={to}&su={subject}&cc={cc}&bcc={bcc}&body={body}"
            ),
            Self::Outlook => format!(
                "https://outlook.office.com/owa/?path=/mail/action/compose&to={to}&subject={subject}&body={body}"
            ),
            Self::Yahoo => format!(
                "https://compose.mail.yahoo.com/?to={to}&subject={subject}&cc={cc}&bcc={bcc}&body={body}"
            ),
            Self::Default => format!("mailto:{to}?subject={subject}&cc={cc}&bcc={bcc}&body={body}"),
        }
    }
}

/// Element ids of one link's dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogIds {
    pub dialog: String,
    pub close: String,
    pub title: String,
    pub copy_button: String,
    pub copy_address: String,
    client_prefix: String,
}

impl DialogIds {
    pub fn new(options: &Options, link: LinkId) -> Self {
        Self {
            dialog: options.prefix(&format!("{}-{link}", suffix::MODAL)),
            close: options.prefix(&format!("{}-{link}", suffix::CLOSE)),
            title: options.prefix(&format!("{}-{link}", suffix::TITLE)),
            copy_button: options.prefix(&format!("{}-{link}", suffix::COPY_BUTTON)),
            copy_address: options.prefix(&format!("{}-{link}", suffix::COPY_ADDRESS)),
            client_prefix: options.prefix(&format!("{}-{link}", suffix::CLIENT)),
        }
    }

    pub fn client(&self, client: MailClient) -> String {
        format!("{}-{}", self.client_prefix, client.slug())
    }
}

fn client_choice(options: &Options, ids: &DialogIds, client: MailClient, fields: &ParsedFields) -> ElementSpec {
    let mut anchor = ElementSpec::new("a")
        .id(&ids.client(client))
        .class(&options.prefix(suffix::CLIENT))
        .attr("href", &client.compose_url(fields));
    if client.is_web() {
        anchor = anchor.attr("target", "_blank").attr("rel", "noopener");
    }
    anchor.child(
        ElementSpec::new("div")
            .class(&options.prefix(suffix::LABEL))
            .child(
                ElementSpec::new("span")
                    .class(&options.prefix(suffix::LABEL_ICON))
                    .attr("aria-hidden", "true")
                    .text(CLIENT_ICON),
            )
            .child(
                ElementSpec::new("span")
                    .class(&options.prefix(suffix::LABEL_TEXT))
                    .text(&format!("with {}", client.label())),
            ),
    )
}

fn copy_section(options: &Options, ids: &DialogIds, address: &str) -> ElementSpec {
    ElementSpec::new("div")
        .class(&options.prefix(suffix::COPY))
        .child(
            ElementSpec::new("button")
                .id(&ids.copy_button)
                .class(&options.prefix(suffix::COPY_BUTTON))
                .attr("type", "button")
                .text(COPY_LABEL),
        )
        .child(
            ElementSpec::new("input")
                .id(&ids.copy_address)
                .class(&options.prefix(suffix::COPY_ADDRESS))
                .attr("type", "text")
                .attr("value", address)
                .attr("aria-label", "Email address")
                .attr("readonly", ""),
        )
}

/// Chooser content for one link
///
/// The copy-address control is left out when the link has no address.
pub fn build_dialog(options: &Options, descriptor: &LinkDescriptor, fields: &ParsedFields) -> ElementSpec {
    let ids = DialogIds::new(options, descriptor.id());

    let head = ElementSpec::new("div")
        .class(&options.prefix(suffix::HEAD))
        .child(
            ElementSpec::new("span")
                .id(&ids.close)
                .class(&options.prefix(suffix::CLOSE))
                .attr("role", AriaRole::Button.as_str())
                .attr("tabindex", "0")
                .attr("aria-label", "Close")
                .text(CLOSE_TEXT),
        )
        .child(
            ElementSpec::new("span")
                .id(&ids.title)
                .class(&options.prefix(suffix::TITLE))
                .text(TITLE_TEXT),
        );

    let clients = ElementSpec::new("div")
        .class(&options.prefix(suffix::CLIENTS))
        .children_from(
            MailClient::ALL
                .iter()
                .map(|&client| client_choice(options, &ids, client, fields)),
        );

    let mut body = ElementSpec::new("div")
        .class(&options.prefix(suffix::BODY))
        .child(clients);
    if fields.has_address() {
        body = body.child(copy_section(options, &ids, fields.address()));
    }

    ElementSpec::new("div")
        .class(&options.prefix(suffix::CONTENT))
        .attr("role", AriaRole::Dialog.as_str())
        .attr("aria-modal", "true")
        .attr("aria-labelledby", &ids.title)
        .child(head)
        .child(body)
}
