//! MailtoUI
//!
//! Turns `mailto:` links into an accessible chooser dialog offering web
//! mail clients, the default mail app and a copy-address action.
//!
//! # Example
//! ```rust,ignore
//! use mailtoui::{MailtoUi, Page, UiEvent};
//!
//! let mut page = Page::new();
//! let mut ui = MailtoUi::start(&mut page);
//! let response = ui.handle_event(&mut page, &UiEvent::Click { target: link }, Instant::now())?;
//! ```

mod clipboard;
mod config;
mod controller;
mod error;
mod host;
mod links;
mod page;
mod registry;
mod router;
mod widget;
pub mod scheme;
pub mod style;
pub mod template;

pub use clipboard::{COPIED_LABEL, COPIED_LABEL_DURATION, CopyFeedback, MemoryClipboard};
pub use config::{DEFAULT_LINK_CLASS, OPTIONS_ATTRIBUTE, Options};
pub use controller::{ModalController, ModalSession, ModalState};
pub use error::{ClipboardError, ConfigError, MailtoUiError, Result};
pub use host::UiHost;
pub use links::{LinkDescriptor, LinkId, LinkIndex};
pub use page::Page;
pub use registry::{DialogRegistry, DialogState, HIDDEN_STYLE, VISIBLE_STYLE};
pub use router::{Command, EventRouter, UiEvent};
pub use scheme::ParsedFields;
pub use template::{DialogIds, MailClient};
pub use widget::{EventResponse, MailtoUi};

// Re-export sub-crates for hosts that drive the DOM directly
pub use mailtoui_a11y as a11y;
pub use mailtoui_dom as dom;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
