//! MailtoUI Accessibility
//!
//! Focus and assistive-technology primitives for modal dialogs.
//! Nothing here knows about a concrete tree: node handles are generic.
//!
//! Features:
//! - Focusability rules (links, enabled controls, tab indices)
//! - Cyclic focus trap for an open dialog
//! - Key press classification for Tab/Escape handling
//! - ARIA role names and `aria-hidden` signal values

pub mod aria;
pub mod focus;
pub mod keyboard;

pub use aria::{AriaRole, aria_hidden_value};
pub use focus::{FocusCandidate, FocusTrap, TabIndex, TrapAction};
pub use keyboard::{Key, KeyPress};
