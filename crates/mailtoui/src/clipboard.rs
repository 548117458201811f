//! Clipboard copy and its acknowledgement label

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::template::{COPY_LABEL, DialogIds};
use crate::{ClipboardError, LinkId, Options, UiHost};

/// Label shown after a successful copy
pub const COPIED_LABEL: &str = "Copied!";

/// How long [`COPIED_LABEL`] stays up
pub const COPIED_LABEL_DURATION: Duration = Duration::from_millis(600);

/// In-process clipboard for hosts without a platform one
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every subsequent write
    pub fn deny(&mut self) {
        self.denied = true;
    }

    pub fn allow(&mut self) {
        self.denied = false;
    }

    pub fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Denied);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

/// Pending label reverts, one per copy button
///
/// Purely cosmetic: nothing here reads or writes modal state.
#[derive(Debug)]
pub struct CopyFeedback<N> {
    pending: HashMap<LinkId, (N, Instant)>,
}

impl<N> Default for CopyFeedback<N> {
    fn default() -> Self {
        Self { pending: HashMap::new() }
    }
}

impl<N: Copy + Eq + Hash> CopyFeedback<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a dialog's address to the clipboard
    ///
    /// Returns whether the write succeeded. The acknowledgement label is
    /// only shown on success; a repeated copy restarts the revert timer.
    pub fn copy<H: UiHost<Node = N>>(&mut self, host: &mut H, options: &Options, link: LinkId, now: Instant) -> bool {
        let ids = DialogIds::new(options, link);
        let (Some(field), Some(button)) = (host.element_by_id(&ids.copy_address), host.element_by_id(&ids.copy_button))
        else {
            tracing::warn!("No copy control for link {}", link);
            return false;
        };
        let address = host.attribute(field, "value").unwrap_or_default().to_string();

        match host.write_clipboard(&address) {
            Ok(()) => {
                host.set_text(button, COPIED_LABEL);
                self.pending.insert(link, (button, now + COPIED_LABEL_DURATION));
                tracing::debug!("Copied address for link {}", link);
                true
            }
            Err(e) => {
                tracing::warn!("Copy failed for link {}: {}", link, e);
                false
            }
        }
    }

    /// Restore labels whose delay has elapsed
    pub fn tick<H: UiHost<Node = N>>(&mut self, host: &mut H, now: Instant) {
        self.pending.retain(|_, (button, deadline)| {
            if *deadline <= now {
                host.set_text(*button, COPY_LABEL);
                false
            } else {
                true
            }
        });
    }

    pub fn is_pending(&self, link: LinkId) -> bool {
        self.pending.contains_key(&link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Page;
    use crate::template::suffix;
    use mailtoui_dom::{ElementSpec, NodeId};

    fn page_with_copy_ui(address: &str) -> (Page, NodeId) {
        let mut page = Page::new();
        let ids = DialogIds::new(&Options::default(), LinkId(0));
        page.append_to_body(
            &ElementSpec::new("div")
                .class(&Options::default().prefix(suffix::COPY))
                .child(ElementSpec::new("button").id(&ids.copy_button).text(COPY_LABEL))
                .child(ElementSpec::new("input").id(&ids.copy_address).attr("value", address)),
        );
        let button = page.element_by_id(&ids.copy_button).unwrap();
        (page, button)
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write("a").unwrap();
        clipboard.deny();
        assert_eq!(clipboard.write("b"), Err(ClipboardError::Denied));
        assert_eq!(clipboard.contents(), Some("a"));
        clipboard.allow();
        assert!(clipboard.write("c").is_ok());
    }

    #[test]
    fn test_copy_sets_label_then_reverts() {
        let (mut page, button) = page_with_copy_ui("jane@example.com");
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();

        assert!(feedback.copy(&mut page, &Options::default(), LinkId(0), start));
        assert_eq!(page.clipboard.contents(), Some("jane@example.com"));
        assert_eq!(page.text(button), COPIED_LABEL);

        feedback.tick(&mut page, start + Duration::from_millis(599));
        assert_eq!(page.text(button), COPIED_LABEL);

        feedback.tick(&mut page, start + COPIED_LABEL_DURATION);
        assert_eq!(page.text(button), COPY_LABEL);
        assert!(!feedback.is_pending(LinkId(0)));
    }

    #[test]
    fn test_repeat_copy_restarts_timer() {
        let (mut page, button) = page_with_copy_ui("jane@example.com");
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();

        feedback.copy(&mut page, &Options::default(), LinkId(0), start);
        feedback.copy(&mut page, &Options::default(), LinkId(0), start + Duration::from_millis(400));
        feedback.tick(&mut page, start + Duration::from_millis(700));
        assert_eq!(page.text(button), COPIED_LABEL);

        feedback.tick(&mut page, start + Duration::from_millis(1000));
        assert_eq!(page.text(button), COPY_LABEL);
    }

    #[test]
    fn test_denied_copy_keeps_label() {
        let (mut page, button) = page_with_copy_ui("jane@example.com");
        page.clipboard.deny();
        let mut feedback = CopyFeedback::new();

        assert!(!feedback.copy(&mut page, &Options::default(), LinkId(0), Instant::now()));
        assert_eq!(page.text(button), COPY_LABEL);
        assert!(!feedback.is_pending(LinkId(0)));
    }

    #[test]
    fn test_missing_copy_ui() {
        let mut page = Page::new();
        let mut feedback: CopyFeedback<NodeId> = CopyFeedback::new();
        assert!(!feedback.copy(&mut page, &Options::default(), LinkId(3), Instant::now()));
        assert_eq!(page.clipboard.contents(), None);
    }
}
