//! Focus Management
//!
//! Focusability rules and the cyclic focus trap used while a dialog is
//! open.

use crate::KeyPress;

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,    // tabindex="-1" or unparsable
    Sequential(i32), // tabindex="0" or positive
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// What the trap needs to know about one descendant of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCandidate<'a> {
    pub tag: &'a str,
    pub has_href: bool,
    pub disabled: bool,
    pub tab_index: Option<TabIndex>,
}

impl<'a> FocusCandidate<'a> {
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            has_href: false,
            disabled: false,
            tab_index: None,
        }
    }

    /// Link with a target, enabled input or button, or an explicit
    /// non-negative tab index.
    pub fn is_focusable(&self) -> bool {
        let by_tag = if self.tag.eq_ignore_ascii_case("a") {
            self.has_href
        } else if self.tag.eq_ignore_ascii_case("input") || self.tag.eq_ignore_ascii_case("button") {
            !self.disabled
        } else {
            false
        };
        by_tag || self.tab_index.is_some_and(|t| t.is_focusable())
    }
}

/// Outcome of a key press inside a trap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapAction<N> {
    /// Let the host perform its default traversal
    PassThrough,
    /// Cancel default traversal and focus this node
    Redirect(N),
}

/// Ordered focusable elements of one open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<N> {
    order: Vec<N>,
}

impl<N> Default for FocusTrap<N> {
    fn default() -> Self {
        Self { order: Vec::new() }
    }
}

impl<N: Copy + PartialEq> FocusTrap<N> {
    /// Keep the focusable candidates, preserving document order
    pub fn capture<'a>(candidates: impl IntoIterator<Item = (N, FocusCandidate<'a>)>) -> Self {
        Self {
            order: candidates
                .into_iter()
                .filter(|(_, candidate)| candidate.is_focusable())
                .map(|(node, _)| node)
                .collect(),
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first(&self) -> Option<N> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<N> {
        self.order.last().copied()
    }

    pub fn position(&self, node: N) -> Option<usize> {
        self.order.iter().position(|&n| n == node)
    }

    /// Confine Tab traversal to the trapped nodes
    ///
    /// Only the boundaries are handled: Shift+Tab on the first node goes
    /// to the last, Tab on the last goes to the first. Every other press,
    /// including one made while focus sits outside the trap, is left to
    /// the host.
    pub fn advance(&self, key: &KeyPress, current: Option<N>) -> TrapAction<N> {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return TrapAction::PassThrough;
        };
        if !key.is_tab() {
            return TrapAction::PassThrough;
        }

        match current.and_then(|node| self.position(node)) {
            Some(0) if key.shift => TrapAction::Redirect(last),
            Some(i) if !key.shift && i + 1 == self.order.len() => TrapAction::Redirect(first),
            _ => TrapAction::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trap(n: u32) -> FocusTrap<u32> {
        FocusTrap::capture((0..n).map(|id| (id, FocusCandidate::new("button"))))
    }

    /// Apply the trap, falling back to the host's sequential traversal.
    fn press(trap: &FocusTrap<u32>, key: &KeyPress, current: u32) -> u32 {
        match trap.advance(key, Some(current)) {
            TrapAction::Redirect(node) => node,
            TrapAction::PassThrough if key.shift => current - 1,
            TrapAction::PassThrough => current + 1,
        }
    }

    #[test]
    fn test_tab_index() {
        assert!(!TabIndex::parse("-1").is_focusable());
        assert!(TabIndex::parse("0").is_focusable());
        assert!(TabIndex::parse("5").is_focusable());
        assert!(!TabIndex::parse("abc").is_focusable());
    }

    #[test]
    fn test_candidate_rules() {
        let mut link = FocusCandidate::new("a");
        assert!(!link.is_focusable());
        link.has_href = true;
        assert!(link.is_focusable());

        let mut input = FocusCandidate::new("INPUT");
        assert!(input.is_focusable());
        input.disabled = true;
        assert!(!input.is_focusable());

        let mut span = FocusCandidate::new("span");
        assert!(!span.is_focusable());
        span.tab_index = Some(TabIndex::parse("0"));
        assert!(span.is_focusable());
        span.tab_index = Some(TabIndex::parse("-1"));
        assert!(!span.is_focusable());
    }

    #[test]
    fn test_capture_keeps_document_order() {
        let trap = FocusTrap::capture(vec![
            (1, FocusCandidate::new("div")),
            (2, FocusCandidate { has_href: true, ..FocusCandidate::new("a") }),
            (3, FocusCandidate::new("button")),
            (4, FocusCandidate { disabled: true, ..FocusCandidate::new("button") }),
        ]);
        assert_eq!(trap.nodes(), &[2, 3]);
    }

    #[test]
    fn test_empty_trap_passes_through() {
        let trap: FocusTrap<u32> = FocusTrap::default();
        assert_eq!(trap.advance(&KeyPress::tab(), Some(7)), TrapAction::PassThrough);
        assert_eq!(trap.advance(&KeyPress::tab().shift(), None), TrapAction::PassThrough);
    }

    #[test]
    fn test_non_tab_keys_pass_through() {
        let trap = trap(3);
        assert_eq!(trap.advance(&KeyPress::escape(), Some(2)), TrapAction::PassThrough);
    }

    #[test]
    fn test_single_element_wraps_to_itself() {
        let trap = trap(1);
        assert_eq!(trap.advance(&KeyPress::tab(), Some(0)), TrapAction::Redirect(0));
        assert_eq!(trap.advance(&KeyPress::tab().shift(), Some(0)), TrapAction::Redirect(0));
    }

    #[test]
    fn test_forward_cycle_visits_each_once() {
        for n in [2u32, 3, 7] {
            let trap = trap(n);
            let mut current = 0;
            let mut visited = vec![current];
            for _ in 0..n {
                current = press(&trap, &KeyPress::tab(), current);
                visited.push(current);
            }
            let expected: Vec<u32> = (0..n).chain(std::iter::once(0)).collect();
            assert_eq!(visited, expected, "forward cycle with {n} elements");
        }
    }

    #[test]
    fn test_backward_cycle_visits_each_once() {
        for n in [2u32, 3, 7] {
            let trap = trap(n);
            let mut current = 0;
            let mut visited = vec![current];
            for _ in 0..n {
                current = press(&trap, &KeyPress::tab().shift(), current);
                visited.push(current);
            }
            let expected: Vec<u32> = std::iter::once(0).chain((0..n).rev()).collect();
            assert_eq!(visited, expected, "backward cycle with {n} elements");
        }
    }

    #[test]
    fn test_focus_outside_trap_passes_through() {
        let trap = trap(3);
        assert_eq!(trap.advance(&KeyPress::tab(), Some(99)), TrapAction::PassThrough);
        assert_eq!(trap.advance(&KeyPress::tab().shift(), Some(99)), TrapAction::PassThrough);
        assert_eq!(trap.advance(&KeyPress::tab(), None), TrapAction::PassThrough);
        assert_eq!(trap.advance(&KeyPress::tab().shift(), None), TrapAction::PassThrough);
    }
}
