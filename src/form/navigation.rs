//! Page navigation seam: full-page loads and history pops.

use std::cell::RefCell;
use tracing::info;

pub trait Navigator {
    /// Leaves the page for `href`.
    fn navigate_to(&self, href: &str);

    /// Pops one history entry; does nothing when there is none.
    fn back(&self);
}

/// Keeps an in-memory history stack instead of touching a browser. The CLI
/// reads the final destination from it and tests assert on it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent destination still on the stack.
    pub fn current(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, href: &str) {
        info!(href, "navigating");
        self.history.borrow_mut().push(href.to_string());
    }

    fn back(&self) {
        self.history.borrow_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_pops_one_entry() {
        let navigator = RecordingNavigator::new();
        navigator.navigate_to("/signup/");
        navigator.navigate_to("/dashboard/");

        navigator.back();

        assert_eq!(navigator.current(), Some("/signup/".to_string()));
    }

    #[test]
    fn back_on_empty_history_is_a_no_op() {
        let navigator = RecordingNavigator::new();
        navigator.back();
        assert_eq!(navigator.current(), None);
        assert!(navigator.history().is_empty());
    }
}
