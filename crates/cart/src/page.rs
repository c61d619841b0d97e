//! The page seam.
//!
//! The widget never touches a real document; it writes through [`PageDom`]
//! into a fixed set of [`Hook`] regions the page is expected to expose.
//! Which element backs which hook is the adapter's business. Absence of a
//! hook (other than the tolerated optional ones, see [`Hook`]) is a page
//! setup error, not something the widget defends against - an adapter for a
//! broken page simply has nowhere to write.

use std::collections::{BTreeSet, HashMap};

/// Fixed hook points the surrounding page exposes to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hook {
    /// Badge element showing the item count.
    CartCount,
    /// Optional badge element showing the running subtotal; adapters for
    /// pages without it may ignore writes here.
    BadgeSubtotal,
    /// Container the modal item list is rendered into.
    CartItems,
    /// Modal summary: subtotal amount.
    Subtotal,
    /// Modal summary: shipping label.
    Shipping,
    /// Modal summary: order total.
    Total,
    /// The modal container; carries the open-state class.
    CartModal,
    /// The page body; carries the scroll-lock class while the modal is open.
    Body,
}

/// CSS state classes the widget toggles.
pub mod classes {
    /// Set on [`super::Hook::CartModal`] while the modal is open.
    pub const MODAL_OPEN: &str = "active";
    /// Set on [`super::Hook::Body`] to lock background scrolling.
    pub const SCROLL_LOCK: &str = "modal-open";
}

/// Write access to the page regions the widget renders into.
pub trait PageDom {
    /// Replace the text content of a hook element.
    fn set_text(&mut self, hook: Hook, text: &str);

    /// Replace the inner markup of a hook element.
    fn set_html(&mut self, hook: Hook, html: &str);

    /// Add or remove a CSS class on a hook element.
    fn set_class(&mut self, hook: Hook, class: &str, enabled: bool);

    /// Show a blocking user notice (the page's alert affordance).
    fn show_notice(&mut self, message: &str);
}

/// In-memory page for tests and the terminal demo.
///
/// Records every write so assertions can read back exactly what the widget
/// rendered, in the spirit of a headless document.
#[derive(Debug, Default)]
pub struct MemoryPage {
    text: HashMap<Hook, String>,
    html: HashMap<Hook, String>,
    classes: HashMap<Hook, BTreeSet<String>>,
    notices: Vec<String>,
}

impl MemoryPage {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written to a hook.
    #[must_use]
    pub fn text(&self, hook: Hook) -> Option<&str> {
        self.text.get(&hook).map(String::as_str)
    }

    /// Last markup written to a hook.
    #[must_use]
    pub fn html(&self, hook: Hook) -> Option<&str> {
        self.html.get(&hook).map(String::as_str)
    }

    /// Whether a class is currently present on a hook element.
    #[must_use]
    pub fn has_class(&self, hook: Hook, class: &str) -> bool {
        self.classes
            .get(&hook)
            .is_some_and(|set| set.contains(class))
    }

    /// All notices shown, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// The most recent notice, if any.
    #[must_use]
    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl PageDom for MemoryPage {
    fn set_text(&mut self, hook: Hook, text: &str) {
        self.text.insert(hook, text.to_string());
    }

    fn set_html(&mut self, hook: Hook, html: &str) {
        self.html.insert(hook, html.to_string());
    }

    fn set_class(&mut self, hook: Hook, class: &str, enabled: bool) {
        let set = self.classes.entry(hook).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
