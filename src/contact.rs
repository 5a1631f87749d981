//! Click-to-call and Instagram contact items.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::{INSTAGRAM_ICON_CLASS, PHONE_ICON_CLASS};
use crate::site::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Instagram,
    Other,
}

impl ContactKind {
    /// Classify an item by the class list of its icon element.
    #[must_use]
    pub fn from_icon_classes(classes: &str) -> Self {
        let mut tokens = classes.split_whitespace();
        if tokens.clone().any(|c| c == PHONE_ICON_CLASS) {
            Self::Phone
        } else if tokens.any(|c| c == INSTAGRAM_ICON_CLASS) {
            Self::Instagram
        } else {
            Self::Other
        }
    }

    /// Whether the item reacts to clicks and should show a pointer cursor.
    #[must_use]
    pub fn is_clickable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// `tel:` link for a displayed phone number. Spacing and punctuation are dropped.
#[must_use]
pub fn tel_href(number: &str) -> String {
    let dialable: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect();
    format!("tel:{dialable}")
}

/// Profile URL for a displayed handle such as `"@whiterose"`.
#[must_use]
pub fn instagram_url(base_url: &str, handle: &str) -> Option<String> {
    let handle: String = handle.chars().filter(|c| *c != '@' && !c.is_whitespace()).collect();
    if handle.is_empty() {
        return None;
    }
    Some(format!("{base_url}/{handle}"))
}

/// Decide what a click on a contact item does, given its kind and text.
#[must_use]
pub fn on_click(kind: ContactKind, text: &str, instagram_base_url: &str) -> Option<Action> {
    match kind {
        ContactKind::Phone => {
            let number = text.trim();
            if number.is_empty() {
                return None;
            }
            Some(Action::ConfirmCall { prompt: format!("Call {number}?"), href: tel_href(number) })
        }
        ContactKind::Instagram => instagram_url(instagram_base_url, text).map(|url| Action::OpenTab { url }),
        ContactKind::Other => None,
    }
}
