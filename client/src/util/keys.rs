//! Keyboard bindings for the assistant widget.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter submits; Shift+Enter is left alone.
#[must_use]
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Escape closes the open panel.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    key == "Escape"
}
