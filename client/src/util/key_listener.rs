//! Window-level cancel-key subscription scoped to the open panel.
//!
//! DESIGN
//! ======
//! The widget acquires the subscription when the panel opens and releases it
//! when the panel closes or the widget unmounts, so no keydown handler is
//! registered while the panel is hidden. Outside the browser only the
//! bookkeeping runs.

#[cfg(test)]
#[path = "key_listener_test.rs"]
mod key_listener_test;

use std::fmt;

#[cfg(feature = "hydrate")]
use leptos::prelude::WindowListenerHandle;

/// Holds at most one live window `keydown` listener.
#[derive(Default)]
pub struct CancelKeySubscription {
    active: bool,
    #[cfg(feature = "hydrate")]
    handle: Option<WindowListenerHandle>,
}

impl fmt::Debug for CancelKeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelKeySubscription").field("active", &self.active).finish_non_exhaustive()
    }
}

impl CancelKeySubscription {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start listening; `on_cancel` runs on every cancel key press until
    /// [`CancelKeySubscription::release`]. Acquiring twice keeps the first
    /// listener.
    pub fn acquire(&mut self, on_cancel: impl Fn() + 'static) {
        if self.active {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let handle = leptos::prelude::window_event_listener(leptos::ev::keydown, move |ev| {
                if super::keys::is_cancel_key(&ev.key()) {
                    on_cancel();
                }
            });
            self.handle = Some(handle);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_cancel;
        }
        self.active = true;
    }

    /// Stop listening. No-op when nothing is registered.
    pub fn release(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
        self.active = false;
    }
}
