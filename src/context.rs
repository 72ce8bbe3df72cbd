//! Shared context for PensionGuardian pages.
//!
//! Provides the loaded configuration and the toast queue to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let mut toaster = use_toaster();
//! toaster.push(Notification::logged_out());
//! ```

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use pensionguardian_core::{GuardianConfig, Notification};

/// A toast on screen, with the time it was raised
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub raised_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.raised_at) >= ttl
    }
}

/// Handle to the app-wide toast queue.
///
/// Lives in the App component so toasts raised right before a navigation
/// outlive the page that raised them.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new(toasts: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { toasts, next_id }
    }

    pub fn push(&mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        tracing::debug!(title = %notification.title, "toast");
        self.toasts.write().push(Toast {
            id,
            notification,
            raised_at: Instant::now(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    /// Drop every toast older than `ttl`.
    pub fn expire(&mut self, ttl: Duration) {
        let now = Instant::now();
        let any_expired = self.toasts.peek().iter().any(|t| t.is_expired(now, ttl));
        if any_expired {
            self.toasts.write().retain(|t| !t.is_expired(now, ttl));
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }
}

/// Hook to access the configuration from context.
pub fn use_config() -> GuardianConfig {
    use_context::<GuardianConfig>()
}

/// Hook to access the toast queue from context.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let raised_at = Instant::now();
        let toast = Toast {
            id: 0,
            notification: Notification::logged_out(),
            raised_at,
        };
        let ttl = Duration::from_millis(5000);
        assert!(!toast.is_expired(raised_at, ttl));
        assert!(!toast.is_expired(raised_at + Duration::from_millis(4999), ttl));
        assert!(toast.is_expired(raised_at + ttl, ttl));
    }
}
