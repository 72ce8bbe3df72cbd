//! Toast region
//!
//! Stacks notifications in the bottom-right corner and expires them after
//! the configured time to live.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::{use_config, use_toaster};

const EXPIRY_POLL: Duration = Duration::from_millis(250);

#[component]
pub fn ToastRegion() -> Element {
    let config = use_config();
    let mut toaster = use_toaster();
    let ttl = config.timings.toast_ttl();

    use_future(move || async move {
        loop {
            tokio::time::sleep(EXPIRY_POLL).await;
            toaster.expire(ttl);
        }
    });

    let toasts = toaster.toasts();

    rsx! {
        ol { class: "toast-region", "aria-live": "polite",
            for toast in toasts.read().iter().cloned() {
                li {
                    key: "{toast.id}",
                    class: if toast.notification.is_destructive() { "toast destructive" } else { "toast" },
                    role: "status",
                    div { class: "toast-body",
                        p { class: "toast-title", "{toast.notification.title}" }
                        p { class: "toast-description", "{toast.notification.description}" }
                    }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
