use dioxus::prelude::*;
use pensionguardian_ui::{button_class, AnimatedContainer, AnimationDelay, ButtonSize, ButtonVariant, Logo};

use crate::app::Route;

/// The path that failed to match, as typed.
pub fn missing_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Catch-all for unmatched paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = missing_path(&segments);
    use_hook({
        let path = path.clone();
        move || tracing::warn!(%path, "no route matched")
    });
    let home = button_class(ButtonVariant::Primary, ButtonSize::Large, false, None);

    rsx! {
        main { class: "not-found",
            div { class: "page-backdrop" }

            AnimatedContainer { class: "auth-logo",
                Logo {}
            }

            AnimatedContainer { delay: AnimationDelay::Short, class: "not-found-body",
                div { class: "not-found-icon", "\u{26A0}" }
                h1 { class: "not-found-code", "404" }
                p { class: "not-found-text",
                    "The page you're looking for doesn't exist or has been moved."
                }
                p { class: "not-found-path", code { "{path}" } }
                Link { class: "{home}", to: Route::Landing {},
                    span { "\u{2190}" }
                    span { "Return to Home" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path() {
        assert_eq!(missing_path(&[]), "/");
        let segments = vec!["admin".to_string(), "settings".to_string()];
        assert_eq!(missing_path(&segments), "/admin/settings");
    }
}
