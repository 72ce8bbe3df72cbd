//! Landing page - entry point with the pensioner and admin logins.

use dioxus::prelude::*;
use pensionguardian_ui::{
    button_class, AnimatedContainer, AnimationDelay, ButtonSize, ButtonVariant, Logo, LogoSize,
};

use crate::app::Route;

/// One of the three feature tiles under the hero
struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "\u{1F6E1}",
        title: "Secure Authentication",
        body: "Multi-layer security with Aadhaar and biometric verification.",
    },
    Feature {
        icon: "\u{1F464}",
        title: "Liveness Detection",
        body: "Advanced technology to ensure genuine user verification.",
    },
    Feature {
        icon: "\u{1F4C4}",
        title: "Pension Management",
        body: "Efficient tracking and management of pension disbursements.",
    },
];

#[component]
pub fn Landing() -> Element {
    let primary = button_class(ButtonVariant::Primary, ButtonSize::Large, true, None);
    let outline = button_class(ButtonVariant::Outline, ButtonSize::Large, true, None);

    rsx! {
        main { class: "landing",
            div { class: "page-backdrop" }

            AnimatedContainer { class: "landing-logo",
                Logo { size: LogoSize::Large }
            }

            AnimatedContainer { delay: AnimationDelay::Short, class: "landing-hero",
                h1 { class: "hero-title",
                    span { class: "hero-line", "Secure Pension" }
                    span { class: "hero-line gradient-text", "Verification System" }
                }
                p { class: "hero-tagline",
                    "A modern, secure system for pension verification and management with advanced biometric authentication."
                }
            }

            AnimatedContainer { delay: AnimationDelay::Medium, class: "landing-actions",
                Link { class: "{primary}", to: Route::Login {},
                    span { "\u{1F464}" }
                    span { "Pensioner Login" }
                    span { class: "btn-trailing", "\u{2192}" }
                }
                Link { class: "{outline}", to: Route::AdminLogin {},
                    span { "\u{1F6E1}" }
                    span { "Admin Login" }
                }
            }

            AnimatedContainer { delay: AnimationDelay::Long, class: "feature-grid",
                for feature in FEATURES.iter() {
                    div { key: "{feature.title}", class: "glass card-hover feature-tile",
                        div { class: "feature-icon", "{feature.icon}" }
                        h3 { class: "feature-title", "{feature.title}" }
                        p { class: "feature-body", "{feature.body}" }
                    }
                }
            }
        }
    }
}
