//! PensionGuardian wordmark

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    pub fn class(&self) -> &'static str {
        match self {
            LogoSize::Small => "logo logo-sm",
            LogoSize::Medium => "logo logo-md",
            LogoSize::Large => "logo logo-lg",
        }
    }
}

/// Shield glyph followed by the two-tone product name
#[component]
pub fn Logo(
    #[props(default)] size: LogoSize,
    #[props(default = true)] text_visible: bool,
) -> Element {
    rsx! {
        div { class: "{size.class()}",
            span { class: "logo-shield", "aria-hidden": "true", "\u{1F6E1}" }
            if text_visible {
                span { class: "logo-text",
                    span { class: "logo-primary", "Pension" }
                    span { class: "logo-secondary", "Guardian" }
                }
            }
        }
    }
}
