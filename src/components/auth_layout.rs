//! Centered card layout for the login and verification flows.

use dioxus::prelude::*;
use pensionguardian_ui::{AnimatedContainer, AnimationDelay, Logo, LogoSize};

#[derive(Props, Clone, PartialEq)]
pub struct AuthLayoutProps {
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    pub children: Element,
}

#[component]
pub fn AuthLayout(props: AuthLayoutProps) -> Element {
    rsx! {
        div { class: "auth-page",
            div { class: "page-backdrop" }

            AnimatedContainer { class: "auth-logo",
                Logo { size: LogoSize::Large }
            }

            section { class: "card glass auth-card",
                AnimatedContainer { class: "auth-heading",
                    h1 { class: "auth-title", "{props.title}" }
                    if let Some(subtitle) = &props.subtitle {
                        p { class: "auth-subtitle", "{subtitle}" }
                    }
                }

                AnimatedContainer { delay: AnimationDelay::Short,
                    {props.children}
                }
            }
        }
    }
}
