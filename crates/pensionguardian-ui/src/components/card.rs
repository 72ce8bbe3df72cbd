//! Card container with optional header and footer.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub description: Option<String>,
    /// Extra content rendered at the right of the title row (badges)
    #[props(default)]
    pub header_aside: Option<Element>,
    pub children: Element,
    #[props(default)]
    pub footer: Option<Element>,
    /// Highlights the card border (used for due-soon warnings)
    #[props(default = false)]
    pub warn: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let mut class = String::from("card glass");
    if props.warn {
        class.push_str(" card-warn");
    }
    if let Some(extra) = props.class.as_deref().filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    let has_header = props.title.is_some() || props.description.is_some();

    rsx! {
        section { class: "{class}",
            if has_header {
                header { class: "card-header",
                    div { class: "card-title-row",
                        if let Some(title) = &props.title {
                            h3 { class: "card-title", "{title}" }
                        }
                        if let Some(aside) = &props.header_aside {
                            {aside.clone()}
                        }
                    }
                    if let Some(description) = &props.description {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {props.children} }
            if let Some(footer) = &props.footer {
                footer { class: "card-footer", {footer.clone()} }
            }
        }
    }
}

/// Compact figure card for the admin overview row
#[component]
pub fn StatCard(label: String, value: String, icon: String, tone: String) -> Element {
    rsx! {
        section { class: "card glass stat-card",
            p { class: "stat-label", "{label}" }
            div { class: "stat-row",
                span { class: "stat-value", "{value}" }
                span { class: "stat-icon {tone}", "{icon}" }
            }
        }
    }
}
