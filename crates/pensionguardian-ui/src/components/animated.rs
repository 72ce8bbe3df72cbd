//! Fade-in wrapper with staggered delays.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AnimationDelay {
    #[default]
    None,
    Short,
    Medium,
    Long,
}

impl AnimationDelay {
    pub fn class(&self) -> &'static str {
        match self {
            AnimationDelay::None => "",
            AnimationDelay::Short => "delay-200",
            AnimationDelay::Medium => "delay-400",
            AnimationDelay::Long => "delay-600",
        }
    }
}

#[component]
pub fn AnimatedContainer(
    #[props(default)] delay: AnimationDelay,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let full_class = ["fade-in", delay.class(), class.as_deref().unwrap_or("")]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_classes() {
        assert_eq!(AnimationDelay::default().class(), "");
        assert_eq!(AnimationDelay::Medium.class(), "delay-400");
    }
}
