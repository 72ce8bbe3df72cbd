//! Button Components
//!
//! Button styles used across the app:
//! - Primary: Main actions, filled
//! - Outline: Secondary actions and card footers
//! - Ghost: Sidebar items and icon buttons
//! - Link: Inline text actions ("Resend OTP")
//! - Success: Finished state ("Verification Complete")
//! - Danger: Logout

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Bordered, transparent background
    Outline,
    /// No border until hovered
    Ghost,
    /// Rendered as underlined text
    Link,
    /// Filled green
    Success,
    /// Red text, used for logout
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Link => "btn btn-link",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
    Small,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "",
            ButtonSize::Large => "btn-lg",
            ButtonSize::Small => "btn-sm",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Compose the class list for a button.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    let mut parts = vec![variant.class()];
    if !size.class().is_empty() {
        parts.push(size.class());
    }
    if full_width {
        parts.push("btn-block");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        parts.push(extra);
    }
    parts.join(" ")
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         size: ButtonSize::Large,
///         onclick: move |_| start(),
///         "Start Verification"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(
        props.variant,
        props.size,
        props.full_width,
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (row menus, password reveal)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
        assert_eq!(ButtonVariant::Link.class(), "btn btn-link");
        assert_eq!(ButtonVariant::Success.class(), "btn btn-success");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_composition() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Default, false, None),
            "btn btn-primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Large, true, Some("gap")),
            "btn btn-outline btn-lg btn-block gap"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Small, false, Some("")),
            "btn btn-ghost btn-sm"
        );
    }
}
