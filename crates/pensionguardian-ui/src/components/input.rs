//! Form field components
//!
//! Labelled inputs with an inline error line, the search box and the select
//! used by the admin filters.

use dioxus::prelude::*;

/// Properties for the FormInput component
#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Label text above the field
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Maximum number of characters the field accepts
    #[props(default)]
    pub max_length: Option<usize>,
    /// Inline error shown under the field
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional trailing element inside the field (e.g. a reveal toggle)
    #[props(default)]
    pub trailing: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input with inline validation message
///
/// # Example
///
/// ```rust,ignore
/// let mut aadhaar = use_signal(String::new);
///
/// rsx! {
///     FormInput {
///         id: "aadhaar".to_string(),
///         label: "Aadhaar Number".to_string(),
///         value: aadhaar(),
///         oninput: move |s| aadhaar.set(s),
///         max_length: 12,
///         error: aadhaar_error(),
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let mut input_class = String::from("input-field");
    if props.error.is_some() {
        input_class.push_str(" invalid");
    }
    if !extra_class.is_empty() {
        input_class.push(' ');
        input_class.push_str(extra_class);
    }
    let max_length = props.max_length.map(|n| n.to_string());

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "input-wrapper",
                input {
                    id: "{props.id}",
                    class: "{input_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    maxlength: max_length,
                    disabled: props.disabled,
                    "aria-invalid": if props.error.is_some() { "true" } else { "false" },
                    oninput: move |e| props.oninput.call(e.value()),
                }
                if let Some(trailing) = &props.trailing {
                    div { class: "input-trailing", {trailing.clone()} }
                }
            }
            if let Some(error) = &props.error {
                p { class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// One entry of a [`Select`]
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub id: String,
    /// Currently selected value
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    /// Accessible name
    pub aria_label: String,
}

/// Native select styled like the input fields
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div { class: "select-wrapper",
            span { class: "select-icon", "\u{2AF6}" }
            select {
                id: "{props.id}",
                class: "input-field select",
                "aria-label": "{props.aria_label}",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_option_new() {
        let opt = SelectOption::new("civil services", "Civil Services");
        assert_eq!(opt.value, "civil services");
        assert_eq!(opt.label, "Civil Services");
    }
}
