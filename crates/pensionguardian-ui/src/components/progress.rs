//! Progress bar

use dioxus::prelude::*;

/// Clamp a percentage into 0-100 for a `width` style.
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

/// Horizontal bar filled to `value` percent
///
/// `tone` is appended to the fill's class (e.g. "success", "warning",
/// "light" for the bar drawn over the camera feed).
#[component]
pub fn ProgressBar(
    value: u8,
    #[props(default)] tone: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let width = clamp_percent(value);
    let track_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("progress-track {}", extra),
        _ => "progress-track".to_string(),
    };
    let fill_class = match tone.as_deref() {
        Some(tone) if !tone.is_empty() => format!("progress-fill {}", tone),
        _ => "progress-fill".to_string(),
    };

    rsx! {
        div {
            class: "{track_class}",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width}",
            div { class: "{fill_class}", style: "width: {width}%;" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_hundred() {
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(42), 42);
        assert_eq!(clamp_percent(250), 100);
    }
}
