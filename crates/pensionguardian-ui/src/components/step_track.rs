//! Overall liveness step track
//!
//! A bar at the milestone of the current step with one label per step.

use dioxus::prelude::*;
use pensionguardian_core::LivenessStep;

use crate::components::ProgressBar;

#[component]
pub fn StepTrack(current: LivenessStep) -> Element {
    rsx! {
        div { class: "step-track",
            ProgressBar { value: current.milestone() }
            div { class: "step-track-labels",
                for step in LivenessStep::ALL {
                    span {
                        key: "{step}",
                        class: if step <= current { "step-label reached" } else { "step-label" },
                        "{step.track_label()}"
                    }
                }
            }
        }
    }
}
