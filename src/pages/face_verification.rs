//! Face verification - a simulated capture-and-match step.
//!
//! The capture is always accepted: a progress bar runs while the photo is
//! "analyzed", a short settle delay marks success, and the page moves on to
//! the liveness check.

use dioxus::prelude::*;
use pensionguardian_core::{CaptureStatus, FaceCapture, Notification};
use pensionguardian_ui::{AnimatedContainer, AnimationDelay, Button, ButtonSize, ProgressBar};

use crate::app::Route;
use crate::components::{AuthLayout, Webcam};
use crate::context::{use_config, use_toaster};

const GUIDELINES: [&str; 4] = [
    "Ensure your face is clearly visible and well-lit",
    "Remove glasses, masks or any face coverings",
    "Face directly towards the camera",
    "Maintain a neutral expression",
];

#[component]
pub fn FaceVerification() -> Element {
    let config = use_config();
    let navigator = use_navigator();
    let mut toaster = use_toaster();

    let timings = config.timings.clone();
    let increment = timings.capture_increment;
    let mut capture = use_signal(move || FaceCapture::new(increment));

    let on_capture = move |_| {
        if capture.write().capture().is_err() {
            return;
        }
        let timings = timings.clone();
        spawn(async move {
            loop {
                tokio::time::sleep(timings.capture_tick()).await;
                if capture.write().tick() {
                    break;
                }
            }
            tokio::time::sleep(timings.capture_settle()).await;
            if capture.write().settle().is_err() {
                return;
            }
            toaster.push(Notification::face_verified());
            tokio::time::sleep(timings.capture_redirect()).await;
            tracing::info!("face verified, continuing to liveness check");
            navigator.push(Route::LivenessDetection {});
        });
    };

    let state = capture.read().clone();
    let status = state.status();
    let overlay = status.overlay().unwrap_or_default();

    rsx! {
        AuthLayout {
            title: "Face Verification",
            subtitle: "Please position your face within the frame for verification",

            div { class: "flow-stack",
                Webcam {
                    {match status {
                        CaptureStatus::Idle => rsx! {
                            div { class: "instruction-box",
                                p { "{overlay}" }
                            }
                        },
                        CaptureStatus::Processing | CaptureStatus::Analyzed => rsx! {
                            div { class: "instruction-box",
                                p { class: "instruction-lead", "{overlay}" }
                                ProgressBar { value: state.progress(), tone: "light" }
                            }
                        },
                        CaptureStatus::Verified => rsx! {
                            div { class: "instruction-box success",
                                span { "\u{2713}" }
                                p { "{overlay}" }
                            }
                        },
                    }}
                }

                AnimatedContainer { delay: AnimationDelay::Short, class: "flow-actions",
                    Button {
                        size: ButtonSize::Large,
                        disabled: !state.can_capture(),
                        onclick: on_capture,
                        span { "\u{1F4F7}" }
                        span { "Capture Photo" }
                    }
                }

                AnimatedContainer { delay: AnimationDelay::Medium, class: "guidelines",
                    h3 { "Guidelines for best results:" }
                    ul {
                        for line in GUIDELINES {
                            li { key: "{line}", "{line}" }
                        }
                    }
                }
            }
        }
    }
}
