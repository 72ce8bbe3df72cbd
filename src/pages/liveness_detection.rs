//! Liveness detection
//!
//! Walks the pensioner through blink, mouth and head-turn checks. Each
//! recorded step is a timer loop driving the sequencer; finishing the last
//! one redirects to the dashboard after a short pause.

use dioxus::prelude::*;
use pensionguardian_core::{LivenessSequencer, LivenessStep};
use pensionguardian_ui::{
    AnimatedContainer, AnimationDelay, Button, ButtonSize, ButtonVariant, StepTrack,
};

use crate::app::Route;
use crate::components::{AuthLayout, Webcam};
use crate::context::{use_config, use_toaster};

fn step_icon(step: LivenessStep) -> &'static str {
    match step {
        LivenessStep::Intro => "\u{25B6}",
        LivenessStep::Blink => "\u{1F441}",
        LivenessStep::Mouth => "\u{1F4AC}",
        LivenessStep::Turn => "\u{21BB}",
        LivenessStep::Complete => "\u{2713}",
    }
}

/// Animation applied to the feed while a step is recording.
fn recording_animation(step: LivenessStep, recording: bool) -> Option<&'static str> {
    if !recording {
        return None;
    }
    match step {
        LivenessStep::Blink => Some("animate-blink"),
        LivenessStep::Mouth => Some("animate-mouth"),
        LivenessStep::Turn => Some("animate-head"),
        LivenessStep::Intro | LivenessStep::Complete => None,
    }
}

#[component]
pub fn LivenessDetection() -> Element {
    let config = use_config();
    let navigator = use_navigator();
    let mut toaster = use_toaster();

    let timings = config.timings.clone();
    let increment = timings.liveness_increment;
    let mut sequencer = use_signal(move || LivenessSequencer::new(increment));

    let tick = timings.liveness_tick();
    let redirect_delay = timings.redirect_delay();

    // One recording: tick until the sequencer reports the step advance.
    let record = move || {
        spawn(async move {
            let advance = loop {
                tokio::time::sleep(tick).await;
                let advanced = sequencer.write().tick();
                if let Some(advance) = advanced {
                    break advance;
                }
            };
            if let Some(notice) = advance.notice.clone() {
                toaster.push(notice);
            }
            if advance.reached_complete() {
                tokio::time::sleep(redirect_delay).await;
                tracing::info!("liveness complete, redirecting to dashboard");
                navigator.push(Route::Dashboard {});
            }
        });
    };

    let start = move |_| {
        let begun = sequencer.write().begin();
        match begun {
            Ok(()) => record(),
            Err(e) => tracing::debug!("{}", e),
        }
    };

    let resume = move |_| {
        let resumed = sequencer.write().resume();
        match resumed {
            Ok(()) => record(),
            Err(e) => tracing::debug!("{}", e),
        }
    };

    let state = sequencer.read().clone();
    let step = state.step();
    let recording = state.is_recording();

    rsx! {
        AuthLayout {
            title: "Liveness Detection",
            subtitle: "Let's verify that you're physically present",

            div { class: "flow-stack",
                AnimatedContainer {
                    StepTrack { current: step }
                }

                Webcam { video_class: recording_animation(step, recording).map(str::to_string),
                    div { class: "instruction-box",
                        div { class: "instruction-row",
                            span { class: "instruction-icon", "{step_icon(step)}" }
                            p { "{step.instruction()}" }
                        }
                        if recording {
                            div { class: "recording-track",
                                div {
                                    class: "recording-fill",
                                    style: "width: {state.progress()}%;",
                                }
                            }
                        }
                    }
                }

                AnimatedContainer { delay: AnimationDelay::Short, class: "flow-actions",
                    if step == LivenessStep::Intro {
                        Button { size: ButtonSize::Large, onclick: start,
                            span { "\u{25B6}" }
                            span { "Start Verification" }
                        }
                    }
                    if state.awaiting_resume() {
                        Button { size: ButtonSize::Large, onclick: resume,
                            span { "\u{27F3}" }
                            span { "Continue to Next Step" }
                        }
                    }
                    if step.is_terminal() {
                        Button {
                            variant: ButtonVariant::Success,
                            size: ButtonSize::Large,
                            disabled: true,
                            span { "\u{2713}" }
                            span { "Verification Complete" }
                        }
                    }
                }

                if let Some((title, body)) = step.detail() {
                    AnimatedContainer { delay: AnimationDelay::Medium, class: "guidelines",
                        h3 { "{title}" }
                        p { "{body}" }
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
    fn test_animation_only_while_recording() {
        assert_eq!(recording_animation(LivenessStep::Blink, true), Some("animate-blink"));
        assert_eq!(recording_animation(LivenessStep::Blink, false), None);
        assert_eq!(recording_animation(LivenessStep::Complete, true), None);
    }

    #[test]
    fn test_every_step_has_an_icon() {
        for step in LivenessStep::ALL {
            assert!(!step_icon(step).is_empty());
        }
    }
}
