//! Liveness step sequencer.
//!
//! Drives the simulated anti-spoofing check through a fixed, linear order of
//! steps:
//!
//! ```text
//! Intro ──begin──▶ Blink ──(100%)──▶ Mouth ──resume..(100%)──▶ Turn ──resume..(100%)──▶ Complete
//! ```
//!
//! Only the user-triggered transitions (`begin`, `resume`) start recording;
//! the progress driver alone decides when a recorded step is finished. No
//! camera frames are inspected.

use std::fmt;

use crate::error::{GuardianError, GuardianResult};
use crate::notification::Notification;
use crate::progress::{ProgressDriver, Tick};

/// One stage of the liveness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LivenessStep {
    #[default]
    Intro,
    Blink,
    Mouth,
    Turn,
    Complete,
}

impl LivenessStep {
    /// All steps in visiting order.
    pub const ALL: [LivenessStep; 5] = [
        LivenessStep::Intro,
        LivenessStep::Blink,
        LivenessStep::Mouth,
        LivenessStep::Turn,
        LivenessStep::Complete,
    ];

    /// Successor in the fixed order; `Complete` has none.
    pub fn next(self) -> Option<LivenessStep> {
        match self {
            LivenessStep::Intro => Some(LivenessStep::Blink),
            LivenessStep::Blink => Some(LivenessStep::Mouth),
            LivenessStep::Mouth => Some(LivenessStep::Turn),
            LivenessStep::Turn => Some(LivenessStep::Complete),
            LivenessStep::Complete => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == LivenessStep::Complete
    }

    /// Steps that record a user action (blink, mouth, head turn).
    pub fn is_action(self) -> bool {
        matches!(
            self,
            LivenessStep::Blink | LivenessStep::Mouth | LivenessStep::Turn
        )
    }

    /// Label under the overall step track.
    pub fn track_label(self) -> &'static str {
        match self {
            LivenessStep::Intro => "Start",
            LivenessStep::Blink => "Blink",
            LivenessStep::Mouth => "Mouth",
            LivenessStep::Turn => "Turn",
            LivenessStep::Complete => "Complete",
        }
    }

    /// Overall track position, in percent.
    pub fn milestone(self) -> u8 {
        match self {
            LivenessStep::Intro => 0,
            LivenessStep::Blink => 25,
            LivenessStep::Mouth => 50,
            LivenessStep::Turn => 75,
            LivenessStep::Complete => 100,
        }
    }

    /// Instruction shown over the camera feed.
    pub fn instruction(self) -> &'static str {
        match self {
            LivenessStep::Intro => {
                "We'll verify you're physically present by checking three simple actions"
            }
            LivenessStep::Blink => "Please blink your eyes a few times naturally",
            LivenessStep::Mouth => "Please open and close your mouth slowly",
            LivenessStep::Turn => "Please turn your head slightly left and right",
            LivenessStep::Complete => {
                "All verifications complete! Proceeding to your dashboard..."
            }
        }
    }

    /// Heading and body of the explanation panel for action steps.
    pub fn detail(self) -> Option<(&'static str, &'static str)> {
        match self {
            LivenessStep::Blink => Some((
                "Blink Detection",
                "Please blink naturally a few times while facing the camera. This verifies eye movement.",
            )),
            LivenessStep::Mouth => Some((
                "Mouth Movement Detection",
                "Please open and close your mouth slowly. This verifies facial mobility.",
            )),
            LivenessStep::Turn => Some((
                "Head Movement Detection",
                "Please turn your head slightly to the left and right. This verifies head movement.",
            )),
            LivenessStep::Intro | LivenessStep::Complete => None,
        }
    }

    /// Notification raised when this step finishes recording.
    pub fn completion_notice(self) -> Option<Notification> {
        match self {
            LivenessStep::Blink => Some(Notification::new(
                "Blink detected",
                "Great! Now let's move to the next verification step.",
            )),
            LivenessStep::Mouth => Some(Notification::new(
                "Mouth movement verified",
                "Perfect! One last step to complete verification.",
            )),
            LivenessStep::Turn => Some(Notification::new(
                "All steps verified!",
                "Liveness verification completed successfully.",
            )),
            LivenessStep::Intro | LivenessStep::Complete => None,
        }
    }
}

impl fmt::Display for LivenessStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LivenessStep::Intro => "intro",
            LivenessStep::Blink => "blink",
            LivenessStep::Mouth => "mouth",
            LivenessStep::Turn => "turn",
            LivenessStep::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Emitted by [`LivenessSequencer::tick`] when a recorded step finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAdvance {
    pub from: LivenessStep,
    pub to: LivenessStep,
    pub notice: Option<Notification>,
}

impl StepAdvance {
    /// True when this advance entered the terminal step and the caller
    /// should schedule the dashboard redirect.
    pub fn reached_complete(&self) -> bool {
        self.to.is_terminal()
    }
}

/// Current step, recording flag and per-step progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessSequencer {
    step: LivenessStep,
    recording: bool,
    driver: ProgressDriver,
}

impl LivenessSequencer {
    pub fn new(increment: u8) -> Self {
        Self {
            step: LivenessStep::Intro,
            recording: false,
            driver: ProgressDriver::new(increment),
        }
    }

    pub fn step(&self) -> LivenessStep {
        self.step
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Progress of the current step, 0-100.
    pub fn progress(&self) -> u8 {
        self.driver.progress()
    }

    /// "Start Verification": enter the blink step and start recording it.
    pub fn begin(&mut self) -> GuardianResult<()> {
        if self.step != LivenessStep::Intro {
            return Err(GuardianError::InvalidOperation(format!(
                "cannot begin liveness check from step {}",
                self.step
            )));
        }
        self.enter(LivenessStep::Blink);
        self.recording = true;
        tracing::debug!(step = %self.step, "liveness check started");
        Ok(())
    }

    /// "Continue to Next Step": record the current mouth or turn step.
    pub fn resume(&mut self) -> GuardianResult<()> {
        if self.recording {
            return Err(GuardianError::InvalidOperation(format!(
                "step {} is already recording",
                self.step
            )));
        }
        if !matches!(self.step, LivenessStep::Mouth | LivenessStep::Turn) {
            return Err(GuardianError::InvalidOperation(format!(
                "cannot resume from step {}",
                self.step
            )));
        }
        self.recording = true;
        tracing::debug!(step = %self.step, "liveness step recording");
        Ok(())
    }

    /// True when the view should offer "Continue to Next Step".
    pub fn awaiting_resume(&self) -> bool {
        !self.recording && matches!(self.step, LivenessStep::Mouth | LivenessStep::Turn)
    }

    /// Advance the progress of the recording step by one increment.
    ///
    /// Returns the transition when the step reached 100; `None` otherwise,
    /// including when nothing is recording.
    pub fn tick(&mut self) -> Option<StepAdvance> {
        if !self.recording {
            return None;
        }
        match self.driver.tick() {
            Tick::Advanced(_) => None,
            Tick::Finished | Tick::Idle => {
                let from = self.step;
                let to = from.next()?;
                self.recording = false;
                self.enter(to);
                tracing::info!(%from, %to, "liveness step verified");
                Some(StepAdvance {
                    from,
                    to,
                    notice: from.completion_notice(),
                })
            }
        }
    }

    fn enter(&mut self, step: LivenessStep) {
        self.step = step;
        self.driver.reset();
    }
}

impl Default for LivenessSequencer {
    fn default() -> Self {
        Self::new(crate::config::SimulationTimings::default().liveness_increment)
    }
}
