//! Timer-driven liveness runs
//!
//! Drives the sequencer the way the desktop view does (a sleep loop per
//! recorded step) under tokio's paused clock, so the default pacing can be
//! checked without waiting in real time.

use std::time::Duration;

use pensionguardian_core::{LivenessSequencer, LivenessStep, SimulationTimings, StepAdvance};
use tokio::time::Instant;

/// Tick until the recording step finishes, as the view's progress loop does.
async fn record_step(seq: &mut LivenessSequencer, tick: Duration) -> StepAdvance {
    loop {
        tokio::time::sleep(tick).await;
        if let Some(advance) = seq.tick() {
            return advance;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_default_step_takes_two_and_a_half_seconds() {
    let timings = SimulationTimings::default();
    let mut seq = LivenessSequencer::new(timings.liveness_increment);

    let start = Instant::now();
    seq.begin().unwrap();
    let advance = record_step(&mut seq, timings.liveness_tick()).await;

    assert_eq!(advance.to, LivenessStep::Mouth);
    assert_eq!(start.elapsed(), Duration::from_millis(2500));
}

#[tokio::test(start_paused = true)]
async fn test_full_run_then_redirect() {
    let timings = SimulationTimings::default();
    let mut seq = LivenessSequencer::new(timings.liveness_increment);
    let mut notices = Vec::new();

    let start = Instant::now();
    seq.begin().unwrap();
    loop {
        let advance = record_step(&mut seq, timings.liveness_tick()).await;
        notices.extend(advance.notice.clone());
        if advance.reached_complete() {
            tokio::time::sleep(timings.redirect_delay()).await;
            break;
        }
        seq.resume().unwrap();
    }

    assert_eq!(seq.step(), LivenessStep::Complete);
    assert_eq!(notices.len(), 3);
    // Three recorded steps plus the redirect delay
    assert_eq!(start.elapsed(), Duration::from_millis(3 * 2500 + 2000));
}
