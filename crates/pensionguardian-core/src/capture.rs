//! Simulated face capture.
//!
//! A capture is always accepted: the "analysis" is a progress bar that runs
//! to 100 and then settles into a verified state.

use crate::error::{GuardianError, GuardianResult};
use crate::progress::{ProgressDriver, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStatus {
    /// Waiting for "Capture Photo"
    #[default]
    Idle,
    /// Progress bar running
    Processing,
    /// Analysis finished, waiting for the settle delay
    Analyzed,
    /// Match accepted; the view redirects shortly
    Verified,
}

impl CaptureStatus {
    /// Overlay text for the camera frame, if any.
    pub fn overlay(&self) -> Option<&'static str> {
        match self {
            CaptureStatus::Idle => {
                Some("Position your face in the center and click \"Capture Photo\"")
            }
            CaptureStatus::Processing | CaptureStatus::Analyzed => Some("Analyzing your photo..."),
            CaptureStatus::Verified => Some("Verification successful"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceCapture {
    status: CaptureStatus,
    driver: ProgressDriver,
}

impl FaceCapture {
    pub fn new(increment: u8) -> Self {
        Self {
            status: CaptureStatus::Idle,
            driver: ProgressDriver::new(increment),
        }
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.driver.progress()
    }

    /// Whether the capture button should be enabled.
    pub fn can_capture(&self) -> bool {
        self.status == CaptureStatus::Idle
    }

    pub fn capture(&mut self) -> GuardianResult<()> {
        if !self.can_capture() {
            return Err(GuardianError::InvalidOperation(
                "a capture is already in progress".to_string(),
            ));
        }
        self.driver.reset();
        self.status = CaptureStatus::Processing;
        tracing::debug!("face capture started");
        Ok(())
    }

    /// Advance the analysis bar. Returns true on the tick that finishes it.
    pub fn tick(&mut self) -> bool {
        if self.status != CaptureStatus::Processing {
            return false;
        }
        match self.driver.tick() {
            Tick::Advanced(_) => false,
            Tick::Finished | Tick::Idle => {
                self.status = CaptureStatus::Analyzed;
                true
            }
        }
    }

    /// Accept the match once analysis has finished.
    pub fn settle(&mut self) -> GuardianResult<()> {
        if self.status != CaptureStatus::Analyzed {
            return Err(GuardianError::InvalidOperation(
                "face capture has not finished analysis".to_string(),
            ));
        }
        self.status = CaptureStatus::Verified;
        tracing::info!("face capture verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_flow() {
        let mut capture = FaceCapture::new(5);
        assert!(capture.can_capture());
        assert!(!capture.tick());

        capture.capture().unwrap();
        assert!(!capture.can_capture());
        assert!(capture.settle().is_err());

        let mut ticks = 1;
        while !capture.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 20);
        assert_eq!(capture.progress(), 100);
        assert_eq!(capture.status(), CaptureStatus::Analyzed);

        capture.settle().unwrap();
        assert_eq!(capture.status(), CaptureStatus::Verified);
        assert_eq!(capture.status().overlay(), Some("Verification successful"));
    }

    #[test]
    fn test_second_capture_rejected() {
        let mut capture = FaceCapture::new(5);
        capture.capture().unwrap();
        assert!(capture.capture().is_err());
        assert_eq!(capture.status(), CaptureStatus::Processing);
    }
}
