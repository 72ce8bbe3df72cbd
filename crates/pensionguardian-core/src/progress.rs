//! Progress driver: fixed-increment pacing toward a 0-100 bound.
//!
//! The driver owns no timer. Callers tick it from whatever periodic source
//! they run (a `tokio::time::sleep` loop in the desktop app) and stop when
//! [`ProgressDriver::tick`] reports completion.

/// Upper bound of the progress counter
pub const PROGRESS_MAX: u8 = 100;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Progress moved but is still below the bound
    Advanced(u8),
    /// Progress reached the bound on this tick
    Finished,
    /// Progress was already at the bound; nothing changed
    Idle,
}

/// Saturating progress counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDriver {
    progress: u8,
    increment: u8,
}

impl ProgressDriver {
    /// Create a driver at 0. An increment of 0 is bumped to 1 so the driver
    /// always terminates.
    pub fn new(increment: u8) -> Self {
        Self {
            progress: 0,
            increment: increment.max(1),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn increment(&self) -> u8 {
        self.increment
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    pub fn reset(&mut self) {
        self.progress = 0;
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_finished() {
            return Tick::Idle;
        }
        self.progress = self.progress.saturating_add(self.increment).min(PROGRESS_MAX);
        if self.is_finished() {
            Tick::Finished
        } else {
            Tick::Advanced(self.progress)
        }
    }

    /// Ticks needed to go from 0 to the bound.
    pub fn ticks_to_finish(&self) -> u32 {
        u32::from(PROGRESS_MAX).div_ceil(u32::from(self.increment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_to_bound() {
        let mut driver = ProgressDriver::new(2);
        let mut ticks = 0;
        loop {
            ticks += 1;
            if driver.tick() == Tick::Finished {
                break;
            }
        }
        assert_eq!(ticks, 50);
        assert_eq!(driver.progress(), 100);
        assert_eq!(driver.tick(), Tick::Idle);
    }

    #[test]
    fn test_saturates_on_uneven_increment() {
        let mut driver = ProgressDriver::new(30);
        assert_eq!(driver.tick(), Tick::Advanced(30));
        assert_eq!(driver.tick(), Tick::Advanced(60));
        assert_eq!(driver.tick(), Tick::Advanced(90));
        assert_eq!(driver.tick(), Tick::Finished);
        assert_eq!(driver.progress(), 100);
        assert_eq!(driver.ticks_to_finish(), 4);
    }

    #[test]
    fn test_zero_increment_still_terminates() {
        let driver = ProgressDriver::new(0);
        assert_eq!(driver.increment(), 1);
        assert_eq!(driver.ticks_to_finish(), 100);
    }

    #[test]
    fn test_reset() {
        let mut driver = ProgressDriver::new(50);
        driver.tick();
        driver.tick();
        assert!(driver.is_finished());
        driver.reset();
        assert_eq!(driver.progress(), 0);
        assert!(!driver.is_finished());
    }
}
