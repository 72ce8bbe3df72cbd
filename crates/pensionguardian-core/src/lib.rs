//! PensionGuardian Core Library
//!
//! Domain logic behind the pension verification demo: the liveness step
//! sequencer, the simulated face capture, login validation, and the
//! in-memory pensioner fixtures with their admin filters.
//!
//! ## Overview
//!
//! Nothing here talks to a camera, a network or a disk (apart from reading
//! an optional config file). Each flow is a small state machine that the UI
//! ticks from its own timers:
//!
//! ```
//! use pensionguardian_core::{LivenessSequencer, LivenessStep};
//!
//! let mut seq = LivenessSequencer::new(50);
//! seq.begin().unwrap();
//! seq.tick();
//! let advance = seq.tick().unwrap();
//! assert_eq!(advance.to, LivenessStep::Mouth);
//! ```

pub mod auth;
pub mod capture;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod liveness;
pub mod notification;
pub mod progress;
pub mod stats;
pub mod types;

// Re-exports
pub use auth::{
    validate_admin_form, AdminCredentials, AdminFormErrors, LoginStage, Otp, PensionerLogin,
};
pub use capture::{CaptureStatus, FaceCapture};
pub use config::{GuardianConfig, SimulationTimings};
pub use error::{GuardianError, GuardianResult};
pub use filter::{DepartmentFilter, PensionerFilter, StatusFilter};
pub use liveness::{LivenessSequencer, LivenessStep, StepAdvance};
pub use notification::{Notification, NotificationVariant};
pub use progress::{ProgressDriver, Tick, PROGRESS_MAX};
pub use stats::{DepartmentStats, PensionOverview, RateHealth, RecentActivity};
pub use types::*;
