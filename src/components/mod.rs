//! App-level components for PensionGuardian.
//!
//! Layouts, the toast region and the webcam bridge. Presentational pieces
//! live in the `pensionguardian-ui` crate.

mod auth_layout;
mod dashboard_layout;
mod toaster;
mod webcam;

pub use auth_layout::AuthLayout;
pub use dashboard_layout::{DashboardLayout, NavItem};
pub use toaster::ToastRegion;
pub use webcam::Webcam;
