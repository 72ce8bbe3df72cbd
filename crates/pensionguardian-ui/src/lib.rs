//! PensionGuardian UI Components
//!
//! Presentational Dioxus components shared by every page of the desktop
//! app. Components here hold no flow state; they render what they are given
//! and report clicks and input through event handlers.
//!
//! ## Palette
//!
//! - **Primary (#2563eb)**: actions, links, progress
//! - **Success (#16a34a)**: verified, paid, healthy rates
//! - **Warning (#d97706)**: pending, needs attention, due soon
//! - **Danger (#dc2626)**: failed, destructive toasts, logout

pub mod components;

pub use components::*;
