//! Toast notifications surfaced by the verification flows.
//!
//! Every message the application shows as a transient toast is built here so
//! the wording lives next to the state machine that triggers it.

use serde::{Deserialize, Serialize};

use crate::types::{Aadhaar, PensionerId};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Rendered in the danger palette (failures)
    Destructive,
}

/// A one-shot message shown in the toast region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    // === Camera ===

    pub fn camera_failed() -> Self {
        Self::destructive(
            "Camera access failed",
            "Please ensure your camera is connected and you've granted permission to use it.",
        )
    }

    // === Pensioner login ===

    pub fn otp_sent(aadhaar: &Aadhaar) -> Self {
        Self::new(
            "OTP Sent Successfully",
            format!(
                "A verification code has been sent to the phone number linked with Aadhaar {}",
                aadhaar
            ),
        )
    }

    pub fn otp_resent() -> Self {
        Self::new(
            "OTP Resent",
            "A new verification code has been sent to your mobile",
        )
    }

    pub fn authenticated() -> Self {
        Self::new(
            "Authentication Successful",
            "Your identity has been verified. Proceeding to verification steps.",
        )
    }

    // === Face capture ===

    pub fn face_verified() -> Self {
        Self::new(
            "Face verification successful",
            "Your identity has been verified. Proceeding to liveness check.",
        )
    }

    // === Admin ===

    pub fn admin_welcome() -> Self {
        Self::new("Login successful", "Welcome to the admin dashboard")
    }

    pub fn logged_out() -> Self {
        Self::new(
            "Logged out successfully",
            "You have been logged out of the system.",
        )
    }

    pub fn pensioner_verified(id: &PensionerId) -> Self {
        Self::new(
            "Pensioner Verified",
            format!("Pensioner ID {} has been marked as verified.", id),
        )
    }

    pub fn payment_approved(id: &PensionerId) -> Self {
        Self::new(
            "Payment Approved",
            format!("Payment for Pensioner ID {} has been approved.", id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_failure_is_destructive() {
        assert!(Notification::camera_failed().is_destructive());
        assert!(!Notification::face_verified().is_destructive());
    }

    #[test]
    fn test_otp_sent_names_aadhaar() {
        let aadhaar = Aadhaar::parse("123456789012").unwrap();
        let n = Notification::otp_sent(&aadhaar);
        assert!(n.description.ends_with("Aadhaar 123456789012"));
    }

    #[test]
    fn test_admin_actions_name_pensioner() {
        let id = PensionerId::new("P004");
        assert_eq!(
            Notification::payment_approved(&id).description,
            "Payment for Pensioner ID P004 has been approved."
        );
        assert_eq!(Notification::pensioner_verified(&id).title, "Pensioner Verified");
    }
}
