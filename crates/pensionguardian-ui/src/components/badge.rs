//! Status badges
//!
//! Small pills for verification, payment and rate-health states.

use dioxus::prelude::*;
use pensionguardian_core::{PaymentStatus, RateHealth, VerificationStatus};

/// Color treatment of a badge
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeTone {
    /// Filled primary
    #[default]
    Default,
    /// Border only
    Outline,
    /// Filled danger
    Destructive,
    /// Soft green
    Success,
    /// Soft amber
    Warning,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Default => "badge",
            BadgeTone::Outline => "badge badge-outline",
            BadgeTone::Destructive => "badge badge-destructive",
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
        }
    }

    pub fn for_verification(status: VerificationStatus) -> Self {
        match status {
            VerificationStatus::Verified => BadgeTone::Default,
            VerificationStatus::Pending => BadgeTone::Outline,
            VerificationStatus::Failed => BadgeTone::Destructive,
        }
    }

    pub fn for_payment(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => BadgeTone::Success,
            PaymentStatus::Pending => BadgeTone::Warning,
        }
    }

    pub fn for_health(health: RateHealth) -> Self {
        match health {
            RateHealth::Good => BadgeTone::Success,
            RateHealth::NeedsAttention => BadgeTone::Warning,
        }
    }
}

#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: "{tone.class()}", {children} }
    }
}

/// Badge for a pensioner's verification status
#[component]
pub fn VerificationBadge(status: VerificationStatus) -> Element {
    rsx! {
        Badge { tone: BadgeTone::for_verification(status), "{status.label()}" }
    }
}

/// Badge for a payment status
#[component]
pub fn PaymentBadge(status: PaymentStatus) -> Element {
    rsx! {
        Badge { tone: BadgeTone::for_payment(status), "{status.label()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_tones() {
        assert_eq!(BadgeTone::for_verification(VerificationStatus::Verified), BadgeTone::Default);
        assert_eq!(BadgeTone::for_verification(VerificationStatus::Pending), BadgeTone::Outline);
        assert_eq!(
            BadgeTone::for_verification(VerificationStatus::Failed).class(),
            "badge badge-destructive"
        );
    }

    #[test]
    fn payment_and_health_tones() {
        assert_eq!(BadgeTone::for_payment(PaymentStatus::Paid), BadgeTone::Success);
        assert_eq!(BadgeTone::for_payment(PaymentStatus::Pending), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_health(RateHealth::NeedsAttention), BadgeTone::Warning);
    }
}
