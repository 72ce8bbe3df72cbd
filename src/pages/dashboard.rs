//! Pensioner dashboard - payment and verification status.

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use pensionguardian_core::dates::{days_until, format_long, verification_due_soon};
use pensionguardian_core::{fixtures, PensionerProfile};
use pensionguardian_ui::{
    button_class, AnimatedContainer, AnimationDelay, Badge, BadgeTone, ButtonSize,
    ButtonVariant, Card, PaymentBadge,
};

use crate::app::Route;
use crate::components::DashboardLayout;

const DOCUMENTS: [&str; 3] = [
    "Life Certificate",
    "Pension Payment Order",
    "Aadhaar Verification",
];

/// Verification card state for a given day
#[derive(Debug, Clone, PartialEq, Eq)]
struct VerificationOutlook {
    days_left: i64,
    due_soon: bool,
}

impl VerificationOutlook {
    fn for_profile(profile: &PensionerProfile, today: NaiveDate) -> Self {
        let days_left = days_until(profile.next_verification_due, today);
        Self {
            days_left,
            due_soon: verification_due_soon(days_left),
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let profile = use_hook(fixtures::current_pensioner);
    let outlook = VerificationOutlook::for_profile(&profile, Local::now().date_naive());
    let outline = button_class(ButtonVariant::Outline, ButtonSize::Default, true, None);

    let department = profile.department.name();
    let description = format!(
        "Pension ID: {} \u{2022} Department: {}",
        profile.pension_id, department
    );

    let verification_footer = if outlook.due_soon {
        rsx! {
            Link { class: "{outline}", to: Route::FaceVerification {},
                span { "Complete Verification" }
                span { "\u{2192}" }
            }
        }
    } else {
        rsx! {
            p { class: "muted-text", "Next verification in {outlook.days_left} days" }
        }
    };

    rsx! {
        DashboardLayout {
            section { class: "page-section",
                AnimatedContainer { class: "page-heading",
                    h1 { "Welcome, {profile.name}" }
                    p { "Here's an overview of your pension status and verification details" }
                }

                AnimatedContainer { delay: AnimationDelay::Short, class: "section-gap",
                    Card {
                        title: "Pension Status",
                        description: description,
                        header_aside: rsx! { PaymentBadge { status: profile.payment_status } },
                        div { class: "detail-grid",
                            div {
                                div { class: "detail-label", "Last Payment Date" }
                                div { class: "detail-value",
                                    span { class: "detail-icon", "\u{1F4C5}" }
                                    span { "{format_long(profile.last_paid)}" }
                                }
                            }
                            div {
                                div { class: "detail-label", "Next Payment Due" }
                                div { class: "detail-value",
                                    span { class: "detail-icon", "\u{1F4C5}" }
                                    span { "{format_long(profile.next_payment_due)}" }
                                }
                            }
                        }
                    }
                }

                AnimatedContainer { delay: AnimationDelay::Medium,
                    div { class: "two-column",
                        Card {
                            title: "Verification Status",
                            warn: outlook.due_soon,
                            footer: verification_footer,
                            div { class: "detail-block",
                                div { class: "detail-label", "Last Verification" }
                                div { class: "detail-value",
                                    span { class: "detail-icon success", "\u{2714}" }
                                    span { "{format_long(profile.last_verification)}" }
                                }
                            }
                            div { class: "detail-block",
                                div { class: "detail-label", "Next Verification Due" }
                                div { class: "detail-value",
                                    if outlook.due_soon {
                                        span { class: "detail-icon warning", "\u{26A0}" }
                                    } else {
                                        span { class: "detail-icon", "\u{1F4C4}" }
                                    }
                                    span { "{format_long(profile.next_verification_due)}" }
                                }
                            }
                        }

                        Card { title: "Documents",
                            ul { class: "document-list",
                                for doc in DOCUMENTS {
                                    li { key: "{doc}", class: "document-row",
                                        span { class: "detail-icon success", "\u{1F4C4}" }
                                        span { class: "document-name", "{doc}" }
                                        Badge { tone: BadgeTone::Success, "Verified" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page-section",
                AnimatedContainer { delay: AnimationDelay::Long,
                    Card {
                        title: "Recent Activities",
                        description: "Your recent interactions with the pension system",
                        ul { class: "activity-list",
                            li { class: "activity-row",
                                span { class: "activity-icon primary", "\u{2714}" }
                                div {
                                    p { class: "activity-title", "Liveness Verification Completed" }
                                    p { class: "activity-time", "Today at 10:30 AM" }
                                }
                            }
                            li { class: "activity-row",
                                span { class: "activity-icon success", "\u{1F4C5}" }
                                div {
                                    p { class: "activity-title", "Pension Payment Processed" }
                                    p { class: "activity-time", "{format_long(profile.last_paid)}" }
                                }
                            }
                            li { class: "activity-row",
                                span { class: "activity-icon info", "\u{1F4C4}" }
                                div {
                                    p { class: "activity-title", "Document Verification Completed" }
                                    p { class: "activity-time", "March 10, 2023" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_outlook_far_from_due() {
        let profile = fixtures::current_pensioner();
        let outlook = VerificationOutlook::for_profile(&profile, day(2023, 3, 20));
        assert_eq!(outlook.days_left, 87);
        assert!(!outlook.due_soon);
    }

    #[test]
    fn test_outlook_due_soon_and_overdue() {
        let profile = fixtures::current_pensioner();
        assert!(VerificationOutlook::for_profile(&profile, day(2023, 5, 20)).due_soon);
        let overdue = VerificationOutlook::for_profile(&profile, day(2024, 1, 1));
        assert!(overdue.days_left < 0);
        assert!(overdue.due_soon);
    }
}
