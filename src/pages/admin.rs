//! Admin console - overview figures, department statistics and the recent
//! verification feed.

use dioxus::prelude::*;
use pensionguardian_core::stats::group_thousands;
use pensionguardian_core::{fixtures, Department, DepartmentStats, RateHealth, VerificationStatus};
use pensionguardian_ui::{
    button_class, AnimatedContainer, AnimationDelay, Badge, BadgeTone, ButtonSize,
    ButtonVariant, Card, ProgressBar, StatCard, VerificationBadge,
};

use crate::app::Route;
use crate::components::DashboardLayout;

fn health_fill(health: RateHealth) -> &'static str {
    if health.is_good() {
        "success"
    } else {
        "warning"
    }
}

fn status_icon(status: VerificationStatus) -> (&'static str, &'static str) {
    match status {
        VerificationStatus::Verified => ("\u{2714}", "success"),
        VerificationStatus::Pending => ("\u{23F1}", "warning"),
        VerificationStatus::Failed => ("\u{26A0}", "danger"),
    }
}

/// One rate column of a department panel
#[component]
fn RateMeter(label: String, rate: u8, health: RateHealth) -> Element {
    rsx! {
        div { class: "rate-meter",
            h3 { class: "detail-label", "{label}" }
            div { class: "rate-row",
                span { class: "rate-value", "{rate}%" }
                Badge { tone: BadgeTone::for_health(health), "{health.label()}" }
            }
            ProgressBar { value: rate, tone: health_fill(health).to_string() }
        }
    }
}

#[component]
fn DepartmentPanel(stats: DepartmentStats) -> Element {
    let name = stats.department.name();
    let link = button_class(ButtonVariant::Outline, ButtonSize::Default, true, None);
    let footer = rsx! {
        Link { class: "{link}", to: Route::pensioners(stats.department.slug()),
            span { "View {name} Pensioners" }
            span { "\u{2192}" }
        }
    };

    rsx! {
        Card {
            title: format!("{} Department", name),
            description: format!("Total pensioners: {}", stats.count),
            footer: footer,
            div { class: "two-column",
                RateMeter {
                    label: "Verification Rate",
                    rate: stats.verification_rate,
                    health: stats.verification_health(),
                }
                RateMeter {
                    label: "Payment Rate",
                    rate: stats.payment_rate,
                    health: stats.payment_health(),
                }
            }
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let overview = use_hook(fixtures::overview);
    let activities = use_hook(fixtures::recent_activities);
    let mut selected = use_signal(|| Department::Education);

    let manage = button_class(ButtonVariant::Outline, ButtonSize::Default, true, None);
    let current = overview.department(selected()).cloned();

    rsx! {
        DashboardLayout { is_admin: true,
            section { class: "page-section",
                AnimatedContainer { class: "page-heading",
                    h1 { "Admin Dashboard" }
                    p { "Overview of pension verification and payment statistics" }
                }

                AnimatedContainer { delay: AnimationDelay::Short, class: "stat-grid section-gap",
                    StatCard {
                        label: "Total Pensioners",
                        value: group_thousands(overview.total_pensioners),
                        icon: "\u{1F465}",
                        tone: "primary",
                    }
                    StatCard {
                        label: "Pending Verifications",
                        value: group_thousands(overview.pending_verifications),
                        icon: "\u{23F1}",
                        tone: "warning",
                    }
                    StatCard {
                        label: "Pending Payments",
                        value: group_thousands(overview.pending_payments),
                        icon: "\u{26A0}",
                        tone: "danger",
                    }
                    StatCard {
                        label: "Verified This Month",
                        value: group_thousands(overview.verified_this_month),
                        icon: "\u{2714}",
                        tone: "success",
                    }
                }

                AnimatedContainer { delay: AnimationDelay::Medium,
                    div { class: "tabs-header",
                        h2 { "Department Statistics" }
                        div { class: "tab-list", role: "tablist",
                            for stats in overview.departments.iter() {
                                {
                                    let department = stats.department;
                                    rsx! {
                                        button {
                                            key: "{department.key()}",
                                            class: if department == selected() { "tab active" } else { "tab" },
                                            role: "tab",
                                            r#type: "button",
                                            onclick: move |_| selected.set(department),
                                            "{department.name()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if let Some(stats) = &current {
                        DepartmentPanel { stats: stats.clone() }
                    }
                }
            }

            section { class: "page-section",
                AnimatedContainer { delay: AnimationDelay::Long,
                    Card {
                        title: "Recent Verification Activities",
                        description: "Latest pensioner verification events across departments",
                        footer: rsx! {
                            Link { class: "{manage}", to: Route::pensioners(""),
                                span { "\u{1F464}" }
                                span { "Manage All Pensioners" }
                            }
                        },
                        ul { class: "activity-list",
                            for activity in activities.iter() {
                                {
                                    let (icon, tone) = status_icon(activity.status);
                                    rsx! {
                                        li { key: "{activity.id}", class: "activity-row spread",
                                            div { class: "activity-who",
                                                span { class: "activity-icon {tone}", "{icon}" }
                                                div {
                                                    p { class: "activity-title", "{activity.name}" }
                                                    p { class: "activity-time",
                                                        "Aadhaar: {activity.masked_aadhaar} \u{2022} {activity.department}"
                                                    }
                                                }
                                            }
                                            div { class: "activity-meta",
                                                VerificationBadge { status: activity.status }
                                                span { class: "activity-time", "{activity.time}" }
                                            }
                                        }
                                    }
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

    #[test]
    fn test_health_fill() {
        assert_eq!(health_fill(RateHealth::Good), "success");
        assert_eq!(health_fill(RateHealth::NeedsAttention), "warning");
    }

    #[test]
    fn test_status_icon_tones() {
        assert_eq!(status_icon(VerificationStatus::Verified).1, "success");
        assert_eq!(status_icon(VerificationStatus::Failed).1, "danger");
    }
}
