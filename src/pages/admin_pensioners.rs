//! Pensioner management table with search and filters.

use dioxus::prelude::*;
use pensionguardian_core::dates::format_short;
use pensionguardian_core::{
    fixtures, DepartmentFilter, Notification, Pensioner, PensionerFilter, StatusFilter,
};
use pensionguardian_ui::{
    AnimatedContainer, AnimationDelay, Card, IconButton, PaymentBadge, SearchInput, Select,
    SelectOption, VerificationBadge,
};

use crate::components::DashboardLayout;
use crate::context::use_toaster;

fn department_options() -> Vec<SelectOption> {
    DepartmentFilter::options()
        .into_iter()
        .map(|(filter, label)| SelectOption::new(filter.key(), label))
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    StatusFilter::options()
        .into_iter()
        .map(|(filter, label)| SelectOption::new(filter.key(), label))
        .collect()
}

/// "Showing N of M pensioners"
pub fn showing_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} pensioners", shown, total)
}

#[component]
fn PensionerRow(pensioner: Pensioner) -> Element {
    let mut toaster = use_toaster();
    let mut menu_open = use_signal(|| false);

    let verify_id = pensioner.id.clone();
    let approve_id = pensioner.id.clone();

    rsx! {
        tr {
            td { class: "cell-strong", "{pensioner.id}" }
            td {
                div { "{pensioner.name}" }
                div { class: "cell-sub", "Aadhaar: {pensioner.aadhaar.masked()}" }
            }
            td { "{pensioner.department}" }
            td { VerificationBadge { status: pensioner.status } }
            td {
                div { class: "cell-stack",
                    span { "{format_short(pensioner.last_verified)}" }
                    span { class: "cell-sub", "Next: {format_short(pensioner.next_due)}" }
                }
            }
            td { PaymentBadge { status: pensioner.payment_status } }
            td { class: "cell-actions",
                div { class: "row-menu",
                    IconButton {
                        aria_label: "Actions",
                        onclick: move |_| menu_open.toggle(),
                        "\u{22EF}"
                    }
                    if menu_open() {
                        div { class: "menu-panel", role: "menu",
                            p { class: "menu-label", "Actions" }
                            hr {}
                            button { class: "menu-item", r#type: "button", role: "menuitem",
                                onclick: move |_| menu_open.set(false),
                                "\u{1F441} View Details"
                            }
                            button { class: "menu-item", r#type: "button", role: "menuitem",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    tracing::info!(id = %verify_id, "marked as verified");
                                    toaster.push(Notification::pensioner_verified(&verify_id));
                                },
                                "\u{2714} Mark as Verified"
                            }
                            button { class: "menu-item", r#type: "button", role: "menuitem",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    tracing::info!(id = %approve_id, "payment approved");
                                    toaster.push(Notification::payment_approved(&approve_id));
                                },
                                "\u{1F4C4} Approve Payment"
                            }
                            hr {}
                            button { class: "menu-item danger", r#type: "button", role: "menuitem",
                                onclick: move |_| menu_open.set(false),
                                "\u{26A0} Flag for Review"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `department` is the `?department=` query value; unknown values show all.
#[component]
pub fn AdminPensioners(department: String) -> Element {
    let records = use_hook(fixtures::pensioners);
    let mut query = use_signal(String::new);
    let mut department_filter = use_signal(|| DepartmentFilter::from_query(&department));
    let mut status_filter = use_signal(StatusFilter::default);

    // Follow the query string when the sidebar or a department link
    // re-targets this page without remounting it.
    use_effect(use_reactive((&department,), move |(department,)| {
        let seeded = DepartmentFilter::from_query(&department);
        if *department_filter.peek() != seeded {
            tracing::debug!(department = %seeded, "department filter from link");
            department_filter.set(seeded);
        }
    }));

    let filter = PensionerFilter::new()
        .with_query(query())
        .with_department(department_filter())
        .with_status(status_filter());
    let shown: Vec<Pensioner> = filter.apply(&records).into_iter().cloned().collect();
    let summary = showing_summary(shown.len(), records.len());

    rsx! {
        DashboardLayout { is_admin: true,
            AnimatedContainer { class: "page-heading",
                h1 { "Pensioner Management" }
                p { "View and manage pensioners across all departments" }
            }

            AnimatedContainer { delay: AnimationDelay::Short, class: "section-gap",
                Card { title: "Search and Filter",
                    div { class: "filter-grid",
                        SearchInput {
                            value: query(),
                            placeholder: "Search by name, ID or Aadhaar",
                            oninput: move |v: String| query.set(v),
                        }
                        Select {
                            id: "department",
                            aria_label: "Department",
                            value: department_filter().key().to_string(),
                            options: department_options(),
                            onchange: move |v: String| {
                                let next = DepartmentFilter::from_query(&v);
                                tracing::debug!(department = %next, "department filter");
                                department_filter.set(next);
                            },
                        }
                        Select {
                            id: "status",
                            aria_label: "Status",
                            value: status_filter().key().to_string(),
                            options: status_options(),
                            onchange: move |v: String| {
                                let next: StatusFilter = v.parse().unwrap_or_default();
                                tracing::debug!(status = next.key(), "status filter");
                                status_filter.set(next);
                            },
                        }
                    }
                }
            }

            AnimatedContainer { delay: AnimationDelay::Medium,
                Card {
                    title: "Pensioners",
                    header_aside: rsx! { span { class: "muted-text", "{summary}" } },
                    class: "table-card",
                    div { class: "table-scroll",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { class: "col-id", "ID" }
                                    th { "Name" }
                                    th { "Department" }
                                    th { "Status" }
                                    th { "Last Verified" }
                                    th { "Payment" }
                                    th { class: "align-right", "Actions" }
                                }
                            }
                            tbody {
                                if shown.is_empty() {
                                    tr {
                                        td { class: "empty-row", colspan: "7",
                                            "No results found. Try adjusting your filters."
                                        }
                                    }
                                } else {
                                    for pensioner in shown {
                                        PensionerRow { key: "{pensioner.id}", pensioner: pensioner.clone() }
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
    fn test_select_options_lead_with_all() {
        let departments = department_options();
        assert_eq!(departments.len(), 5);
        assert_eq!(departments[0], SelectOption::new("all", "All Departments"));
        assert_eq!(departments[3], SelectOption::new("civil services", "Civil Services"));

        let statuses = status_options();
        assert_eq!(statuses[0].label, "All Statuses");
        assert_eq!(statuses.len(), 4);
    }

    #[test]
    fn test_showing_summary() {
        assert_eq!(showing_summary(3, 8), "Showing 3 of 8 pensioners");
    }
}
