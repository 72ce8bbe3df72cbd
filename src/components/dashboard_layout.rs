//! Sidebar layout for the pensioner dashboard and the admin console.

use dioxus::prelude::*;
use pensionguardian_core::Notification;
use pensionguardian_ui::{Button, ButtonVariant, Logo};

use crate::app::Route;
use crate::context::use_toaster;

/// Sidebar destinations
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavItem {
    Profile,
    Verification,
    AdminDashboard,
    Pensioners,
}

impl NavItem {
    pub const PENSIONER: [NavItem; 2] = [NavItem::Profile, NavItem::Verification];
    pub const ADMIN: [NavItem; 2] = [NavItem::AdminDashboard, NavItem::Pensioners];

    pub fn for_role(is_admin: bool) -> &'static [NavItem] {
        if is_admin {
            &Self::ADMIN
        } else {
            &Self::PENSIONER
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Profile => "Profile",
            NavItem::Verification => "Verification",
            NavItem::AdminDashboard => "Dashboard",
            NavItem::Pensioners => "Pensioners",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Profile => "\u{1F464}",
            NavItem::Verification | NavItem::AdminDashboard => "\u{1F6E1}",
            NavItem::Pensioners => "\u{1F465}",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavItem::Profile => Route::Dashboard {},
            NavItem::Verification => Route::FaceVerification {},
            NavItem::AdminDashboard => Route::Admin {},
            NavItem::Pensioners => Route::pensioners(""),
        }
    }

    /// Whether `current` is this item's page (any department filter counts).
    pub fn is_active(&self, current: &Route) -> bool {
        match self {
            NavItem::Profile => matches!(current, Route::Dashboard {}),
            NavItem::Verification => matches!(current, Route::FaceVerification {}),
            NavItem::AdminDashboard => matches!(current, Route::Admin {}),
            NavItem::Pensioners => matches!(current, Route::AdminPensioners { .. }),
        }
    }
}

fn nav_link_class(active: bool) -> String {
    if active {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DashboardLayoutProps {
    #[props(default = false)]
    pub is_admin: bool,
    pub children: Element,
}

#[component]
pub fn DashboardLayout(props: DashboardLayoutProps) -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let mut toaster = use_toaster();

    let logout = move |_| {
        tracing::info!("logout");
        toaster.push(Notification::logged_out());
        navigator.replace(Route::Landing {});
    };

    rsx! {
        div { class: "dashboard-shell",
            aside { class: "sidebar",
                div { class: "sidebar-logo",
                    Logo {}
                }
                nav { class: "sidebar-nav",
                    ul {
                        for item in NavItem::for_role(props.is_admin).iter().copied() {
                            li { key: "{item.label()}",
                                Link {
                                    class: nav_link_class(item.is_active(&current)),
                                    to: item.route(),
                                    span { class: "nav-icon", "{item.icon()}" }
                                    span { "{item.label()}" }
                                }
                            }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    Button {
                        variant: ButtonVariant::Danger,
                        full_width: true,
                        onclick: logout,
                        span { class: "nav-icon", "\u{21AA}" }
                        span { "Logout" }
                    }
                }
            }
            main { class: "dashboard-main",
                div { class: "dashboard-content", {props.children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_per_role() {
        assert_eq!(NavItem::for_role(false), &[NavItem::Profile, NavItem::Verification]);
        assert_eq!(NavItem::for_role(true), &[NavItem::AdminDashboard, NavItem::Pensioners]);
    }

    #[test]
    fn test_pensioners_item_active_for_any_department() {
        assert!(NavItem::Pensioners.is_active(&Route::pensioners("")));
        assert!(NavItem::Pensioners.is_active(&Route::pensioners("defense")));
        assert!(!NavItem::AdminDashboard.is_active(&Route::pensioners("")));
    }

    #[test]
    fn test_every_item_route_is_its_own_active_route() {
        for item in NavItem::PENSIONER.iter().chain(NavItem::ADMIN.iter()) {
            assert!(item.is_active(&item.route()), "{:?}", item);
        }
    }
}
