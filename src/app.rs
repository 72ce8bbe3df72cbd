use dioxus::prelude::*;

use crate::components::ToastRegion;
use crate::context::{Toast, Toaster};
use crate::pages::{
    Admin, AdminLogin, AdminPensioners, Dashboard, FaceVerification, Landing, LivenessDetection,
    Login, NotFound,
};
use crate::theme::{root_properties, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Landing page with the two login entry points
/// - `/login` - Aadhaar + OTP login
/// - `/face-verification` - Simulated face capture
/// - `/liveness-detection` - Blink, mouth and head-turn checks
/// - `/dashboard` - Pensioner dashboard
/// - `/admin-login`, `/admin` - Admin login and console
/// - `/admin/pensioners?department=` - Filterable pensioner table
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/face-verification")]
    FaceVerification {},
    #[route("/liveness-detection")]
    LivenessDetection {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin-login")]
    AdminLogin {},
    #[route("/admin")]
    Admin {},
    #[route("/admin/pensioners?:department")]
    AdminPensioners { department: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The pensioner table, optionally pre-filtered to one department key.
    pub fn pensioners(department: impl Into<String>) -> Self {
        Route::AdminPensioners {
            department: department.into(),
        }
    }
}

/// Root application component.
///
/// Provides global styles, the configuration and toast contexts, and routing.
#[component]
pub fn App() -> Element {
    let config = crate::get_config();
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let next_id: Signal<u64> = use_signal(|| 0);

    use_context_provider(|| config);
    use_context_provider(|| Toaster::new(toasts, next_id));

    rsx! {
        style { {root_properties()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastRegion {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::FaceVerification {}.to_string(), "/face-verification");
        assert_eq!(Route::LivenessDetection {}.to_string(), "/liveness-detection");
        assert_eq!(Route::AdminLogin {}.to_string(), "/admin-login");
    }

    #[test]
    fn test_department_query_round_trip() {
        let route: Route = "/admin/pensioners?department=healthcare".parse().unwrap();
        assert_eq!(route, Route::pensioners("healthcare"));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/admin/reports".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["admin".to_string(), "reports".to_string()]
            }
        );
    }
}
