//! Page components, one per route.

mod admin;
mod admin_login;
mod admin_pensioners;
mod dashboard;
mod face_verification;
mod landing;
mod liveness_detection;
mod login;
mod not_found;

pub use admin::Admin;
pub use admin_login::AdminLogin;
pub use admin_pensioners::AdminPensioners;
pub use dashboard::Dashboard;
pub use face_verification::FaceVerification;
pub use landing::Landing;
pub use liveness_detection::LivenessDetection;
pub use login::Login;
pub use not_found::NotFound;
