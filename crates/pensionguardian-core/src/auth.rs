//! Login validation for pensioners (Aadhaar + OTP) and administrators.
//!
//! Neither flow authenticates anything: the pensioner path accepts any
//! well-formed OTP, and the admin path compares against a single demo
//! credential pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, GuardianResult};
use crate::types::{is_digits, Aadhaar};

/// Number of digits in a one-time password
pub const OTP_LEN: usize = 6;

/// Admin form minimums
pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// A 6-digit one-time password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otp(String);

impl Otp {
    pub fn parse(input: &str) -> GuardianResult<Self> {
        if is_digits(input, OTP_LEN) {
            Ok(Self(input.to_string()))
        } else {
            Err(GuardianError::InvalidOtp)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where the pensioner is in the two-stage login form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginStage {
    #[default]
    EnterAadhaar,
    OtpSent { aadhaar: Aadhaar },
}

/// Pensioner login form state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PensionerLogin {
    stage: LoginStage,
}

impl PensionerLogin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &LoginStage {
        &self.stage
    }

    pub fn otp_sent(&self) -> bool {
        matches!(self.stage, LoginStage::OtpSent { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.otp_sent() {
            "Verify OTP"
        } else {
            "Pensioner Login"
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.otp_sent() {
            "Enter the 6-digit code sent to your Aadhaar linked mobile number"
        } else {
            "Please enter your 12-digit Aadhaar number to proceed"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.otp_sent() {
            "Verify OTP"
        } else {
            "Send OTP"
        }
    }

    /// Validate the Aadhaar field before the simulated OTP dispatch.
    pub fn request_otp(&self, input: &str) -> GuardianResult<Aadhaar> {
        if self.otp_sent() {
            return Err(GuardianError::InvalidOperation(
                "an OTP has already been sent".to_string(),
            ));
        }
        Aadhaar::parse(input)
    }

    /// Record that the (simulated) OTP went out.
    pub fn mark_otp_sent(&mut self, aadhaar: Aadhaar) {
        tracing::info!(aadhaar = %aadhaar.masked(), "OTP dispatched");
        self.stage = LoginStage::OtpSent { aadhaar };
    }

    /// Validate the OTP field. Any well-formed code is accepted.
    pub fn verify_otp(&self, input: &str) -> GuardianResult<Otp> {
        if !self.otp_sent() {
            return Err(GuardianError::InvalidOperation(
                "no OTP has been requested".to_string(),
            ));
        }
        Otp::parse(input)
    }

    /// "Change Aadhaar number": back to the first stage.
    pub fn change_aadhaar(&mut self) {
        self.stage = LoginStage::EnterAadhaar;
    }
}

/// The demonstration admin credential pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn verify(&self, username: &str, password: &str) -> GuardianResult<()> {
        if self.username == username && self.password == password {
            Ok(())
        } else {
            tracing::warn!(username, "admin credential mismatch");
            Err(GuardianError::InvalidCredentials)
        }
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inline field errors of the admin login form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminFormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AdminFormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Field-level checks that run before the credential comparison.
pub fn validate_admin_form(username: &str, password: &str) -> AdminFormErrors {
    AdminFormErrors {
        username: (username.chars().count() < MIN_USERNAME_LEN)
            .then(|| GuardianError::UsernameTooShort.to_string()),
        password: (password.chars().count() < MIN_PASSWORD_LEN)
            .then(|| GuardianError::PasswordTooShort.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_parse() {
        assert!(Otp::parse("123456").is_ok());
        for bad in ["", "12345", "1234567", "12a456", " 23456"] {
            assert!(matches!(Otp::parse(bad), Err(GuardianError::InvalidOtp)));
        }
    }

    #[test]
    fn test_login_stages() {
        let mut login = PensionerLogin::new();
        assert_eq!(login.title(), "Pensioner Login");
        assert!(login.verify_otp("123456").is_err());

        assert!(matches!(login.request_otp("1234"), Err(GuardianError::InvalidAadhaar)));
        let aadhaar = login.request_otp("123456789012").unwrap();
        login.mark_otp_sent(aadhaar.clone());
        assert!(login.otp_sent());
        assert_eq!(login.submit_label(), "Verify OTP");
        assert_eq!(login.stage(), &LoginStage::OtpSent { aadhaar });

        assert!(login.request_otp("123456789012").is_err());
        assert_eq!(login.verify_otp("654321").unwrap().as_str(), "654321");

        login.change_aadhaar();
        assert_eq!(login.stage(), &LoginStage::EnterAadhaar);
    }

    #[test]
    fn test_admin_credentials() {
        let creds = AdminCredentials::default();
        assert!(creds.verify("admin", "admin123").is_ok());
        assert!(matches!(
            creds.verify("admin", "admin1234"),
            Err(GuardianError::InvalidCredentials)
        ));
        assert!(creds.verify("Admin", "admin123").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", AdminCredentials::default());
        assert!(!rendered.contains("admin123"));
    }

    #[test]
    fn test_admin_form_minimums() {
        let errors = validate_admin_form("ad", "12345");
        assert_eq!(errors.username.as_deref(), Some("Username must be at least 3 characters"));
        assert_eq!(errors.password.as_deref(), Some("Password must be at least 6 characters"));

        assert!(validate_admin_form("adm", "123456").is_empty());
    }
}
