//! Error types for PensionGuardian
//!
//! The `Display` text of the form-validation variants is exactly what the
//! login views render beneath the offending field.

use thiserror::Error;

/// Main error type for PensionGuardian operations
#[derive(Error, Debug)]
pub enum GuardianError {
    /// Aadhaar input is not exactly 12 digits
    #[error("Please enter a valid 12-digit Aadhaar number")]
    InvalidAadhaar,

    /// OTP input is not exactly 6 digits
    #[error("Please enter a valid 6-digit OTP")]
    InvalidOtp,

    /// Admin username shorter than the form minimum
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    /// Admin password shorter than the form minimum
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Admin credential pair did not match
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Camera could not be opened (missing device or permission denied)
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    /// Department name outside the fixed set
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    /// Verification or payment status outside the fixed set
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Operation not valid in the current flow state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GuardianError
pub type GuardianResult<T> = Result<T, GuardianError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_messages() {
        assert_eq!(
            GuardianError::InvalidAadhaar.to_string(),
            "Please enter a valid 12-digit Aadhaar number"
        );
        assert_eq!(
            GuardianError::InvalidOtp.to_string(),
            "Please enter a valid 6-digit OTP"
        );
        assert_eq!(
            GuardianError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GuardianError = io_err.into();
        assert!(matches!(err, GuardianError::Io(_)));
    }
}
