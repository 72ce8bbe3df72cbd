//! Core types for PensionGuardian

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{GuardianError, GuardianResult};

/// Number of digits in an Aadhaar number
pub const AADHAAR_LEN: usize = 12;

/// Digits of an Aadhaar number left visible when masked
const AADHAAR_VISIBLE: usize = 4;

/// True when `s` is exactly `len` ASCII digits.
pub(crate) fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// A 12-digit Aadhaar number.
///
/// Only the format is checked; there is no checksum and no lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Aadhaar(String);

impl Aadhaar {
    /// Parse an Aadhaar number, rejecting anything that is not 12 digits.
    pub fn parse(input: &str) -> GuardianResult<Self> {
        if is_digits(input, AADHAAR_LEN) {
            Ok(Self(input.to_string()))
        } else {
            Err(GuardianError::InvalidAadhaar)
        }
    }

    /// Build from a literal known to be well-formed. Fixture data only.
    pub(crate) fn fixture(digits: &str) -> Self {
        debug_assert!(is_digits(digits, AADHAAR_LEN));
        Self(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: first four digits, the rest replaced by `X`.
    pub fn masked(&self) -> String {
        format!(
            "{}{}",
            &self.0[..AADHAAR_VISIBLE],
            "X".repeat(AADHAAR_LEN - AADHAAR_VISIBLE)
        )
    }
}

impl FromStr for Aadhaar {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Aadhaar {
    type Error = GuardianError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Aadhaar> for String {
    fn from(value: Aadhaar) -> Self {
        value.0
    }
}

impl fmt::Display for Aadhaar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pension identifier such as `P001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PensionerId(pub String);

impl PensionerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PensionerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Government department a pensioner retired from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Education,
    Healthcare,
    CivilServices,
    Defense,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Education,
        Department::Healthcare,
        Department::CivilServices,
        Department::Defense,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Department::Education => "Education",
            Department::Healthcare => "Healthcare",
            Department::CivilServices => "Civil Services",
            Department::Defense => "Defense",
        }
    }

    /// Lower-case key used in filter selects and the `?department=` query.
    pub fn key(&self) -> &'static str {
        match self {
            Department::Education => "education",
            Department::Healthcare => "healthcare",
            Department::CivilServices => "civil services",
            Department::Defense => "defense",
        }
    }

    /// URL-safe key for links ("civil-services").
    pub fn slug(&self) -> &'static str {
        match self {
            Department::CivilServices => "civil-services",
            other => other.key(),
        }
    }
}

impl FromStr for Department {
    type Err = GuardianError;

    /// Case-insensitive match on the display name. Words may also be joined
    /// by `-`, `_`, `+` or `%20` as they arrive from a query string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace("%20", " ").replace(['-', '_', '+'], " ");
        Department::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| GuardianError::UnknownDepartment(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a pensioner's most recent life verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationStatus {
    Verified,
    Pending,
    Failed,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 3] = [
        VerificationStatus::Verified,
        VerificationStatus::Pending,
        VerificationStatus::Failed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Failed => "Failed",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Pending => "pending",
            VerificationStatus::Failed => "failed",
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VerificationStatus::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GuardianError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Disbursement state of the current pension cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the admin pensioner table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pensioner {
    pub id: PensionerId,
    pub name: String,
    pub aadhaar: Aadhaar,
    pub department: Department,
    pub status: VerificationStatus,
    pub last_verified: NaiveDate,
    pub next_due: NaiveDate,
    pub payment_status: PaymentStatus,
}

/// Details shown on the pensioner's own dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionerProfile {
    pub pension_id: PensionerId,
    pub aadhaar: Aadhaar,
    pub name: String,
    pub profession: String,
    pub department: Department,
    pub last_verification: NaiveDateTime,
    pub last_paid: NaiveDate,
    pub next_payment_due: NaiveDate,
    pub payment_status: PaymentStatus,
    pub next_verification_due: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aadhaar_masking() {
        let aadhaar = Aadhaar::parse("123456789012").unwrap();
        assert_eq!(aadhaar.masked(), "1234XXXXXXXX");
        assert_eq!(aadhaar.as_str(), "123456789012");
    }

    #[test]
    fn test_aadhaar_rejects_bad_input() {
        for input in ["", "12345678901", "1234567890123", "12345678901a", "１２３４５６７８９０１２"] {
            assert!(Aadhaar::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_aadhaar_serde_validates() {
        let ok: Aadhaar = serde_json::from_str("\"987654321098\"").unwrap();
        assert_eq!(ok.as_str(), "987654321098");
        assert!(serde_json::from_str::<Aadhaar>("\"98765\"").is_err());
    }

    #[test]
    fn test_department_parse_is_case_insensitive() {
        assert_eq!("civil services".parse::<Department>().unwrap(), Department::CivilServices);
        for encoded in ["civil-services", "Civil+Services", "civil%20services"] {
            assert_eq!(encoded.parse::<Department>().unwrap(), Department::CivilServices);
        }
        for d in Department::ALL {
            assert_eq!(d.slug().parse::<Department>().unwrap(), d);
            assert!(!d.slug().contains(' '));
        }
        assert_eq!("DEFENSE".parse::<Department>().unwrap(), Department::Defense);
        assert!("Agriculture".parse::<Department>().is_err());
    }

    #[test]
    fn test_department_key_round_trips() {
        for dept in Department::ALL {
            assert_eq!(dept.key().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("pending".parse::<VerificationStatus>().unwrap(), VerificationStatus::Pending);
        assert!("unknown".parse::<VerificationStatus>().is_err());
    }
}
