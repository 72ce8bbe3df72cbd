//! Admin console overview figures.

use serde::{Deserialize, Serialize};

use crate::types::{Department, VerificationStatus};

/// Verification rate at or above which a department is healthy
pub const VERIFICATION_RATE_TARGET: u8 = 90;

/// Payment rate at or above which a department is healthy
pub const PAYMENT_RATE_TARGET: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateHealth {
    Good,
    NeedsAttention,
}

impl RateHealth {
    fn from_rate(rate: u8, target: u8) -> Self {
        if rate >= target {
            RateHealth::Good
        } else {
            RateHealth::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateHealth::Good => "Good",
            RateHealth::NeedsAttention => "Needs Attention",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, RateHealth::Good)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: Department,
    pub count: u32,
    /// Percent of pensioners verified this cycle
    pub verification_rate: u8,
    /// Percent of pensioners paid this cycle
    pub payment_rate: u8,
}

impl DepartmentStats {
    pub fn verification_health(&self) -> RateHealth {
        RateHealth::from_rate(self.verification_rate, VERIFICATION_RATE_TARGET)
    }

    pub fn payment_health(&self) -> RateHealth {
        RateHealth::from_rate(self.payment_rate, PAYMENT_RATE_TARGET)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionOverview {
    pub total_pensioners: u32,
    pub pending_verifications: u32,
    pub pending_payments: u32,
    pub verified_this_month: u32,
    pub departments: Vec<DepartmentStats>,
}

impl PensionOverview {
    pub fn department(&self, department: Department) -> Option<&DepartmentStats> {
        self.departments.iter().find(|d| d.department == department)
    }
}

/// One line of the "Recent Verification Activities" feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u32,
    pub name: String,
    pub masked_aadhaar: String,
    pub status: VerificationStatus,
    /// Human-readable age, e.g. "2 hours ago"
    pub time: String,
    pub department: Department,
}

/// Format a count with thousands separators ("2,456").
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_health_thresholds() {
        let stats = DepartmentStats {
            department: Department::Healthcare,
            count: 632,
            verification_rate: 87,
            payment_rate: 95,
        };
        assert_eq!(stats.verification_health(), RateHealth::NeedsAttention);
        assert_eq!(stats.payment_health(), RateHealth::Good);
        assert_eq!(RateHealth::NeedsAttention.label(), "Needs Attention");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(312), "312");
        assert_eq!(group_thousands(2456), "2,456");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
