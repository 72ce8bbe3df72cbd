//! In-memory demo data.
//!
//! Every screen reads from these functions; nothing is loaded or persisted.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::stats::{DepartmentStats, PensionOverview, RecentActivity};
use crate::types::{
    Aadhaar, Department, PaymentStatus, Pensioner, PensionerId, PensionerProfile,
    VerificationStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn pensioner(
    id: &str,
    name: &str,
    aadhaar: &str,
    department: Department,
    status: VerificationStatus,
    last_verified: NaiveDate,
    next_due: NaiveDate,
    payment_status: PaymentStatus,
) -> Pensioner {
    Pensioner {
        id: PensionerId::new(id),
        name: name.to_string(),
        aadhaar: Aadhaar::fixture(aadhaar),
        department,
        status,
        last_verified,
        next_due,
        payment_status,
    }
}

/// The admin pensioner table.
pub fn pensioners() -> Vec<Pensioner> {
    use Department::*;
    use PaymentStatus::{Paid, Pending as Unpaid};
    use VerificationStatus::*;

    vec![
        pensioner("P001", "John Doe", "123456789012", Education, Verified, date(2023, 3, 15), date(2023, 6, 15), Paid),
        pensioner("P002", "Jane Smith", "987654321098", Healthcare, Pending, date(2023, 1, 10), date(2023, 4, 10), Unpaid),
        pensioner("P003", "Robert Johnson", "456789012345", CivilServices, Verified, date(2023, 2, 22), date(2023, 5, 22), Paid),
        pensioner("P004", "Emily Brown", "789012345678", Education, Failed, date(2023, 2, 5), date(2023, 5, 5), Unpaid),
        pensioner("P005", "Michael Davis", "234567890123", Defense, Verified, date(2023, 3, 1), date(2023, 6, 1), Paid),
        pensioner("P006", "Sarah Wilson", "345678901234", Healthcare, Pending, date(2023, 1, 25), date(2023, 4, 25), Paid),
        pensioner("P007", "David Taylor", "567890123456", Education, Verified, date(2023, 2, 18), date(2023, 5, 18), Paid),
        pensioner("P008", "Jennifer Anderson", "678901234567", CivilServices, Verified, date(2023, 3, 10), date(2023, 6, 10), Unpaid),
    ]
}

/// The signed-in pensioner shown on the dashboard.
pub fn current_pensioner() -> PensionerProfile {
    let last_verification = NaiveDateTime::new(
        date(2023, 3, 15),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default(),
    );

    PensionerProfile {
        pension_id: PensionerId::new("P001"),
        aadhaar: Aadhaar::fixture("123456789012"),
        name: "John Doe".to_string(),
        profession: "Retired Teacher".to_string(),
        department: Department::Education,
        last_verification,
        last_paid: date(2023, 3, 5),
        next_payment_due: date(2023, 4, 5),
        payment_status: PaymentStatus::Paid,
        next_verification_due: date(2023, 6, 15),
    }
}

pub fn overview() -> PensionOverview {
    let dept = |department, count, verification_rate, payment_rate| DepartmentStats {
        department,
        count,
        verification_rate,
        payment_rate,
    };

    PensionOverview {
        total_pensioners: 2456,
        pending_verifications: 128,
        pending_payments: 45,
        verified_this_month: 312,
        departments: vec![
            dept(Department::Education, 845, 92, 98),
            dept(Department::Healthcare, 632, 87, 95),
            dept(Department::CivilServices, 512, 94, 97),
            dept(Department::Defense, 467, 98, 99),
        ],
    }
}

pub fn recent_activities() -> Vec<RecentActivity> {
    let activity = |id, name: &str, masked: &str, status, time: &str, department| RecentActivity {
        id,
        name: name.to_string(),
        masked_aadhaar: masked.to_string(),
        status,
        time: time.to_string(),
        department,
    };

    vec![
        activity(1, "John Doe", "1234XXXXXXXX", VerificationStatus::Verified, "2 hours ago", Department::Education),
        activity(2, "Jane Smith", "9876XXXXXXXX", VerificationStatus::Pending, "3 hours ago", Department::Healthcare),
        activity(3, "Robert Johnson", "5432XXXXXXXX", VerificationStatus::Verified, "5 hours ago", Department::CivilServices),
        activity(4, "Emily Brown", "7890XXXXXXXX", VerificationStatus::Failed, "1 day ago", Department::Education),
        activity(5, "Michael Davis", "2345XXXXXXXX", VerificationStatus::Verified, "1 day ago", Department::Defense),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pensioner_fixture_is_well_formed() {
        let records = pensioners();
        assert_eq!(records.len(), 8);

        let ids: HashSet<_> = records.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), records.len());

        for p in &records {
            assert!(Aadhaar::parse(p.aadhaar.as_str()).is_ok());
            assert!(p.next_due > p.last_verified, "{} due before verified", p.id);
        }
    }

    #[test]
    fn test_overview_covers_every_department() {
        let overview = overview();
        for dept in Department::ALL {
            assert!(overview.department(dept).is_some());
        }
        let sum: u32 = overview.departments.iter().map(|d| d.count).sum();
        assert_eq!(sum, overview.total_pensioners);
    }

    #[test]
    fn test_current_pensioner_matches_table() {
        let profile = current_pensioner();
        let row = pensioners()
            .into_iter()
            .find(|p| p.id == profile.pension_id)
            .unwrap();
        assert_eq!(row.name, profile.name);
        assert_eq!(row.aadhaar, profile.aadhaar);
        assert_eq!(row.next_due, profile.next_verification_due);
    }
}
