//! Admin pensioner search and filters.
//!
//! A record is shown when it matches the search text AND the department
//! filter AND the status filter. Each filter's `All` value (and the empty
//! search) matches everything.

use std::fmt;
use std::str::FromStr;

use crate::error::GuardianError;
use crate::types::{Department, Pensioner, VerificationStatus};

/// Select value meaning "no restriction"
pub const ALL_KEY: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn matches(&self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => *wanted == department,
        }
    }

    /// Select value for this filter.
    pub fn key(&self) -> &'static str {
        match self {
            DepartmentFilter::All => ALL_KEY,
            DepartmentFilter::Only(d) => d.key(),
        }
    }

    /// Parse a select or query value, treating anything unrecognised as
    /// `All` so a stale link never hides the whole table.
    pub fn from_query(value: &str) -> Self {
        value.parse().unwrap_or_else(|e| {
            tracing::debug!("ignoring department filter: {}", e);
            DepartmentFilter::All
        })
    }

    /// Every selectable option, `All` first.
    pub fn options() -> Vec<(DepartmentFilter, &'static str)> {
        std::iter::once((DepartmentFilter::All, "All Departments"))
            .chain(Department::ALL.into_iter().map(|d| (DepartmentFilter::Only(d), d.name())))
            .collect()
    }
}

impl FromStr for DepartmentFilter {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_KEY) {
            return Ok(DepartmentFilter::All);
        }
        s.parse().map(DepartmentFilter::Only)
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(VerificationStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: VerificationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_KEY,
            StatusFilter::Only(s) => s.key(),
        }
    }

    pub fn options() -> Vec<(StatusFilter, &'static str)> {
        std::iter::once((StatusFilter::All, "All Statuses"))
            .chain(
                VerificationStatus::ALL
                    .into_iter()
                    .map(|s| (StatusFilter::Only(s), s.label())),
            )
            .collect()
    }
}

impl FromStr for StatusFilter {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_KEY) {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Search text plus the two select filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PensionerFilter {
    pub query: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
}

impl PensionerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department(mut self, department: DepartmentFilter) -> Self {
        self.department = department;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// True when every filter is at its default.
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty()
            && self.department == DepartmentFilter::All
            && self.status == StatusFilter::All
    }

    /// Name and id match case-insensitively; the Aadhaar matches verbatim.
    pub fn matches_query(&self, pensioner: &Pensioner) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        pensioner.name.to_lowercase().contains(&needle)
            || pensioner.aadhaar.as_str().contains(self.query.as_str())
            || pensioner.id.as_str().to_lowercase().contains(&needle)
    }

    pub fn matches(&self, pensioner: &Pensioner) -> bool {
        self.matches_query(pensioner)
            && self.department.matches(pensioner.department)
            && self.status.matches(pensioner.status)
    }

    /// Matching records, in fixture order.
    pub fn apply<'a>(&self, records: &'a [Pensioner]) -> Vec<&'a Pensioner> {
        records.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::pensioners;

    fn ids(records: &[&Pensioner]) -> Vec<String> {
        records.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let records = pensioners();
        let filter = PensionerFilter::new();
        assert!(filter.is_unrestricted());
        assert_eq!(filter.apply(&records).len(), records.len());
    }

    #[test]
    fn test_search_by_name_id_and_aadhaar() {
        let records = pensioners();

        let by_name = PensionerFilter::new().with_query("SMITH");
        assert_eq!(ids(&by_name.apply(&records)), vec!["P002"]);

        let by_id = PensionerFilter::new().with_query("p00");
        assert_eq!(by_id.apply(&records).len(), 8);

        let by_aadhaar = PensionerFilter::new().with_query("0123456");
        assert_eq!(ids(&by_aadhaar.apply(&records)), vec!["P004", "P007", "P008"]);
    }

    #[test]
    fn test_filters_combine() {
        let records = pensioners();
        let filter = PensionerFilter::new()
            .with_department(DepartmentFilter::Only(Department::Education))
            .with_status(StatusFilter::Only(VerificationStatus::Verified));
        assert_eq!(ids(&filter.apply(&records)), vec!["P001", "P007"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = pensioners();
        let filter = PensionerFilter::new()
            .with_department(DepartmentFilter::Only(Department::Defense))
            .with_status(StatusFilter::Only(VerificationStatus::Failed));
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_query_value_parsing() {
        assert_eq!(DepartmentFilter::from_query(""), DepartmentFilter::All);
        assert_eq!(DepartmentFilter::from_query("all"), DepartmentFilter::All);
        assert_eq!(
            DepartmentFilter::from_query("civil services"),
            DepartmentFilter::Only(Department::CivilServices)
        );
        assert_eq!(DepartmentFilter::from_query("agriculture"), DepartmentFilter::All);
        assert_eq!("FAILED".parse::<StatusFilter>().unwrap(), StatusFilter::Only(VerificationStatus::Failed));
    }

    #[test]
    fn test_options_start_with_all() {
        let departments = DepartmentFilter::options();
        assert_eq!(departments.len(), 5);
        assert_eq!(departments[0], (DepartmentFilter::All, "All Departments"));

        let statuses = StatusFilter::options();
        assert_eq!(statuses.len(), 4);
        for (filter, _) in statuses {
            assert_eq!(filter.key().parse::<StatusFilter>().unwrap(), filter);
        }
    }
}
