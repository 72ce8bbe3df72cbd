//! Edge case and boundary condition tests
//!
//! These tests verify the flows handle unusual inputs and out-of-order
//! interactions without changing state.

use pensionguardian_core::fixtures::{current_pensioner, overview, pensioners};
use pensionguardian_core::{
    validate_admin_form, AdminCredentials, CaptureStatus, Department, DepartmentFilter,
    FaceCapture, GuardianConfig, GuardianError, LivenessSequencer, LivenessStep, PensionerFilter,
    PensionerLogin, StatusFilter, VerificationStatus,
};

// ============================================================================
// Login Input Tests
// ============================================================================

#[test]
fn test_aadhaar_with_whitespace_rejected() {
    let login = PensionerLogin::new();
    for input in [" 123456789012", "123456789012 ", "1234 5678 9012", "1234-5678-9012"] {
        assert!(
            matches!(login.request_otp(input), Err(GuardianError::InvalidAadhaar)),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_all_zero_aadhaar_is_well_formed() {
    // Format only: no checksum is applied
    assert!(PensionerLogin::new().request_otp("000000000000").is_ok());
}

#[test]
fn test_otp_before_request_is_invalid_operation() {
    let login = PensionerLogin::new();
    assert!(matches!(
        login.verify_otp("123456"),
        Err(GuardianError::InvalidOperation(_))
    ));
}

#[test]
fn test_admin_form_counts_characters_not_bytes() {
    // Three characters, nine bytes
    assert!(validate_admin_form("адм", "secret").username.is_none());
    assert!(validate_admin_form("", "").username.is_some());
}

#[test]
fn test_admin_credentials_are_exact() {
    let creds = AdminCredentials::default();
    assert!(creds.verify(" admin", "admin123").is_err());
    assert!(creds.verify("admin", "admin123 ").is_err());
    assert!(creds.verify("", "").is_err());
}

// ============================================================================
// Sequencer Tests
// ============================================================================

#[test]
fn test_full_increment_finishes_each_step_in_one_tick() {
    let mut seq = LivenessSequencer::new(100);
    seq.begin().unwrap();
    let advance = seq.tick().unwrap();
    assert_eq!(advance.to, LivenessStep::Mouth);
}

#[test]
fn test_ticks_while_awaiting_resume_are_ignored() {
    let mut seq = LivenessSequencer::new(100);
    seq.begin().unwrap();
    seq.tick();
    for _ in 0..10 {
        assert!(seq.tick().is_none());
    }
    assert_eq!(seq.step(), LivenessStep::Mouth);
    assert_eq!(seq.progress(), 0);
}

#[test]
fn test_capture_ticks_before_start_are_ignored() {
    let mut capture = FaceCapture::new(100);
    assert!(!capture.tick());
    assert_eq!(capture.status(), CaptureStatus::Idle);
    assert_eq!(capture.progress(), 0);
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_search_for_unknown_text_is_empty() {
    let records = pensioners();
    let filter = PensionerFilter::new().with_query("zzz");
    assert!(filter.apply(&records).is_empty());
}

#[test]
fn test_search_is_not_trimmed() {
    let records = pensioners();
    // "John Doe" contains a space; a leading space still matches inside names
    let filter = PensionerFilter::new().with_query(" doe");
    assert_eq!(filter.apply(&records).len(), 1);
}

#[test]
fn test_every_status_filter_partitions_the_table() {
    let records = pensioners();
    let total: usize = VerificationStatus::ALL
        .into_iter()
        .map(|s| {
            PensionerFilter::new()
                .with_status(StatusFilter::Only(s))
                .apply(&records)
                .len()
        })
        .sum();
    assert_eq!(total, records.len());
}

#[test]
fn test_every_department_filter_partitions_the_table() {
    let records = pensioners();
    let total: usize = Department::ALL
        .into_iter()
        .map(|d| {
            PensionerFilter::new()
                .with_department(DepartmentFilter::Only(d))
                .apply(&records)
                .len()
        })
        .sum();
    assert_eq!(total, records.len());
}

#[test]
fn test_department_links_resolve() {
    // Every department tab in the overview links to a non-empty table
    let records = pensioners();
    for stats in overview().departments {
        let filter = PensionerFilter::new()
            .with_department(DepartmentFilter::from_query(stats.department.slug()));
        assert_eq!(filter.department, DepartmentFilter::Only(stats.department));
        assert!(!filter.apply(&records).is_empty(), "{}", stats.department);
    }
}

// ============================================================================
// Fixture / Config Tests
// ============================================================================

#[test]
fn test_dashboard_profile_is_paid() {
    let profile = current_pensioner();
    assert!(profile.payment_status.is_paid());
    assert_eq!(profile.aadhaar.masked(), "1234XXXXXXXX");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GuardianConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: GuardianConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_config_object_is_default() {
    let parsed: GuardianConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, GuardianConfig::default());
}
