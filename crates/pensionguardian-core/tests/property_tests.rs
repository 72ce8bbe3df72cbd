//! Property-based tests for the verification flows
//!
//! Uses proptest to check the sequencing, progress and validation invariants
//! under arbitrary interaction orders and inputs.

use pensionguardian_core::fixtures::pensioners;
use pensionguardian_core::{
    Aadhaar, Department, DepartmentFilter, LivenessSequencer, LivenessStep, Otp,
    PensionerFilter, StatusFilter, VerificationStatus,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Things the user (or the timer) can do to the liveness screen
#[derive(Debug, Clone)]
enum LivenessOp {
    Begin,
    Resume,
    Tick,
}

fn liveness_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LivenessOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(LivenessOp::Begin),
            1 => Just(LivenessOp::Resume),
            8 => Just(LivenessOp::Tick),
        ],
        0..max_ops,
    )
}

fn department_filter_strategy() -> impl Strategy<Value = DepartmentFilter> {
    prop_oneof![
        Just(DepartmentFilter::All),
        prop::sample::select(Department::ALL.to_vec()).prop_map(DepartmentFilter::Only),
    ]
}

fn status_filter_strategy() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        prop::sample::select(VerificationStatus::ALL.to_vec()).prop_map(StatusFilter::Only),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Steps are only ever entered in the fixed order, one at a time
    #[test]
    fn steps_never_skip_or_repeat(
        increment in 1u8..=100,
        ops in liveness_ops_strategy(400),
    ) {
        let mut seq = LivenessSequencer::new(increment);
        let mut visited = vec![seq.step()];

        for op in ops {
            match op {
                LivenessOp::Begin => { let _ = seq.begin(); }
                LivenessOp::Resume => { let _ = seq.resume(); }
                LivenessOp::Tick => {
                    if let Some(advance) = seq.tick() {
                        prop_assert_eq!(Some(advance.to), advance.from.next());
                    }
                }
            }
            if visited.last() != Some(&seq.step()) {
                visited.push(seq.step());
            }
        }

        let expected = &LivenessStep::ALL[..visited.len()];
        prop_assert_eq!(visited.as_slice(), expected);
    }

    /// Within a step progress only grows; entering a step starts it at 0
    #[test]
    fn progress_monotonic_and_reset_on_entry(
        increment in 1u8..=100,
        ops in liveness_ops_strategy(400),
    ) {
        let mut seq = LivenessSequencer::new(increment);
        let mut last = (seq.step(), seq.progress());

        for op in ops {
            match op {
                LivenessOp::Begin => { let _ = seq.begin(); }
                LivenessOp::Resume => { let _ = seq.resume(); }
                LivenessOp::Tick => { seq.tick(); }
            }
            let now = (seq.step(), seq.progress());
            if now.0 == last.0 {
                prop_assert!(now.1 >= last.1, "progress fell from {} to {}", last.1, now.1);
            } else {
                prop_assert_eq!(now.1, 0);
            }
            prop_assert!(now.1 <= 100);
            last = now;
        }
    }

    /// Any 12-digit string is an Aadhaar; any other length is not
    #[test]
    fn aadhaar_accepts_exactly_twelve_digits(digits in "[0-9]{0,20}") {
        prop_assert_eq!(Aadhaar::parse(&digits).is_ok(), digits.len() == 12);
    }

    /// A single non-digit anywhere rejects an otherwise valid Aadhaar
    #[test]
    fn aadhaar_rejects_non_digits(
        prefix in "[0-9]{0,11}",
        bad in "[^0-9]",
    ) {
        let mut input = prefix.clone();
        input.push_str(&bad);
        while input.chars().count() < 12 {
            input.push('0');
        }
        prop_assert!(Aadhaar::parse(&input).is_err());
    }

    #[test]
    fn otp_accepts_exactly_six_digits(input in "[0-9a-z ]{0,10}") {
        let valid = input.len() == 6 && input.bytes().all(|b| b.is_ascii_digit());
        prop_assert_eq!(Otp::parse(&input).is_ok(), valid);
    }

    /// Every shown record satisfies every active filter, and nothing that
    /// satisfies them all is hidden
    #[test]
    fn filter_is_exact_predicate_scan(
        department in department_filter_strategy(),
        status in status_filter_strategy(),
        query in "[a-zA-Z0-9]{0,4}",
    ) {
        let records = pensioners();
        let filter = PensionerFilter::new()
            .with_department(department)
            .with_status(status)
            .with_query(query);
        let shown = filter.apply(&records);

        for p in &shown {
            prop_assert!(department.matches(p.department));
            prop_assert!(status.matches(p.status));
        }
        let expected = records.iter().filter(|p| filter.matches(p)).count();
        prop_assert_eq!(shown.len(), expected);
        prop_assert!(shown.len() <= records.len());
    }
}
