//! Property tests for severity classification.

use chargesheet_core::deadline::{classify, days_remaining, per_case_tier};
use chargesheet_model::{CaseStatus, DeadlineClass, SeverityTier};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn tier_rank(tier: SeverityTier) -> u8 {
    match tier {
        SeverityTier::Safe => 0,
        SeverityTier::Caution => 1,
        SeverityTier::Warning => 2,
        SeverityTier::Critical => 3,
        SeverityTier::Overdue => 4,
        SeverityTier::NotApplicable => u8::MAX,
    }
}

fn any_class() -> impl Strategy<Value = DeadlineClass> {
    prop_oneof![
        Just(DeadlineClass::Days45),
        Just(DeadlineClass::Days60),
        Just(DeadlineClass::Days90),
    ]
}

const TODAY: (i32, u32, u32) = (2024, 6, 1);

fn today() -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

proptest! {
    #[test]
    fn severity_is_monotone_in_elapsed_days(class in any_class(), elapsed in 0u64..200) {
        let now = today();
        let earlier = now.checked_sub_days(Days::new(elapsed)).expect("in range");
        let even_earlier = now.checked_sub_days(Days::new(elapsed + 1)).expect("in range");
        let tier = classify(class, earlier, now, CaseStatus::Open);
        let older_tier = classify(class, even_earlier, now, CaseStatus::Open);
        prop_assert!(tier_rank(older_tier) >= tier_rank(tier));
    }

    #[test]
    fn terminal_status_dominates(class in any_class(), elapsed in 0u64..200) {
        let now = today();
        let filing = now.checked_sub_days(Days::new(elapsed)).expect("in range");
        prop_assert_eq!(
            classify(class, filing, now, CaseStatus::Closed),
            SeverityTier::NotApplicable
        );
    }

    #[test]
    fn overdue_exactly_when_past_deadline(class in any_class(), elapsed in 0u64..200) {
        let now = today();
        let filing = now.checked_sub_days(Days::new(elapsed)).expect("in range");
        let tier = classify(class, filing, now, CaseStatus::Open);
        let past_deadline = (elapsed as i64) > class.days();
        prop_assert_eq!(tier == SeverityTier::Overdue, past_deadline);
    }

    #[test]
    fn at_class_threshold_tier_is_critical(class in any_class()) {
        // Pinning "today = filing + deadline" to the critical boundary, for
        // every class, under the >= comparisons of the aggregate policy.
        let now = today();
        let filing = now
            .checked_sub_days(Days::new(class.days() as u64))
            .expect("in range");
        prop_assert_eq!(
            classify(class, filing, now, CaseStatus::Open),
            SeverityTier::Critical
        );
        prop_assert_eq!(days_remaining(class, filing, now), 0);
    }

    #[test]
    fn per_case_scale_is_monotone(remaining in -50i64..100) {
        prop_assert!(tier_rank(per_case_tier(remaining)) >= tier_rank(per_case_tier(remaining + 1)));
    }
}
