//! Tests for movement date rules
//!
//! Movements record when goods moved, so their dates must not be in the
//! future, and period queries require a well-ordered date range.

use chrono::{Duration, Utc};
use proptest::prelude::*;

use shared::validation::{parse_datetime, validate_movement_date, validate_period};

// ============================================================================
// Movement Date Tests
// ============================================================================

mod movement_dates {
    use super::*;

    #[test]
    fn past_dates_are_valid() {
        let now = Utc::now();
        assert!(validate_movement_date(now - Duration::days(30), now).is_ok());
        assert!(validate_movement_date(now - Duration::seconds(1), now).is_ok());
    }

    #[test]
    fn the_present_moment_is_valid() {
        let now = Utc::now();
        assert!(validate_movement_date(now, now).is_ok());
    }

    #[test]
    fn future_dates_are_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_movement_date(now + Duration::seconds(1), now),
            Err("must not be in the future")
        );
        assert_eq!(
            validate_movement_date(now + Duration::days(365), now),
            Err("must not be in the future")
        );
    }
}

// ============================================================================
// Period Tests
// ============================================================================

mod periods {
    use super::*;

    #[test]
    fn ordered_period_is_valid() {
        let start = parse_datetime("2026-01-01").unwrap();
        let end = parse_datetime("2026-01-31").unwrap();
        assert!(validate_period(start, end).is_ok());
    }

    #[test]
    fn single_day_period_is_valid() {
        let day = parse_datetime("2026-01-15").unwrap();
        assert!(validate_period(day, day).is_ok());
    }

    #[test]
    fn inverted_period_is_rejected() {
        let start = parse_datetime("2026-01-31").unwrap();
        let end = parse_datetime("2026-01-01").unwrap();
        assert_eq!(
            validate_period(start, end),
            Err("must be greater than or equal to the start date")
        );
    }
}

// ============================================================================
// Date Parsing Tests
// ============================================================================

mod date_parsing {
    use super::*;

    #[test]
    fn accepted_formats() {
        assert!(parse_datetime("2026-02-28").is_ok());
        assert!(parse_datetime("2026-02-28T14:30:00Z").is_ok());
        assert!(parse_datetime("2026-02-28T14:30:00.123Z").is_ok());
        assert!(parse_datetime("2026-02-28T14:30:00-03:00").is_ok());
    }

    #[test]
    fn rejected_formats() {
        assert_eq!(parse_datetime(""), Err("must be a valid date"));
        assert_eq!(parse_datetime("28/02/2026"), Err("must be a valid date"));
        assert_eq!(parse_datetime("2026-13-01"), Err("must be a valid date"));
        assert_eq!(parse_datetime("2026-02-30"), Err("must be a valid date"));
        assert_eq!(parse_datetime("yesterday"), Err("must be a valid date"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whether a date is in the future fully determines the verdict
    #[test]
    fn future_offset_decides(offset_secs in -86_400i64 * 365..86_400 * 365) {
        let now = Utc::now();
        let date = now + Duration::seconds(offset_secs);
        prop_assert_eq!(validate_movement_date(date, now).is_ok(), offset_secs <= 0);
    }

    /// A period is valid exactly when its end does not precede its start
    #[test]
    fn period_ordering_decides(a in 0i64..10_000, b in 0i64..10_000) {
        let base = parse_datetime("2026-01-01").unwrap();
        let start = base + Duration::hours(a);
        let end = base + Duration::hours(b);
        prop_assert_eq!(validate_period(start, end).is_ok(), b >= a);
    }

    /// Every calendar date in range parses as midnight UTC
    #[test]
    fn bare_dates_parse(year in 2000i32..2100, month in 1u32..13, day in 1u32..29) {
        let formatted = format!("{:04}-{:02}-{:02}", year, month, day);
        let parsed = parse_datetime(&formatted).unwrap();
        prop_assert!(parsed.to_rfc3339().starts_with(&formatted));
    }
}
