//! Tests for field-level validation rules
//!
//! Covers the text and amount rules shared by every resource:
//! required/optional text bounds, non-negative amounts, and the
//! UUID/date parsing used for path and body references.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::validation::{
    parse_datetime, parse_uuid, validate_non_negative, validate_optional_text,
    validate_required_text, MAX_NAME_LEN, MAX_TEXT_LEN,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Required Text Tests
// ============================================================================

mod required_text {
    use super::*;

    #[test]
    fn accepts_ordinary_values() {
        assert!(validate_required_text("Beverages", MAX_TEXT_LEN).is_ok());
        assert!(validate_required_text("Cold Storage #2", MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(validate_required_text("", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text("   ", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text("\t\n", MAX_TEXT_LEN).is_err());
    }

    #[test]
    fn length_is_measured_after_trimming() {
        // 250 payload characters surrounded by spaces is still valid
        let padded = format!("  {}  ", "x".repeat(MAX_TEXT_LEN));
        assert!(validate_required_text(&padded, MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn boundary_at_max_length() {
        assert!(validate_required_text(&"x".repeat(MAX_TEXT_LEN), MAX_TEXT_LEN).is_ok());
        assert!(validate_required_text(&"x".repeat(MAX_TEXT_LEN + 1), MAX_TEXT_LEN).is_err());
    }

    #[test]
    fn name_fields_use_shorter_bound() {
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN), MAX_NAME_LEN).is_ok());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), MAX_NAME_LEN).is_err());
    }
}

// ============================================================================
// Optional Text Tests
// ============================================================================

mod optional_text {
    use super::*;

    #[test]
    fn absent_is_valid() {
        assert!(validate_optional_text(None, MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn present_follows_required_rules() {
        assert!(validate_optional_text(Some("extra details"), MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(Some(""), MAX_TEXT_LEN).is_err());
        assert!(validate_optional_text(Some("  "), MAX_TEXT_LEN).is_err());
    }
}

// ============================================================================
// Amount Tests
// ============================================================================

mod amounts {
    use super::*;

    #[test]
    fn zero_is_allowed() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
    }

    #[test]
    fn fractional_amounts() {
        assert!(validate_non_negative(dec("0.01")).is_ok());
        assert!(validate_non_negative(dec("1234.56")).is_ok());
        assert!(validate_non_negative(dec("-0.01")).is_err());
    }
}

// ============================================================================
// Reference Parsing Tests
// ============================================================================

mod reference_parsing {
    use super::*;

    #[test]
    fn uuid_roundtrip() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string()), Ok(id));
    }

    #[test]
    fn uuid_rejects_garbage() {
        assert!(parse_uuid("").is_err());
        assert!(parse_uuid("123").is_err());
        assert!(parse_uuid("zzzzzzzz-0000-4000-8000-000000000000").is_err());
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let parsed = parse_datetime("2026-03-15").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-15T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let parsed = parse_datetime("2026-03-15T10:00:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-15T08:00:00+00:00");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any non-blank string within the bound passes the required-text rule
    #[test]
    fn bounded_nonblank_text_is_valid(s in "[a-zA-Z0-9 ]{1,250}") {
        prop_assume!(!s.trim().is_empty());
        prop_assert!(validate_required_text(&s, MAX_TEXT_LEN).is_ok());
    }

    /// Leading and trailing whitespace never changes the verdict
    #[test]
    fn trimming_is_transparent(s in "[a-zA-Z0-9]{1,250}", pad in 0usize..5) {
        let padded = format!("{}{}{}", " ".repeat(pad), s, " ".repeat(pad));
        prop_assert_eq!(
            validate_required_text(&s, MAX_TEXT_LEN),
            validate_required_text(&padded, MAX_TEXT_LEN)
        );
    }

    /// Every generated UUID string parses back to itself
    #[test]
    fn uuid_strings_roundtrip(bytes in any::<[u8; 16]>()) {
        let id = uuid::Uuid::from_bytes(bytes);
        prop_assert_eq!(parse_uuid(&id.to_string()), Ok(id));
    }

    /// Non-negative amounts always pass, negative amounts always fail
    #[test]
    fn amount_sign_decides(mantissa in -1_000_000i64..1_000_000, scale in 0u32..4) {
        let value = Decimal::new(mantissa, scale);
        prop_assert_eq!(validate_non_negative(value).is_ok(), value >= Decimal::ZERO);
    }
}
