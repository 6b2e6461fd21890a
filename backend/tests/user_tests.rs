//! Tests for user account rules
//!
//! Covers the password strength policy and email validation that back
//! the /user resource.

use proptest::prelude::*;

use shared::validation::{validate_email, validate_password, PASSWORD_SPECIAL_CHARS};

// ============================================================================
// Password Policy Tests
// ============================================================================

mod password_policy {
    use super::*;

    #[test]
    fn well_formed_password_passes() {
        assert!(validate_password("Sup3rS3cret!").is_ok());
        assert!(validate_password("aB1!aB1!").is_ok()); // exactly 8 chars
    }

    #[test]
    fn every_character_class_is_required() {
        assert_eq!(
            validate_password("lower1!lower"),
            Err("must contain at least one uppercase letter")
        );
        assert_eq!(
            validate_password("UPPER1!UPPER"),
            Err("must contain at least one lowercase letter")
        );
        assert_eq!(
            validate_password("NoDigits!"),
            Err("must contain at least one number")
        );
        assert_eq!(
            validate_password("NoSpecial1"),
            Err("must contain at least one special character")
        );
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            validate_password("aB1!"),
            Err("must contain at least 8 characters")
        );
        let long = format!("aB1!{}", "x".repeat(27)); // 31 chars
        assert_eq!(validate_password(&long), Err("must contain at most 30 characters"));
        let max = format!("aB1!{}", "x".repeat(26)); // 30 chars
        assert!(validate_password(&max).is_ok());
    }

    #[test]
    fn spaces_are_rejected() {
        assert_eq!(
            validate_password("aB1! aB1!"),
            Err("must not contain spaces")
        );
        assert_eq!(
            validate_password(" aB1!aB1!"),
            Err("must not contain spaces")
        );
    }

    #[test]
    fn each_special_character_counts() {
        for c in PASSWORD_SPECIAL_CHARS.chars() {
            let candidate = format!("aB1{}aB1{}", c, c);
            assert!(validate_password(&candidate).is_ok(), "rejected {}", c);
        }
    }
}

// ============================================================================
// Email Tests
// ============================================================================

mod email_rules {
    use super::*;

    #[test]
    fn ordinary_addresses_pass() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn malformed_addresses_fail() {
        assert_eq!(validate_email(""), Err("must be a valid email"));
        assert_eq!(validate_email("no-at-sign"), Err("must be a valid email"));
        assert_eq!(validate_email("missing@domain@twice"), Err("must be a valid email"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(validate_email("  ana@example.com  ").is_ok());
    }

    #[test]
    fn overlong_addresses_fail_the_length_bound() {
        // Structurally valid but longer than the storage column allows
        let long = format!("{}@example.com", "x".repeat(240));
        assert_eq!(validate_email(&long), Err("is too long"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A password assembled from all four classes within bounds always passes
    #[test]
    fn assembled_passwords_pass(
        lower in "[a-z]{3,8}",
        upper in "[A-Z]{2,8}",
        digits in "[0-9]{2,8}",
        special_idx in 0usize..8,
    ) {
        let special = PASSWORD_SPECIAL_CHARS.chars().nth(special_idx).unwrap();
        let candidate = format!("{}{}{}{}", lower, upper, digits, special);
        prop_assert!(validate_password(&candidate).is_ok());
    }

    /// Passwords missing a digit never pass
    #[test]
    fn digitless_passwords_fail(body in "[a-zA-Z!@#$%^&*]{8,30}") {
        prop_assume!(!body.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(validate_password(&body).is_err());
    }
}
