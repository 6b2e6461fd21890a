//! Tests for case-insensitive uniqueness semantics
//!
//! Duplicate detection for descriptions, names, and emails compares
//! case-folded values. The schema enforces the same rule with unique
//! indexes over UPPER()/LOWER() expressions, so the comparison modeled
//! here is the one the database applies.

use proptest::prelude::*;

/// The comparison the duplicate checks and unique indexes agree on
fn collides(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

// ============================================================================
// Unit Tests
// ============================================================================

mod duplicate_detection {
    use super::*;

    #[test]
    fn exact_match_collides() {
        assert!(collides("Dairy", "Dairy"));
    }

    #[test]
    fn case_variants_collide() {
        assert!(collides("Dairy", "DAIRY"));
        assert!(collides("Dairy", "dairy"));
        assert!(collides("dAiRy", "DaIrY"));
    }

    #[test]
    fn distinct_values_do_not_collide() {
        assert!(!collides("Dairy", "Bakery"));
        assert!(!collides("Dairy", "Dairy Products"));
    }

    #[test]
    fn emails_fold_the_same_way() {
        assert!(collides("Ana@Example.com", "ana@example.com"));
        assert!(!collides("ana@example.com", "ana@example.org"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any two case variants of the same string collide
    #[test]
    fn case_variants_always_collide(s in "[a-zA-Z0-9 ]{1,50}", flips in any::<u64>()) {
        let variant: String = s
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if flips & (1 << (i % 64)) != 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        prop_assert!(collides(&s, &variant));
    }

    /// Collision is symmetric
    #[test]
    fn collision_is_symmetric(a in "[a-zA-Z0-9 ]{1,50}", b in "[a-zA-Z0-9 ]{1,50}") {
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    /// A value always collides with itself, so writing a row back with its
    /// own unchanged value must be excluded from the duplicate check by id
    #[test]
    fn self_collision_is_total(s in "[a-zA-Z0-9 ]{1,50}") {
        prop_assert!(collides(&s, &s));
    }
}
