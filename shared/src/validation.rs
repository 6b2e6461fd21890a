//! Validation utilities for the Inventory Management API
//!
//! Pure field-level rules, mirrored from the request schemas of the HTTP
//! surface. Services translate the returned messages into field-scoped
//! 400 responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Maximum length for free-text fields (names, descriptions, details)
pub const MAX_TEXT_LEN: usize = 250;

/// Maximum length for person name fields
pub const MAX_NAME_LEN: usize = 150;

/// Characters accepted as the "special" class in passwords
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Validate a required text field: non-empty after trimming, bounded length
pub fn validate_required_text(value: &str, max_len: usize) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("is not allowed to be empty");
    }
    if trimmed.chars().count() > max_len {
        return Err("is too long");
    }
    Ok(())
}

/// Validate an optional text field: when present, same rules as required text
pub fn validate_optional_text(value: Option<&str>, max_len: usize) -> Result<(), &'static str> {
    match value {
        Some(v) => validate_required_text(v, max_len),
        None => Ok(()),
    }
}

/// Validate an email address; bounded so it fits the storage column
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err("is too long");
    }
    if !validator::validate_email(trimmed) {
        return Err("must be a valid email");
    }
    Ok(())
}

/// Validate password strength: 8..=30 characters, at least one lowercase
/// letter, one uppercase letter, one digit, one special character, no spaces
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    let len = value.chars().count();
    if len < 8 {
        return Err("must contain at least 8 characters");
    }
    if len > 30 {
        return Err("must contain at most 30 characters");
    }
    if value.chars().any(char::is_whitespace) {
        return Err("must not contain spaces");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("must contain at least one lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("must contain at least one uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("must contain at least one number");
    }
    if !value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err("must contain at least one special character");
    }
    Ok(())
}

/// Validate a non-negative amount (quantities, prices)
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("must be greater than or equal to 0");
    }
    Ok(())
}

/// Validate that a batch expiration date is not in the past
pub fn validate_expiration_date(
    value: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), &'static str> {
    if value < now {
        return Err("must not be in the past");
    }
    Ok(())
}

/// Validate that a movement date is not in the future
pub fn validate_movement_date(
    value: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), &'static str> {
    if value > now {
        return Err("must not be in the future");
    }
    Ok(())
}

/// Validate that a period's end is not before its start
pub fn validate_period(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), &'static str> {
    if end < start {
        return Err("must be greater than or equal to the start date");
    }
    Ok(())
}

/// Parse a UUID out of a path or body string
pub fn parse_uuid(value: &str) -> Result<Uuid, &'static str> {
    Uuid::parse_str(value.trim()).map_err(|_| "must be a valid UUID")
}

/// Parse a datetime from RFC 3339, or a bare date taken as midnight UTC
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, &'static str> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = trimmed.parse::<chrono::NaiveDate>() {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    Err("must be a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text("   ", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text("Dairy", MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_required_text(&long, MAX_TEXT_LEN).is_err());
        let max = "x".repeat(MAX_TEXT_LEN);
        assert!(validate_required_text(&max, MAX_TEXT_LEN).is_ok());
    }

    #[test]
    fn optional_text_accepts_none() {
        assert!(validate_optional_text(None, MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(Some(""), MAX_TEXT_LEN).is_err());
    }

    #[test]
    fn password_policy() {
        assert!(validate_password("Abcdef1!").is_ok());
        assert!(validate_password("abcdef1!").is_err()); // no uppercase
        assert!(validate_password("ABCDEF1!").is_err()); // no lowercase
        assert!(validate_password("Abcdefg!").is_err()); // no digit
        assert!(validate_password("Abcdefg1").is_err()); // no special
        assert!(validate_password("Ab1!").is_err()); // too short
        assert!(validate_password("Abcdef 1!").is_err()); // contains space
        let long = format!("Aa1!{}", "x".repeat(30));
        assert!(validate_password(&long).is_err()); // too long
    }

    #[test]
    fn email_rule() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn email_length_bound() {
        let long = format!("{}@example.com", "x".repeat(MAX_TEXT_LEN));
        assert_eq!(validate_email(&long), Err("is too long"));
    }

    #[test]
    fn non_negative_rule() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn expiration_and_movement_dates() {
        let now = Utc::now();
        assert!(validate_expiration_date(now, now).is_ok());
        assert!(validate_expiration_date(now - Duration::days(1), now).is_err());
        assert!(validate_movement_date(now, now).is_ok());
        assert!(validate_movement_date(now + Duration::days(1), now).is_err());
    }

    #[test]
    fn period_rule() {
        let now = Utc::now();
        assert!(validate_period(now, now).is_ok());
        assert!(validate_period(now, now - Duration::seconds(1)).is_err());
    }

    #[test]
    fn datetime_parsing() {
        assert!(parse_datetime("2026-09-01T12:00:00Z").is_ok());
        assert!(parse_datetime("2026-09-01T12:00:00+02:00").is_ok());
        assert!(parse_datetime("2026-09-01").is_ok());
        assert!(parse_datetime("next tuesday").is_err());
    }

    #[test]
    fn uuid_parsing() {
        assert!(parse_uuid("b9a1c9e2-0000-4000-8000-000000000000").is_ok());
        assert!(parse_uuid(" b9a1c9e2-0000-4000-8000-000000000000 ").is_ok());
        assert!(parse_uuid("not-a-uuid").is_err());
    }
}
