use crate::utils::error::{Result, RosterError};
use chrono::NaiveDate;
use regex::Regex;

/// Upper bound accepted for the age field.
pub const MAX_AGE: u32 = 110;

pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }

    if value.chars().any(char::is_numeric) {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Name contains digits".to_string(),
        });
    }

    Ok(())
}

pub fn validate_post_code(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^\d{2}-\d{3}$").unwrap();
    if !re.is_match(value) {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected format '00-000'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_age(field_name: &str, value: u32) -> Result<()> {
    if value > MAX_AGE {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Age must be at most {}", MAX_AGE),
        });
    }
    Ok(())
}

pub fn validate_birth_date(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    if !re.is_match(value) {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected format 'YYYY-MM-DD'".to_string(),
        });
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(RosterError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a real calendar date".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("first_name", "Irena ").is_ok());
        assert!(validate_name("sur_name", "  Swoboda").is_ok());
        assert!(validate_name("first_name", "").is_err());
        assert!(validate_name("first_name", "   ").is_err());
        assert!(validate_name("sur_name", "   Pid7ck").is_err());
    }

    #[test]
    fn test_validate_post_code() {
        assert!(validate_post_code("post_code", "00-432").is_ok());
        assert!(validate_post_code("post_code", "74-832").is_ok());
        assert!(validate_post_code("post_code", "22-432y").is_err());
        assert!(validate_post_code("post_code", "WN-432").is_err());
        assert!(validate_post_code("post_code", "0-4321").is_err());
        assert!(validate_post_code("post_code", "").is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age("age", 110).is_ok());
        assert!(validate_age("age", 0).is_ok());
        assert!(validate_age("age", 111).is_err());
        assert!(validate_age("age", 120).is_err());
    }

    #[test]
    fn test_validate_birth_date() {
        assert!(validate_birth_date("birth_date", "1965-12-11").is_ok());
        assert!(validate_birth_date("birth_date", "2000-02-29").is_ok());
        assert!(validate_birth_date("birth_date", "1994-48-01").is_err());
        assert!(validate_birth_date("birth_date", "20FR-07-09").is_err());
        assert!(validate_birth_date("birth_date", "2001-02-29").is_err());
        assert!(validate_birth_date("birth_date", "1965-12-1").is_err());
        assert!(validate_birth_date("birth_date", "").is_err());
    }

    #[test]
    fn test_validation_error_carries_field_and_value() {
        let err = validate_post_code("post_code", "WN-432").unwrap_err();
        match err {
            RosterError::ValidationError { field, value, .. } => {
                assert_eq!(field, "post_code");
                assert_eq!(value, "WN-432");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
