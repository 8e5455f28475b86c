use crate::utils::error::{JanisError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(JanisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// An empty list means "not given"; anything else must have exactly `expected` items.
pub fn validate_component_count<T: std::fmt::Debug>(
    field_name: &str,
    values: &[T],
    expected: usize,
) -> Result<()> {
    if !values.is_empty() && values.len() != expected {
        return Err(JanisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", values),
            reason: format!("Expected exactly {} components, got {}", expected, values.len()),
        });
    }
    Ok(())
}

pub fn validate_exclusive(field_name: &str, other_field: &str, both_set: bool) -> Result<()> {
    if both_set {
        return Err(JanisError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("{} and {} cannot be set together", field_name, other_field),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("theme.name", "dark").is_ok());
        assert!(validate_non_empty_string("theme.name", "").is_err());
        assert!(validate_non_empty_string("theme.name", "   ").is_err());
    }

    #[test]
    fn test_validate_component_count() {
        assert!(validate_component_count::<u8>("rgb", &[], 3).is_ok());
        assert!(validate_component_count("rgb", &[1u8, 2, 3], 3).is_ok());
        assert!(validate_component_count("rgb", &[1u8, 2], 3).is_err());
        assert!(validate_component_count("rgb", &[1u8, 2, 3, 4], 3).is_err());
    }

    #[test]
    fn test_validate_exclusive() {
        assert!(validate_exclusive("styles.a.hex", "styles.a.rgb", false).is_ok());

        let err = validate_exclusive("styles.a.hex", "styles.a.rgb", true).unwrap_err();
        assert!(err.to_string().contains("cannot be set together"));
    }
}
