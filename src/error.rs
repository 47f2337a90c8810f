use thiserror::Error;

/// Malformed user input. Always handled at the triggering action and shown
/// in the status line; never terminates the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a number")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field}: value must be finite")]
    NotFinite { field: &'static str },
}

/// Parse a user-entered numeric field, requiring a finite value.
///
/// `f64::from_str` happily accepts "inf" and "NaN", so the finite check is
/// separate from the parse.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
        field,
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_numbers() {
        assert_eq!(parse_field("radius", "5"), Ok(5.0));
        assert_eq!(parse_field("radius", " -3.25 "), Ok(-3.25));
        assert_eq!(parse_field("angle", "+90.0"), Ok(90.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = parse_field("radius", "abc").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotNumeric {
                field: "radius",
                value: "abc".to_string()
            }
        );
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(parse_field("latitude", "").is_err());
        assert!(parse_field("latitude", "   ").is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            parse_field("longitude", "inf"),
            Err(ValidationError::NotFinite { field: "longitude" })
        );
        assert!(parse_field("longitude", "NaN").is_err());
    }
}
