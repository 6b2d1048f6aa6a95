//! Input validation utilities.

/// Validate that a string is not empty.
pub fn validate_non_empty(s: &str, field: &str) -> crate::types::Result<()> {
    if s.is_empty() {
        return Err(crate::types::Error::validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Validate a registry type name such as `scout.Fixture01`.
///
/// Must be non-empty and free of whitespace; dots separate the namespace.
pub fn validate_type_name(name: &str) -> crate::types::Result<()> {
    validate_non_empty(name, "type name")?;
    if name.chars().any(char::is_whitespace) {
        return Err(crate::types::Error::validation(format!(
            "type name '{}' must not contain whitespace",
            name
        )));
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Err(crate::types::Error::validation(format!(
            "type name '{}' must not start or end with '.'",
            name
        )));
    }
    Ok(())
}
