//! Strongly-typed identifiers carried inside data objects.
//!
//! On the wire an id is an opaque string; the id type comes from the
//! declared field metadata and is kept alongside the raw value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Error, Result};

/// Separator used by the qualified `type:value` representation.
const QUALIFIER_SEPARATOR: char = ':';

/// Typed id wrapper: id type name plus its opaque raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoId {
    id_type: String,
    value: String,
}

impl DoId {
    /// Create an id of the given type. The raw value must not be empty.
    pub fn new(id_type: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let id_type = id_type.into();
        let value = value.into();
        crate::validation::validate_non_empty(&id_type, "id type")?;
        crate::validation::validate_non_empty(&value, "id value")?;
        Ok(Self { id_type, value })
    }

    /// Create a random UUID (v4) id of the given type.
    pub fn random_uuid(id_type: impl Into<String>) -> Self {
        Self {
            id_type: id_type.into(),
            value: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Parse the qualified `type:value` form. The value may itself contain `:`.
    pub fn parse_qualified(qualified: &str) -> Result<Self> {
        let (id_type, value) = qualified
            .split_once(QUALIFIER_SEPARATOR)
            .ok_or_else(|| Error::invalid_value(format!("'{}' is not a qualified id", qualified)))?;
        Self::new(id_type, value)
    }

    pub fn id_type(&self) -> &str {
        &self.id_type
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Qualified `type:value` form.
    pub fn qualified(&self) -> String {
        format!("{}{}{}", self.id_type, QUALIFIER_SEPARATOR, self.value)
    }
}

impl fmt::Display for DoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_rejected() {
        assert!(DoId::new("scout.UserId", "").is_err());
        assert!(DoId::new("", "42").is_err());
    }

    #[test]
    fn test_qualified_round_trip() {
        let id = DoId::new("scout.UserId", "a:b").unwrap();
        assert_eq!(id.qualified(), "scout.UserId:a:b");
        assert_eq!(DoId::parse_qualified("scout.UserId:a:b").unwrap(), id);
        assert!(DoId::parse_qualified("unqualified").is_err());
    }

    #[test]
    fn test_random_uuid_is_parseable() {
        let id = DoId::random_uuid("scout.UuId");
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        assert_eq!(id.to_string(), id.as_str());
    }
}
