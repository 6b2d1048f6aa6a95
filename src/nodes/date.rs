use serde_json::Value;

use super::{unexpected, DoNodeSerializer};
use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::{ValueKind, ValueMetaData};
use crate::types::{Error, JsonDate, Result};

/// Timestamp string ⇄ [`JsonDate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DateDoNodeSerializer;

impl DoNodeSerializer for DateDoNodeSerializer {
    fn name(&self) -> &'static str {
        "date"
    }

    fn can_serialize(&self, value: &DoValue) -> bool {
        matches!(value, DoValue::Date(_))
    }

    fn serialize(&self, value: &DoValue, _serializer: &DoSerializer<'_>) -> Result<Value> {
        match value {
            DoValue::Date(date) => Ok(Value::String(date.format())),
            other => Err(unexpected(self.name(), other)),
        }
    }

    fn can_deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> bool {
        raw.is_string() && meta.is_some_and(|m| m.is_scalar(&ValueKind::Date))
    }

    fn deserialize(
        &self,
        raw: &Value,
        _meta: Option<&ValueMetaData>,
        _deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue> {
        let text = raw
            .as_str()
            .ok_or_else(|| Error::invalid_value(format!("expected date string, got {}", raw)))?;
        JsonDate::parse(text).map(DoValue::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_declared_dates_are_claimed() {
        let raw = json!("2024-07-15 13:51:39.708Z");
        assert!(DateDoNodeSerializer.can_deserialize(&raw, Some(&ValueMetaData::date())));
        assert!(!DateDoNodeSerializer.can_deserialize(&raw, None));
        assert!(!DateDoNodeSerializer.can_deserialize(&raw, Some(&ValueMetaData::string())));
        assert!(!DateDoNodeSerializer.can_deserialize(&raw, Some(&ValueMetaData::date().array(1))));
        assert!(!DateDoNodeSerializer.can_deserialize(&json!(12), Some(&ValueMetaData::date())));
    }

    #[test]
    fn test_serialize_only_dates() {
        assert!(DateDoNodeSerializer.can_serialize(&JsonDate::parse("2024-07-15").unwrap().into()));
        assert!(!DateDoNodeSerializer.can_serialize(&DoValue::from("2024-07-15")));
    }
}
