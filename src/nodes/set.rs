use serde_json::Value;

use super::{unexpected, DoNodeSerializer};
use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::{Shape, ValueMetaData};
use crate::types::{Error, Result};

/// Declared sets: arrays of unique values, first occurrence wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetDoNodeSerializer;

impl DoNodeSerializer for SetDoNodeSerializer {
    fn name(&self) -> &'static str {
        "set"
    }

    fn can_serialize(&self, value: &DoValue) -> bool {
        matches!(value, DoValue::Set(_))
    }

    fn serialize(&self, value: &DoValue, serializer: &DoSerializer<'_>) -> Result<Value> {
        let DoValue::Set(items) = value else {
            return Err(unexpected(self.name(), value));
        };
        items
            .iter()
            .map(|item| serializer.serialize(item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn can_deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> bool {
        raw.is_array() && meta.is_some_and(|m| m.shape() == Shape::Set)
    }

    fn deserialize(
        &self,
        raw: &Value,
        meta: Option<&ValueMetaData>,
        deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue> {
        let items = raw
            .as_array()
            .ok_or_else(|| Error::invalid_value(format!("expected set, got {}", raw)))?;
        let element_meta = meta.and_then(|m| m.arg(0));
        let values = items
            .iter()
            .map(|item| deserializer.deserialize(item, element_meta))
            .collect::<Result<Vec<_>>>()?;
        Ok(DoValue::set_of(values))
    }
}
