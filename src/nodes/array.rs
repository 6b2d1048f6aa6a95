use serde_json::Value;

use super::{unexpected, DoNodeSerializer};
use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::ValueMetaData;
use crate::types::{Error, JsonDate, Result};

/// Arrays of any depth.
///
/// With a declared dimension the elements are read with dimension − 1.
/// Without one every element is detected on its own, so nested arrays of
/// timestamp strings become nested arrays of dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayDoNodeSerializer;

impl ArrayDoNodeSerializer {
    fn detect(element: &Value, deserializer: &DoDeserializer<'_>) -> Option<ValueMetaData> {
        let text = element.as_str()?;
        (deserializer.config().detect_array_dates && JsonDate::looks_like_timestamp(text))
            .then(ValueMetaData::date)
    }
}

impl DoNodeSerializer for ArrayDoNodeSerializer {
    fn name(&self) -> &'static str {
        "array"
    }

    fn can_serialize(&self, value: &DoValue) -> bool {
        matches!(value, DoValue::Array(_))
    }

    fn serialize(&self, value: &DoValue, serializer: &DoSerializer<'_>) -> Result<Value> {
        let DoValue::Array(items) = value else {
            return Err(unexpected(self.name(), value));
        };
        items
            .iter()
            .map(|item| serializer.serialize(item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn can_deserialize(&self, raw: &Value, _meta: Option<&ValueMetaData>) -> bool {
        raw.is_array()
    }

    fn deserialize(
        &self,
        raw: &Value,
        meta: Option<&ValueMetaData>,
        deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue> {
        let items = raw
            .as_array()
            .ok_or_else(|| Error::invalid_value(format!("expected array, got {}", raw)))?;
        let component = meta.and_then(ValueMetaData::component);

        let values = items
            .iter()
            .map(|item| match &component {
                Some(element_meta) => deserializer.deserialize(item, Some(element_meta)),
                None => {
                    let detected = Self::detect(item, deserializer);
                    deserializer.deserialize(item, detected.as_ref())
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DoValue::Array(values))
    }
}
