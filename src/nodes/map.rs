use serde_json::Value;

use super::{unexpected, DoNodeSerializer};
use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::{Shape, ValueMetaData};
use crate::types::{Error, Result};

/// Declared maps.
///
/// Written as an array of `[key, value]` pairs so keys of any type survive;
/// a plain JSON object is accepted on input as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapDoNodeSerializer;

impl DoNodeSerializer for MapDoNodeSerializer {
    fn name(&self) -> &'static str {
        "map"
    }

    fn can_serialize(&self, value: &DoValue) -> bool {
        matches!(value, DoValue::Map(_))
    }

    fn serialize(&self, value: &DoValue, serializer: &DoSerializer<'_>) -> Result<Value> {
        let DoValue::Map(entries) = value else {
            return Err(unexpected(self.name(), value));
        };
        let pairs = entries
            .iter()
            .map(|(k, v)| -> Result<Value> {
                Ok(Value::Array(vec![serializer.serialize(k)?, serializer.serialize(v)?]))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Array(pairs))
    }

    fn can_deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> bool {
        (raw.is_array() || raw.is_object()) && meta.is_some_and(|m| m.shape() == Shape::Map)
    }

    fn deserialize(
        &self,
        raw: &Value,
        meta: Option<&ValueMetaData>,
        deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue> {
        let key_meta = meta.and_then(|m| m.arg(0));
        let value_meta = meta.and_then(|m| m.arg(1));

        let entries = match raw {
            Value::Array(pairs) => pairs
                .iter()
                .map(|pair| -> Result<(DoValue, DoValue)> {
                    match pair.as_array().map(Vec::as_slice) {
                        Some([k, v]) => Ok((
                            deserializer.deserialize(k, key_meta)?,
                            deserializer.deserialize(v, value_meta)?,
                        )),
                        _ => Err(Error::invalid_value(format!(
                            "map entry must be a [key, value] pair, got {}",
                            pair
                        ))),
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            Value::Object(object) => object
                .iter()
                .map(|(k, v)| -> Result<(DoValue, DoValue)> {
                    Ok((
                        deserializer.deserialize(&Value::String(k.clone()), key_meta)?,
                        deserializer.deserialize(v, value_meta)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?,
            other => return Err(Error::invalid_value(format!("expected map, got {}", other))),
        };
        Ok(DoValue::Map(entries))
    }
}
