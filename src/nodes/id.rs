use serde_json::Value;

use super::{unexpected, DoNodeSerializer};
use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::{ValueKind, ValueMetaData};
use crate::types::{DoId, Error, Result};

/// Raw id value ⇄ [`DoId`] of the declared id type.
///
/// Numeric raw values are accepted and kept as their decimal string.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdDoNodeSerializer;

impl DoNodeSerializer for IdDoNodeSerializer {
    fn name(&self) -> &'static str {
        "id"
    }

    fn can_serialize(&self, value: &DoValue) -> bool {
        matches!(value, DoValue::Id(_))
    }

    fn serialize(&self, value: &DoValue, _serializer: &DoSerializer<'_>) -> Result<Value> {
        match value {
            DoValue::Id(id) => Ok(Value::String(id.as_str().to_string())),
            other => Err(unexpected(self.name(), other)),
        }
    }

    fn can_deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> bool {
        (raw.is_string() || raw.is_number())
            && meta.is_some_and(|m| m.dimension == 0 && matches!(m.kind, ValueKind::Id(_)))
    }

    fn deserialize(
        &self,
        raw: &Value,
        meta: Option<&ValueMetaData>,
        _deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue> {
        let Some(ValueKind::Id(id_type)) = meta.map(|m| &m.kind) else {
            return Err(Error::invalid_value("id node without declared id type"));
        };
        let value = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => return Err(Error::invalid_value(format!("expected id, got {}", other))),
        };
        DoId::new(*id_type, value).map(DoValue::Id)
    }
}
