//! Data object tree → plain JSON.

use serde_json::{Map, Value};

use crate::entity::{DoEntity, DoValue, CONTRIBUTIONS_FIELD, TYPE_FIELD};
use crate::nodes::DoNodeSerializer;
use crate::registry::DoRegistry;
use crate::types::{Error, Result};

/// Recursive flattening of data object trees into JSON values.
#[derive(Debug, Clone, Copy)]
pub struct DoSerializer<'a> {
    registry: &'a DoRegistry,
    serializers: &'a [Box<dyn DoNodeSerializer>],
}

impl<'a> DoSerializer<'a> {
    pub fn new(registry: &'a DoRegistry, serializers: &'a [Box<dyn DoNodeSerializer>]) -> Self {
        Self {
            registry,
            serializers,
        }
    }

    pub fn serialize(&self, value: &DoValue) -> Result<Value> {
        match value {
            DoValue::Null => return Ok(Value::Null),
            DoValue::Entity(entity) => return self.serialize_entity(entity),
            _ => {}
        }
        if let Some(converter) = self.serializers.iter().find(|s| s.can_serialize(value)) {
            return converter.serialize(value, self);
        }
        match value {
            DoValue::Bool(b) => Ok(Value::Bool(*b)),
            DoValue::Number(n) => Ok(Value::Number(n.clone())),
            DoValue::String(s) => Ok(Value::String(s.clone())),
            other => Err(Error::invalid_value(format!(
                "no serializer for {} values",
                other.kind_name()
            ))),
        }
    }

    /// Object node: `_type` first, then fields in order, then contributions.
    pub fn serialize_entity(&self, entity: &DoEntity) -> Result<Value> {
        let mut object = Map::new();
        if let Some(type_name) = self.type_name_of(entity) {
            object.insert(TYPE_FIELD.to_string(), Value::String(type_name.to_string()));
        }
        for (name, value) in entity.fields() {
            object.insert(name.to_string(), self.serialize(value)?);
        }
        if !entity.contributions().is_empty() {
            let contributions = entity
                .contributions()
                .iter()
                .map(|c| self.serialize_entity(c))
                .collect::<Result<Vec<_>>>()?;
            object.insert(CONTRIBUTIONS_FIELD.to_string(), Value::Array(contributions));
        }
        Ok(Value::Object(object))
    }

    /// Registered name of a typed entity, or the preserved tag of an untyped one.
    fn type_name_of<'e>(&'e self, entity: &'e DoEntity) -> Option<&'e str> {
        if entity.is_base() {
            entity.type_tag()
        } else {
            self.registry.name_of(&entity.class())
        }
    }
}
