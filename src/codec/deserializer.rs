//! Raw JSON → data object tree.
//!
//! The concrete class of an object node is chosen in this order: a `_type`
//! known to the registry, an `objectType` known to the registry, the class
//! expected by the caller or the parent's field declaration, and finally
//! `BaseDoEntity`. A `_type` the registry does not know is not an error: the
//! node stays untyped and keeps the tag and all its fields verbatim.

use serde_json::{Map, Value};

use crate::entity::{DoEntity, DoValue, CONTRIBUTIONS_FIELD, OBJECT_TYPE_FIELD, TYPE_FIELD};
use crate::nodes::DoNodeSerializer;
use crate::registry::{resolve_field_metadata, DoClass, DoRegistry, ValueMetaData};
use crate::types::{DataObjectsConfig, Error, Result};

/// Recursive reconstruction of typed values from raw JSON.
#[derive(Debug, Clone, Copy)]
pub struct DoDeserializer<'a> {
    registry: &'a DoRegistry,
    serializers: &'a [Box<dyn DoNodeSerializer>],
    config: &'a DataObjectsConfig,
}

impl<'a> DoDeserializer<'a> {
    pub fn new(
        registry: &'a DoRegistry,
        serializers: &'a [Box<dyn DoNodeSerializer>],
        config: &'a DataObjectsConfig,
    ) -> Self {
        Self {
            registry,
            serializers,
            config,
        }
    }

    pub fn registry(&self) -> &DoRegistry {
        self.registry
    }

    pub fn config(&self) -> &DataObjectsConfig {
        self.config
    }

    /// Deserialize one node against its declared metadata, if any.
    pub fn deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> Result<DoValue> {
        if raw.is_null() {
            return Ok(DoValue::Null);
        }
        if let Some(converter) = self.serializers.iter().find(|s| s.can_deserialize(raw, meta)) {
            tracing::trace!(converter = converter.name(), "deserializing node");
            return converter.deserialize(raw, meta, self);
        }
        match raw {
            Value::Object(object) => self
                .deserialize_entity(object, meta.and_then(ValueMetaData::entity_class))
                .map(DoValue::from),
            // only reached when the chain has no array converter
            Value::Array(items) => items
                .iter()
                .map(|item| self.deserialize(item, None))
                .collect::<Result<Vec<_>>>()
                .map(DoValue::Array),
            Value::Bool(b) => Ok(DoValue::Bool(*b)),
            Value::Number(n) => Ok(DoValue::Number(n.clone())),
            Value::String(s) => Ok(DoValue::String(s.clone())),
            Value::Null => Ok(DoValue::Null),
        }
    }

    /// Deserialize an object node, optionally constrained to `expected` or a subclass.
    pub fn deserialize_entity(
        &self,
        object: &Map<String, Value>,
        expected: Option<DoClass>,
    ) -> Result<DoEntity> {
        let type_tag = match object.get(TYPE_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(tag)) => Some(tag.as_str()),
            Some(other) => {
                return Err(Error::validation(format!(
                    "{} must be a string, got {}",
                    TYPE_FIELD, other
                )))
            }
        };

        let tagged = match type_tag {
            Some(tag) => match self.registry.resolve(tag) {
                Some(class) => Some(class),
                None => return self.deserialize_unknown(tag, object),
            },
            None => None,
        };

        // objectType is only consumed when it decided the class
        let (concrete, object_type_consumed) = match tagged {
            Some(class) => (Some(class), false),
            None => match object
                .get(OBJECT_TYPE_FIELD)
                .and_then(Value::as_str)
                .and_then(|name| self.registry.resolve_object_type(name))
            {
                Some(class) => (Some(class), true),
                None => (None, false),
            },
        };

        if let (Some(expected), Some(concrete)) = (expected, concrete) {
            if !concrete.is_subclass_of(&expected) {
                tracing::warn!(expected = %expected, actual = %concrete, "data object type mismatch");
                return Err(Error::type_mismatch(
                    expected.display_name(),
                    concrete.display_name(),
                ));
            }
        }

        let class = concrete.or(expected).unwrap_or_else(DoClass::base);
        let field_meta = resolve_field_metadata(Some(class));
        let mut entity = DoEntity::new(class);
        for (name, value) in object {
            match name.as_str() {
                TYPE_FIELD => {}
                OBJECT_TYPE_FIELD if object_type_consumed => {}
                CONTRIBUTIONS_FIELD => self.deserialize_contributions(value, &mut entity)?,
                _ => {
                    entity.set(name.clone(), self.deserialize(value, field_meta.get(name))?);
                }
            }
        }
        Ok(entity)
    }

    /// Untyped entity for a `_type` the registry does not know. Fields are
    /// read without metadata.
    fn deserialize_unknown(&self, type_tag: &str, object: &Map<String, Value>) -> Result<DoEntity> {
        tracing::debug!(type_name = type_tag, "unknown data object type, keeping untyped entity");
        let mut entity = DoEntity::tagged(type_tag);
        for (name, value) in object {
            match name.as_str() {
                TYPE_FIELD => {}
                CONTRIBUTIONS_FIELD => self.deserialize_contributions(value, &mut entity)?,
                _ => {
                    entity.set(name.clone(), self.deserialize(value, None)?);
                }
            }
        }
        Ok(entity)
    }

    fn deserialize_contributions(&self, raw: &Value, entity: &mut DoEntity) -> Result<()> {
        let items = match raw {
            Value::Null => return Ok(()),
            Value::Array(items) => items,
            other => {
                return Err(Error::validation(format!(
                    "{} must be an array, got {}",
                    CONTRIBUTIONS_FIELD, other
                )))
            }
        };
        for item in items {
            let Value::Object(object) = item else {
                return Err(Error::validation(format!(
                    "contribution must be an object, got {}",
                    item
                )));
            };
            let contribution = self.deserialize_entity(object, None)?;
            if contribution.type_name().is_none() {
                return Err(Error::validation("contribution without _type"));
            }
            entity.add_contribution(contribution)?;
        }
        Ok(())
    }
}
