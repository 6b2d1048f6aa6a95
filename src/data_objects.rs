//! Public entry point: text and JSON in, data objects out, and back.

use serde_json::Value;

use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::{ContributionKey, DoEntity, DoValue};
use crate::nodes::{default_serializers, DoNodeSerializer};
use crate::registry::{DataObject, DoClass, DoRegistry, ValueMetaData};
use crate::types::{DataObjectsConfig, Error, Result};

/// Owns the type registry, the node serializer chain and the settings used
/// by every conversion.
#[derive(Debug)]
pub struct DataObjects {
    registry: DoRegistry,
    serializers: Vec<Box<dyn DoNodeSerializer>>,
    config: DataObjectsConfig,
}

impl Default for DataObjects {
    fn default() -> Self {
        Self::new()
    }
}

impl DataObjects {
    /// Empty registry, default chain and settings.
    pub fn new() -> Self {
        Self::with_registry(DoRegistry::new())
    }

    pub fn with_registry(registry: DoRegistry) -> Self {
        Self {
            registry,
            serializers: default_serializers(),
            config: DataObjectsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DataObjectsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &DoRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DoRegistry {
        &mut self.registry
    }

    /// The chain consulted in order; custom converters go before the built-ins.
    pub fn serializers_mut(&mut self) -> &mut Vec<Box<dyn DoNodeSerializer>> {
        &mut self.serializers
    }

    pub fn config(&self) -> &DataObjectsConfig {
        &self.config
    }

    /// Expected type by object type or type name.
    pub fn expect(&self, name: &str) -> Result<ValueMetaData> {
        self.registry
            .resolve_object_type(name)
            .map(ValueMetaData::class)
            .ok_or_else(|| Error::not_found(format!("data object type {}", name)))
    }

    /// Parse JSON text. Absent, empty and `null` input yield `None`.
    pub fn parse(&self, json: Option<&str>, expected: Option<&ValueMetaData>) -> Result<Option<DoValue>> {
        let Some(json) = json.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };
        let raw: Value = serde_json::from_str(json)?;
        self.deserialize(&raw, expected)
    }

    /// Parse JSON text into an entity of `T` or a subclass.
    pub fn parse_as<T: DataObject>(&self, json: &str) -> Result<Option<DoEntity>> {
        let expected = ValueMetaData::entity::<T>();
        match self.parse(Some(json), Some(&expected))? {
            None => Ok(None),
            Some(DoValue::Entity(entity)) => Ok(Some(*entity)),
            Some(other) => Err(Error::type_mismatch(
                DoClass::of::<T>().display_name(),
                other.kind_name(),
            )),
        }
    }

    pub fn deserialize(&self, raw: &Value, expected: Option<&ValueMetaData>) -> Result<Option<DoValue>> {
        if raw.is_null() {
            return Ok(None);
        }
        DoDeserializer::new(&self.registry, &self.serializers, &self.config)
            .deserialize(raw, expected)
            .map(Some)
    }

    pub fn serialize(&self, value: Option<&DoValue>) -> Result<Option<Value>> {
        match value {
            None | Some(DoValue::Null) => Ok(None),
            Some(value) => DoSerializer::new(&self.registry, &self.serializers)
                .serialize(value)
                .map(Some),
        }
    }

    /// Serialize to JSON text, pretty-printed when configured.
    pub fn stringify(&self, value: Option<&DoValue>) -> Result<Option<String>> {
        let Some(json) = self.serialize(value)? else {
            return Ok(None);
        };
        let text = if self.config.pretty_json {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(Some(text))
    }
}

/// Contribution of `entity` matching `key`.
///
/// An absent entity, or one without contributions, yields `None` before the
/// key is checked.
pub fn get_contribution(key: Option<ContributionKey>, entity: Option<&DoEntity>) -> Result<Option<&DoEntity>> {
    let Some(entity) = entity.filter(|e| !e.contributions().is_empty()) else {
        return Ok(None);
    };
    let key = key.ok_or_else(|| Error::precondition("contribution key is required"))?;
    Ok(entity.get_contribution(key))
}

/// Attach `contribution` to `entity`, replacing one with the same key.
/// No-op without an entity.
pub fn add_contribution(contribution: Option<DoEntity>, entity: Option<&mut DoEntity>) -> Result<()> {
    let Some(entity) = entity else {
        return Ok(());
    };
    let contribution = contribution.ok_or_else(|| Error::precondition("contribution is required"))?;
    entity.add_contribution(contribution)
}

/// No-op without an entity.
pub fn remove_contribution(key: Option<ContributionKey>, entity: Option<&mut DoEntity>) -> Result<()> {
    let Some(entity) = entity else {
        return Ok(());
    };
    let key = key.ok_or_else(|| Error::precondition("contribution key is required"))?;
    entity.remove_contribution(key);
    Ok(())
}
