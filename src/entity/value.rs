//! Values of data object fields.

use serde_json::Number;

use super::DoEntity;
use crate::types::{DoId, JsonDate};

/// One node of a deserialized data object tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DoValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(JsonDate),
    Id(DoId),
    Array(Vec<DoValue>),
    /// Entries in insertion order.
    Map(Vec<(DoValue, DoValue)>),
    /// Unique values in insertion order.
    Set(Vec<DoValue>),
    Entity(Box<DoEntity>),
}

impl DoValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DoValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DoValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DoValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DoValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DoValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&JsonDate> {
        match self {
            DoValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<&DoId> {
        match self {
            DoValue::Id(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DoValue]> {
        match self {
            DoValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(DoValue, DoValue)]> {
        match self {
            DoValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&[DoValue]> {
        match self {
            DoValue::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&DoEntity> {
        match self {
            DoValue::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn as_entity_mut(&mut self) -> Option<&mut DoEntity> {
        match self {
            DoValue::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn into_entity(self) -> Option<DoEntity> {
        match self {
            DoValue::Entity(entity) => Some(*entity),
            _ => None,
        }
    }

    /// Build a set, dropping repeated values (first occurrence wins).
    pub fn set_of(values: impl IntoIterator<Item = DoValue>) -> Self {
        let mut unique: Vec<DoValue> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        DoValue::Set(unique)
    }

    /// Name of the value category, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DoValue::Null => "null",
            DoValue::Bool(_) => "boolean",
            DoValue::Number(_) => "number",
            DoValue::String(_) => "string",
            DoValue::Date(_) => "date",
            DoValue::Id(_) => "id",
            DoValue::Array(_) => "array",
            DoValue::Map(_) => "map",
            DoValue::Set(_) => "set",
            DoValue::Entity(_) => "entity",
        }
    }
}

impl From<bool> for DoValue {
    fn from(value: bool) -> Self {
        DoValue::Bool(value)
    }
}

impl From<i64> for DoValue {
    fn from(value: i64) -> Self {
        DoValue::Number(value.into())
    }
}

impl From<i32> for DoValue {
    fn from(value: i32) -> Self {
        DoValue::Number(value.into())
    }
}

impl From<u64> for DoValue {
    fn from(value: u64) -> Self {
        DoValue::Number(value.into())
    }
}

impl From<f64> for DoValue {
    /// Non-finite numbers have no JSON representation and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(DoValue::Null, DoValue::Number)
    }
}

impl From<&str> for DoValue {
    fn from(value: &str) -> Self {
        DoValue::String(value.to_string())
    }
}

impl From<String> for DoValue {
    fn from(value: String) -> Self {
        DoValue::String(value)
    }
}

impl From<JsonDate> for DoValue {
    fn from(value: JsonDate) -> Self {
        DoValue::Date(value)
    }
}

impl From<DoId> for DoValue {
    fn from(value: DoId) -> Self {
        DoValue::Id(value)
    }
}

impl From<DoEntity> for DoValue {
    fn from(value: DoEntity) -> Self {
        DoValue::Entity(Box::new(value))
    }
}

impl From<Vec<DoValue>> for DoValue {
    fn from(value: Vec<DoValue>) -> Self {
        DoValue::Array(value)
    }
}

impl<T: Into<DoValue>> From<Option<T>> for DoValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DoValue::Null, Into::into)
    }
}
