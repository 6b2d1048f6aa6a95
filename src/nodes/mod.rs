//! Node serializer chain — converters for special value categories.
//!
//! Each converter recognizes one category (dates, ids, maps, sets, arrays)
//! on the way out by the runtime value and on the way in by the raw JSON
//! node plus its declared metadata. The codec asks converters in order and
//! uses the first match, so order matters: maps and sets are claimed by their
//! declared shape before the array converter takes any remaining array.

use serde_json::Value;
use std::fmt;

use crate::codec::{DoDeserializer, DoSerializer};
use crate::entity::DoValue;
use crate::registry::ValueMetaData;
use crate::types::Result;

mod array;
mod date;
mod id;
mod map;
mod set;

pub use array::ArrayDoNodeSerializer;
pub use date::DateDoNodeSerializer;
pub use id::IdDoNodeSerializer;
pub use map::MapDoNodeSerializer;
pub use set::SetDoNodeSerializer;

/// Converter for one category of values.
pub trait DoNodeSerializer: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn can_serialize(&self, value: &DoValue) -> bool;

    fn serialize(&self, value: &DoValue, serializer: &DoSerializer<'_>) -> Result<Value>;

    fn can_deserialize(&self, raw: &Value, meta: Option<&ValueMetaData>) -> bool;

    fn deserialize(
        &self,
        raw: &Value,
        meta: Option<&ValueMetaData>,
        deserializer: &DoDeserializer<'_>,
    ) -> Result<DoValue>;
}

/// Built-in chain: date, id, map, set, array.
pub fn default_serializers() -> Vec<Box<dyn DoNodeSerializer>> {
    vec![
        Box::new(DateDoNodeSerializer),
        Box::new(IdDoNodeSerializer),
        Box::new(MapDoNodeSerializer),
        Box::new(SetDoNodeSerializer),
        Box::new(ArrayDoNodeSerializer),
    ]
}

/// Message for a value handed to a converter that does not handle it.
pub(crate) fn unexpected(converter: &str, value: &DoValue) -> crate::types::Error {
    crate::types::Error::invalid_value(format!(
        "{} serializer cannot handle {} values",
        converter,
        value.kind_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let names: Vec<&str> = default_serializers().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["date", "id", "map", "set", "array"]);
    }

    #[test]
    fn test_set_claimed_before_array() {
        let chain = default_serializers();
        let raw = serde_json::json!(["a", "b"]);
        let meta = ValueMetaData::set(ValueMetaData::string());
        let first = chain.iter().find(|s| s.can_deserialize(&raw, Some(&meta))).unwrap();
        assert_eq!(first.name(), "set");

        let first = chain.iter().find(|s| s.can_deserialize(&raw, None)).unwrap();
        assert_eq!(first.name(), "array");
    }
}
