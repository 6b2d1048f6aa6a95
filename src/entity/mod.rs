//! Data object entities.
//!
//! A `DoEntity` is one JSON object node: its runtime class, the preserved
//! `_type` of untyped nodes, named fields in insertion order and the
//! contribution side list.
//!
//! - **value**: `DoValue` tree nodes
//! - **contributions**: type-keyed secondary entities
//! - **clean**: removal of fields without relevant values

mod clean;
mod contributions;
mod value;

use indexmap::IndexMap;

use crate::registry::{DataObject, DoClass};

pub use contributions::ContributionKey;
pub use value::DoValue;

/// Field name of the type discriminator.
pub const TYPE_FIELD: &str = "_type";
/// Field name of the alternate discriminator.
pub const OBJECT_TYPE_FIELD: &str = "objectType";
/// Field name of the contribution list.
pub const CONTRIBUTIONS_FIELD: &str = "_contributions";

/// A typed data object node.
#[derive(Debug, Clone, PartialEq)]
pub struct DoEntity {
    class: DoClass,
    type_tag: Option<String>,
    fields: IndexMap<String, DoValue>,
    contributions: Vec<DoEntity>,
}

impl Default for DoEntity {
    fn default() -> Self {
        Self::new(DoClass::base())
    }
}

impl DoEntity {
    pub fn new(class: DoClass) -> Self {
        Self {
            class,
            type_tag: None,
            fields: IndexMap::new(),
            contributions: Vec::new(),
        }
    }

    /// New instance of class `T`.
    pub fn of<T: DataObject>() -> Self {
        Self::new(DoClass::of::<T>())
    }

    /// Untyped entity.
    pub fn base() -> Self {
        Self::default()
    }

    /// Untyped entity carrying a verbatim `_type`.
    pub fn tagged(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            ..Self::default()
        }
    }

    pub fn class(&self) -> DoClass {
        self.class
    }

    /// `_type` of this node: the class' type name, else the preserved tag.
    pub fn type_name(&self) -> Option<&str> {
        self.class.type_name().or(self.type_tag.as_deref())
    }

    /// Verbatim `_type` kept on untyped entities.
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn is_base(&self) -> bool {
        self.class.is_base()
    }

    /// Exact class check.
    pub fn is<T: DataObject>(&self) -> bool {
        self.class.is::<T>()
    }

    /// Class check including subclasses.
    pub fn instance_of<T: DataObject>(&self) -> bool {
        self.class.is_subclass_of(&DoClass::of::<T>())
    }

    pub fn get(&self, name: &str) -> Option<&DoValue> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DoValue> {
        self.fields.get_mut(name)
    }

    /// Nested entity stored in field `name`.
    pub fn get_entity(&self, name: &str) -> Option<&DoEntity> {
        self.get(name).and_then(DoValue::as_entity)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set a field, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<DoValue>) -> Option<DoValue> {
        self.fields.insert(name.into(), value.into())
    }

    /// Builder form of [`DoEntity::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<DoValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<DoValue> {
        self.fields.shift_remove(name)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &DoValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields (contributions not counted).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture03Do, Fixture03SubDo};

    #[test]
    fn test_type_name_from_class() {
        let entity = DoEntity::of::<Fixture03Do>();
        assert_eq!(entity.type_name(), Some("scout.Fixture03"));
        assert!(entity.type_tag().is_none());
        assert!(!entity.is_base());
    }

    #[test]
    fn test_type_name_from_tag() {
        let entity = DoEntity::tagged("not.existing");
        assert_eq!(entity.type_name(), Some("not.existing"));
        assert!(entity.is_base());
        assert!(DoEntity::base().type_name().is_none());
    }

    #[test]
    fn test_instance_of() {
        let entity = DoEntity::of::<Fixture03SubDo>();
        assert!(entity.is::<Fixture03SubDo>());
        assert!(!entity.is::<Fixture03Do>());
        assert!(entity.instance_of::<Fixture03Do>());
        assert!(entity.instance_of::<crate::BaseDoEntity>());
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let mut entity = DoEntity::base().with("b", 1).with("a", true).with("c", "x");
        entity.remove("a");
        let names: Vec<&str> = entity.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(entity.set("b", 2), Some(DoValue::from(1)));
        assert_eq!(entity.len(), 2);
    }
}
