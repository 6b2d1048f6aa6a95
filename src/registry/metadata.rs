//! Declared value metadata and per-class field lookup.
//!
//! A field declaration is an element kind (date, id, entity class, ...),
//! generic arguments for maps and sets, and an array dimension. The field
//! table of a class is the merge of its own declarations and those of its
//! ancestors, subclasses winning.

use std::collections::HashMap;

use super::class::{DataObject, DoClass};

/// Element kind of a declared value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// No usable declaration (e.g. an interface type).
    Any,
    Boolean,
    Number,
    String,
    Date,
    /// Typed id; the payload is the id type name.
    Id(&'static str),
    Entity(DoClass),
    /// `args[0]` is the key, `args[1]` the value metadata.
    Map,
    /// `args[0]` is the element metadata.
    Set,
}

/// Container shape derived from a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Array(usize),
    Map,
    Set,
}

/// Declared type of one value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMetaData {
    pub kind: ValueKind,
    pub args: Vec<ValueMetaData>,
    pub dimension: usize,
}

impl ValueMetaData {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
            dimension: 0,
        }
    }

    pub fn any() -> Self {
        Self::new(ValueKind::Any)
    }

    pub fn boolean() -> Self {
        Self::new(ValueKind::Boolean)
    }

    pub fn number() -> Self {
        Self::new(ValueKind::Number)
    }

    pub fn string() -> Self {
        Self::new(ValueKind::String)
    }

    pub fn date() -> Self {
        Self::new(ValueKind::Date)
    }

    pub fn id(id_type: &'static str) -> Self {
        Self::new(ValueKind::Id(id_type))
    }

    pub fn entity<T: DataObject>() -> Self {
        Self::class(DoClass::of::<T>())
    }

    pub fn class(class: DoClass) -> Self {
        Self::new(ValueKind::Entity(class))
    }

    pub fn map(key: ValueMetaData, value: ValueMetaData) -> Self {
        Self {
            kind: ValueKind::Map,
            args: vec![key, value],
            dimension: 0,
        }
    }

    pub fn set(element: ValueMetaData) -> Self {
        Self {
            kind: ValueKind::Set,
            args: vec![element],
            dimension: 0,
        }
    }

    /// Same element type wrapped in `dimension` levels of arrays.
    pub fn array(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Metadata of the elements of an array value (dimension − 1).
    pub fn component(&self) -> Option<Self> {
        (self.dimension > 0).then(|| Self {
            kind: self.kind.clone(),
            args: self.args.clone(),
            dimension: self.dimension - 1,
        })
    }

    pub fn shape(&self) -> Shape {
        match (&self.kind, self.dimension) {
            (_, n) if n > 0 => Shape::Array(n),
            (ValueKind::Map, _) => Shape::Map,
            (ValueKind::Set, _) => Shape::Set,
            _ => Shape::Scalar,
        }
    }

    /// Declared entity class of a scalar (non-array) value.
    pub fn entity_class(&self) -> Option<DoClass> {
        match (&self.kind, self.dimension) {
            (ValueKind::Entity(class), 0) => Some(*class),
            _ => None,
        }
    }

    /// Generic argument `index`, if declared.
    pub fn arg(&self, index: usize) -> Option<&ValueMetaData> {
        self.args.get(index)
    }

    /// True if this is a scalar declaration of `kind`.
    pub(crate) fn is_scalar(&self, kind: &ValueKind) -> bool {
        self.dimension == 0 && &self.kind == kind
    }
}

/// Field name → declared metadata of one class.
pub type FieldMetaData = HashMap<String, ValueMetaData>;

/// Declared field table of `class`, including inherited fields.
///
/// Returns an empty lookup without a class so every nested value falls back
/// to ad-hoc detection.
pub fn resolve_field_metadata(class: Option<DoClass>) -> FieldMetaData {
    let mut fields = FieldMetaData::new();
    let Some(class) = class else {
        return fields;
    };
    for ancestor in class.ancestry().iter().rev() {
        for (name, meta) in ancestor.declared_fields() {
            fields.insert(name.to_string(), meta);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture01Do, Fixture02Do, Fixture03Do, Fixture03SubDo};

    #[test]
    fn test_no_class_yields_empty_lookup() {
        assert!(resolve_field_metadata(None).is_empty());
        assert!(resolve_field_metadata(Some(DoClass::base())).is_empty());
    }

    #[test]
    fn test_declared_fields() {
        let fields = resolve_field_metadata(Some(DoClass::of::<Fixture02Do>()));
        assert_eq!(fields["nestedDate"], ValueMetaData::date());
        assert_eq!(fields["nestedObj"], ValueMetaData::entity::<Fixture03Do>());
        assert!(!fields.contains_key("nestedIfc"));
    }

    #[test]
    fn test_inherited_fields() {
        let fields = resolve_field_metadata(Some(DoClass::of::<Fixture03SubDo>()));
        assert_eq!(fields["nestedNestedDate"], ValueMetaData::date());
        assert_eq!(fields["nestedNestedDateSub"], ValueMetaData::date());
    }

    #[test]
    fn test_array_dimension() {
        let fields = resolve_field_metadata(Some(DoClass::of::<Fixture01Do>()));
        let arr = &fields["propArr"];
        assert_eq!(arr.shape(), Shape::Array(1));
        assert_eq!(arr.entity_class(), None);
        let element = arr.component().unwrap();
        assert_eq!(element.shape(), Shape::Scalar);
        assert_eq!(element.entity_class(), Some(DoClass::of::<Fixture02Do>()));
        assert!(element.component().is_none());
    }

    #[test]
    fn test_container_shapes() {
        let map = ValueMetaData::map(ValueMetaData::string(), ValueMetaData::date());
        assert_eq!(map.shape(), Shape::Map);
        assert_eq!(map.arg(1), Some(&ValueMetaData::date()));
        let set = ValueMetaData::set(ValueMetaData::number());
        assert_eq!(set.shape(), Shape::Set);
        assert_eq!(set.clone().array(2).shape(), Shape::Array(2));
    }
}
