//! Data object classes.
//!
//! A class is the static description of one data object type: its identity,
//! the `_type` name it is registered under, the `objectType` name it can be
//! created by, its parent class and its declared field table.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::metadata::ValueMetaData;

/// Declares a data object class.
///
/// Usually implemented through [`data_object!`](crate::data_object).
pub trait DataObject: 'static {
    /// Name used in the `objectType` discriminator.
    const OBJECT_TYPE: &'static str;

    /// Stable `_type` name. Classes without one cannot be registered.
    const TYPE_NAME: Option<&'static str> = None;

    /// Direct parent class; `None` means the class derives from [`BaseDoEntity`] only.
    fn parent() -> Option<DoClass> {
        None
    }

    /// Fields declared by this class (inherited fields are resolved separately).
    fn field_metadata() -> Vec<(&'static str, ValueMetaData)> {
        Vec::new()
    }
}

/// The untyped fallback class. Every class is-a `BaseDoEntity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseDoEntity;

impl DataObject for BaseDoEntity {
    const OBJECT_TYPE: &'static str = "scout.BaseDoEntity";
}

/// Runtime handle of a [`DataObject`] class. Equality is class identity.
#[derive(Clone, Copy)]
pub struct DoClass {
    id: TypeId,
    rust_name: &'static str,
    object_type: &'static str,
    type_name: Option<&'static str>,
    parent: fn() -> Option<DoClass>,
    fields: fn() -> Vec<(&'static str, ValueMetaData)>,
}

impl DoClass {
    pub fn of<T: DataObject>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            rust_name: std::any::type_name::<T>(),
            object_type: T::OBJECT_TYPE,
            type_name: T::TYPE_NAME,
            parent: T::parent,
            fields: T::field_metadata,
        }
    }

    /// The [`BaseDoEntity`] class.
    pub fn base() -> Self {
        Self::of::<BaseDoEntity>()
    }

    pub fn is_base(&self) -> bool {
        self.id == TypeId::of::<BaseDoEntity>()
    }

    pub fn is<T: DataObject>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    pub fn object_type(&self) -> &'static str {
        self.object_type
    }

    pub fn rust_name(&self) -> &'static str {
        self.rust_name
    }

    pub fn parent(&self) -> Option<DoClass> {
        (self.parent)()
    }

    pub fn declared_fields(&self) -> Vec<(&'static str, ValueMetaData)> {
        (self.fields)()
    }

    /// Class chain from `self` up to (excluding) [`BaseDoEntity`].
    pub fn ancestry(&self) -> Vec<DoClass> {
        let mut chain = Vec::new();
        let mut current = Some(*self);
        while let Some(class) = current {
            if class.is_base() || chain.contains(&class) {
                break;
            }
            chain.push(class);
            current = class.parent();
        }
        chain
    }

    /// True if `self` is `other` or one of its subclasses.
    pub fn is_subclass_of(&self, other: &DoClass) -> bool {
        other.is_base() || self.ancestry().contains(other)
    }

    /// Name for messages: the type name if there is one, else the object type.
    pub fn display_name(&self) -> &'static str {
        self.type_name.unwrap_or(self.object_type)
    }
}

impl PartialEq for DoClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DoClass {}

impl Hash for DoClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for DoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoClass")
            .field("object_type", &self.object_type)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for DoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Declare a unit-struct data object class and its field table.
///
/// ```
/// use dataobject_core::{data_object, ValueMetaData};
///
/// data_object! {
///     /// A person.
///     pub struct PersonDo {
///         object_type: "example.PersonDo",
///         type_name: "example.Person",
///         fields: {
///             "birthday" => ValueMetaData::date(),
///         },
///     }
/// }
/// ```
#[macro_export]
macro_rules! data_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            object_type: $object_type:literal,
            $(type_name: $type_name:literal,)?
            $(extends: $parent:ty,)?
            fields: { $($field:literal => $shape:expr),* $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::DataObject for $name {
            const OBJECT_TYPE: &'static str = $object_type;
            $(const TYPE_NAME: Option<&'static str> = Some($type_name);)?

            $(
                fn parent() -> Option<$crate::DoClass> {
                    Some($crate::DoClass::of::<$parent>())
                }
            )?

            fn field_metadata() -> Vec<(&'static str, $crate::ValueMetaData)> {
                vec![$(($field, $shape)),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture01Do, Fixture03Do, Fixture03SubDo};

    #[test]
    fn test_class_identity() {
        assert_eq!(DoClass::of::<Fixture03Do>(), DoClass::of::<Fixture03Do>());
        assert_ne!(DoClass::of::<Fixture03Do>(), DoClass::of::<Fixture03SubDo>());
        assert!(DoClass::of::<Fixture03Do>().is::<Fixture03Do>());
    }

    #[test]
    fn test_subclass_chain() {
        let sub = DoClass::of::<Fixture03SubDo>();
        let base = DoClass::of::<Fixture03Do>();
        assert!(sub.is_subclass_of(&base));
        assert!(sub.is_subclass_of(&sub));
        assert!(!base.is_subclass_of(&sub));
        assert!(sub.is_subclass_of(&DoClass::base()));
        assert!(!sub.is_subclass_of(&DoClass::of::<Fixture01Do>()));
        assert_eq!(sub.ancestry(), vec![sub, base]);
    }

    #[test]
    fn test_names() {
        let class = DoClass::of::<Fixture03Do>();
        assert_eq!(class.type_name(), Some("scout.Fixture03"));
        assert_eq!(class.object_type(), "scout.Fixture03Do");
        assert_eq!(class.to_string(), "scout.Fixture03");
        assert_eq!(DoClass::base().type_name(), None);
        assert_eq!(DoClass::base().to_string(), "scout.BaseDoEntity");
    }
}
