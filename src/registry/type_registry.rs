//! Type registry — stable `_type` names to data object classes.
//!
//! Lookups are O(1) in both directions. Registration is expected at startup;
//! tests add and remove classes around their scope (see [`DoRegistry::snapshot`]).

use std::collections::HashMap;

use super::class::{DataObject, DoClass};
use crate::types::{Error, Result};

/// Registry of data object classes keyed by type name and by class identity.
#[derive(Debug, Default, Clone)]
pub struct DoRegistry {
    by_name: HashMap<String, DoClass>,
    by_class: HashMap<DoClass, String>,
    by_object_type: HashMap<&'static str, DoClass>,
}

impl DoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register class `T`.
    pub fn register<T: DataObject>(&mut self) -> Result<()> {
        self.add(DoClass::of::<T>())
    }

    /// Register a class under its type name.
    ///
    /// Re-adding the same class is a no-op. A different class under a taken
    /// type name or object type name is rejected and nothing is changed.
    pub fn add(&mut self, class: DoClass) -> Result<()> {
        let type_name = class.type_name().ok_or_else(|| {
            Error::validation(format!(
                "{} has no type name and cannot be registered",
                class.object_type()
            ))
        })?;
        crate::validation::validate_type_name(type_name)?;

        if self.by_class.contains_key(&class) {
            return Ok(());
        }
        if let Some(existing) = self.by_name.get(type_name) {
            tracing::warn!(
                type_name,
                existing = existing.rust_name(),
                rejected = class.rust_name(),
                "type name already registered"
            );
            return Err(Error::RegistryConflict {
                type_name: type_name.to_string(),
                existing: existing.rust_name().to_string(),
                rejected: class.rust_name().to_string(),
            });
        }
        if let Some(existing) = self.by_object_type.get(class.object_type()) {
            tracing::warn!(
                object_type = class.object_type(),
                existing = existing.rust_name(),
                rejected = class.rust_name(),
                "object type already registered"
            );
            return Err(Error::RegistryConflict {
                type_name: class.object_type().to_string(),
                existing: existing.rust_name().to_string(),
                rejected: class.rust_name().to_string(),
            });
        }

        self.by_name.insert(type_name.to_string(), class);
        self.by_class.insert(class, type_name.to_string());
        self.by_object_type.insert(class.object_type(), class);
        tracing::debug!(type_name, object_type = class.object_type(), "registered data object");
        Ok(())
    }

    /// Remove a class. Returns whether it was registered.
    pub fn remove_by_class(&mut self, class: DoClass) -> bool {
        let Some(type_name) = self.by_class.remove(&class) else {
            return false;
        };
        self.by_name.remove(&type_name);
        self.by_object_type.remove(class.object_type());
        tracing::debug!(type_name = %type_name, "removed data object");
        true
    }

    /// Class registered under `type_name`.
    pub fn resolve(&self, type_name: &str) -> Option<DoClass> {
        self.by_name.get(type_name).copied()
    }

    /// Class for an `objectType` value: object type name first, then type name.
    pub fn resolve_object_type(&self, name: &str) -> Option<DoClass> {
        self.by_object_type
            .get(name)
            .copied()
            .or_else(|| self.resolve(name))
    }

    /// Registered type name of `class`.
    pub fn name_of(&self, class: &DoClass) -> Option<&str> {
        self.by_class.get(class).map(String::as_str)
    }

    pub fn contains(&self, class: &DoClass) -> bool {
        self.by_class.contains_key(class)
    }

    /// All registered type names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Copy of the current registrations, to be handed back to [`DoRegistry::restore`].
    pub fn snapshot(&self) -> DoRegistry {
        self.clone()
    }

    /// Replace all registrations with a previous snapshot.
    pub fn restore(&mut self, snapshot: DoRegistry) {
        *self = snapshot;
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// =============================================================================
// Static registration
// =============================================================================

/// A class submitted through [`register_data_object!`](crate::register_data_object).
#[cfg(feature = "auto-register")]
#[derive(Debug)]
pub struct DoTypeRegistration {
    class: fn() -> DoClass,
}

#[cfg(feature = "auto-register")]
impl DoTypeRegistration {
    pub const fn new(class: fn() -> DoClass) -> Self {
        Self { class }
    }

    pub fn class(&self) -> DoClass {
        (self.class)()
    }
}

#[cfg(feature = "auto-register")]
inventory::collect!(DoTypeRegistration);

#[cfg(feature = "auto-register")]
impl DoRegistry {
    /// Registry holding every statically submitted class.
    pub fn with_auto_registered() -> Result<Self> {
        let mut registry = Self::new();
        for registration in inventory::iter::<DoTypeRegistration> {
            registry.add(registration.class())?;
        }
        Ok(registry)
    }
}

/// Submit a class for [`DoRegistry::with_auto_registered`].
#[cfg(feature = "auto-register")]
#[macro_export]
macro_rules! register_data_object {
    ($class:ty) => {
        $crate::inventory::submit! {
            $crate::registry::DoTypeRegistration::new($crate::DoClass::of::<$class>)
        }
    };
}
