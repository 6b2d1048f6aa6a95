//! Data object classes, their declared field metadata and the type registry.
//!
//! - **class**: `DataObject` trait, `DoClass` runtime handle, `data_object!` macro
//! - **metadata**: declared value shapes and per-class field lookup
//! - **type_registry**: `_type` name ⇄ class mapping

mod class;
pub mod metadata;
mod type_registry;

pub use class::{BaseDoEntity, DataObject, DoClass};
pub use metadata::{resolve_field_metadata, FieldMetaData, Shape, ValueKind, ValueMetaData};
pub use type_registry::DoRegistry;

#[cfg(feature = "auto-register")]
pub use type_registry::DoTypeRegistration;
