//! # dataobject-core - Typed JSON mapping for data objects
//!
//! Converts between plain JSON and trees of typed data objects:
//! - Type registry mapping `_type` discriminators to data object classes
//! - Declared field metadata with inheritance along the class chain
//! - Node serializer chain for dates, typed ids, maps, sets and arrays
//! - Polymorphic deserialization with expected-type checks
//! - Contributions: type-keyed secondary entities attached to an entity
//!
//! ## Architecture
//!
//! ```text
//!   JSON text ─ parse ─┐                           ┌─ stringify ─ JSON text
//!                      ▼                           │
//!              ┌──────────────┐  DoValue tree  ┌──────────────┐
//!              │DoDeserializer│ ─────────────▶ │ DoSerializer │
//!              └──────┬───────┘                └──────┬───────┘
//!                     │   ┌─────────┐ ┌──────────┐    │
//!                     └──▶│Registry │ │Node chain│◀───┘
//!                         └─────────┘ └──────────┘
//! ```
//!
//! ```
//! use dataobject_core::{data_object, DataObjects, DoRegistry, ValueMetaData};
//!
//! data_object! {
//!     pub struct EventDo {
//!         object_type: "demo.EventDo",
//!         type_name: "demo.Event",
//!         fields: { "at" => ValueMetaData::date() },
//!     }
//! }
//!
//! let mut registry = DoRegistry::new();
//! registry.register::<EventDo>().unwrap();
//! let dos = DataObjects::with_registry(registry);
//!
//! let json = r#"{"_type":"demo.Event","at":"2024-07-13 13:51:39.708Z"}"#;
//! let value = dos.parse(Some(json), None).unwrap().unwrap();
//! assert!(value.as_entity().unwrap().get("at").unwrap().as_date().is_some());
//! assert_eq!(dos.stringify(Some(&value)).unwrap().as_deref(), Some(json));
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod codec;
pub mod data_objects;
pub mod entity;
pub mod nodes;
pub mod registry;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "auto-register")]
#[doc(hidden)]
pub use inventory;

pub use data_objects::DataObjects;
pub use entity::{ContributionKey, DoEntity, DoValue};
pub use registry::{BaseDoEntity, DataObject, DoClass, DoRegistry, ValueKind, ValueMetaData};
pub use types::{Config, DataObjectsConfig, DoId, Error, JsonDate, Result};
