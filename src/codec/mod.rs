//! Deserializer and serializer drivers.
//!
//! Both walk the tree recursively and hand dates, ids, maps, sets and arrays
//! to the node serializer chain; entities and plain scalars are handled here.

mod deserializer;
mod serializer;

pub use deserializer::DoDeserializer;
pub use serializer::DoSerializer;
