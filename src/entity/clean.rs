//! Removal of fields that carry no relevant value.

use super::{DoEntity, DoValue};

impl DoEntity {
    /// Recursively drop `null` fields, empty containers and nested entities
    /// that end up with neither fields nor contributions.
    ///
    /// Elements of arrays, maps and sets are cleaned in place but never removed.
    pub fn clean(&mut self) {
        for value in self.fields.values_mut() {
            clean_nested(value);
        }
        self.fields.retain(|_, value| !is_cleanable(value));
        for contribution in &mut self.contributions {
            contribution.clean();
        }
    }
}

fn clean_nested(value: &mut DoValue) {
    match value {
        DoValue::Entity(entity) => entity.clean(),
        DoValue::Array(items) | DoValue::Set(items) => items.iter_mut().for_each(clean_nested),
        DoValue::Map(entries) => entries.iter_mut().for_each(|(_, v)| clean_nested(v)),
        _ => {}
    }
}

fn is_cleanable(value: &DoValue) -> bool {
    match value {
        DoValue::Null => true,
        DoValue::Array(items) | DoValue::Set(items) => items.is_empty(),
        DoValue::Map(entries) => entries.is_empty(),
        DoValue::Entity(entity) => entity.is_empty() && entity.contributions.is_empty(),
        _ => false,
    }
}
