//! Contribution store — secondary entities attached to a data object.
//!
//! An entity keeps at most one contribution per key. The key of a plain
//! (untyped) contribution is its `_type`; any other contribution is keyed by
//! its class.

use super::DoEntity;
use crate::registry::{DataObject, DoClass};
use crate::types::{Error, Result};

/// Lookup key of a contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionKey {
    /// Matches contributions whose `_type` equals the name.
    Type(String),
    /// Matches contributions of exactly this class.
    Class(DoClass),
}

impl ContributionKey {
    pub fn of<T: DataObject>() -> Self {
        Self::Class(DoClass::of::<T>())
    }

    /// Key a contribution is stored under.
    fn for_contribution(contribution: &DoEntity) -> Result<Self> {
        if !contribution.is_base() {
            return Ok(Self::Class(contribution.class()));
        }
        contribution
            .type_tag()
            .map(|tag| Self::Type(tag.to_string()))
            .ok_or_else(|| Error::precondition("plain contribution must have a _type"))
    }

    fn matches(&self, contribution: &DoEntity) -> bool {
        match self {
            Self::Type(name) => contribution.type_name() == Some(name.as_str()),
            Self::Class(class) => contribution.class() == *class,
        }
    }
}

impl From<&str> for ContributionKey {
    fn from(name: &str) -> Self {
        Self::Type(name.to_string())
    }
}

impl From<String> for ContributionKey {
    fn from(name: String) -> Self {
        Self::Type(name)
    }
}

impl From<DoClass> for ContributionKey {
    fn from(class: DoClass) -> Self {
        Self::Class(class)
    }
}

impl DoEntity {
    /// Attached contributions, oldest first.
    pub fn contributions(&self) -> &[DoEntity] {
        &self.contributions
    }

    pub fn get_contribution(&self, key: impl Into<ContributionKey>) -> Option<&DoEntity> {
        let key = key.into();
        self.contributions.iter().find(|c| key.matches(c))
    }

    /// Attach a contribution, replacing one with the same key.
    ///
    /// The replacement is appended, so the most recent contribution is last.
    pub fn add_contribution(&mut self, contribution: DoEntity) -> Result<()> {
        let key = ContributionKey::for_contribution(&contribution)?;
        self.remove_contribution(key);
        self.contributions.push(contribution);
        Ok(())
    }

    /// Remove every contribution matching `key`.
    pub fn remove_contribution(&mut self, key: impl Into<ContributionKey>) {
        let key = key.into();
        self.contributions.retain(|c| !key.matches(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DoValue;
    use crate::fixtures::{ContributionFixtureDo, Fixture03Do};

    #[test]
    fn test_add_and_get_by_class() {
        let mut entity = DoEntity::of::<Fixture03Do>();
        entity
            .add_contribution(DoEntity::of::<ContributionFixtureDo>().with("a", 1))
            .unwrap();

        let found = entity.get_contribution(ContributionKey::of::<ContributionFixtureDo>());
        assert_eq!(found.and_then(|c| c.get("a")), Some(&DoValue::from(1)));
        // typed contributions are also found by their type name
        assert!(entity.get_contribution("scout.ContributionFixture").is_some());
        assert!(entity.get_contribution("other").is_none());
    }

    #[test]
    fn test_add_same_class_replaces() {
        let mut entity = DoEntity::base();
        entity
            .add_contribution(DoEntity::of::<ContributionFixtureDo>().with("n", 1))
            .unwrap();
        entity
            .add_contribution(DoEntity::of::<ContributionFixtureDo>().with("n", 2))
            .unwrap();

        assert_eq!(entity.contributions().len(), 1);
        assert_eq!(entity.contributions()[0].get("n"), Some(&DoValue::from(2)));
    }

    #[test]
    fn test_add_same_type_tag_replaces_and_moves_last() {
        let mut entity = DoEntity::base();
        entity.add_contribution(DoEntity::tagged("x.A").with("v", 1)).unwrap();
        entity.add_contribution(DoEntity::tagged("x.B")).unwrap();
        entity.add_contribution(DoEntity::tagged("x.A").with("v", 2)).unwrap();

        let tags: Vec<Option<&str>> = entity.contributions().iter().map(DoEntity::type_name).collect();
        assert_eq!(tags, vec![Some("x.B"), Some("x.A")]);
        assert_eq!(entity.get_contribution("x.A").and_then(|c| c.get("v")), Some(&DoValue::from(2)));
    }

    #[test]
    fn test_plain_contribution_requires_type() {
        let mut entity = DoEntity::base();
        let err = entity.add_contribution(DoEntity::base()).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        assert!(entity.contributions().is_empty());
    }

    #[test]
    fn test_remove_contribution() {
        let mut entity = DoEntity::base();
        entity.add_contribution(DoEntity::tagged("x.A")).unwrap();
        entity.add_contribution(DoEntity::of::<ContributionFixtureDo>()).unwrap();

        entity.remove_contribution("x.A");
        assert_eq!(entity.contributions().len(), 1);
        entity.remove_contribution(DoClass::of::<ContributionFixtureDo>());
        assert!(entity.contributions().is_empty());
        // removing an absent key is a no-op
        entity.remove_contribution("x.A");
    }
}
