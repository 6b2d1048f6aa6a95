//! Data object classes shared by the unit tests.

use crate::data_object;
use crate::registry::{DoRegistry, ValueMetaData};

data_object! {
    pub struct Fixture01Do {
        object_type: "scout.Fixture01Do",
        type_name: "scout.Fixture01",
        fields: {
            "propBool" => ValueMetaData::boolean(),
            "propNum" => ValueMetaData::number(),
            "propStr" => ValueMetaData::string(),
            "propNull" => ValueMetaData::string(),
            "propDate" => ValueMetaData::date(),
            "propArr" => ValueMetaData::entity::<Fixture02Do>().array(1),
            "propObj" => ValueMetaData::entity::<Fixture03Do>(),
        },
    }
}

data_object! {
    pub struct Fixture02Do {
        object_type: "scout.Fixture02Do",
        type_name: "scout.Fixture02",
        fields: {
            "nestedDate" => ValueMetaData::date(),
            "nestedObj" => ValueMetaData::entity::<Fixture03Do>(),
        },
    }
}

data_object! {
    pub struct Fixture03Do {
        object_type: "scout.Fixture03Do",
        type_name: "scout.Fixture03",
        fields: {
            "nestedNestedDate" => ValueMetaData::date(),
        },
    }
}

data_object! {
    pub struct Fixture03SubDo {
        object_type: "scout.Fixture03SubDo",
        type_name: "scout.Fixture03Sub",
        extends: Fixture03Do,
        fields: {
            "nestedNestedDateSub" => ValueMetaData::date(),
        },
    }
}

data_object! {
    pub struct CollectionsFixtureDo {
        object_type: "scout.CollectionsFixtureDo",
        type_name: "scout.CollectionsFixture",
        fields: {
            "owner" => ValueMetaData::id("scout.UserId"),
            "labels" => ValueMetaData::set(ValueMetaData::string()),
            "tagsById" => ValueMetaData::map(ValueMetaData::id("scout.TagId"), ValueMetaData::string()),
            "history" => ValueMetaData::date().array(2),
        },
    }
}

data_object! {
    pub struct ContributionFixtureDo {
        object_type: "scout.ContributionFixtureDo",
        type_name: "scout.ContributionFixture",
        fields: {},
    }
}

data_object! {
    /// Has no type name; can be expected but not registered.
    pub struct UntypedDo {
        object_type: "scout.UntypedDo",
        fields: {},
    }
}

/// Registry with every typed fixture class.
pub fn registry() -> DoRegistry {
    let mut registry = DoRegistry::new();
    for result in [
        registry.register::<Fixture01Do>(),
        registry.register::<Fixture02Do>(),
        registry.register::<Fixture03Do>(),
        registry.register::<Fixture03SubDo>(),
        registry.register::<CollectionsFixtureDo>(),
        registry.register::<ContributionFixtureDo>(),
    ] {
        assert!(result.is_ok(), "fixture registration failed: {:?}", result);
    }
    registry
}
