//! Data object classes shared by the integration tests.

#![allow(dead_code)]

use dataobject_core::{data_object, DataObjects, DoRegistry, ValueMetaData};

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
            // propArr2 is left undeclared so its dates have to be detected
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
            "nestedIfc" => ValueMetaData::any(),
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
    pub struct OrderDo {
        object_type: "shop.OrderDo",
        type_name: "shop.Order",
        fields: {
            "id" => ValueMetaData::id("shop.OrderId"),
            "customer" => ValueMetaData::id("shop.CustomerId"),
            "placedAt" => ValueMetaData::date(),
            "labels" => ValueMetaData::set(ValueMetaData::string()),
            "quantities" => ValueMetaData::map(ValueMetaData::id("shop.ProductId"), ValueMetaData::number()),
            "deliveries" => ValueMetaData::date().array(2),
            "lines" => ValueMetaData::entity::<OrderLineDo>().array(1),
        },
    }
}

data_object! {
    pub struct OrderLineDo {
        object_type: "shop.OrderLineDo",
        type_name: "shop.OrderLine",
        fields: {
            "product" => ValueMetaData::id("shop.ProductId"),
            "amount" => ValueMetaData::number(),
        },
    }
}

data_object! {
    pub struct AuditContributionDo {
        object_type: "shop.AuditContributionDo",
        type_name: "shop.AuditContribution",
        fields: {
            "changedAt" => ValueMetaData::date(),
        },
    }
}

data_object! {
    pub struct PricingContributionDo {
        object_type: "shop.PricingContributionDo",
        type_name: "shop.PricingContribution",
        fields: {},
    }
}

pub fn registry() -> DoRegistry {
    let mut registry = DoRegistry::new();
    registry.register::<Fixture01Do>().unwrap();
    registry.register::<Fixture02Do>().unwrap();
    registry.register::<Fixture03Do>().unwrap();
    registry.register::<Fixture03SubDo>().unwrap();
    registry.register::<OrderDo>().unwrap();
    registry.register::<OrderLineDo>().unwrap();
    registry.register::<AuditContributionDo>().unwrap();
    registry.register::<PricingContributionDo>().unwrap();
    registry
}

pub fn data_objects() -> DataObjects {
    DataObjects::with_registry(registry())
}
