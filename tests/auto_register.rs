//! Classes submitted with `register_data_object!` end up in
//! `DoRegistry::with_auto_registered`.

#![cfg(feature = "auto-register")]

use dataobject_core::{data_object, register_data_object, DataObjects, DoClass, DoRegistry, ValueMetaData};

data_object! {
    pub struct InvoiceDo {
        object_type: "billing.InvoiceDo",
        type_name: "billing.Invoice",
        fields: {
            "issuedAt" => ValueMetaData::date(),
        },
    }
}

data_object! {
    pub struct CreditNoteDo {
        object_type: "billing.CreditNoteDo",
        type_name: "billing.CreditNote",
        extends: InvoiceDo,
        fields: {},
    }
}

register_data_object!(InvoiceDo);
register_data_object!(CreditNoteDo);

#[test]
fn test_submitted_classes_are_registered() {
    let registry = DoRegistry::with_auto_registered().unwrap();
    assert_eq!(registry.type_names(), vec!["billing.CreditNote", "billing.Invoice"]);
    assert_eq!(registry.resolve("billing.Invoice"), Some(DoClass::of::<InvoiceDo>()));
    assert_eq!(
        registry.resolve_object_type("billing.CreditNoteDo"),
        Some(DoClass::of::<CreditNoteDo>())
    );
}

#[test]
fn test_auto_registered_types_are_parsed() {
    let dos = DataObjects::with_registry(DoRegistry::with_auto_registered().unwrap());
    let json = r#"{"_type": "billing.CreditNote", "issuedAt": "2024-07-15 13:51:39.708Z"}"#;
    let entity = dos.parse_as::<InvoiceDo>(json).unwrap().unwrap();
    assert!(entity.is::<CreditNoteDo>());
    assert!(entity.get("issuedAt").unwrap().as_date().is_some());
}
