//! Shared fixtures for chartlist-core integration tests.
#![allow(dead_code)]

use chartlist_core::{DisplayFormatter, FormatOptions};
use chartlist_model::{
    ChartSchema, Image, ItemType, ItemTypeId, LinkDirection, LinkEnd, LinkRecord, PropertyType,
    PropertyTypeId, PropertyValue, Record, RecordId, Selection,
};

pub fn id(value: &str) -> RecordId {
    RecordId::new(value).unwrap()
}

pub fn type_id(value: &str) -> ItemTypeId {
    ItemTypeId::new(value).unwrap()
}

pub fn prop_id(value: &str) -> PropertyTypeId {
    PropertyTypeId::new(value).unwrap()
}

/// Formatter without directional isolates, so expected strings stay readable.
pub fn plain_formatter() -> DisplayFormatter {
    DisplayFormatter::new(FormatOptions::new().with_bidi_isolation(false))
}

fn property_type(id: &str, name: &str) -> PropertyType {
    PropertyType {
        id: prop_id(id),
        display_name: name.to_string(),
    }
}

pub fn person_type() -> ItemType {
    ItemType {
        id: type_id("Person"),
        display_name: "Person".to_string(),
        property_types: vec![property_type("age", "Age"), property_type("nick", "Nickname")],
        image: Some(Image {
            href: "person.svg".to_string(),
            description: "Person".to_string(),
        }),
    }
}

pub fn vehicle_type() -> ItemType {
    ItemType {
        id: type_id("Vehicle"),
        display_name: "Vehicle".to_string(),
        property_types: vec![
            property_type("make", "Make"),
            property_type("model", "Model"),
            property_type("colour", "Colour"),
            property_type("plate", "Plate"),
            property_type("year", "Year"),
        ],
        image: None,
    }
}

pub fn knows_type() -> ItemType {
    ItemType {
        id: type_id("Knows"),
        display_name: "Knows".to_string(),
        property_types: vec![property_type("since", "Since")],
        image: None,
    }
}

pub fn schema() -> ChartSchema {
    ChartSchema::new(vec![person_type(), vehicle_type()], vec![knows_type()])
}

pub fn person(record_id: &str, label: &str) -> Record {
    Record::new(id(record_id), type_id("Person")).with_label(label)
}

pub fn vehicle(record_id: &str, label: &str) -> Record {
    Record::new(id(record_id), type_id("Vehicle")).with_label(label)
}

pub fn knows(record_id: &str, direction: LinkDirection, from: &str, to: &str) -> LinkRecord {
    LinkRecord::new(
        Record::new(id(record_id), type_id("Knows")),
        direction,
        LinkEnd::new(id(&format!("{record_id}-from")), Some(from.to_string())),
        LinkEnd::new(id(&format!("{record_id}-to")), Some(to.to_string())),
    )
}

/// Alice and Bob, two people.
pub fn two_people() -> Selection {
    Selection::new(vec![person("e1", "Alice"), person("e2", "Bob")], vec![])
}

/// People, a vehicle and links between them.
pub fn mixed_selection() -> Selection {
    Selection::new(
        vec![
            person("e1", "Alice").with_property(prop_id("age"), PropertyValue::Integer(34)),
            vehicle("v1", "Van").with_property(prop_id("year"), PropertyValue::Integer(2019)),
            person("e2", "Bob").with_property(prop_id("nick"), PropertyValue::Unfetched),
            vehicle("v2", "Coupe"),
        ],
        vec![
            knows("l1", LinkDirection::With, "Alice", "Bob"),
            knows("l2", LinkDirection::Against, "Bob", "Carol")
                .with_property(prop_id("since"), PropertyValue::Date("2020-01-01".to_string())),
        ],
    )
}
