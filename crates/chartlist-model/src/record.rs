//! Entity and link records as supplied by the host chart.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ItemTypeId, PropertyTypeId, RecordId};
use crate::schema::Image;

/// Label shown for records and link ends that have no label of their own.
pub const FALLBACK_LABEL: &str = "(No label)";

/// A property value held by a record.
///
/// An absent value is represented by the property missing from the record's
/// map; `Unfetched` is a distinct state meaning the host has not loaded it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    /// ISO 8601 date or date-time, kept as supplied.
    Date(String),
    Unfetched,
}

impl PropertyValue {
    pub fn is_unfetched(&self) -> bool {
        matches!(self, PropertyValue::Unfetched)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    With,
    Against,
    Both,
    None,
}

impl LinkDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkDirection::With => "with",
            LinkDirection::Against => "against",
            LinkDirection::Both => "both",
            LinkDirection::None => "none",
        }
    }
}

impl fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn label_or_fallback(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.trim().is_empty() => label,
        _ => FALLBACK_LABEL,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub item_type: ItemTypeId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub properties: BTreeMap<PropertyTypeId, PropertyValue>,
}

impl Record {
    pub fn new(id: RecordId, item_type: ItemTypeId) -> Self {
        Self {
            id,
            item_type,
            label: None,
            image: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_property(mut self, id: PropertyTypeId, value: PropertyValue) -> Self {
        self.properties.insert(id, value);
        self
    }

    pub fn label_or_fallback(&self) -> &str {
        label_or_fallback(self.label.as_deref())
    }

    pub fn property(&self, id: &PropertyTypeId) -> Option<&PropertyValue> {
        self.properties.get(id)
    }
}

/// One end of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEnd {
    pub id: RecordId,
    #[serde(default)]
    pub label: Option<String>,
}

impl LinkEnd {
    pub fn new(id: RecordId, label: Option<String>) -> Self {
        Self { id, label }
    }

    pub fn label_or_fallback(&self) -> &str {
        label_or_fallback(self.label.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(flatten)]
    pub record: Record,
    pub direction: LinkDirection,
    pub from_end: LinkEnd,
    pub to_end: LinkEnd,
}

impl LinkRecord {
    pub fn new(
        record: Record,
        direction: LinkDirection,
        from_end: LinkEnd,
        to_end: LinkEnd,
    ) -> Self {
        Self {
            record,
            direction,
            from_end,
            to_end,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.record.image = Some(image);
        self
    }

    pub fn with_property(mut self, id: PropertyTypeId, value: PropertyValue) -> Self {
        self.record.properties.insert(id, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: Option<&str>) -> Record {
        Record {
            id: RecordId::new("e1").unwrap(),
            item_type: ItemTypeId::new("Person").unwrap(),
            label: label.map(str::to_string),
            image: None,
            properties: BTreeMap::new(),
        }
    }

    #[test]
    fn blank_label_uses_fallback() {
        assert_eq!(record(None).label_or_fallback(), FALLBACK_LABEL);
        assert_eq!(record(Some("  ")).label_or_fallback(), FALLBACK_LABEL);
        assert_eq!(record(Some("Alice")).label_or_fallback(), "Alice");
    }

    #[test]
    fn unfetched_is_distinct_from_values() {
        assert!(PropertyValue::Unfetched.is_unfetched());
        assert!(!PropertyValue::Text(String::new()).is_unfetched());
    }
}
