//! Chart schema: item types and their property types.

use serde::{Deserialize, Serialize};

use crate::filter::ListItemsMode;
use crate::ids::{ItemTypeId, PropertyTypeId};

/// Image reference used by records and item types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub href: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    pub id: PropertyTypeId,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemType {
    pub id: ItemTypeId,
    pub display_name: String,
    /// Property types in declared order. Dynamic headings follow this order.
    #[serde(default)]
    pub property_types: Vec<PropertyType>,
    /// Default image for records of this type.
    #[serde(default)]
    pub image: Option<Image>,
}

impl ItemType {
    pub fn property_type(&self, id: &PropertyTypeId) -> Option<&PropertyType> {
        self.property_types.iter().find(|pt| &pt.id == id)
    }
}

/// Read-only lookup of item types, supplied by the host.
///
/// Entity types and link types are disjoint identifier spaces, so every
/// lookup is scoped to one of them.
pub trait SchemaAccessor {
    fn entity_type(&self, id: &ItemTypeId) -> Option<&ItemType>;

    fn link_type(&self, id: &ItemTypeId) -> Option<&ItemType>;

    fn item_type(&self, mode: ListItemsMode, id: &ItemTypeId) -> Option<&ItemType> {
        match mode {
            ListItemsMode::Entity => self.entity_type(id),
            ListItemsMode::Link => self.link_type(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSchema {
    #[serde(default)]
    pub entity_types: Vec<ItemType>,
    #[serde(default)]
    pub link_types: Vec<ItemType>,
}

impl ChartSchema {
    pub fn new(entity_types: Vec<ItemType>, link_types: Vec<ItemType>) -> Self {
        Self {
            entity_types,
            link_types,
        }
    }
}

impl SchemaAccessor for ChartSchema {
    fn entity_type(&self, id: &ItemTypeId) -> Option<&ItemType> {
        self.entity_types.iter().find(|t| &t.id == id)
    }

    fn link_type(&self, id: &ItemTypeId) -> Option<&ItemType> {
        self.link_types.iter().find(|t| &t.id == id)
    }
}
