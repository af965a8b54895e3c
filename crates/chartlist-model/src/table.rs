#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::glyph::DirectionGlyph;
use crate::ids::{ItemTypeId, RecordId};
use crate::schema::Image;

pub const LABEL_KEY: &str = "label";
pub const ITEM_TYPE_KEY: &str = "itemType";
pub const RECORD_ID_KEY: &str = "analyzeRecordId";
pub const DIRECTION_KEY: &str = "direction";
pub const FROM_END_LABEL_KEY: &str = "fromEndLabel";
pub const TO_END_LABEL_KEY: &str = "toEndLabel";

/// A table column: key into each row plus display header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub key: String,
    pub header: String,
}

impl Heading {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }
}

/// Leading image of a label cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LabelImage {
    Picture(Image),
    Glyph(DirectionGlyph),
}

/// Displayed content of a label cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelContent {
    pub image: Option<LabelImage>,
    pub text: String,
}

/// A cell whose displayed content is not itself comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortableCell {
    pub content: LabelContent,
    pub sort_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Sortable(SortableCell),
}

impl Cell {
    /// The string rows are ordered and exported by.
    pub fn sort_value(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Sortable(cell) => &cell.sort_value,
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

/// One table row. Rows may lack a cell for some heading keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RecordId,
    pub cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, cell: impl Into<Cell>) {
        self.cells.insert(key.into(), cell.into());
    }

    pub fn cell(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn sort_value(&self, key: &str) -> Option<&str> {
        self.cell(key).map(Cell::sort_value)
    }
}

/// An item type present in a projection, for the type switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeSummary {
    pub id: ItemTypeId,
    pub label: String,
}

/// Result of projecting a selection into table form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub rows: Vec<Row>,
    pub headings: Vec<Heading>,
    pub item_types: Vec<ItemTypeSummary>,
}
