//! The host's current chart selection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::ListItemsMode;
use crate::ids::{ItemTypeId, RecordId};
use crate::record::{LinkRecord, Record};
use crate::schema::ChartSchema;

/// Entity and link records selected on the chart, in host iteration order.
///
/// Record identifiers are unique within each collection; when the host hands
/// over a duplicate, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SelectionData", into = "SelectionData")]
pub struct Selection {
    entities: Vec<Record>,
    links: Vec<LinkRecord>,
}

#[derive(Clone, Serialize, Deserialize)]
struct SelectionData {
    #[serde(default)]
    entities: Vec<Record>,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

impl From<SelectionData> for Selection {
    fn from(data: SelectionData) -> Self {
        Self::new(data.entities, data.links)
    }
}

impl From<Selection> for SelectionData {
    fn from(selection: Selection) -> Self {
        Self {
            entities: selection.entities,
            links: selection.links,
        }
    }
}

impl Selection {
    pub fn new(entities: Vec<Record>, links: Vec<LinkRecord>) -> Self {
        let mut seen = HashSet::new();
        let entities = entities
            .into_iter()
            .filter(|record| seen.insert(record.id.clone()))
            .collect();
        seen.clear();
        let links = links
            .into_iter()
            .filter(|link| seen.insert(link.record.id.clone()))
            .collect();
        Self { entities, links }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> &[Record] {
        &self.entities
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Total number of selected records, entities and links together.
    pub fn record_count(&self) -> usize {
        self.entities.len() + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Item type ids of the records of one mode, distinct and in first-seen order.
    pub fn item_type_ids(&self, mode: ListItemsMode) -> Vec<&ItemTypeId> {
        let mut seen = HashSet::new();
        let ids: Box<dyn Iterator<Item = &ItemTypeId>> = match mode {
            ListItemsMode::Entity => Box::new(self.entities.iter().map(|r| &r.item_type)),
            ListItemsMode::Link => Box::new(self.links.iter().map(|l| &l.record.item_type)),
        };
        ids.filter(|id| seen.insert(*id)).collect()
    }

    pub fn contains(&self, mode: ListItemsMode, id: &RecordId) -> bool {
        match mode {
            ListItemsMode::Entity => self.entities.iter().any(|r| &r.id == id),
            ListItemsMode::Link => self.links.iter().any(|l| &l.record.id == id),
        }
    }
}

/// A schema plus the selection made against it, as saved by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    #[serde(default)]
    pub schema: ChartSchema,
    #[serde(default)]
    pub selection: Selection,
}
