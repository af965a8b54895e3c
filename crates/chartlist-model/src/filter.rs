//! Mode, item type filter and sort state of the list view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::ItemTypeId;

/// Which record collection the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemsMode {
    #[default]
    Entity,
    Link,
}

impl ListItemsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListItemsMode::Entity => "entity",
            ListItemsMode::Link => "link",
        }
    }
}

impl fmt::Display for ListItemsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListItemsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entity" | "entities" => Ok(ListItemsMode::Entity),
            "link" | "links" => Ok(ListItemsMode::Link),
            _ => Err(format!("Unknown list mode: {s}")),
        }
    }
}

/// Active item type filter: every type, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTypeFilter {
    #[default]
    All,
    Only(ItemTypeId),
}

impl ItemTypeFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, ItemTypeFilter::All)
    }

    pub fn item_type(&self) -> Option<&ItemTypeId> {
        match self {
            ItemTypeFilter::All => None,
            ItemTypeFilter::Only(id) => Some(id),
        }
    }

    pub fn matches(&self, item_type: &ItemTypeId) -> bool {
        match self {
            ItemTypeFilter::All => true,
            ItemTypeFilter::Only(id) => id == item_type,
        }
    }
}

impl fmt::Display for ItemTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemTypeFilter::All => f.write_str(Self::ALL_KEY),
            ItemTypeFilter::Only(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ItemTypeFilter {
    type Err = String;

    /// `"all"` selects every type; anything else names a single item type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::ALL_KEY {
            return Ok(ItemTypeFilter::All);
        }
        ItemTypeId::new(s)
            .map(ItemTypeFilter::Only)
            .map_err(|error| error.to_string())
    }
}

/// Mode plus item type filter.
///
/// The filter only makes sense within one mode, so switching mode always
/// resets it to [`ItemTypeFilter::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    mode: ListItemsMode,
    item_type_filter: ItemTypeFilter,
}

impl FilterState {
    pub fn new(mode: ListItemsMode) -> Self {
        Self {
            mode,
            item_type_filter: ItemTypeFilter::All,
        }
    }

    pub fn with_item_type_filter(mut self, filter: ItemTypeFilter) -> Self {
        self.item_type_filter = filter;
        self
    }

    pub fn mode(&self) -> ListItemsMode {
        self.mode
    }

    pub fn item_type_filter(&self) -> &ItemTypeFilter {
        &self.item_type_filter
    }

    pub fn set_mode(&mut self, mode: ListItemsMode) {
        self.mode = mode;
        self.item_type_filter = ItemTypeFilter::All;
    }

    pub fn set_item_type_filter(&mut self, filter: ItemTypeFilter) {
        self.item_type_filter = filter;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Column key and direction of the user's current sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    pub key: String,
    pub order: SortOrder,
}

impl SortBy {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}
