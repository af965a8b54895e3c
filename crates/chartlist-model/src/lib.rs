//! Data model for listing chart selections as tables.
//!
//! - **ids**: validated identifiers for records, item types and property types
//! - **schema**: item types, property types and the [`SchemaAccessor`] lookup
//! - **record** / **selection**: what the host hands over on a selection change
//! - **table**: headings, rows and cells produced by projection
//! - **filter**: mode, item type filter and sort state

pub mod error;
pub mod filter;
pub mod glyph;
pub mod ids;
pub mod record;
pub mod schema;
pub mod selection;
pub mod table;

pub use error::{ModelError, Result};
pub use filter::{FilterState, ItemTypeFilter, ListItemsMode, SortBy, SortOrder};
pub use glyph::DirectionGlyph;
pub use ids::{ItemTypeId, PropertyTypeId, RecordId};
pub use record::{FALLBACK_LABEL, LinkDirection, LinkEnd, LinkRecord, PropertyValue, Record};
pub use schema::{ChartSchema, Image, ItemType, PropertyType, SchemaAccessor};
pub use selection::{ChartSnapshot, Selection};
pub use table::{
    Cell, DIRECTION_KEY, FROM_END_LABEL_KEY, Heading, ITEM_TYPE_KEY, ItemTypeSummary,
    LABEL_KEY, LabelContent, LabelImage, Projection, RECORD_ID_KEY, Row, SortableCell,
    TO_END_LABEL_KEY,
};
