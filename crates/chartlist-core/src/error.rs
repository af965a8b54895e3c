//! Error types for the chartlist-core crate.

use chartlist_model::{ItemTypeId, ListItemsMode, PropertyTypeId};
use thiserror::Error;

/// Schema inconsistencies found while projecting a selection.
///
/// The host keeps schema and selection in sync, so these indicate a contract
/// violation. They are reported to the caller and never papered over.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("no {mode} type {id} in chart schema")]
    UnknownItemType { mode: ListItemsMode, id: ItemTypeId },

    #[error("property {property} is not defined on item type {item_type}")]
    UnknownPropertyType {
        item_type: ItemTypeId,
        property: PropertyTypeId,
    },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
