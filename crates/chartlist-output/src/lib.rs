//! Export of chart list tables.
//!
//! The export text is tab separated with JSON-quoted fields, written from
//! the full heading list (not the display-capped one) and the current row
//! order, filtered by the [`RowSelection`](chartlist_core::RowSelection).

pub mod error;
pub mod tsv;

pub use error::{ExportError, Result};
pub use tsv::{serialize_rows, write_rows};
