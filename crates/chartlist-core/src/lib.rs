//! Chart selection to table pipeline.
//!
//! - **projection**: selection + schema into rows, headings and item types
//! - **sort**: stable, locale-style ordering of rows by one column
//! - **row_selection**: which rows are chosen for export
//! - **format**: the value formatter contract and its default implementation
//! - **notify**: selection-change subscriptions
//! - **view** / **session**: table state driven by actions and selection changes

pub mod error;
pub mod format;
pub mod notify;
pub mod projection;
pub mod redact;
pub mod row_selection;
pub mod session;
pub mod sort;
pub mod view;

pub use error::{ProjectionError, Result};
pub use format::{BidiMode, DisplayFormatter, FormatOptions, VALUE_NOT_FETCHED, ValueFormatter};
pub use notify::{ChartContext, SelectionNotifier, SubscribeOptions, Subscription};
pub use projection::{base_headings, project};
pub use row_selection::{RowCheckbox, RowSelection, row_checkbox};
pub use session::ListSession;
pub use sort::{apply_sort, locale_compare, sort_rows};
pub use view::{
    EmptyState, ItemTypeChoice, ListAction, ListItemsView, MAX_VISIBLE_COLUMNS, ViewStatus,
};
