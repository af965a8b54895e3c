//! Which rows are chosen for export.
//!
//! Tracked by record id and independent of the current projection, so it
//! survives filtering, sorting and selection changes. Ids that are no longer
//! in the table are kept but ignored on export.

use std::collections::BTreeSet;

use chartlist_model::{RecordId, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSelection {
    /// Every row currently in view, however many there are.
    All,
    Explicit(BTreeSet<RecordId>),
}

impl Default for RowSelection {
    fn default() -> Self {
        RowSelection::Explicit(BTreeSet::new())
    }
}

/// Render state of a per-row checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCheckbox {
    pub checked: bool,
    pub disabled: bool,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_all(&mut self) {
        *self = RowSelection::All;
    }

    pub fn deselect_all(&mut self) {
        *self = RowSelection::Explicit(BTreeSet::new());
    }

    /// Header checkbox: checked selects every row, unchecked clears the selection.
    pub fn set_all_rows(&mut self, checked: bool) {
        if checked {
            self.select_all();
        } else {
            self.deselect_all();
        }
    }

    /// Include or exclude one row.
    ///
    /// Rows cannot be picked out of the `All` state one by one; the call is a
    /// no-op there and returns `false`. Use [`deselect_all`](Self::deselect_all) first.
    pub fn toggle(&mut self, id: &RecordId, included: bool) -> bool {
        match self {
            RowSelection::All => {
                debug!(record = %id, "ignoring row toggle while all rows are selected");
                false
            }
            RowSelection::Explicit(ids) => {
                if included {
                    ids.insert(id.clone());
                } else {
                    ids.remove(id);
                }
                true
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RowSelection::All)
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        match self {
            RowSelection::All => true,
            RowSelection::Explicit(ids) => ids.contains(id),
        }
    }

    /// Whether there is anything to export.
    pub fn export_enabled(&self) -> bool {
        match self {
            RowSelection::All => true,
            RowSelection::Explicit(ids) => !ids.is_empty(),
        }
    }

    /// Number of `rows` that pass the selection.
    pub fn selected_count(&self, rows: &[Row]) -> usize {
        match self {
            RowSelection::All => rows.len(),
            RowSelection::Explicit(ids) => rows.iter().filter(|row| ids.contains(&row.id)).count(),
        }
    }

    pub fn checkbox(&self, id: &RecordId) -> RowCheckbox {
        RowCheckbox {
            checked: self.is_selected(id),
            disabled: self.is_all(),
        }
    }
}

/// Checkbox state for `row` under `selection`.
pub fn row_checkbox(selection: &RowSelection, row: &Row) -> RowCheckbox {
    selection.checkbox(&row.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> RecordId {
        RecordId::new(value).unwrap()
    }

    #[test]
    fn starts_empty() {
        let selection = RowSelection::new();
        assert!(!selection.export_enabled());
        assert!(!selection.is_selected(&id("e1")));
    }

    #[test]
    fn toggle_is_ignored_under_all() {
        let mut selection = RowSelection::All;
        assert!(!selection.toggle(&id("e1"), false));
        assert_eq!(selection, RowSelection::All);
        assert!(selection.is_selected(&id("e1")));
    }

    #[test]
    fn rows_render_checked_and_disabled_under_all() {
        let selection = RowSelection::All;
        assert_eq!(
            selection.checkbox(&id("anything")),
            RowCheckbox {
                checked: true,
                disabled: true,
            }
        );
    }
}
