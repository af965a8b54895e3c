//! State of the list items table: mode, filter, sort, current rows and the
//! export selection.

use chartlist_model::{
    FilterState, Heading, ItemTypeFilter, ItemTypeSummary, ListItemsMode, Projection, RecordId,
    Row, SchemaAccessor, Selection, SortBy,
};
use tracing::{debug, error};

use crate::error::{ProjectionError, Result};
use crate::format::ValueFormatter;
use crate::notify::ChartContext;
use crate::projection::project;
use crate::row_selection::RowSelection;
use crate::sort::apply_sort;

/// Most headings ever rendered as table columns. Export is not capped.
pub const MAX_VISIBLE_COLUMNS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Switch between entities and links. Resets the item type filter.
    Mode(ListItemsMode),
    Sort(SortBy),
    FilterItemType(ItemTypeFilter),
}

/// Why the table has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NothingSelected,
    FilterMatchesNothing,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NothingSelected => "Select items on the chart to see them listed here",
            EmptyState::FilterMatchesNothing => {
                "Your current filters match nothing selected on the chart"
            }
        }
    }

    /// Whether offering a filter reset makes sense.
    pub fn can_reset_filters(&self) -> bool {
        matches!(self, EmptyState::FilterMatchesNothing)
    }
}

/// One entry of the item type switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTypeChoice {
    pub filter: ItemTypeFilter,
    pub label: String,
}

/// Formatted header counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStatus {
    pub records: String,
    pub viewing: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListItemsView {
    filter: FilterState,
    sort_by: Option<SortBy>,
    projection: Projection,
    item_types: Vec<ItemTypeSummary>,
    record_count: usize,
    row_selection: RowSelection,
    failure: Option<ProjectionError>,
}

impl ListItemsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn mode(&self) -> ListItemsMode {
        self.filter.mode()
    }

    pub fn sort_by(&self) -> Option<&SortBy> {
        self.sort_by.as_ref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.projection.rows
    }

    /// Every heading, including those past the display cap.
    pub fn headings(&self) -> &[Heading] {
        &self.projection.headings
    }

    pub fn visible_headings(&self) -> &[Heading] {
        let headings = self.headings();
        &headings[..headings.len().min(MAX_VISIBLE_COLUMNS)]
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn row_selection(&self) -> &RowSelection {
        &self.row_selection
    }

    pub fn row_selection_mut(&mut self) -> &mut RowSelection {
        &mut self.row_selection
    }

    /// The error from the last failed refresh, cleared by the next success.
    pub fn failure(&self) -> Option<&ProjectionError> {
        self.failure.as_ref()
    }

    /// Apply a user action. Returns true when the rows must be recomputed
    /// from the current selection.
    pub fn dispatch(&mut self, action: ListAction) -> bool {
        debug!(?action, "list action");
        match action {
            ListAction::Mode(mode) => {
                self.filter.set_mode(mode);
                true
            }
            ListAction::FilterItemType(filter) => {
                self.filter.set_item_type_filter(filter);
                true
            }
            ListAction::Sort(sort_by) => {
                self.projection.rows = apply_sort(&self.projection.rows, &sort_by);
                self.sort_by = Some(sort_by);
                false
            }
        }
    }

    /// Back to all entities.
    pub fn reset_filters(&mut self) -> bool {
        self.dispatch(ListAction::Mode(ListItemsMode::Entity))
    }

    /// Recompute rows and headings from `selection`, re-applying the current sort.
    ///
    /// The item type switcher is only refreshed while the filter is `all`, so it
    /// keeps offering every type after the user narrows the filter.
    ///
    /// # Errors
    ///
    /// Returns the projection error when the schema does not cover the
    /// selection. The previous rows and headings are left in place while the
    /// filter keeps its new value, so [`filter`](Self::filter) may not match
    /// [`rows`](Self::rows) until a refresh succeeds.
    pub fn refresh<F, S>(
        &mut self,
        selection: &Selection,
        schema: &S,
        formatter: &F,
    ) -> Result<()>
    where
        F: ValueFormatter + ?Sized,
        S: SchemaAccessor + ?Sized,
    {
        let mut projection = project(
            self.filter.mode(),
            self.filter.item_type_filter(),
            selection,
            formatter,
            schema,
        )?;
        if let Some(sort_by) = &self.sort_by {
            projection.rows = apply_sort(&projection.rows, sort_by);
        }
        if self.filter.item_type_filter().is_all() {
            self.item_types = projection.item_types.clone();
        }
        self.record_count = selection.record_count();
        self.projection = projection;
        self.failure = None;
        Ok(())
    }

    /// Selection-change handler: refresh and keep any failure for the caller to show.
    ///
    /// While [`failure`](Self::failure) is `Some`, the rows still belong to
    /// the last successful refresh.
    pub fn on_selection_change<F>(
        &mut self,
        selection: &Selection,
        context: &ChartContext,
        formatter: &F,
    ) where
        F: ValueFormatter + ?Sized,
    {
        if let Err(failure) = self.refresh(selection, context.schema(), formatter) {
            error!(%failure, "selection does not match chart schema");
            self.failure = Some(failure);
        }
    }

    /// Item type switcher entries: `All` first, then each type seen.
    pub fn item_type_choices(&self) -> Vec<ItemTypeChoice> {
        let mut choices = vec![ItemTypeChoice {
            filter: ItemTypeFilter::All,
            label: "All".to_string(),
        }];
        choices.extend(self.item_types.iter().map(|item_type| ItemTypeChoice {
            filter: ItemTypeFilter::Only(item_type.id.clone()),
            label: item_type.label.clone(),
        }));
        choices
    }

    pub fn status<F>(&self, formatter: &F) -> ViewStatus
    where
        F: ValueFormatter + ?Sized,
    {
        ViewStatus {
            records: format!("Records: {}", formatter.format_count(self.record_count)),
            viewing: format!("Viewing: {}", formatter.format_count(self.rows().len())),
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows().is_empty() {
            None
        } else if self.record_count == 0 {
            Some(EmptyState::NothingSelected)
        } else {
            Some(EmptyState::FilterMatchesNothing)
        }
    }

    /// Header checkbox.
    pub fn set_all_rows(&mut self, checked: bool) {
        self.row_selection.set_all_rows(checked);
    }

    pub fn toggle_row(&mut self, id: &RecordId, included: bool) -> bool {
        self.row_selection.toggle(id, included)
    }

    pub fn export_enabled(&self) -> bool {
        self.row_selection.export_enabled()
    }
}
