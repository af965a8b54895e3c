//! Loading a chart snapshot and driving the list pipeline for one command.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use chartlist_core::{
    ChartContext, DisplayFormatter, FormatOptions, ListAction, ListItemsView, ListSession,
    RowSelection, SelectionNotifier,
};
use chartlist_model::{ChartSnapshot, ItemTypeFilter, ItemTypeId, ListItemsMode, RecordId, SortBy};

/// What to list: the same knobs the list view offers interactively.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub mode: ListItemsMode,
    pub item_type: Option<ItemTypeId>,
    pub sort: Option<SortBy>,
    pub format: FormatOptions,
}

pub fn load_snapshot(path: &Path) -> Result<ChartSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let snapshot = parse_snapshot(&text)
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    info!(
        path = %path.display(),
        entities = snapshot.selection.entities().len(),
        links = snapshot.selection.links().len(),
        "loaded chart snapshot"
    );
    Ok(snapshot)
}

pub fn parse_snapshot(text: &str) -> Result<ChartSnapshot> {
    serde_json::from_str(text).context("invalid chart snapshot")
}

/// Publish the snapshot's selection and attach a list view to it, then apply
/// the requested mode, filter and sort the way a user would.
pub fn open_list(snapshot: ChartSnapshot, request: &ListRequest) -> Result<ListSession> {
    let span = info_span!("open_list", mode = %request.mode);
    let _guard = span.enter();

    let ChartSnapshot { schema, selection } = snapshot;
    let notifier = SelectionNotifier::new(selection, ChartContext::new(schema));
    let formatter = Rc::new(DisplayFormatter::new(request.format.clone()));
    let session = ListSession::attach(&notifier, ListItemsView::new(), formatter);

    session.dispatch(ListAction::Mode(request.mode));
    if let Some(item_type) = &request.item_type {
        session.dispatch(ListAction::FilterItemType(ItemTypeFilter::Only(
            item_type.clone(),
        )));
    }
    if let Some(sort) = &request.sort {
        session.dispatch(ListAction::Sort(sort.clone()));
    }

    let failure = session.view().failure().cloned();
    if let Some(failure) = failure {
        return Err(failure).context("selection does not match the chart schema");
    }
    debug!(rows = session.view().rows().len(), "list ready");
    Ok(session)
}

/// Export row selection from `--select`: every row when absent, else the given ids.
pub fn row_selection(select: Option<&[RecordId]>) -> RowSelection {
    match select {
        None => RowSelection::All,
        Some(ids) => RowSelection::Explicit(ids.iter().cloned().collect()),
    }
}

/// Write the session's export text, every heading included, to `writer`.
///
/// Fails without writing anything when the row selection is an empty set.
pub fn export<W: Write>(session: &ListSession, writer: &mut W) -> Result<usize> {
    let view = session.view();
    if !view.export_enabled() {
        bail!("nothing to export: no rows are selected");
    }
    let written = chartlist_output::write_rows(
        writer,
        view.row_selection(),
        view.headings(),
        view.rows(),
    )
    .context("write export")?;
    info!(rows = written, headings = view.headings().len(), "exported rows");
    Ok(written)
}
