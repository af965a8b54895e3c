//! Projection of a chart selection into table rows and headings.
//!
//! With the `all` filter every record of the active mode becomes a row and
//! only the base headings are produced. With a single item type filter the
//! rows are narrowed to that type and one dynamic heading (and cell) is
//! added per property type, in the type's declared order.
//!
//! Row order follows the selection's iteration order. Sorting is a separate
//! step, see [`crate::sort`].

use std::collections::HashSet;

use chartlist_model::{
    Cell, DIRECTION_KEY, DirectionGlyph, FROM_END_LABEL_KEY, Heading, ITEM_TYPE_KEY, ItemType,
    ItemTypeFilter, ItemTypeId, ItemTypeSummary, LABEL_KEY, LabelContent, LabelImage,
    LinkRecord, ListItemsMode, Projection, PropertyValue, RECORD_ID_KEY, Record, Row,
    SchemaAccessor, Selection, SortableCell, TO_END_LABEL_KEY,
};
use tracing::{debug, debug_span, trace};

use crate::error::{ProjectionError, Result};
use crate::format::{BidiMode, VALUE_NOT_FETCHED, ValueFormatter};
use crate::redact::redact_value;

/// Headings every entity table starts with.
pub fn entity_headings() -> Vec<Heading> {
    vec![
        Heading::new(LABEL_KEY, "Label"),
        Heading::new(ITEM_TYPE_KEY, "Type"),
        Heading::new(RECORD_ID_KEY, "Id"),
    ]
}

/// Headings every link table starts with.
pub fn link_headings() -> Vec<Heading> {
    let mut headings = entity_headings();
    headings.extend([
        Heading::new(DIRECTION_KEY, "Direction"),
        Heading::new(FROM_END_LABEL_KEY, "From End Label"),
        Heading::new(TO_END_LABEL_KEY, "To End Label"),
    ]);
    headings
}

pub fn base_headings(mode: ListItemsMode) -> Vec<Heading> {
    match mode {
        ListItemsMode::Entity => entity_headings(),
        ListItemsMode::Link => link_headings(),
    }
}

/// Project `selection` into rows, headings and the item types encountered.
///
/// # Errors
///
/// Returns [`ProjectionError`] when the filtered item type, the item type of
/// an included record, or a property referenced by an included record is
/// missing from `schema`.
pub fn project<F, S>(
    mode: ListItemsMode,
    filter: &ItemTypeFilter,
    selection: &Selection,
    formatter: &F,
    schema: &S,
) -> Result<Projection>
where
    F: ValueFormatter + ?Sized,
    S: SchemaAccessor + ?Sized,
{
    let span = debug_span!("project", %mode, %filter);
    let _guard = span.enter();

    let mut headings = base_headings(mode);
    let filtered_type = match filter.item_type() {
        Some(id) => {
            let item_type = lookup(schema, mode, id)?;
            headings.extend(item_type.property_types.iter().map(|pt| {
                Heading::new(
                    pt.id.as_str(),
                    formatter.wrap_for_bidi(&pt.display_name, BidiMode::Raw),
                )
            }));
            Some(item_type)
        }
        None => None,
    };

    let mut builder = ProjectionBuilder::new(mode, schema, formatter, filtered_type);
    match mode {
        ListItemsMode::Entity => {
            for record in selection.entities() {
                if filter.matches(&record.item_type) {
                    builder.push_entity(record)?;
                }
            }
        }
        ListItemsMode::Link => {
            for link in selection.links() {
                if filter.matches(&link.record.item_type) {
                    builder.push_link(link)?;
                }
            }
        }
    }

    let (rows, item_types) = builder.finish();
    debug!(
        rows = rows.len(),
        headings = headings.len(),
        item_types = item_types.len(),
        "projected selection"
    );
    Ok(Projection {
        rows,
        headings,
        item_types,
    })
}

fn lookup<'s, S>(schema: &'s S, mode: ListItemsMode, id: &ItemTypeId) -> Result<&'s ItemType>
where
    S: SchemaAccessor + ?Sized,
{
    schema
        .item_type(mode, id)
        .ok_or_else(|| ProjectionError::UnknownItemType {
            mode,
            id: id.clone(),
        })
}

struct ProjectionBuilder<'a, F: ?Sized, S: ?Sized> {
    mode: ListItemsMode,
    schema: &'a S,
    formatter: &'a F,
    filtered_type: Option<&'a ItemType>,
    rows: Vec<Row>,
    seen_types: HashSet<ItemTypeId>,
    item_types: Vec<ItemTypeSummary>,
}

impl<'a, F, S> ProjectionBuilder<'a, F, S>
where
    F: ValueFormatter + ?Sized,
    S: SchemaAccessor + ?Sized,
{
    fn new(
        mode: ListItemsMode,
        schema: &'a S,
        formatter: &'a F,
        filtered_type: Option<&'a ItemType>,
    ) -> Self {
        Self {
            mode,
            schema,
            formatter,
            filtered_type,
            rows: Vec::new(),
            seen_types: HashSet::new(),
            item_types: Vec::new(),
        }
    }

    fn push_entity(&mut self, record: &Record) -> Result<()> {
        let item_type = self.item_type_of(record)?;
        let image = record
            .image
            .as_ref()
            .or(item_type.image.as_ref())
            .cloned()
            .map(LabelImage::Picture);
        let mut row = base_row(record, item_type, image);
        self.add_property_cells(record, &mut row)?;
        self.rows.push(row);
        Ok(())
    }

    fn push_link(&mut self, link: &LinkRecord) -> Result<()> {
        let record = &link.record;
        let item_type = self.item_type_of(record)?;
        let image = match &record.image {
            Some(image) => LabelImage::Picture(image.clone()),
            None => LabelImage::Glyph(DirectionGlyph::for_direction(link.direction)),
        };
        let mut row = base_row(record, item_type, Some(image));
        row.insert(DIRECTION_KEY, link.direction.as_str());
        row.insert(FROM_END_LABEL_KEY, link.from_end.label_or_fallback());
        row.insert(TO_END_LABEL_KEY, link.to_end.label_or_fallback());
        self.add_property_cells(record, &mut row)?;
        self.rows.push(row);
        Ok(())
    }

    fn item_type_of(&mut self, record: &Record) -> Result<&'a ItemType> {
        let item_type = lookup(self.schema, self.mode, &record.item_type)?;
        if self.seen_types.insert(item_type.id.clone()) {
            self.item_types.push(ItemTypeSummary {
                id: item_type.id.clone(),
                label: item_type.display_name.clone(),
            });
        }
        Ok(item_type)
    }

    fn add_property_cells(&self, record: &Record, row: &mut Row) -> Result<()> {
        let Some(item_type) = self.filtered_type else {
            return Ok(());
        };
        if let Some(property) = record
            .properties
            .keys()
            .find(|id| item_type.property_type(id).is_none())
        {
            return Err(ProjectionError::UnknownPropertyType {
                item_type: item_type.id.clone(),
                property: property.clone(),
            });
        }
        for property_type in &item_type.property_types {
            let value = format_property(record.property(&property_type.id), self.formatter);
            trace!(
                record = %record.id,
                property = %property_type.id,
                value = redact_value(&value),
                "property cell"
            );
            row.insert(property_type.id.as_str(), value);
        }
        Ok(())
    }

    fn finish(self) -> (Vec<Row>, Vec<ItemTypeSummary>) {
        (self.rows, self.item_types)
    }
}

fn base_row(record: &Record, item_type: &ItemType, image: Option<LabelImage>) -> Row {
    let label = record.label_or_fallback();
    let mut row = Row::new(record.id.clone());
    row.insert(
        LABEL_KEY,
        Cell::Sortable(SortableCell {
            content: LabelContent {
                image,
                text: label.to_string(),
            },
            sort_value: label.to_string(),
        }),
    );
    row.insert(ITEM_TYPE_KEY, item_type.display_name.as_str());
    row.insert(RECORD_ID_KEY, record.id.as_str());
    row
}

/// Cell text for one property value. Absent values and values that format to
/// nothing become an empty cell.
pub fn format_property<F>(value: Option<&PropertyValue>, formatter: &F) -> String
where
    F: ValueFormatter + ?Sized,
{
    match value {
        Some(value) if value.is_unfetched() => {
            formatter.wrap_for_bidi(VALUE_NOT_FETCHED, BidiMode::Raw)
        }
        Some(value) => formatter
            .format_value(value)
            .map(|formatted| formatter.wrap_for_bidi(&formatted, BidiMode::Raw))
            .unwrap_or_default(),
        None => String::new(),
    }
}
