//! Integration tests for the export text.

use std::collections::BTreeSet;

use chartlist_core::{DisplayFormatter, FormatOptions, RowSelection, project, sort_rows};
use chartlist_model::{
    ChartSchema, Heading, ItemType, ItemTypeFilter, ItemTypeId, ListItemsMode, PropertyType,
    PropertyTypeId, PropertyValue, Record, RecordId, Row, Selection, SortOrder,
};
use chartlist_output::{serialize_rows, write_rows};
use proptest::prelude::*;

fn id(value: &str) -> RecordId {
    RecordId::new(value).unwrap()
}

fn schema() -> ChartSchema {
    ChartSchema::new(
        vec![ItemType {
            id: ItemTypeId::new("Person").unwrap(),
            display_name: "Person".to_string(),
            property_types: vec![PropertyType {
                id: PropertyTypeId::new("age").unwrap(),
                display_name: "Age".to_string(),
            }],
            image: None,
        }],
        vec![],
    )
}

fn people() -> Selection {
    let person = |record: &str, label: &str| {
        Record::new(id(record), ItemTypeId::new("Person").unwrap()).with_label(label)
    };
    Selection::new(
        vec![
            person("e1", "Alice")
                .with_property(PropertyTypeId::new("age").unwrap(), PropertyValue::Integer(34)),
            person("e2", "Bob"),
        ],
        vec![],
    )
}

fn table(filter: &ItemTypeFilter) -> (Vec<Heading>, Vec<Row>) {
    let formatter = DisplayFormatter::new(FormatOptions::new().with_bidi_isolation(false));
    let projection = project(ListItemsMode::Entity, filter, &people(), &formatter, &schema())
        .expect("projection");
    (projection.headings, projection.rows)
}

#[test]
fn explicit_selection_exports_only_chosen_rows() {
    let (headings, rows) = table(&ItemTypeFilter::All);
    let mut selection = RowSelection::All;
    selection.deselect_all();
    selection.toggle(&id("e1"), true);

    let text = serialize_rows(&selection, &headings, &rows).unwrap();
    assert_eq!(
        text,
        "\"Label\"\t\"Type\"\t\"Id\"\t\n\"Alice\"\t\"Person\"\t\"e1\"\t\n"
    );
}

#[test]
fn empty_selection_exports_header_only() {
    let (headings, rows) = table(&ItemTypeFilter::All);
    let text = serialize_rows(&RowSelection::new(), &headings, &rows).unwrap();
    assert_eq!(text, "\"Label\"\t\"Type\"\t\"Id\"\t\n");
}

#[test]
fn property_columns_are_exported_with_their_values() {
    let filter = ItemTypeFilter::Only(ItemTypeId::new("Person").unwrap());
    let (headings, rows) = table(&filter);
    let text = serialize_rows(&RowSelection::All, &headings, &rows).unwrap();

    assert_eq!(
        text,
        concat!(
            "\"Label\"\t\"Type\"\t\"Id\"\t\"Age\"\t\n",
            "\"Alice\"\t\"Person\"\t\"e1\"\t\"34\"\t\n",
            "\"Bob\"\t\"Person\"\t\"e2\"\t\"\"\t\n",
        )
    );
}

#[test]
fn missing_cells_are_skipped_not_blank() {
    let headings = vec![Heading::new("a", "A"), Heading::new("b", "B"), Heading::new("c", "C")];
    let mut row = Row::new(id("r1"));
    row.insert("a", "1");
    row.insert("c", "3");

    let text = serialize_rows(&RowSelection::All, &headings, &[row]).unwrap();
    assert_eq!(text, "\"A\"\t\"B\"\t\"C\"\t\n\"1\"\t\"3\"\t\n");
}

#[test]
fn rows_keep_the_given_order() {
    let (headings, rows) = table(&ItemTypeFilter::All);
    let sorted = sort_rows(&rows, "label", SortOrder::Descending);

    let text = serialize_rows(&RowSelection::All, &headings, &sorted).unwrap();
    let ids: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split('\t').nth(2).unwrap())
        .collect();
    assert_eq!(ids, ["\"e2\"", "\"e1\""]);
}

#[test]
fn writer_receives_the_same_bytes() {
    let (headings, rows) = table(&ItemTypeFilter::All);
    let selection = RowSelection::Explicit(BTreeSet::from([id("e2"), id("gone")]));

    let mut buffer = Vec::new();
    let written = write_rows(&mut buffer, &selection, &headings, &rows).unwrap();

    assert_eq!(written, 1);
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        serialize_rows(&selection, &headings, &rows).unwrap()
    );
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::collection::vec(any::<Option<String>>(), 3), 0..12).prop_map(
        |cells| {
            cells
                .into_iter()
                .enumerate()
                .map(|(i, values)| {
                    let mut row = Row::new(id(&format!("r{i}")));
                    for (key, value) in ["a", "b", "c"].iter().zip(values) {
                        if let Some(value) = value {
                            row.insert(*key, value);
                        }
                    }
                    row
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn line_and_field_counts_follow_selection(
        rows in arb_rows(),
        picks in prop::collection::vec(any::<bool>(), 12),
    ) {
        let headings = vec![Heading::new("a", "A"), Heading::new("b", "B"), Heading::new("c", "C")];
        let chosen: BTreeSet<RecordId> = rows
            .iter()
            .zip(&picks)
            .filter(|(_, pick)| **pick)
            .map(|(row, _)| row.id.clone())
            .collect();
        let selection = RowSelection::Explicit(chosen.clone());

        let text = serialize_rows(&selection, &headings, &rows).unwrap();
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        prop_assert_eq!(lines.len(), 1 + chosen.len());

        let exported = rows.iter().filter(|row| chosen.contains(&row.id));
        for (line, row) in lines.iter().skip(1).zip(exported) {
            let fields = ["a", "b", "c"].iter().filter(|key| row.cell(key).is_some()).count();
            prop_assert_eq!(line.matches("\"\t").count(), fields);
            prop_assert!(line.is_empty() || line.ends_with('\t'));
        }
    }
}
