use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use chartlist_core::{ItemTypeChoice, ListItemsView, ViewStatus};
use chartlist_model::{Cell as ListCell, Heading, LabelImage, Row};

pub fn print_status(status: &ViewStatus) {
    println!("{}", status.records);
    println!("{}", status.viewing);
}

pub fn print_list(view: &ListItemsView) {
    if let Some(empty) = view.empty_state() {
        println!("{}", empty.message());
        if empty.can_reset_filters() {
            println!("Drop --type and --mode to list every selected entity.");
        }
        return;
    }
    let headings = view.visible_headings();
    let mut table = Table::new();
    table.set_header(
        headings
            .iter()
            .map(|heading| header_cell(&heading.header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in view.rows() {
        table.add_row(row_cells(headings, row));
    }
    println!("{table}");
    if view.headings().len() > headings.len() {
        println!(
            "{} more column(s) not shown; export to see every column.",
            view.headings().len() - headings.len()
        );
    }
}

pub fn print_types(choices: &[ItemTypeChoice]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Name")]);
    apply_table_style(&mut table);
    for choice in choices {
        let Some(id) = choice.filter.item_type() else {
            continue;
        };
        table.add_row(vec![
            Cell::new(id).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(&choice.label),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn row_cells(headings: &[Heading], row: &Row) -> Vec<Cell> {
    headings
        .iter()
        .map(|heading| match row.cell(&heading.key) {
            Some(cell) => Cell::new(display_text(cell)),
            None => dim_cell("-"),
        })
        .collect()
}

fn display_text(cell: &ListCell) -> String {
    match cell {
        ListCell::Text(text) => text.clone(),
        ListCell::Sortable(cell) => match &cell.content.image {
            Some(LabelImage::Glyph(glyph)) => format!("{} {}", glyph.symbol(), cell.content.text),
            _ => cell.content.text.clone(),
        },
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
