//! Tab-separated text for the export action.
//!
//! Layout, byte for byte:
//!
//! ```text
//! "Label"\t"Type"\t"Id"\t\n
//! "Alice"\t"Person"\t"e1"\t\n
//! ```
//!
//! Every field is quoted as a JSON string and followed by a tab, including
//! the last one on the line. The header line lists every heading. A data
//! line lists only the headings the row has a cell for, so rows of a
//! narrower type are shorter rather than padded. Rows are written in the
//! order given and only when the row selection includes them.

use std::io::Write;

use chartlist_core::RowSelection;
use chartlist_model::{Heading, Row};
use tracing::debug;

use crate::error::Result;

const FIELD_SEPARATOR: char = '\t';
const LINE_END: char = '\n';

fn push_field(line: &mut String, text: &str) -> Result<()> {
    line.push_str(&serde_json::to_string(text)?);
    line.push(FIELD_SEPARATOR);
    Ok(())
}

fn header_line(headings: &[Heading]) -> Result<String> {
    let mut line = String::new();
    for heading in headings {
        push_field(&mut line, &heading.header)?;
    }
    line.push(LINE_END);
    Ok(line)
}

fn row_line(headings: &[Heading], row: &Row) -> Result<String> {
    let mut line = String::new();
    for heading in headings {
        if let Some(cell) = row.cell(&heading.key) {
            push_field(&mut line, cell.sort_value())?;
        }
    }
    line.push(LINE_END);
    Ok(line)
}

/// Render the header and every selected row as export text.
///
/// # Errors
///
/// Fails only if a field cannot be quoted.
pub fn serialize_rows(
    selection: &RowSelection,
    headings: &[Heading],
    rows: &[Row],
) -> Result<String> {
    let mut text = header_line(headings)?;
    for row in rows.iter().filter(|row| selection.is_selected(&row.id)) {
        text.push_str(&row_line(headings, row)?);
    }
    Ok(text)
}

/// Stream the export text to `writer`. Returns the number of data rows written.
///
/// # Errors
///
/// Returns [`ExportError::Io`](crate::ExportError::Io) if the writer fails.
pub fn write_rows<W: Write>(
    writer: &mut W,
    selection: &RowSelection,
    headings: &[Heading],
    rows: &[Row],
) -> Result<usize> {
    writer.write_all(header_line(headings)?.as_bytes())?;
    let mut written = 0;
    for row in rows.iter().filter(|row| selection.is_selected(&row.id)) {
        writer.write_all(row_line(headings, row)?.as_bytes())?;
        written += 1;
    }
    writer.flush()?;
    debug!(
        rows = written,
        skipped = rows.len() - written,
        headings = headings.len(),
        "exported rows"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_like_json() {
        let mut line = String::new();
        push_field(&mut line, "say \"hi\"\tnow\n").unwrap();
        assert_eq!(line, "\"say \\\"hi\\\"\\tnow\\n\"\t");
    }

    #[test]
    fn header_ends_with_tab_then_newline() {
        let headings = [Heading::new("label", "Label"), Heading::new("itemType", "Type")];
        assert_eq!(header_line(&headings).unwrap(), "\"Label\"\t\"Type\"\t\n");
    }

    #[test]
    fn no_headings_yields_bare_newline() {
        assert_eq!(header_line(&[]).unwrap(), "\n");
    }
}
