//! Catalog line format handling
//!
//! This module centralizes all format concerns of the catalog file:
//! - Splitting file contents into lines and joining them back
//! - Parsing a line into a [`Record`]
//! - Encoding fields into a line (comma separated, never quoted)
//! - Writing records to an output stream
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Line Format
//!
//! One record per line, fields joined by a single comma, no header, no
//! quoting or escaping. Lines end with `\n`, so the contents of a non-empty
//! file split into one more line than it has records: `"a,b,c\n"` becomes
//! `["a,b,c", ""]`. Joining the split lines restores the original text.

use crate::types::{CatalogError, Record};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use std::io::Write;

/// Header written above `list` output
const LIST_HEADER: [&str; 3] = ["id", "name", "price"];

/// Split file contents into lines on `\n`
///
/// Always yields at least one (possibly empty) line.
pub fn split_lines(contents: &str) -> Vec<&str> {
    contents.split('\n').collect()
}

/// Join lines with `\n`, the inverse of [`split_lines`]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            joined.push('\n');
        }
        joined.push_str(line.as_ref());
    }
    joined
}

/// The id field of a line: everything before the first comma
pub fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or("")
}

/// Parse a line into its raw fields
///
/// Missing fields are left empty; fields past the third are kept in
/// [`Record::extra`].
pub fn parse_line(line: &str) -> Record {
    let mut fields = line.split(',').map(str::to_string);
    let id = fields.next().unwrap_or_default();
    let name = fields.next().unwrap_or_default();
    let price = fields.next().unwrap_or_default();

    Record {
        id,
        name,
        price,
        extra: fields.collect(),
    }
}

/// Render a price the way it is stored: trailing zeros dropped
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}

/// Encode fields as a single line, without the terminator
///
/// Fields are written verbatim. A comma or newline inside a field is not
/// escaped and will change how the line is read back.
pub fn encode_line(fields: &[&str]) -> Result<String, CatalogError> {
    let mut writer = line_writer(Vec::new());
    writer.write_record(fields)?;

    let bytes = writer.into_inner().map_err(|e| CatalogError::Encoding {
        message: format!("Failed to flush line: {}", e),
    })?;
    let line = String::from_utf8(bytes).map_err(|e| CatalogError::Encoding {
        message: e.to_string(),
    })?;

    Ok(line.strip_suffix('\n').map(str::to_string).unwrap_or(line))
}

/// Write one record to output in file format, followed by `\n`
pub fn write_record_line(record: &Record, output: &mut dyn Write) -> Result<(), CatalogError> {
    let mut writer = line_writer(output);
    writer.write_record(record.fields())?;
    writer.flush().map_err(|e| CatalogError::Encoding {
        message: format!("Failed to flush output: {}", e),
    })?;
    Ok(())
}

/// Write records as a CSV table with an `id,name,price` header
///
/// Unlike the catalog file itself, this output is regular CSV: fields are
/// quoted where needed. Records with extra fields get longer rows.
pub fn write_records(records: &[Record], output: &mut dyn Write) -> Result<(), CatalogError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    writer.write_record(LIST_HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }

    writer.flush().map_err(|e| CatalogError::Encoding {
        message: format!("Failed to flush output: {}", e),
    })?;
    Ok(())
}

fn line_writer<W: Write>(output: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output)
}
