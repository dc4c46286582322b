//! CSV input and output for items.
//!
//! Reading keeps the file's column order; writing takes an explicit header
//! list and falls back to schema order when none is given.

use std::io;
use std::sync::Arc;

use datesift_core::FieldMeta;

use crate::item::{FieldValue, Item, ItemSchema};
use crate::PipelineError;

/// Read a headered CSV into items.
///
/// Every field declared in `schema` must appear in the header row. Columns
/// the schema does not know are added as plain fields. Short rows are
/// accepted; their missing cells are simply absent from the item. Cells past
/// the last header are dropped with a warning.
pub fn read_items<R: io::Read>(
    reader: R,
    schema: &ItemSchema,
) -> Result<(Vec<String>, Vec<Item>), PipelineError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    if let Some(missing) = schema.names().find(|name| !headers.iter().any(|h| h == name)) {
        return Err(PipelineError::MissingColumn(missing.to_string()));
    }

    let mut full = schema.clone();
    for header in &headers {
        if !full.contains(header) {
            full.push(header.clone(), FieldMeta::default());
        }
    }
    let full = Arc::new(full);

    let mut items = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            tracing::warn!(
                row = row + 1,
                cells = record.len(),
                columns = headers.len(),
                "row is longer than the header; extra cells dropped"
            );
        }
        let mut item = Item::new(Arc::clone(&full));
        for (header, cell) in headers.iter().zip(record.iter()) {
            item.set(header.clone(), cell);
        }
        items.push(item);
    }
    tracing::debug!(rows = items.len(), columns = headers.len(), "read csv items");
    Ok((headers, items))
}

/// Write `items` as CSV under `headers`.
///
/// Without headers the first item's schema order is used. Absent values
/// become empty cells; lists are joined with a space.
pub fn write_items<W: io::Write>(
    writer: W,
    headers: Option<&[String]>,
    items: &[Item],
) -> Result<(), PipelineError> {
    let headers: Vec<String> = match headers {
        Some(headers) => headers.to_vec(),
        None => {
            tracing::warn!(
                "no header configuration supplied; writing every declared field in schema order"
            );
            items
                .first()
                .map(|item| item.schema().names().map(str::to_string).collect())
                .unwrap_or_default()
        }
    };

    let mut wtr = csv::Writer::from_writer(writer);
    if !headers.is_empty() {
        wtr.write_record(&headers)?;
        for item in items {
            wtr.write_record(
                headers
                    .iter()
                    .map(|h| item.get(h).map(FieldValue::joined).unwrap_or_default()),
            )?;
        }
    }
    wtr.flush()?;
    Ok(())
}
