//! Turns records into rows for spreadsheet, PDF and CSV exports.
//!
//! The adapter only guarantees the grid: a header row followed by one row per
//! record, in input order. Encoding the grid is the job of a [TabularSink].

use std::io;

use crate::{
    Error,
    record::{FinancialRecord, RecordKind},
};

/// One export column: its header and how to render a record's cell.
pub struct Column<R> {
    /// The header cell.
    pub header: String,
    selector: Box<dyn Fn(&R) -> String>,
}

impl<R> Column<R> {
    /// Create a column with `header` whose cells are rendered by `selector`.
    pub fn new(header: &str, selector: impl Fn(&R) -> String + 'static) -> Self {
        Self {
            header: header.to_owned(),
            selector: Box::new(selector),
        }
    }

    /// Render the cell for `record`.
    pub fn cell(&self, record: &R) -> String {
        (self.selector)(record)
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Builds a row-major grid with the header row first.
pub fn to_tabular_rows<R>(records: &[R], columns: &[Column<R>]) -> Vec<Vec<String>> {
    let header: Vec<String> = columns.iter().map(|column| column.header.clone()).collect();

    let rows = records.iter().map(|record| {
        columns
            .iter()
            .map(|column| column.cell(record))
            .collect::<Vec<String>>()
    });

    std::iter::once(header).chain(rows).collect()
}

/// The date cell of a record. Malformed timestamps are exported as written so
/// that no row is lost.
fn date_cell(record: &FinancialRecord) -> String {
    match record.date() {
        Some(date) => date.to_string(),
        None => record.timestamp.clone(),
    }
}

fn amount_cell(record: &FinancialRecord) -> String {
    format!("{:.2}", record.amount)
}

fn optional_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// The columns the dashboard exports for each kind of record.
pub fn default_columns(kind: RecordKind) -> Vec<Column<FinancialRecord>> {
    let (category_header, owner_header) = match kind {
        RecordKind::Revenue => ("Revenue Type", "Property"),
        RecordKind::Expense => ("Category", "Paid By"),
        RecordKind::Transaction => ("Type", "Bank"),
    };

    vec![
        Column::new("Date", date_cell),
        Column::new(category_header, |record: &FinancialRecord| {
            record.category.clone()
        }),
        Column::new("Amount", amount_cell),
        Column::new(owner_header, |record: &FinancialRecord| {
            optional_cell(&record.owner_label)
        }),
        Column::new("Description", |record: &FinancialRecord| {
            optional_cell(&record.description)
        }),
    ]
}

/// Somewhere a tabular grid can be written to.
pub trait TabularSink {
    /// Write every row of `rows`, in order.
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<(), Error>;
}

/// Writes rows as comma separated values.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl<W: io::Write> CsvSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(false).from_writer(writer),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|error| Error::CsvWriteError(error.error().to_string()))
    }
}

impl<W: io::Write> TabularSink for CsvSink<W> {
    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<(), Error> {
        for row in rows {
            self.writer.write_record(row)?;
        }

        self.writer
            .flush()
            .map_err(|error| Error::CsvWriteError(error.to_string()))?;

        tracing::debug!("Wrote {} CSV rows", rows.len());
        Ok(())
    }
}
