//! Finboard is the engine behind a personal finance dashboard.
//!
//! It works on snapshots of revenue, expense and transaction records fetched
//! from a remote service, and derives everything the dashboard shows from the
//! latest snapshot:
//!
//! - [filter](mod@filter) narrows records by type and date range,
//! - [sort](mod@sort) orders them by amount, category or timestamp,
//! - [bucketing] sums them into the trailing calendar months,
//! - [growth] compares one period with the previous one,
//! - [pagination] slices tables into pages,
//! - [export] turns records into rows for spreadsheet and CSV exports.
//!
//! All of these are pure functions over borrowed slices. The only I/O happens
//! at the edges: loading snapshots through a [RecordSource] and writing
//! exports through a [TabularSink](export::TabularSink).

#![warn(missing_docs)]

pub mod bucketing;
pub mod charts;
pub mod config;
pub mod dashboard;
mod error;
pub mod export;
pub mod filter;
pub mod growth;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod store;
pub mod timezone;

pub use bucketing::{DEFAULT_TRAILING_MONTHS, MonthlyTotal, bucket_by_month};
pub use config::DashboardConfig;
pub use dashboard::DashboardSummary;
pub use error::Error;
pub use export::{Column, CsvSink, TabularSink, to_tabular_rows};
pub use filter::{FilterCriteria, filter};
pub use growth::growth_percent;
pub use pagination::{PageCursor, paginate, total_pages};
pub use record::{FinancialRecord, RecordId, RecordKind};
pub use sort::{SortDirection, SortKey, sort};
pub use store::{JsonFileSource, Mutation, RecordSource, RecordStore, Snapshot};
