use std::{error::Error, fs, fs::File, path::PathBuf};

use clap::Parser;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finboard::{
    Column, CsvSink, DashboardConfig, DashboardSummary, FilterCriteria, FinancialRecord,
    JsonFileSource, PageCursor, RecordKind, RecordStore, SortDirection, SortKey, TabularSink,
    charts::revenue_expense_chart, export::default_columns, filter, sort, timezone::today_in,
    to_tabular_rows,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Summarises, filters and exports a snapshot of dashboard records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON snapshot of records.
    #[arg(long, short)]
    snapshot: PathBuf,

    /// Only show records of this kind: revenue, expense or transaction.
    #[arg(long, value_parser = parse_kind)]
    kind: Option<RecordKind>,

    /// Only show records with this category, e.g. CREDIT.
    #[arg(long = "type")]
    type_equals: Option<String>,

    /// Only show records on or after this date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    from: Option<Date>,

    /// Only show records on or before this date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    to: Option<Date>,

    /// Sort by amount, category or timestamp.
    #[arg(long, default_value = "timestamp")]
    sort: SortKey,

    /// The sort direction: asc or desc.
    #[arg(long, default_value = "desc")]
    direction: SortDirection,

    /// The page of the table to show.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// The number of records per page.
    #[arg(long, default_value_t = DashboardConfig::default().page_size)]
    page_size: usize,

    /// The number of months in the monthly summary.
    #[arg(long, default_value_t = DashboardConfig::default().trailing_months)]
    trailing_months: usize,

    /// The canonical timezone that decides the current month.
    #[arg(long, default_value_t = DashboardConfig::default().timezone)]
    timezone: String,

    /// Write the filtered and sorted records to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the ECharts options for the monthly chart to this file.
    #[arg(long)]
    chart: Option<PathBuf>,
}

fn parse_kind(value: &str) -> Result<RecordKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "revenue" => Ok(RecordKind::Revenue),
        "expense" => Ok(RecordKind::Expense),
        "transaction" => Ok(RecordKind::Transaction),
        other => Err(format!(
            "unknown kind \"{other}\", expected revenue, expense or transaction"
        )),
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, DATE_FORMAT).map_err(|error| format!("invalid date \"{value}\": {error}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let config = DashboardConfig {
        page_size: args.page_size,
        trailing_months: args.trailing_months,
        timezone: args.timezone.clone(),
    };
    config.validate()?;

    let store = RecordStore::load(&JsonFileSource::new(&args.snapshot))?;
    let snapshot = store.snapshot();
    let today = today_in(&config.timezone)?;

    let summary = DashboardSummary::build(&snapshot, config.trailing_months, today);
    print_summary(&summary);

    let records = match args.kind {
        Some(kind) => snapshot.of_kind(kind),
        None => snapshot.records().to_vec(),
    };
    let criteria = FilterCriteria {
        type_equals: args.type_equals.clone(),
        date_from: args.from,
        date_to: args.to,
    };
    let records = sort(&filter(&records, &criteria), args.sort, args.direction);
    let columns = table_columns(args.kind);

    let mut cursor = PageCursor::new(config.page_size()?, records.len());
    if args.page != cursor.page() && !cursor.go_to(args.page) {
        tracing::warn!(
            "Page {} is out of range, showing page {} of {}",
            args.page,
            cursor.page(),
            cursor.total_pages()
        );
    }

    println!();
    println!(
        "Page {} of {} ({} records)",
        cursor.page(),
        cursor.total_pages(),
        records.len()
    );
    print_table(&to_tabular_rows(cursor.slice(&records), &columns));

    if let Some(path) = &args.export {
        let mut sink = CsvSink::new(File::create(path)?);
        sink.write_rows(&to_tabular_rows(&records, &columns))?;
        sink.into_inner()?;
        tracing::info!("Exported {} records to {}", records.len(), path.display());
    }

    if let Some(path) = &args.chart {
        fs::write(path, revenue_expense_chart(&summary).to_string())?;
        tracing::info!("Wrote chart options to {}", path.display());
    }

    Ok(())
}

fn setup_logging() {
    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(stderr_log)
        .init();
}

fn table_columns(kind: Option<RecordKind>) -> Vec<Column<FinancialRecord>> {
    match kind {
        Some(kind) => default_columns(kind),
        None => {
            let mut columns = vec![Column::new("Kind", |record: &FinancialRecord| {
                record.kind.label().to_owned()
            })];
            columns.extend(default_columns(RecordKind::Transaction));
            columns
        }
    }
}

fn print_summary(summary: &DashboardSummary) {
    println!(
        "Revenue: {:.2} ({:+.1}% this month)",
        summary.total_revenue, summary.revenue_growth.percent
    );
    println!(
        "Expenses: {:.2} ({:+.1}% this month)",
        summary.total_expenses, summary.expense_growth.percent
    );
    println!("Net: {:.2}", summary.net());
    println!();

    for (revenue, expenses) in summary
        .monthly_revenue
        .iter()
        .zip(&summary.monthly_expenses)
    {
        println!(
            "{:>4} {:>12.2} {:>12.2}",
            revenue.label, revenue.total, expenses.total
        );
    }
}

fn print_table(rows: &[Vec<String>]) {
    let column_count = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..column_count)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}
