use std::{error::Error, fs, path::Path, process::exit};

use clap::Parser;
use time::{Date, Duration, OffsetDateTime};

use finboard::{FinancialRecord, RecordKind, store::records_to_json};

/// A utility for creating a snapshot of sample records for the dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the JSON snapshot to.
    #[arg(long, short)]
    output_path: String,

    /// The number of months of records to generate, ending this month.
    #[arg(long, default_value_t = 12)]
    months: u32,
}

/// Create a snapshot for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if extension == "json" => {}
        _ => {
            eprintln!("Output path must have the extension '.json' (e.g., 'snapshot.json').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let today = OffsetDateTime::now_utc().date();
    let records = sample_records(today, args.months)?;

    println!(
        "Writing {} records to {output_path:#?}",
        records.len()
    );
    fs::write(output_path, records_to_json(&records)?)?;

    println!("Success!");

    Ok(())
}

fn sample_records(today: Date, months: u32) -> Result<Vec<FinancialRecord>, Box<dyn Error>> {
    let mut records = Vec::new();
    let mut month_start = today.replace_day(1)?;

    for i in 0..months {
        let offset = f64::from(i);
        let day = |day: u8| month_start.replace_day(day).map(|date| date.to_string());

        records.push(
            FinancialRecord::new(
                &format!("rev-{i}-rent"),
                RecordKind::Revenue,
                1000.0 + 50.0 * offset,
                &day(1)?,
                "Rent",
            )
            .owner_label("Harbour View Apartments"),
        );
        records.push(
            FinancialRecord::new(
                &format!("rev-{i}-booking"),
                RecordKind::Revenue,
                200.0 + 10.0 * offset,
                &format!("{}T14:30:00.000Z", day(12)?),
                "Booking",
            )
            .owner_label("Lakeside Cabin"),
        );
        records.push(
            FinancialRecord::new(
                &format!("exp-{i}-utilities"),
                RecordKind::Expense,
                150.0,
                &day(5)?,
                "Utilities",
            )
            .owner_label("Admin")
            .description("Power and water"),
        );

        if i % 3 == 0 {
            records.push(
                FinancialRecord::new(
                    &format!("exp-{i}-repairs"),
                    RecordKind::Expense,
                    420.0,
                    &day(18)?,
                    "Repairs",
                )
                .owner_label("Admin"),
            );
        }

        records.push(
            FinancialRecord::new(
                &format!("txn-{i}-credit"),
                RecordKind::Transaction,
                1200.0 + 60.0 * offset,
                &day(2)?,
                "CREDIT",
            )
            .owner_label("Main bank"),
        );
        records.push(
            FinancialRecord::new(
                &format!("txn-{i}-debit"),
                RecordKind::Transaction,
                570.0,
                &day(20)?,
                "DEBIT",
            )
            .owner_label("Main bank"),
        );

        month_start = (month_start - Duration::days(1)).replace_day(1)?;
    }

    Ok(records)
}
