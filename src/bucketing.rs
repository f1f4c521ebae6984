//! Groups records into the trailing calendar months for charting.
//!
//! Buckets are matched by their three-letter month name only. Two records
//! twelve months apart share a label and therefore land in the same bucket.
//! This mirrors how the dashboard has always labelled its charts, so the
//! collision is a known limitation rather than something to correct here.

use time::{Date, Month};

use crate::record::FinancialRecord;

/// The number of months shown by the dashboard charts.
pub const DEFAULT_TRAILING_MONTHS: usize = 12;

/// The summed value of one month bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    /// Three-letter month name, e.g. "Jan".
    pub label: &'static str,
    /// The sum of the selected value of every record in this month.
    pub total: f64,
}

/// Formats a month as a three-letter abbreviation.
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// The labels of the `trailing_months` months ending at the month of `today`,
/// oldest first.
pub fn trailing_month_labels(today: Date, trailing_months: usize) -> Vec<&'static str> {
    let mut month = today.month();
    let mut labels = Vec::new();

    for _ in 0..trailing_months {
        labels.push(month_label(month));
        month = month.previous();
    }

    labels.reverse();
    labels
}

/// Sums `value` of each record into the trailing month buckets ending at
/// `today`.
///
/// Always returns exactly `trailing_months` buckets, zero-filled where no
/// record matched. Records with malformed timestamps, or whose month label
/// matches no bucket, are dropped. When more than twelve months are
/// requested, labels repeat and a record is added to the oldest bucket with
/// its label.
pub fn bucket_by_month<F>(
    records: &[FinancialRecord],
    value: F,
    trailing_months: usize,
    today: Date,
) -> Vec<MonthlyTotal>
where
    F: Fn(&FinancialRecord) -> f64,
{
    let mut buckets: Vec<MonthlyTotal> = trailing_month_labels(today, trailing_months)
        .into_iter()
        .map(|label| MonthlyTotal { label, total: 0.0 })
        .collect();

    for record in records {
        let Some(date) = record.date() else {
            tracing::debug!(
                "Excluding record {} from monthly totals, could not parse timestamp {:?}",
                record.id,
                record.timestamp
            );
            continue;
        };

        let label = month_label(date.month());

        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.label == label) {
            bucket.total += value(record);
        }
    }

    buckets
}

/// Splits a monthly series into chart labels and values.
pub fn labels_and_values(series: &[MonthlyTotal]) -> (Vec<String>, Vec<f64>) {
    series
        .iter()
        .map(|bucket| (bucket.label.to_owned(), bucket.total))
        .unzip()
}
