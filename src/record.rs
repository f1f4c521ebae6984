//! The financial record model shared by every engine.
//!
//! Records arrive from the remote service with their timestamps as raw
//! strings. Timestamps are parsed on demand so that a malformed value only
//! affects the views that need a date, never the record itself.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_TIME_SUBSECOND_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

/// The identifier the remote service assigns to a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a record ID from the service's identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which collection of the remote service a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    /// Money earned, e.g. rent or a booking payment.
    Revenue,
    /// Money spent.
    Expense,
    /// A bank account movement. The direction is carried by the category
    /// (`CREDIT` or `DEBIT`), never by the sign of the amount.
    Transaction,
}

impl RecordKind {
    /// A human readable name for the kind, used in logs and export file names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::Transaction => "Transaction",
        }
    }
}

/// A single revenue, expense or transaction entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Stable across the record's lifetime. Mutations splice by this ID.
    pub id: RecordId,
    /// The collection the record came from.
    pub kind: RecordKind,
    /// The amount in currency units.
    pub amount: f64,
    /// The raw `date` or `dateTime` sent by the service.
    #[serde(alias = "date", alias = "dateTime")]
    pub timestamp: String,
    /// Revenue type, transaction direction or payment mode.
    #[serde(alias = "type")]
    pub category: String,
    /// The bank, admin or property the record is attributed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_label: Option<String>,
    /// Free text shown in tables and exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FinancialRecord {
    /// Create a record with no owner label or description.
    pub fn new(
        id: &str,
        kind: RecordKind,
        amount: f64,
        timestamp: &str,
        category: &str,
    ) -> Self {
        Self {
            id: RecordId::new(id),
            kind,
            amount,
            timestamp: timestamp.to_owned(),
            category: category.to_owned(),
            owner_label: None,
            description: None,
        }
    }

    /// Set the owner label for the record.
    pub fn owner_label(mut self, owner_label: &str) -> Self {
        self.owner_label = Some(owner_label.to_owned());
        self
    }

    /// Set the description for the record.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// The parsed timestamp, or `None` if it is malformed.
    pub fn date_time(&self) -> Option<PrimitiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// The calendar date of the timestamp, or `None` if it is malformed.
    pub fn date(&self) -> Option<Date> {
        self.date_time().map(|date_time| date_time.date())
    }
}

/// Parses a `date` or `dateTime` string from the remote service.
///
/// Offsets are not applied: the calendar date is the wall-clock date as
/// written, so `2024-01-31T23:30:00-05:00` falls on January 31.
pub fn parse_timestamp(text: &str) -> Option<PrimitiveDateTime> {
    let text = text.trim();

    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(PrimitiveDateTime::new(date_time.date(), date_time.time()));
    }

    if let Ok(date_time) = PrimitiveDateTime::parse(text, DATE_TIME_SUBSECOND_FORMAT) {
        return Some(date_time);
    }

    if let Ok(date_time) = PrimitiveDateTime::parse(text, DATE_TIME_FORMAT) {
        return Some(date_time);
    }

    Date::parse(text, DATE_FORMAT)
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::{FinancialRecord, RecordId, RecordKind, parse_timestamp};

    #[test]
    fn parses_plain_dates_as_midnight() {
        assert_eq!(
            parse_timestamp("2024-01-05"),
            Some(datetime!(2024 - 01 - 05 00:00))
        );
    }

    #[test]
    fn parses_date_times_with_and_without_subseconds() {
        assert_eq!(
            parse_timestamp("2024-01-05T10:30:00"),
            Some(datetime!(2024 - 01 - 05 10:30))
        );
        assert_eq!(
            parse_timestamp("2024-01-05T10:30:00.250"),
            Some(datetime!(2024 - 01 - 05 10:30:00.25))
        );
    }

    #[test]
    fn keeps_wall_clock_date_for_offset_timestamps() {
        let got = parse_timestamp("2024-01-31T23:30:00-05:00").unwrap();

        assert_eq!(got.date(), date!(2024 - 01 - 31));
    }

    #[test]
    fn parses_utc_timestamps_from_the_service() {
        let got = parse_timestamp("2024-03-10T08:00:00.000Z").unwrap();

        assert_eq!(got, datetime!(2024 - 03 - 10 08:00));
    }

    #[test]
    fn rejects_malformed_timestamps() {
        for text in ["", "yesterday", "2024-13-01", "2024-02-30", "05/01/2024"] {
            assert_eq!(parse_timestamp(text), None, "parsed {text:?}");
        }
    }

    #[test]
    fn deserializes_service_field_names() {
        let json = r#"{
            "id": "r1",
            "kind": "transaction",
            "amount": 100.0,
            "date": "2024-01-05",
            "type": "CREDIT",
            "ownerLabel": "Main bank"
        }"#;

        let record: FinancialRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, RecordId::new("r1"));
        assert_eq!(record.kind, RecordKind::Transaction);
        assert_eq!(record.category, "CREDIT");
        assert_eq!(record.owner_label.as_deref(), Some("Main bank"));
        assert_eq!(record.description, None);
        assert_eq!(record.date(), Some(date!(2024 - 01 - 05)));
    }

    #[test]
    fn malformed_timestamp_has_no_date() {
        let record = FinancialRecord::new("r1", RecordKind::Revenue, 10.0, "not a date", "Rent");

        assert_eq!(record.date(), None);
    }
}
