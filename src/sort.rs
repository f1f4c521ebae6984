//! Orders records by amount, category or timestamp.

use std::str::FromStr;

use crate::record::FinancialRecord;

/// The field to order records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric comparison of the amount.
    Amount,
    /// Lexicographic comparison of the category label.
    Category,
    /// Chronological comparison of the timestamp.
    Timestamp,
}

/// The order to sort records in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    #[default]
    Ascending,
    /// The reverse of the ascending order.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "amount" => Ok(Self::Amount),
            "category" | "type" => Ok(Self::Category),
            "timestamp" | "date" => Ok(Self::Timestamp),
            other => Err(format!(
                "unknown sort key \"{other}\", expected amount, category or timestamp"
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction \"{other}\", expected asc or desc")),
        }
    }
}


/// Returns a copy of `records` ordered by `key`.
///
/// The ascending sort is stable. Descending reverses the ascending result, so
/// records that compare equal come out in reverse input order.
pub fn sort(
    records: &[FinancialRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<FinancialRecord> {
    let mut sorted = records.to_vec();

    match key {
        SortKey::Amount => sorted.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortKey::Category => sorted.sort_by(|a, b| a.category.cmp(&b.category)),
        // Malformed timestamps parse to `None`, which orders first.
        SortKey::Timestamp => sorted.sort_by_cached_key(FinancialRecord::date_time),
    }

    if direction == SortDirection::Descending {
        sorted.reverse();
    }

    sorted
}

#[cfg(test)]
mod tests {
    use crate::record::{FinancialRecord, RecordKind};

    use super::{SortDirection, SortKey, sort};

    fn scenario_records() -> Vec<FinancialRecord> {
        vec![
            FinancialRecord::new("a", RecordKind::Transaction, 100.0, "2024-01-05", "CREDIT"),
            FinancialRecord::new("b", RecordKind::Transaction, 50.0, "2024-01-10", "DEBIT"),
            FinancialRecord::new("c", RecordKind::Transaction, 200.0, "2024-02-01", "CREDIT"),
        ]
    }

    fn amounts(records: &[FinancialRecord]) -> Vec<f64> {
        records.iter().map(|record| record.amount).collect()
    }

    fn ids(records: &[FinancialRecord]) -> Vec<&str> {
        records.iter().map(|record| record.id.as_str()).collect()
    }

    #[test]
    fn sorts_by_amount_ascending() {
        let got = sort(&scenario_records(), SortKey::Amount, SortDirection::Ascending);

        assert_eq!(amounts(&got), [50.0, 100.0, 200.0]);
    }

    #[test]
    fn sorts_by_amount_descending() {
        let got = sort(&scenario_records(), SortKey::Amount, SortDirection::Descending);

        assert_eq!(amounts(&got), [200.0, 100.0, 50.0]);
    }

    #[test]
    fn sorts_by_category_lexicographically() {
        let got = sort(&scenario_records(), SortKey::Category, SortDirection::Ascending);

        assert_eq!(ids(&got), ["a", "c", "b"]);
    }

    #[test]
    fn sorts_by_timestamp_including_time_of_day() {
        let records = vec![
            FinancialRecord::new("late", RecordKind::Expense, 1.0, "2024-01-05T18:00:00", "Food"),
            FinancialRecord::new("early", RecordKind::Expense, 1.0, "2024-01-05T08:00:00", "Food"),
            FinancialRecord::new("before", RecordKind::Expense, 1.0, "2023-12-31", "Food"),
        ];

        let got = sort(&records, SortKey::Timestamp, SortDirection::Ascending);

        assert_eq!(ids(&got), ["before", "early", "late"]);
    }

    #[test]
    fn timestamp_sort_is_stable_for_equal_and_malformed_timestamps() {
        let records = vec![
            FinancialRecord::new("bad_1", RecordKind::Expense, 1.0, "???", "Food"),
            FinancialRecord::new("noon_1", RecordKind::Expense, 1.0, "2024-01-05T12:00:00", "Food"),
            FinancialRecord::new("bad_2", RecordKind::Expense, 1.0, "", "Food"),
            FinancialRecord::new("noon_2", RecordKind::Expense, 1.0, "2024-01-05T12:00:00", "Food"),
        ];

        let ascending = sort(&records, SortKey::Timestamp, SortDirection::Ascending);
        let descending = sort(&records, SortKey::Timestamp, SortDirection::Descending);

        assert_eq!(ids(&ascending), ["bad_1", "bad_2", "noon_1", "noon_2"]);
        assert_eq!(ids(&descending), ["noon_2", "noon_1", "bad_2", "bad_1"]);
    }

    #[test]
    fn malformed_timestamps_sort_first_and_are_kept() {
        let mut records = scenario_records();
        records.push(FinancialRecord::new(
            "bad",
            RecordKind::Transaction,
            1.0,
            "???",
            "DEBIT",
        ));

        let got = sort(&records, SortKey::Timestamp, SortDirection::Ascending);

        assert_eq!(ids(&got), ["bad", "a", "b", "c"]);
    }

    #[test]
    fn ascending_sort_is_stable() {
        let records = vec![
            FinancialRecord::new("first", RecordKind::Revenue, 10.0, "2024-01-01", "Rent"),
            FinancialRecord::new("second", RecordKind::Revenue, 5.0, "2024-01-01", "Rent"),
            FinancialRecord::new("third", RecordKind::Revenue, 10.0, "2024-01-01", "Rent"),
        ];

        let got = sort(&records, SortKey::Amount, SortDirection::Ascending);

        assert_eq!(ids(&got), ["second", "first", "third"]);
    }

    #[test]
    fn descending_reverses_tie_order() {
        let records = vec![
            FinancialRecord::new("first", RecordKind::Revenue, 10.0, "2024-01-01", "Rent"),
            FinancialRecord::new("second", RecordKind::Revenue, 5.0, "2024-01-01", "Rent"),
            FinancialRecord::new("third", RecordKind::Revenue, 10.0, "2024-01-01", "Rent"),
        ];

        let got = sort(&records, SortKey::Amount, SortDirection::Descending);

        assert_eq!(ids(&got), ["third", "first", "second"]);
    }

    #[test]
    fn flipping_direction_twice_restores_ascending_order() {
        let direction = SortDirection::Ascending;
        let ascending = sort(&scenario_records(), SortKey::Amount, direction);

        let descending = sort(&ascending, SortKey::Amount, direction.flipped());
        let restored = sort(&descending, SortKey::Amount, direction.flipped().flipped());

        assert_eq!(restored, ascending);
    }

    #[test]
    fn handles_empty_input() {
        assert!(sort(&[], SortKey::Timestamp, SortDirection::Descending).is_empty());
    }

    #[test]
    fn parses_keys_and_directions() {
        assert_eq!("Amount".parse(), Ok(SortKey::Amount));
        assert_eq!("type".parse(), Ok(SortKey::Category));
        assert_eq!("date".parse(), Ok(SortKey::Timestamp));
        assert_eq!("desc".parse(), Ok(SortDirection::Descending));
        assert!("size".parse::<SortKey>().is_err());
        assert!("up".parse::<SortDirection>().is_err());
    }
}
