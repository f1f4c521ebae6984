//! Narrows a snapshot down to the records matching a set of criteria.

use time::Date;

use crate::record::FinancialRecord;

/// A conjunction of predicates applied to a record sequence.
///
/// Absent criteria, and an empty `type_equals`, match every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep records whose category equals this label.
    pub type_equals: Option<String>,
    /// Keep records dated on or after this day.
    pub date_from: Option<Date>,
    /// Keep records dated on or before this day.
    pub date_to: Option<Date>,
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep records with the category `label`.
    pub fn type_equals(mut self, label: &str) -> Self {
        self.type_equals = Some(label.to_owned());
        self
    }

    /// Only keep records dated on or after `date`.
    pub fn date_from(mut self, date: Date) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Only keep records dated on or before `date`.
    pub fn date_to(mut self, date: Date) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether the criteria would pass every record.
    pub fn is_empty(&self) -> bool {
        self.active_type().is_none() && !self.has_date_bounds()
    }

    fn active_type(&self) -> Option<&str> {
        self.type_equals.as_deref().filter(|label| !label.is_empty())
    }

    fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Whether `record` satisfies every supplied criterion.
    ///
    /// A record with a malformed timestamp never matches criteria that
    /// include a date bound.
    pub fn matches(&self, record: &FinancialRecord) -> bool {
        if self
            .active_type()
            .is_some_and(|label| record.category != label)
        {
            return false;
        }

        if !self.has_date_bounds() {
            return true;
        }

        let Some(date) = record.date() else {
            tracing::debug!(
                "Excluding record {} from date filter, could not parse timestamp {:?}",
                record.id,
                record.timestamp
            );
            return false;
        };

        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }
}

/// Returns the records in `records` that match `criteria`, in input order.
pub fn filter(records: &[FinancialRecord], criteria: &FilterCriteria) -> Vec<FinancialRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
