//! The figures shown on the dashboard home page.
//!
//! Composes the bucketing and growth engines over the latest snapshot:
//! monthly revenue and expense series, their totals over the window, the net
//! result and month-over-month growth.
//!
//! The series are matched by month name like every dashboard chart. The totals
//! are not: they only count records dated inside the calendar window, from the
//! first day of the oldest month up to and including `today`.

use time::Date;

use crate::{
    bucketing::{MonthlyTotal, bucket_by_month},
    filter::{FilterCriteria, filter},
    growth::{Growth, month_over_month},
    record::{FinancialRecord, RecordKind},
    store::Snapshot,
};

/// Dashboard home figures derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Revenue per month, oldest first.
    pub monthly_revenue: Vec<MonthlyTotal>,
    /// Expenses per month, oldest first.
    pub monthly_expenses: Vec<MonthlyTotal>,
    /// Revenue dated inside the monthly window.
    pub total_revenue: f64,
    /// Expenses dated inside the monthly window.
    pub total_expenses: f64,
    /// Revenue this month against last month.
    pub revenue_growth: Growth,
    /// Expenses this month against last month.
    pub expense_growth: Growth,
}

impl DashboardSummary {
    /// Build the summary for the `trailing_months` months ending at `today`.
    pub fn build(snapshot: &Snapshot, trailing_months: usize, today: Date) -> Self {
        let monthly_revenue = monthly_series(snapshot, RecordKind::Revenue, trailing_months, today);
        let monthly_expenses =
            monthly_series(snapshot, RecordKind::Expense, trailing_months, today);

        tracing::debug!(
            "Built dashboard summary from {} records for {} months",
            snapshot.len(),
            trailing_months
        );

        Self {
            total_revenue: window_total(snapshot, RecordKind::Revenue, trailing_months, today),
            total_expenses: window_total(snapshot, RecordKind::Expense, trailing_months, today),
            revenue_growth: month_over_month(&monthly_revenue),
            expense_growth: month_over_month(&monthly_expenses),
            monthly_revenue,
            monthly_expenses,
        }
    }

    /// Revenue minus expenses over the monthly window.
    pub fn net(&self) -> f64 {
        self.total_revenue - self.total_expenses
    }
}

fn monthly_series(
    snapshot: &Snapshot,
    kind: RecordKind,
    trailing_months: usize,
    today: Date,
) -> Vec<MonthlyTotal> {
    bucket_by_month(
        &snapshot.of_kind(kind),
        |record: &FinancialRecord| record.amount,
        trailing_months,
        today,
    )
}

/// The first day of the oldest month in the window, or `None` for an empty
/// window.
fn window_start(today: Date, trailing_months: usize) -> Option<Date> {
    if trailing_months == 0 {
        return None;
    }

    let mut month_start = today.replace_day(1).ok()?;
    for _ in 1..trailing_months {
        month_start = month_start.previous_day()?.replace_day(1).ok()?;
    }

    Some(month_start)
}

fn window_total(snapshot: &Snapshot, kind: RecordKind, trailing_months: usize, today: Date) -> f64 {
    let Some(from) = window_start(today, trailing_months) else {
        return 0.0;
    };

    let criteria = FilterCriteria::new().date_from(from).date_to(today);

    filter(&snapshot.of_kind(kind), &criteria)
        .iter()
        .map(|record| record.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        record::{FinancialRecord, RecordKind},
        store::Snapshot,
    };

    use super::{DashboardSummary, window_start};

    fn test_snapshot() -> Snapshot {
        Snapshot::new(vec![
            FinancialRecord::new("r1", RecordKind::Revenue, 1000.0, "2024-04-01", "Rent"),
            FinancialRecord::new("r2", RecordKind::Revenue, 1200.0, "2024-05-01", "Rent"),
            FinancialRecord::new("r3", RecordKind::Revenue, 300.0, "2024-05-20", "Booking"),
            FinancialRecord::new("e1", RecordKind::Expense, 400.0, "2024-04-15", "Repairs"),
            FinancialRecord::new("e2", RecordKind::Expense, 200.0, "2024-05-15", "Utilities"),
            FinancialRecord::new("t1", RecordKind::Transaction, 999.0, "2024-05-15", "CREDIT"),
            FinancialRecord::new("bad", RecordKind::Revenue, 50.0, "n/a", "Rent"),
        ])
    }

    #[test]
    fn sums_revenue_and_expenses_separately() {
        let got = DashboardSummary::build(&test_snapshot(), 12, date!(2024 - 05 - 31));

        assert_eq!(got.total_revenue, 2500.0);
        assert_eq!(got.total_expenses, 600.0);
        assert_eq!(got.net(), 1900.0);
        assert_eq!(got.monthly_revenue.len(), 12);
        assert_eq!(got.monthly_expenses.len(), 12);
    }

    #[test]
    fn computes_month_over_month_growth() {
        let got = DashboardSummary::build(&test_snapshot(), 12, date!(2024 - 05 - 31));

        assert_eq!(got.revenue_growth.current, 1500.0);
        assert_eq!(got.revenue_growth.previous, 1000.0);
        assert_eq!(got.revenue_growth.percent, 50.0);
        assert_eq!(got.expense_growth.percent, -50.0);
    }

    #[test]
    fn totals_exclude_records_from_earlier_years() {
        let snapshot = Snapshot::new(vec![
            FinancialRecord::new("old", RecordKind::Revenue, 1000.0, "2019-05-01", "Rent"),
            FinancialRecord::new("new", RecordKind::Revenue, 10.0, "2024-05-01", "Rent"),
            FinancialRecord::new("old_expense", RecordKind::Expense, 70.0, "2023-05-31", "Repairs"),
        ]);

        let got = DashboardSummary::build(&snapshot, 12, date!(2024 - 05 - 31));

        assert_eq!(got.total_revenue, 10.0);
        assert_eq!(got.total_expenses, 0.0);
        // The chart series still match by month name.
        let may = got.monthly_revenue.last().unwrap();
        assert_eq!(may.label, "May");
        assert_eq!(may.total, 1010.0);
    }

    #[test]
    fn totals_include_the_first_day_of_the_oldest_month() {
        let snapshot = Snapshot::new(vec![
            FinancialRecord::new("first", RecordKind::Expense, 5.0, "2023-06-01", "Utilities"),
            FinancialRecord::new("before", RecordKind::Expense, 7.0, "2023-05-31", "Utilities"),
            FinancialRecord::new("future", RecordKind::Expense, 9.0, "2024-06-01", "Utilities"),
        ]);

        let got = DashboardSummary::build(&snapshot, 12, date!(2024 - 05 - 31));

        assert_eq!(got.total_expenses, 5.0);
    }

    #[test]
    fn window_starts_at_the_oldest_month() {
        assert_eq!(window_start(date!(2024 - 03 - 15), 12), Some(date!(2023 - 04 - 01)));
        assert_eq!(window_start(date!(2024 - 03 - 15), 1), Some(date!(2024 - 03 - 01)));
        assert_eq!(window_start(date!(2024 - 03 - 15), 0), None);
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let got = DashboardSummary::build(&Snapshot::default(), 12, date!(2024 - 05 - 31));

        assert_eq!(got.monthly_revenue.len(), 12);
        assert_eq!(got.total_revenue, 0.0);
        assert_eq!(got.total_expenses, 0.0);
        assert_eq!(got.revenue_growth.percent, 0.0);
    }
}
