//! Period-over-period growth figures for the dashboard cards.

use crate::bucketing::MonthlyTotal;

/// The percentage change from `previous` to `current`.
///
/// Returns 0 when `previous` is 0, whatever the value of `current`.
pub fn growth_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }

    (current - previous) / previous * 100.0
}

/// The totals of two consecutive periods and the growth between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    /// The total of the latest period.
    pub current: f64,
    /// The total of the period before it.
    pub previous: f64,
    /// See [growth_percent].
    pub percent: f64,
}

impl Growth {
    /// Compute the growth between two totals.
    pub fn new(current: f64, previous: f64) -> Self {
        Self {
            current,
            previous,
            percent: growth_percent(current, previous),
        }
    }
}

/// Compares the last two buckets of a monthly series.
///
/// Missing buckets count as 0, so a one-month series reports 0% growth.
pub fn month_over_month(series: &[MonthlyTotal]) -> Growth {
    let mut totals = series.iter().rev().map(|bucket| bucket.total);
    let current = totals.next().unwrap_or(0.0);
    let previous = totals.next().unwrap_or(0.0);

    Growth::new(current, previous)
}

#[cfg(test)]
mod tests {
    use crate::bucketing::MonthlyTotal;

    use super::{Growth, growth_percent, month_over_month};

    #[test]
    fn computes_percentage_change() {
        assert_eq!(growth_percent(110.0, 100.0), 10.0);
        assert_eq!(growth_percent(90.0, 100.0), -10.0);
        assert_eq!(growth_percent(300.0, 150.0), 100.0);
    }

    #[test]
    fn zero_previous_saturates_to_zero() {
        for current in [0.0, 1.0, -25.0, 1e9] {
            assert_eq!(growth_percent(current, 0.0), 0.0);
        }
    }

    #[test]
    fn compares_last_two_months() {
        let series = [
            MonthlyTotal { label: "Jan", total: 5.0 },
            MonthlyTotal { label: "Feb", total: 200.0 },
            MonthlyTotal { label: "Mar", total: 250.0 },
        ];

        let got = month_over_month(&series);

        assert_eq!(
            got,
            Growth {
                current: 250.0,
                previous: 200.0,
                percent: 25.0
            }
        );
    }

    #[test]
    fn short_series_compare_against_zero() {
        let series = [MonthlyTotal { label: "Mar", total: 250.0 }];

        assert_eq!(month_over_month(&series), Growth::new(250.0, 0.0));
        assert_eq!(month_over_month(&[]), Growth::new(0.0, 0.0));
        assert_eq!(month_over_month(&series).percent, 0.0);
    }
}
