//! ECharts configuration for the dashboard's monthly chart.
//!
//! Rendering is left to the ECharts library; this module only builds the
//! options, which serialize to JSON with `to_string()`.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Line,
};

use crate::{bucketing::labels_and_values, dashboard::DashboardSummary};

/// A line chart of monthly revenue and expenses.
pub fn revenue_expense_chart(summary: &DashboardSummary) -> Chart {
    let (labels, revenue) = labels_and_values(&summary.monthly_revenue);
    let (_, expenses) = labels_and_values(&summary.monthly_expenses);

    Chart::new()
        .title(
            Title::new()
                .text("Revenue and Expenses")
                .subtext(format!("Last {} months", labels.len())),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Revenue").data(revenue))
        .series(Line::new().name("Expenses").data(expenses))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
