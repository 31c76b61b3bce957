use chrono::NaiveDate;

use crate::schedule::config::PlanConfig;
use crate::schedule::date::{format_month_label, month_after, weekday_dates_in_month};
use crate::schedule::periods::first_period_start;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyOverview {
    pub year: i32,
    pub month: u32,
    pub label: String,
    /// Every occurrence of the pay weekday in the month.
    pub anchor_dates: Vec<NaiveDate>,
    /// Anchor dates that are actual pay dates at the configured cadence.
    /// Equal to `anchor_dates` for weekly pay.
    pub paycheck_dates: Vec<NaiveDate>,
    pub monthly_total: f64,
    pub average_per_anchor_day: f64,
    pub average_per_paycheck: f64,
    pub has_five_anchor_days: bool,
}

/// Rolls the flat monthly total across `config.month_count` calendar months,
/// starting with the month that contains `today`.
///
/// Paychecks follow the same rhythm as the generated pay periods, so a
/// biweekly month lists only the anchor weekdays that fall on that rhythm.
pub fn monthly_rollup(
    today: NaiveDate,
    config: &PlanConfig,
    monthly_total: f64,
) -> Vec<MonthlyOverview> {
    let rhythm_origin = first_period_start(
        today,
        config.pay_day,
        config.pay_cadence,
        config.today_rule,
    );
    let period_days = config.pay_cadence.period_days();

    (0..config.month_count)
        .filter_map(|offset| u32::try_from(offset).ok())
        .map(|offset| {
            let (year, month) = month_after(today, offset);
            let anchor_dates = weekday_dates_in_month(year, month, config.pay_day);
            let paycheck_dates = anchor_dates
                .iter()
                .copied()
                .filter(|date| (*date - rhythm_origin).num_days().rem_euclid(period_days) == 0)
                .collect::<Vec<NaiveDate>>();

            MonthlyOverview {
                year,
                month,
                label: format_month_label(year, month),
                average_per_anchor_day: share(monthly_total, anchor_dates.len()),
                average_per_paycheck: share(monthly_total, paycheck_dates.len()),
                has_five_anchor_days: anchor_dates.len() == 5,
                anchor_dates,
                paycheck_dates,
                monthly_total,
            }
        })
        .collect()
}

fn share(total: f64, parts: usize) -> f64 {
    if parts == 0 {
        0.0
    } else {
        total / parts as f64
    }
}
