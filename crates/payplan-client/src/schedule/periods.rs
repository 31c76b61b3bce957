use chrono::{Duration, NaiveDate, Weekday};

use crate::schedule::config::{PayCadence, PlanConfig, TodayAnchorRule};
use crate::schedule::date::{format_short_date, next_weekday_on_or_after};
use crate::schedule::types::Obligation;

#[derive(Debug, Clone, PartialEq)]
pub struct PayPeriod {
    pub index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pay_date: NaiveDate,
    pub label: String,
    pub obligations: Vec<Obligation>,
    pub total_due: f64,
    pub is_current: bool,
    pub is_past: bool,
    pub days_until_pay: i64,
}

impl PayPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Start of period 0: one period before the first upcoming pay day.
pub fn first_period_start(
    today: NaiveDate,
    pay_day: Weekday,
    pay_cadence: PayCadence,
    today_rule: TodayAnchorRule,
) -> NaiveDate {
    let mut next_pay_day = next_weekday_on_or_after(today, pay_day);
    if next_pay_day == today && today_rule == TodayAnchorRule::SkipToFollowing {
        next_pay_day += Duration::days(pay_cadence.period_days());
    }
    next_pay_day - Duration::days(pay_cadence.period_days())
}

/// Lays out `config.period_count` contiguous periods with no obligations.
pub fn generate_periods(today: NaiveDate, config: &PlanConfig) -> Vec<PayPeriod> {
    let length = config.pay_cadence.period_days();
    let first_start = first_period_start(
        today,
        config.pay_day,
        config.pay_cadence,
        config.today_rule,
    );

    (0..config.period_count)
        .map(|index| {
            let offset = i64::try_from(index).unwrap_or(0) * length;
            let start = first_start + Duration::days(offset);
            let end = start + Duration::days(length - 1);
            PayPeriod {
                index,
                start,
                end,
                pay_date: start,
                label: format!("{} - {}", format_short_date(&start), format_short_date(&end)),
                obligations: Vec::new(),
                total_due: 0.0,
                is_current: today >= start && today <= end,
                is_past: end < today,
                days_until_pay: (start - today).num_days(),
            }
        })
        .collect()
}

/// Places each active, dated obligation into the period containing its due
/// date and recomputes every period total.
///
/// Periods must be contiguous and of equal length, as produced by
/// [`generate_periods`]. Obligations keep their input order within a period.
pub fn assign_obligations(
    mut periods: Vec<PayPeriod>,
    obligations: &[Obligation],
) -> Vec<PayPeriod> {
    let Some(first) = periods.first() else {
        return periods;
    };
    let window_start = first.start;
    let length = (first.end - first.start).num_days() + 1;

    for obligation in obligations {
        if !obligation.is_active() {
            continue;
        }
        let Some(due) = obligation.next_due else {
            continue;
        };
        if due < window_start {
            continue;
        }
        let slot = (due - window_start).num_days() / length;
        let Ok(slot) = usize::try_from(slot) else {
            continue;
        };
        let Some(period) = periods.get_mut(slot) else {
            continue;
        };
        if period.contains(due) {
            period.obligations.push(obligation.clone());
        }
    }

    for period in &mut periods {
        period.total_due = period
            .obligations
            .iter()
            .map(|obligation| obligation.amount)
            .fold(0.0, |total, amount| total + amount);
    }

    periods
}
