use chrono::NaiveDate;

use crate::schedule::config::PlanConfig;
use crate::schedule::monthly::{MonthlyOverview, monthly_rollup};
use crate::schedule::periods::{PayPeriod, assign_obligations, generate_periods};
use crate::schedule::smoothing::{Smoothing, smooth, variance};
use crate::schedule::types::Obligation;

/// Everything derived from one set of obligations, one configuration and
/// one reference date. Rebuilt from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct PayPlan {
    pub reference_date: NaiveDate,
    pub config: PlanConfig,
    pub periods: Vec<PayPeriod>,
    pub months: Vec<MonthlyOverview>,
    pub smoothing: Smoothing,
    pub coverage: Coverage,
}

/// How the active obligations were accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    pub active: usize,
    pub scheduled: usize,
    pub undated: usize,
    pub outside_window: usize,
}

impl PayPlan {
    pub fn variance_for(&self, period: &PayPeriod) -> f64 {
        variance(period.total_due, self.smoothing.recommended_per_paycheck)
    }

    pub fn total_due_in_window(&self) -> f64 {
        self.periods
            .iter()
            .map(|period| period.total_due)
            .fold(0.0, |total, due| total + due)
    }

    pub fn periods_over_recommended(&self) -> usize {
        self.periods
            .iter()
            .filter(|period| self.variance_for(period) > 0.0)
            .count()
    }

    pub fn current_period(&self) -> Option<&PayPeriod> {
        self.periods.iter().find(|period| period.is_current)
    }
}

pub fn build_plan(obligations: &[Obligation], config: &PlanConfig, today: NaiveDate) -> PayPlan {
    let config = config.clamped();
    let periods = assign_obligations(generate_periods(today, &config), obligations);
    let smoothing = smooth(obligations, &config);
    let months = monthly_rollup(today, &config, smoothing.monthly_total);
    let coverage = coverage(obligations, &periods);

    PayPlan {
        reference_date: today,
        config,
        periods,
        months,
        smoothing,
        coverage,
    }
}

fn coverage(obligations: &[Obligation], periods: &[PayPeriod]) -> Coverage {
    let mut counts = Coverage::default();
    for obligation in obligations.iter().filter(|row| row.is_active()) {
        counts.active += 1;
        match obligation.next_due {
            None => counts.undated += 1,
            Some(due) if periods.iter().any(|period| period.contains(due)) => {
                counts.scheduled += 1;
            }
            Some(_) => counts.outside_window += 1,
        }
    }
    counts
}
