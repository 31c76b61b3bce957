use crate::schedule::cadence::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::schedule::config::PlanConfig;
use crate::schedule::types::Obligation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Sum of monthly equivalents across active obligations.
    pub monthly_total: f64,
    /// Annualized monthly total spread over 52 weeks, before buffer.
    pub weekly_baseline: f64,
    pub buffer_percent: f64,
    pub recommended_weekly: f64,
    /// Recommended set-aside for one paycheck at the configured pay cadence.
    pub recommended_per_paycheck: f64,
}

pub fn monthly_equivalent_total(obligations: &[Obligation]) -> f64 {
    obligations
        .iter()
        .filter(|obligation| obligation.is_active())
        .map(Obligation::monthly_equivalent)
        .fold(0.0, |total, amount| total + amount)
}

pub fn weekly_baseline(monthly_total: f64) -> f64 {
    monthly_total * MONTHS_PER_YEAR / WEEKS_PER_YEAR
}

pub fn recommended_weekly(monthly_total: f64, buffer_percent: f64) -> f64 {
    weekly_baseline(monthly_total) * (1.0 + buffer_percent / 100.0)
}

/// Positive when the period needs more than the flat set-aside.
pub fn variance(total_due: f64, recommended: f64) -> f64 {
    total_due - recommended
}

pub fn smooth(obligations: &[Obligation], config: &PlanConfig) -> Smoothing {
    let monthly_total = monthly_equivalent_total(obligations);
    let recommended = recommended_weekly(monthly_total, config.buffer_percent);
    Smoothing {
        monthly_total,
        weekly_baseline: weekly_baseline(monthly_total),
        buffer_percent: config.buffer_percent,
        recommended_weekly: recommended,
        recommended_per_paycheck: recommended * config.pay_cadence.weeks_per_period(),
    }
}
