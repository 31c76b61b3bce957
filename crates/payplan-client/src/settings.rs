use chrono::Weekday;

use crate::schedule::config::{PayCadence, PlanConfig, TodayAnchorRule};
use crate::schedule::date::parse_weekday;

pub const PAY_DAY_ENV: &str = "PAYPLAN_PAY_DAY";
pub const BUFFER_PERCENT_ENV: &str = "PAYPLAN_BUFFER_PERCENT";
pub const PERIODS_ENV: &str = "PAYPLAN_PERIODS";
pub const MONTHS_ENV: &str = "PAYPLAN_MONTHS";

/// Values given explicitly on the command line. `None` defers to the
/// environment, then to the built-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanOverrides {
    pub pay_day: Option<Weekday>,
    pub biweekly: bool,
    pub periods: Option<usize>,
    pub buffer_percent: Option<f64>,
    pub months: Option<usize>,
    pub skip_today_anchor: bool,
}

pub fn resolve_plan_config(overrides: &PlanOverrides) -> PlanConfig {
    resolve_with_env(overrides, |key| std::env::var(key).ok())
}

/// Layers explicit overrides over environment values over defaults, then
/// clamps. Unparseable environment values are ignored with a warning.
pub fn resolve_with_env<F>(overrides: &PlanOverrides, lookup: F) -> PlanConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = PlanConfig::default();

    let pay_day = overrides
        .pay_day
        .or_else(|| env_value(&lookup, PAY_DAY_ENV, parse_weekday))
        .unwrap_or(defaults.pay_day);
    let period_count = overrides
        .periods
        .or_else(|| env_value(&lookup, PERIODS_ENV, parse_count))
        .unwrap_or(defaults.period_count);
    let buffer_percent = overrides
        .buffer_percent
        .or_else(|| env_value(&lookup, BUFFER_PERCENT_ENV, parse_percent))
        .unwrap_or(defaults.buffer_percent);
    let month_count = overrides
        .months
        .or_else(|| env_value(&lookup, MONTHS_ENV, parse_count))
        .unwrap_or(defaults.month_count);

    let config = PlanConfig {
        pay_day,
        pay_cadence: if overrides.biweekly {
            PayCadence::Biweekly
        } else {
            PayCadence::Weekly
        },
        period_count,
        buffer_percent,
        month_count,
        today_rule: if overrides.skip_today_anchor {
            TodayAnchorRule::SkipToFollowing
        } else {
            TodayAnchorRule::CountsAsNext
        },
    };
    let clamped = config.clamped();
    if clamped != config {
        tracing::debug!(
            periods = clamped.period_count,
            buffer_percent = clamped.buffer_percent,
            months = clamped.month_count,
            "plan settings clamped into supported range"
        );
    }
    clamped
}

fn env_value<T, F, P>(lookup: &F, key: &str, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let raw = lookup(key)?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "ignoring invalid environment value");
    }
    parsed
}

fn parse_count(value: &str) -> Option<usize> {
    value.parse::<usize>().ok()
}

fn parse_percent(value: &str) -> Option<f64> {
    value
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
