use chrono::NaiveDate;

use crate::ClientResult;
use crate::contracts::types::{
    CoverageSummary, PeriodObligationRow, PeriodRow, PlanSettings, SetAsideSummary,
};
use crate::import::{LoadedObligations, load_obligations};
use crate::schedule::date::{format_iso_date, weekday_name};
use crate::schedule::periods::PayPeriod;
use crate::schedule::plan::{PayPlan, build_plan};
use crate::settings::{PlanOverrides, resolve_plan_config};

/// Inputs shared by every plan-backed command. `today` is always explicit;
/// only the CLI consults the clock.
#[derive(Debug, Clone)]
pub struct PlanRunOptions {
    pub path: Option<String>,
    pub overrides: PlanOverrides,
    pub today: NaiveDate,
    pub stdin_override: Option<String>,
}

impl PlanRunOptions {
    pub fn new(path: Option<&str>, overrides: PlanOverrides, today: NaiveDate) -> Self {
        Self {
            path: path.map(std::string::ToString::to_string),
            overrides,
            today,
            stdin_override: None,
        }
    }
}

pub(crate) struct PreparedPlan {
    pub(crate) loaded: LoadedObligations,
    pub(crate) plan: PayPlan,
}

pub(crate) fn prepare_plan(options: PlanRunOptions, command: &str) -> ClientResult<PreparedPlan> {
    let config = resolve_plan_config(&options.overrides);
    let loaded = load_obligations(options.path.as_deref(), options.stdin_override)?;
    let plan = build_plan(&loaded.obligations, &config, options.today);
    tracing::debug!(
        command,
        today = %format_iso_date(&plan.reference_date),
        pay_day = weekday_name(plan.config.pay_day),
        periods = plan.periods.len(),
        monthly_total = plan.smoothing.monthly_total,
        "built pay plan"
    );
    Ok(PreparedPlan { loaded, plan })
}

pub(crate) fn plan_settings(plan: &PayPlan) -> PlanSettings {
    PlanSettings {
        reference_date: format_iso_date(&plan.reference_date),
        pay_day: weekday_name(plan.config.pay_day).to_string(),
        pay_cadence: plan.config.pay_cadence.as_str().to_string(),
        period_count: plan.config.period_count,
        buffer_percent: round_to(plan.config.buffer_percent, 2),
        month_count: plan.config.month_count,
        today_rule: plan.config.today_rule.as_str().to_string(),
    }
}

pub(crate) fn set_aside_summary(plan: &PayPlan) -> SetAsideSummary {
    SetAsideSummary {
        monthly_total: round_to(plan.smoothing.monthly_total, 2),
        weekly_baseline: round_to(plan.smoothing.weekly_baseline, 2),
        recommended_weekly: round_to(plan.smoothing.recommended_weekly, 2),
        recommended_per_paycheck: round_to(plan.smoothing.recommended_per_paycheck, 2),
    }
}

pub(crate) fn coverage_summary(plan: &PayPlan) -> CoverageSummary {
    CoverageSummary {
        active_obligations: plan.coverage.active,
        scheduled: plan.coverage.scheduled,
        undated: plan.coverage.undated,
        outside_window: plan.coverage.outside_window,
        total_due_in_window: round_to(plan.total_due_in_window(), 2),
        periods_over_recommended: plan.periods_over_recommended(),
    }
}

pub(crate) fn period_row(plan: &PayPlan, period: &PayPeriod) -> PeriodRow {
    PeriodRow {
        index: period.index,
        label: period.label.clone(),
        start: format_iso_date(&period.start),
        end: format_iso_date(&period.end),
        pay_date: format_iso_date(&period.pay_date),
        obligation_count: period.obligations.len(),
        obligations: period
            .obligations
            .iter()
            .map(|obligation| PeriodObligationRow {
                id: obligation.id.clone(),
                name: obligation.name.clone(),
                amount: round_to(obligation.amount, 2),
                cadence: obligation.cadence.as_str().to_string(),
                next_due: obligation.next_due.as_ref().map(format_iso_date),
                category: obligation.category.clone(),
            })
            .collect(),
        total_due: round_to(period.total_due, 2),
        variance: round_to(plan.variance_for(period), 2),
        is_current: period.is_current,
        is_past: period.is_past,
        days_until_pay: period.days_until_pay,
    }
}

/// Rounds half away from zero. Never returns `-0.0`, which would render as
/// `-0.00` in text and CSV output.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(2);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor + 0.0
}
