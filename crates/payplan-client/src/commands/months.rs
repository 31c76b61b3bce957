use chrono::NaiveDate;

use crate::ClientResult;
use crate::commands::common::{
    PlanRunOptions, plan_settings, prepare_plan, round_to, set_aside_summary,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{MonthRow, MonthsData};
use crate::schedule::date::format_iso_date;
use crate::settings::PlanOverrides;

pub fn run(
    path: Option<&str>,
    overrides: PlanOverrides,
    today: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(PlanRunOptions::new(path, overrides, today))
}

#[doc(hidden)]
pub fn run_with_options(options: PlanRunOptions) -> ClientResult<SuccessEnvelope> {
    let prepared = prepare_plan(options, "months")?;
    let plan = &prepared.plan;

    let months = plan
        .months
        .iter()
        .map(|month| MonthRow {
            label: month.label.clone(),
            year: month.year,
            month: month.month,
            anchor_dates: month.anchor_dates.iter().map(format_iso_date).collect(),
            anchor_day_count: month.anchor_dates.len(),
            paycheck_dates: month.paycheck_dates.iter().map(format_iso_date).collect(),
            paycheck_count: month.paycheck_dates.len(),
            monthly_total: round_to(month.monthly_total, 2),
            average_per_anchor_day: round_to(month.average_per_anchor_day, 2),
            average_per_paycheck: round_to(month.average_per_paycheck, 2),
            has_five_anchor_days: month.has_five_anchor_days,
        })
        .collect::<Vec<MonthRow>>();

    let data = MonthsData {
        settings: plan_settings(plan),
        set_aside: set_aside_summary(plan),
        months,
        source: prepared.loaded.source_summary(),
    };

    success("months", data)
}
