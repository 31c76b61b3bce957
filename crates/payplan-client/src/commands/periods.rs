use chrono::NaiveDate;

use crate::ClientResult;
use crate::commands::common::{
    PlanRunOptions, coverage_summary, period_row, plan_settings, prepare_plan, set_aside_summary,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PeriodRow, PeriodsData};
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
    let prepared = prepare_plan(options, "periods")?;
    let plan = &prepared.plan;

    let periods = plan
        .periods
        .iter()
        .map(|period| period_row(plan, period))
        .collect::<Vec<PeriodRow>>();

    let data = PeriodsData {
        settings: plan_settings(plan),
        set_aside: set_aside_summary(plan),
        coverage: coverage_summary(plan),
        periods,
        source: prepared.loaded.source_summary(),
    };

    success("periods", data)
}
