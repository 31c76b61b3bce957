use chrono::NaiveDate;

use crate::ClientResult;
use crate::commands::common::{PlanRunOptions, plan_settings, prepare_plan, round_to};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ExportData, ExportRow};
use crate::schedule::date::format_iso_date;
use crate::settings::PlanOverrides;

pub const EXPORT_COLUMNS: [&str; 7] = [
    "pay_date",
    "period_start",
    "period_end",
    "obligation_count",
    "amount_due",
    "recommended_set_aside",
    "variance",
];

pub fn run(
    path: Option<&str>,
    overrides: PlanOverrides,
    today: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    run_with_options(PlanRunOptions::new(path, overrides, today))
}

#[doc(hidden)]
pub fn run_with_options(options: PlanRunOptions) -> ClientResult<SuccessEnvelope> {
    let prepared = prepare_plan(options, "export")?;
    let plan = &prepared.plan;
    let recommended = round_to(plan.smoothing.recommended_per_paycheck, 2);

    let rows = plan
        .periods
        .iter()
        .map(|period| ExportRow {
            pay_date: format_iso_date(&period.pay_date),
            period_start: format_iso_date(&period.start),
            period_end: format_iso_date(&period.end),
            obligation_count: period.obligations.len(),
            amount_due: round_to(period.total_due, 2),
            recommended_set_aside: recommended,
            variance: round_to(plan.variance_for(period), 2),
        })
        .collect::<Vec<ExportRow>>();

    let data = ExportData {
        settings: plan_settings(plan),
        columns: EXPORT_COLUMNS.iter().map(|name| name.to_string()).collect(),
        rows,
    };

    success("export", data)
}
