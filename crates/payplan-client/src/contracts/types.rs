use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ObligationIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    pub row_skipped: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source_used: String,
    pub source_ref: Option<String>,
    pub rows_read: usize,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub issues: Vec<ObligationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanSettings {
    pub reference_date: String,
    pub pay_day: String,
    pub pay_cadence: String,
    pub period_count: usize,
    pub buffer_percent: f64,
    pub month_count: usize,
    pub today_rule: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetAsideSummary {
    pub monthly_total: f64,
    pub weekly_baseline: f64,
    pub recommended_weekly: f64,
    pub recommended_per_paycheck: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageSummary {
    pub active_obligations: usize,
    pub scheduled: usize,
    pub undated: usize,
    pub outside_window: usize,
    pub total_due_in_window: f64,
    pub periods_over_recommended: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodObligationRow {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub cadence: String,
    pub next_due: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodRow {
    pub index: usize,
    pub label: String,
    pub start: String,
    pub end: String,
    pub pay_date: String,
    pub obligation_count: usize,
    pub obligations: Vec<PeriodObligationRow>,
    pub total_due: f64,
    pub variance: f64,
    pub is_current: bool,
    pub is_past: bool,
    pub days_until_pay: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodsData {
    pub settings: PlanSettings,
    pub set_aside: SetAsideSummary,
    pub coverage: CoverageSummary,
    pub periods: Vec<PeriodRow>,
    pub source: SourceSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRow {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub anchor_dates: Vec<String>,
    pub anchor_day_count: usize,
    pub paycheck_dates: Vec<String>,
    pub paycheck_count: usize,
    pub monthly_total: f64,
    pub average_per_anchor_day: f64,
    pub average_per_paycheck: f64,
    pub has_five_anchor_days: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthsData {
    pub settings: PlanSettings,
    pub set_aside: SetAsideSummary,
    pub months: Vec<MonthRow>,
    pub source: SourceSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub pay_date: String,
    pub period_start: String,
    pub period_end: String,
    pub obligation_count: usize,
    pub amount_due: f64,
    pub recommended_set_aside: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub settings: PlanSettings,
    pub columns: Vec<String>,
    pub rows: Vec<ExportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CadenceData {
    pub input: String,
    pub recognized: bool,
    pub cadence: Option<String>,
    pub monthly_factor: Option<f64>,
    pub accepted_cadences: Vec<String>,
}
