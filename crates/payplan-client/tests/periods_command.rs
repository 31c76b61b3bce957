mod support;

use payplan_client::commands::periods;
use payplan_client::settings::PlanOverrides;
use serde_json::json;
use support::plan_testkit::{
    close, obligation, payload, reference_monday, rows_at, stdin_options,
};

#[test]
fn single_monthly_obligation_lands_three_days_out() {
    let rows = vec![obligation("Netflix", 15.99, "monthly", Some("2026-10-22"))];
    let overrides = PlanOverrides {
        periods: Some(4),
        ..PlanOverrides::default()
    };
    let value = payload(periods::run_with_options(stdin_options(
        &rows,
        overrides,
        reference_monday(),
    )));

    assert_eq!(value["ok"], true);
    assert_eq!(value["command"], "periods");
    assert_eq!(value["data"]["settings"]["pay_day"], "thursday");
    assert_eq!(value["data"]["settings"]["reference_date"], "2026-10-19");
    assert!(close(&value["data"]["set_aside"]["recommended_weekly"], 4.06));
    assert!(close(&value["data"]["set_aside"]["monthly_total"], 15.99));

    let periods = rows_at(&value, "/data/periods");
    assert_eq!(periods.len(), 4);
    assert_eq!(periods[0]["start"], "2026-10-15");
    assert_eq!(periods[0]["end"], "2026-10-21");
    assert_eq!(periods[0]["is_current"], true);
    assert_eq!(periods[1]["pay_date"], "2026-10-22");
    assert!(close(&periods[1]["total_due"], 15.99));
    assert!(close(&periods[1]["variance"], 11.93));
    assert!(close(&periods[0]["variance"], -4.06));
    assert_eq!(periods[1]["obligations"][0]["id"], "netflix");
}

#[test]
fn empty_obligation_list_yields_zeroed_periods() {
    let value = payload(periods::run_with_options(stdin_options(
        &[],
        PlanOverrides::default(),
        reference_monday(),
    )));

    let periods = rows_at(&value, "/data/periods");
    assert_eq!(periods.len(), 8);
    for period in &periods {
        assert!(close(&period["total_due"], 0.0));
        assert!(close(&period["variance"], 0.0));
        assert_eq!(period["obligation_count"], 0);
    }
    assert!(close(&value["data"]["set_aside"]["recommended_weekly"], 0.0));
    assert_eq!(value["data"]["coverage"]["active_obligations"], 0);

    let rendered = value.to_string();
    assert!(rendered.contains("\"total_due\":0.0"));
    assert!(!rendered.contains("-0.0"));
}

#[test]
fn yearly_obligation_contributes_its_monthly_share() {
    let rows = vec![obligation("Domain", 120.0, "annual", Some("2027-03-01"))];
    let overrides = PlanOverrides {
        buffer_percent: Some(0.0),
        ..PlanOverrides::default()
    };
    let value = payload(periods::run_with_options(stdin_options(
        &rows,
        overrides,
        reference_monday(),
    )));

    assert!(close(&value["data"]["set_aside"]["monthly_total"], 10.0));
    assert!(close(&value["data"]["set_aside"]["weekly_baseline"], 2.31));
    assert_eq!(value["data"]["coverage"]["outside_window"], 1);
    assert_eq!(value["data"]["coverage"]["scheduled"], 0);
}

#[test]
fn inactive_and_undated_rows_are_accounted_for() {
    let mut cancelled = obligation("Old Gym", 40.0, "monthly", Some("2026-10-23"));
    cancelled["status"] = json!("cancelled");
    let rows = vec![
        obligation("Rent", 1200.0, "monthly", Some("2026-10-24")),
        obligation("Music", 10.99, "monthly", None),
        cancelled,
    ];
    let value = payload(periods::run_with_options(stdin_options(
        &rows,
        PlanOverrides::default(),
        reference_monday(),
    )));

    let coverage = &value["data"]["coverage"];
    assert_eq!(coverage["active_obligations"], 2);
    assert_eq!(coverage["scheduled"], 1);
    assert_eq!(coverage["undated"], 1);
    assert!(close(&coverage["total_due_in_window"], 1200.0));
    assert!(close(&value["data"]["set_aside"]["monthly_total"], 1210.99));

    let issues = rows_at(&value, "/data/source/issues");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["code"], "missing_due_date");
    assert_eq!(issues[0]["row_skipped"], false);
}

#[test]
fn biweekly_pay_doubles_the_per_paycheck_figure() {
    let rows = vec![obligation("Insurance", 300.0, "quarterly", Some("2026-11-03"))];
    let overrides = PlanOverrides {
        biweekly: true,
        periods: Some(3),
        ..PlanOverrides::default()
    };
    let value = payload(periods::run_with_options(stdin_options(
        &rows,
        overrides,
        reference_monday(),
    )));

    assert_eq!(value["data"]["settings"]["pay_cadence"], "biweekly");
    let weekly = value["data"]["set_aside"]["recommended_weekly"]
        .as_f64()
        .unwrap_or_default();
    let per_paycheck = value["data"]["set_aside"]["recommended_per_paycheck"]
        .as_f64()
        .unwrap_or_default();
    assert!((per_paycheck - weekly * 2.0).abs() < 0.011);

    let periods = rows_at(&value, "/data/periods");
    assert_eq!(periods[0]["start"], "2026-10-08");
    assert_eq!(periods[1]["start"], "2026-10-22");
    assert_eq!(periods[1]["end"], "2026-11-04");
    assert!(close(&periods[1]["total_due"], 300.0));
}

#[test]
fn same_inputs_produce_identical_payloads() {
    let rows = vec![
        obligation("Rent", 1200.0, "monthly", Some("2026-10-24")),
        obligation("Coffee", 3.5, "daily", Some("2026-10-20")),
    ];
    let first = payload(periods::run_with_options(stdin_options(
        &rows,
        PlanOverrides::default(),
        reference_monday(),
    )));
    let second = payload(periods::run_with_options(stdin_options(
        &rows,
        PlanOverrides::default(),
        reference_monday(),
    )));
    assert_eq!(first, second);
}
