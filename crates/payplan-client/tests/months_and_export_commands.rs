mod support;

use payplan_client::commands::{export, months};
use payplan_client::settings::PlanOverrides;
use support::plan_testkit::{
    close, date, obligation, payload, reference_monday, rows_at, stdin_options,
};

#[test]
fn months_flag_five_anchor_day_months() {
    let rows = vec![obligation("Netflix", 15.99, "monthly", Some("2026-10-22"))];
    let value = payload(months::run_with_options(stdin_options(
        &rows,
        PlanOverrides::default(),
        reference_monday(),
    )));

    assert_eq!(value["command"], "months");
    let months = rows_at(&value, "/data/months");
    assert_eq!(months.len(), 3);

    assert_eq!(months[0]["label"], "October 2026");
    assert_eq!(months[0]["anchor_day_count"], 5);
    assert_eq!(months[0]["has_five_anchor_days"], true);
    assert_eq!(months[0]["anchor_dates"][0], "2026-10-01");
    assert!(close(&months[0]["average_per_anchor_day"], 3.2));
    assert_eq!(months[0]["paycheck_count"], 5);
    assert!(close(&months[0]["average_per_paycheck"], 3.2));

    assert_eq!(months[1]["label"], "November 2026");
    assert_eq!(months[1]["has_five_anchor_days"], false);
    assert!(close(&months[1]["monthly_total"], 15.99));

    assert_eq!(months[2]["label"], "December 2026");
    assert_eq!(months[2]["anchor_day_count"], 5);
}

#[test]
fn months_follow_a_different_pay_day_and_cross_the_year() {
    let overrides = PlanOverrides {
        pay_day: Some(chrono::Weekday::Fri),
        months: Some(4),
        ..PlanOverrides::default()
    };
    let value = payload(months::run_with_options(stdin_options(
        &[],
        overrides,
        date(2026, 11, 30),
    )));

    let months = rows_at(&value, "/data/months");
    assert_eq!(months.len(), 4);
    assert_eq!(months[0]["label"], "November 2026");
    assert_eq!(months[0]["anchor_day_count"], 4);
    assert_eq!(months[2]["year"], 2027);
    assert_eq!(months[2]["month"], 1);
    assert!(close(&months[2]["average_per_anchor_day"], 0.0));
}

#[test]
fn biweekly_months_count_only_actual_paychecks() {
    let rows = vec![obligation("Rent", 1200.0, "monthly", Some("2026-11-01"))];
    let overrides = PlanOverrides {
        biweekly: true,
        ..PlanOverrides::default()
    };
    let value = payload(months::run_with_options(stdin_options(
        &rows,
        overrides,
        reference_monday(),
    )));

    let months = rows_at(&value, "/data/months");
    assert_eq!(months[0]["label"], "October 2026");
    assert_eq!(months[0]["anchor_day_count"], 5);
    assert_eq!(months[0]["has_five_anchor_days"], true);
    assert_eq!(months[0]["paycheck_count"], 2);
    assert_eq!(months[0]["paycheck_dates"][1], "2026-10-22");
    assert!(close(&months[0]["average_per_anchor_day"], 240.0));
    assert!(close(&months[0]["average_per_paycheck"], 600.0));

    assert_eq!(months[2]["label"], "December 2026");
    assert_eq!(months[2]["paycheck_count"], 3);
    assert!(close(&months[2]["average_per_paycheck"], 400.0));
}

#[test]
fn export_rows_mirror_periods() {
    let rows = vec![
        obligation("Rent", 1200.0, "monthly", Some("2026-10-24")),
        obligation("Netflix", 15.99, "monthly", Some("2026-10-22")),
    ];
    let overrides = PlanOverrides {
        periods: Some(4),
        ..PlanOverrides::default()
    };
    let value = payload(export::run_with_options(stdin_options(
        &rows,
        overrides,
        reference_monday(),
    )));

    assert_eq!(value["command"], "export");
    let columns = rows_at(&value, "/data/columns");
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0], "pay_date");
    assert_eq!(columns[6], "variance");

    let export_rows = rows_at(&value, "/data/rows");
    assert_eq!(export_rows.len(), 4);
    assert_eq!(export_rows[1]["pay_date"], "2026-10-22");
    assert_eq!(export_rows[1]["period_end"], "2026-10-28");
    assert_eq!(export_rows[1]["obligation_count"], 2);
    assert!(close(&export_rows[1]["amount_due"], 1215.99));

    let recommended = export_rows[0]["recommended_set_aside"].clone();
    assert!(export_rows
        .iter()
        .all(|row| row["recommended_set_aside"] == recommended));
}
