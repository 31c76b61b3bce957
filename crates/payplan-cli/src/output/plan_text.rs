use std::io;

use serde_json::Value;

use super::format::{
    self, Column, format_money, format_percent, format_signed_money, key_value_rows,
};

pub fn render_periods(data: &Value) -> io::Result<String> {
    let periods = data
        .get("periods")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("periods output requires periods"))?;

    let mut lines = vec![settings_heading("Pay periods", data), String::new()];
    lines.push("Set-aside:".to_string());
    lines.extend(set_aside_rows(data));
    lines.push(String::new());

    lines.push("Periods:".to_string());
    let columns = [
        Column::left(""),
        Column::left("Period"),
        Column::left("Pay date"),
        Column::right("Bills"),
        Column::right("Due"),
        Column::right("Variance"),
    ];
    let table_rows = periods
        .iter()
        .map(|period| {
            vec![
                period_marker(period).to_string(),
                text(period, "label"),
                text(period, "pay_date"),
                count(period, "obligation_count").to_string(),
                format_money(number(period, "total_due")),
                format_signed_money(number(period, "variance")),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Period",
    ));
    lines.push("  * current period".to_string());

    let due_lines = due_obligation_lines(periods);
    if !due_lines.is_empty() {
        lines.push(String::new());
        lines.push("Due by period:".to_string());
        lines.extend(due_lines);
    }

    if let Some(coverage) = data.get("coverage") {
        lines.push(String::new());
        lines.push(coverage_line(coverage));
    }

    lines.extend(issue_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_months(data: &Value) -> io::Result<String> {
    let months = data
        .get("months")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("months output requires months"))?;

    let mut lines = vec![settings_heading("Monthly overview", data), String::new()];
    if data["settings"]["pay_cadence"].as_str() == Some("biweekly") {
        lines.extend(biweekly_month_rows(months, &text(&data["settings"], "pay_day")));
    } else {
        lines.extend(weekly_month_rows(months));
    }

    lines.push(String::new());
    lines.push("Set-aside:".to_string());
    lines.extend(set_aside_rows(data));
    lines.extend(issue_lines(data));
    Ok(lines.join("\n"))
}

fn weekly_month_rows(months: &[Value]) -> Vec<String> {
    let columns = [
        Column::left("Month"),
        Column::right("Pay days"),
        Column::right("Monthly total"),
        Column::right("Per pay day"),
    ];
    let table_rows = months
        .iter()
        .map(|month| {
            vec![
                text(month, "label"),
                format!("{}{}", count(month, "anchor_day_count"), five_marker(month)),
                format_money(number(month, "monthly_total")),
                format_money(number(month, "average_per_anchor_day")),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    let mut lines =
        format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Month");

    if months.iter().any(has_five_anchor_days) {
        lines.push("  * five pay days this month; one paycheck is spare".to_string());
    }
    lines
}

/// Biweekly pay lands on every other anchor weekday, so the anchor count and
/// the paycheck count are shown separately.
fn biweekly_month_rows(months: &[Value], pay_day: &str) -> Vec<String> {
    let weekday_header = format!("{}s", capitalize(pay_day));
    let columns = [
        Column::left("Month"),
        Column::right(&weekday_header),
        Column::right("Paychecks"),
        Column::right("Monthly total"),
        Column::right("Per paycheck"),
    ];
    let table_rows = months
        .iter()
        .map(|month| {
            let spare = if count(month, "paycheck_count") == 3 {
                " +"
            } else {
                ""
            };
            vec![
                text(month, "label"),
                format!("{}{}", count(month, "anchor_day_count"), five_marker(month)),
                format!("{}{spare}", count(month, "paycheck_count")),
                format_money(number(month, "monthly_total")),
                format_money(number(month, "average_per_paycheck")),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    let mut lines =
        format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Month");

    if months.iter().any(has_five_anchor_days) {
        lines.push(format!("  * five {pay_day}s this month"));
    }
    if months
        .iter()
        .any(|month| count(month, "paycheck_count") == 3)
    {
        lines.push("  + three paychecks this month; one paycheck is spare".to_string());
    }
    lines
}

fn has_five_anchor_days(month: &Value) -> bool {
    month["has_five_anchor_days"].as_bool() == Some(true)
}

fn five_marker(month: &Value) -> &'static str {
    if has_five_anchor_days(month) { " *" } else { "" }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_cadence(data: &Value) -> io::Result<String> {
    let input = data
        .get("input")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("cadence output requires input"))?;
    let accepted = data
        .get("accepted_cadences")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<&str>>()
                .join(", ")
        })
        .unwrap_or_default();

    let first_line = match data.get("cadence").and_then(Value::as_str) {
        Some(cadence) => format!(
            "\"{input}\" -> {cadence} (monthly factor {:.4})",
            number(data, "monthly_factor")
        ),
        None => format!("\"{input}\" is not a recognized cadence; rows using it are skipped."),
    };

    Ok([first_line, format!("Accepted cadences: {accepted}")].join("\n"))
}

fn settings_heading(title: &str, data: &Value) -> String {
    let settings = &data["settings"];
    format!(
        "{title} ({} pay on {}, as of {})",
        text(settings, "pay_cadence"),
        text(settings, "pay_day"),
        text(settings, "reference_date"),
    )
}

fn set_aside_rows(data: &Value) -> Vec<String> {
    let set_aside = &data["set_aside"];
    let mut entries = vec![
        (
            "Monthly total:",
            format_money(number(set_aside, "monthly_total")),
        ),
        (
            "Weekly baseline:",
            format_money(number(set_aside, "weekly_baseline")),
        ),
        (
            "Buffer:",
            format_percent(number(&data["settings"], "buffer_percent")),
        ),
        (
            "Recommended weekly:",
            format_money(number(set_aside, "recommended_weekly")),
        ),
    ];
    if data["settings"]["pay_cadence"].as_str() == Some("biweekly") {
        entries.push((
            "Per paycheck:",
            format_money(number(set_aside, "recommended_per_paycheck")),
        ));
    }
    key_value_rows(&entries, 2)
}

fn due_obligation_lines(periods: &[Value]) -> Vec<String> {
    let mut lines = Vec::new();
    for period in periods {
        let names = period
            .get("obligations")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .map(|row| {
                        format!(
                            "{} {} ({})",
                            text(row, "name"),
                            format_money(number(row, "amount")),
                            text(row, "next_due"),
                        )
                    })
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();
        if names.is_empty() {
            continue;
        }
        lines.push(format!("  {}:", text(period, "label")));
        lines.extend(names.into_iter().map(|name| format!("    {name}")));
    }
    lines
}

fn coverage_line(coverage: &Value) -> String {
    format!(
        "{} active obligations: {} scheduled in window, {} undated, {} due later. {} period(s) need more than the set-aside.",
        count(coverage, "active_obligations"),
        count(coverage, "scheduled"),
        count(coverage, "undated"),
        count(coverage, "outside_window"),
        count(coverage, "periods_over_recommended"),
    )
}

fn issue_lines(data: &Value) -> Vec<String> {
    let issues = data
        .pointer("/source/issues")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if issues.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), "Input warnings:".to_string()];
    for issue in &issues {
        let suffix = if issue["row_skipped"].as_bool() == Some(true) {
            " Row skipped."
        } else {
            ""
        };
        lines.push(format!(
            "  Row {}: {}{suffix}",
            count(issue, "row"),
            text(issue, "description"),
        ));
    }
    lines
}

fn period_marker(period: &Value) -> &'static str {
    if period["is_current"].as_bool() == Some(true) {
        "*"
    } else {
        ""
    }
}

fn text(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}

fn number(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn count(row: &Value, key: &str) -> i64 {
    row.get(key).and_then(Value::as_i64).unwrap_or(0)
}
