#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use payplan_client::ClientResult;
use payplan_client::SuccessEnvelope;
use payplan_client::commands::common::PlanRunOptions;
use payplan_client::settings::PlanOverrides;
use serde_json::{Value, json};
use tempfile::{Builder, TempDir};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Monday 2026-10-19. The default Thursday pay day falls on 2026-10-22.
pub fn reference_monday() -> NaiveDate {
    date(2026, 10, 19)
}

pub fn temp_dir_in_tmp(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir_in("/tmp")
}

pub fn write_fixture(dir: &Path, file_name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, body)?;
    Ok(path)
}

pub fn obligation(name: &str, amount: f64, cadence: &str, next_due: Option<&str>) -> Value {
    json!({
        "id": name.to_ascii_lowercase().replace(' ', "_"),
        "name": name,
        "amount": amount,
        "cadence": cadence,
        "next_due": next_due,
    })
}

pub fn stdin_options(rows: &[Value], overrides: PlanOverrides, today: NaiveDate) -> PlanRunOptions {
    PlanRunOptions {
        path: Some("-".to_string()),
        overrides,
        today,
        stdin_override: Some(Value::Array(rows.to_vec()).to_string()),
    }
}

pub fn file_options(path: &Path, overrides: PlanOverrides, today: NaiveDate) -> PlanRunOptions {
    PlanRunOptions {
        path: Some(path.display().to_string()),
        overrides,
        today,
        stdin_override: Some(String::new()),
    }
}

pub fn payload(result: ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok());
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(value) = value {
            return value;
        }
    }
    Value::Null
}

pub fn rows_at(payload: &Value, pointer: &str) -> Vec<Value> {
    payload
        .pointer(pointer)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

pub fn close(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .is_some_and(|actual| (actual - expected).abs() < 1e-9)
}
