use std::io;

use serde_json::Value;

/// Renders export rows as CSV in `columns` order. Money columns keep two
/// decimals; missing cells are written empty.
pub fn render_export_csv(data: &Value) -> io::Result<String> {
    let columns = data
        .get("columns")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("export output requires columns"))?
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<&str>>();
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns).map_err(io::Error::other)?;
    for row in &rows {
        let record = columns
            .iter()
            .map(|column| cell(row.get(*column)))
            .collect::<Vec<String>>();
        writer.write_record(&record).map_err(io::Error::other)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| io::Error::other(error.to_string()))?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) if number.is_f64() => {
            format!("{:.2}", number.as_f64().unwrap_or(0.0))
        }
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}
