use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::import::invalid_input_error;
use crate::{ClientError, ClientResult};

/// Canonical field names with the legacy spellings accepted for each, in
/// lookup priority order.
pub(crate) const FIELD_ALIASES: [(&str, &[&str]); 7] = [
    ("id", &["id", "_id", "uuid"]),
    ("name", &["name", "title", "service", "merchant"]),
    ("amount", &["amount", "price", "cost"]),
    (
        "cadence",
        &["cadence", "frequency", "billing_cycle", "billingCycle", "cycle"],
    ),
    (
        "next_due",
        &[
            "next_due",
            "next_due_date",
            "nextDueDate",
            "next_billing_date",
            "nextBillingDate",
            "due_date",
            "dueDate",
        ],
    ),
    ("status", &["status", "state"]),
    ("category", &["category", "tag"]),
];

const REQUIRED_FIELDS: [&str; 2] = ["amount", "cadence"];

#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) cadence: Option<String>,
    pub(crate) next_due: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) category: Option<String>,
    /// Raw JSON of an array entry that is not an object.
    pub(crate) not_an_object: Option<String>,
}

impl ParsedRow {
    fn from_lookup<F>(row: i64, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |canonical: &str| -> Option<String> {
            let (_, aliases) = FIELD_ALIASES
                .iter()
                .find(|(name, _)| *name == canonical)?;
            aliases.iter().find_map(|alias| lookup(*alias))
        };

        Self {
            row,
            id: field("id"),
            name: field("name"),
            amount: field("amount"),
            cadence: field("cadence"),
            next_due: field("next_due"),
            status: field("status"),
            category: field("category"),
            not_an_object: None,
        }
    }
}

pub(crate) fn parse_source(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(invalid_input_error("Obligation source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_input_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_input_format(
            "JSON input must be a top-level array of obligation objects.",
            "json_non_array",
        ));
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    Err(ClientError::invalid_input_format(
        "Unsupported obligation format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| invalid_input_error("Invalid JSON input. Provide a valid JSON array."))?;

    let Some(items) = parsed.as_array() else {
        return Err(invalid_input_error(
            "JSON input must be a top-level array of obligation objects.",
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let row = i64::try_from(index).unwrap_or(i64::MAX - 1) + 1;
        let Some(object) = item.as_object() else {
            rows.push(ParsedRow {
                row,
                not_an_object: Some(item.to_string()),
                ..ParsedRow::default()
            });
            continue;
        };
        rows.push(ParsedRow::from_lookup(row, |key| {
            read_optional_string(object, key)
        }));
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| invalid_input_error("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), index))
        .collect::<HashMap<String, usize>>();

    let missing = missing_required_fields(&index_by_name);
    if !missing.is_empty() {
        return Err(ClientError::input_schema_mismatch(missing, headers));
    }

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record =
            result_row.map_err(|_| invalid_input_error("CSV rows are malformed or not UTF-8."))?;
        let row = i64::try_from(row_index).unwrap_or(i64::MAX - 1) + 1;
        rows.push(ParsedRow::from_lookup(row, |key| {
            let index = index_by_name.get(key)?;
            let value = record.get(*index)?;
            if value.trim().is_empty() {
                return None;
            }
            Some(value.to_string())
        }));
    }

    Ok(rows)
}

fn missing_required_fields(index_by_name: &HashMap<String, usize>) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|canonical| {
            let aliases = FIELD_ALIASES
                .iter()
                .find(|(name, _)| name == *canonical)
                .map(|(_, aliases)| *aliases)
                .unwrap_or(&[]);
            !aliases.iter().any(|alias| index_by_name.contains_key(*alias))
        })
        .map(|canonical| canonical.to_string())
        .collect()
}

fn read_optional_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    let current = object.get(key)?;

    if current.is_null() {
        return None;
    }

    if let Some(string_value) = current.as_str() {
        if string_value.trim().is_empty() {
            return None;
        }
        return Some(string_value.to_string());
    }

    if let Some(number_value) = current.as_f64() {
        return Some(number_value.to_string());
    }

    Some(current.to_string())
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        serde_json::from_str::<Value>(line.trim())
            .map(|value| value.is_object())
            .unwrap_or(false)
    })
}

fn looks_like_csv(content: &str) -> bool {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|first_line| first_line.contains(','))
}
