use crate::contracts::types::ObligationIssue;
use crate::import::parse::ParsedRow;
use crate::schedule::cadence::{Cadence, CadenceMatch, normalize_cadence};
use crate::schedule::date::parse_due_date;
use crate::schedule::types::{Obligation, ObligationStatus};

#[derive(Debug, Clone, Default)]
pub(crate) struct CoercedRows {
    pub(crate) obligations: Vec<Obligation>,
    pub(crate) issues: Vec<ObligationIssue>,
    pub(crate) rows_skipped: usize,
}

/// Turns parsed rows into obligations.
///
/// Rows without a usable amount or cadence are skipped, as are JSON array
/// entries that are not objects. A missing or
/// unparseable due date keeps the row with `next_due = None`; an unknown
/// status keeps the row as active. Every degraded or skipped row leaves an
/// issue behind.
pub(crate) fn coerce_rows(parsed_rows: Vec<ParsedRow>) -> CoercedRows {
    let mut coerced = CoercedRows::default();

    for raw in parsed_rows {
        let row = raw.row;
        if let Some(received) = raw.not_an_object {
            coerced.rows_skipped += 1;
            coerced.issues.push(issue(
                row,
                "row",
                "invalid_row",
                "row must be a JSON object with obligation fields.",
                Some(received),
                true,
            ));
            continue;
        }
        let mut row_issues = Vec::new();

        let amount = coerce_amount(row, raw.amount, &mut row_issues);
        let cadence = coerce_cadence(row, raw.cadence, &mut row_issues);
        let (Some(amount), Some(cadence)) = (amount, cadence) else {
            coerced.rows_skipped += 1;
            coerced.issues.extend(row_issues);
            continue;
        };

        let status = coerce_status(row, raw.status, &mut row_issues);
        let next_due = coerce_due_date(row, raw.next_due, &mut row_issues);
        let id = normalize_optional(raw.id).unwrap_or_else(|| format!("row_{row}"));
        let name = normalize_optional(raw.name).unwrap_or_else(|| id.clone());

        coerced.issues.extend(row_issues);
        coerced.obligations.push(Obligation {
            id,
            name,
            amount,
            cadence,
            next_due,
            status,
            category: normalize_optional(raw.category),
        });
    }

    coerced
}

fn coerce_amount(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<ObligationIssue>,
) -> Option<f64> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(issue(
            row,
            "amount",
            "missing_amount",
            "amount must be present.",
            None,
            true,
        ));
        return None;
    };

    let cleaned = candidate
        .strip_prefix('$')
        .unwrap_or(&candidate)
        .replace(',', "");
    let parsed = cleaned.trim().parse::<f64>().ok().filter(|value| value.is_finite());
    let Some(amount) = parsed else {
        issues.push(issue(
            row,
            "amount",
            "invalid_amount",
            &format!("amount must be numeric; got \"{candidate}\""),
            Some(candidate),
            true,
        ));
        return None;
    };

    if amount < 0.0 {
        issues.push(issue(
            row,
            "amount",
            "negative_amount",
            &format!("amount must not be negative; got {candidate}"),
            Some(candidate),
            true,
        ));
        return None;
    }

    Some(amount)
}

fn coerce_cadence(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<ObligationIssue>,
) -> Option<Cadence> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(issue(
            row,
            "cadence",
            "missing_cadence",
            "cadence must be present.",
            None,
            true,
        ));
        return None;
    };

    match normalize_cadence(&candidate) {
        CadenceMatch::Recognized(cadence) => Some(cadence),
        CadenceMatch::Unrecognized => {
            issues.push(issue(
                row,
                "cadence",
                "unrecognized_cadence",
                &format!(
                    "cadence must be one of daily, weekly, monthly, quarterly, yearly; got \"{candidate}\""
                ),
                Some(candidate),
                true,
            ));
            None
        }
    }
}

fn coerce_status(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<ObligationIssue>,
) -> ObligationStatus {
    let Some(candidate) = normalize_optional(value) else {
        return ObligationStatus::Active;
    };

    match ObligationStatus::parse(&candidate) {
        Some(status) => status,
        None => {
            issues.push(issue(
                row,
                "status",
                "unknown_status",
                &format!("status \"{candidate}\" is not active, cancelled or watchlist; treated as active."),
                Some(candidate),
                false,
            ));
            ObligationStatus::Active
        }
    }
}

fn coerce_due_date(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<ObligationIssue>,
) -> Option<chrono::NaiveDate> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(issue(
            row,
            "next_due",
            "missing_due_date",
            "next_due is missing; the obligation counts toward totals but is not placed in a period.",
            None,
            false,
        ));
        return None;
    };

    let parsed = parse_due_date(&candidate);
    if parsed.is_none() {
        issues.push(issue(
            row,
            "next_due",
            "invalid_due_date",
            &format!("next_due must be YYYY-MM-DD; got \"{candidate}\". The obligation is not placed in a period."),
            Some(candidate),
            false,
        ));
    }
    parsed
}

fn issue(
    row: i64,
    field: &str,
    code: &str,
    description: &str,
    received: Option<String>,
    row_skipped: bool,
) -> ObligationIssue {
    ObligationIssue {
        row,
        field: field.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        received,
        row_skipped,
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
