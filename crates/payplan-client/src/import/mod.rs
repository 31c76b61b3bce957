pub(crate) mod coerce;
pub(crate) mod input;
pub(crate) mod parse;

pub use input::SourceKind;

use crate::contracts::types::{ObligationIssue, SourceSummary};
use crate::error::INPUT_HELP_COMMAND;
use crate::schedule::types::Obligation;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct LoadedObligations {
    pub obligations: Vec<Obligation>,
    pub issues: Vec<ObligationIssue>,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub source_kind: SourceKind,
    pub source_ref: Option<String>,
}

impl LoadedObligations {
    pub fn source_summary(&self) -> SourceSummary {
        SourceSummary {
            source_used: self.source_kind.as_str().to_string(),
            source_ref: self.source_ref.clone(),
            rows_read: self.rows_read,
            rows_loaded: self.obligations.len(),
            rows_skipped: self.rows_skipped,
            issues: self.issues.clone(),
        }
    }
}

/// Reads obligations from a file path, `-`, or piped stdin.
///
/// Structural problems (empty source, unsupported format, missing required
/// CSV columns) fail the whole load. Row-level problems are reported in
/// `issues` and never abort the load.
pub fn load_obligations(
    path: Option<&str>,
    stdin_override: Option<String>,
) -> ClientResult<LoadedObligations> {
    let resolved = input::resolve_source(path, stdin_override)?;
    tracing::debug!(
        source = resolved.source_kind.as_str(),
        source_ref = resolved.source_ref.as_deref().unwrap_or("-"),
        bytes = resolved.content.len(),
        "resolved obligation source"
    );

    let parsed_rows = parse::parse_source(&resolved.content)?;
    let rows_read = parsed_rows.len();
    let coerced = coerce::coerce_rows(parsed_rows);

    for issue in &coerced.issues {
        tracing::warn!(
            row = issue.row,
            field = %issue.field,
            code = %issue.code,
            skipped = issue.row_skipped,
            "{}",
            issue.description
        );
    }
    tracing::debug!(
        rows_read,
        rows_loaded = coerced.obligations.len(),
        rows_skipped = coerced.rows_skipped,
        "loaded obligations"
    );

    Ok(LoadedObligations {
        obligations: coerced.obligations,
        issues: coerced.issues,
        rows_read,
        rows_skipped: coerced.rows_skipped,
        source_kind: resolved.source_kind,
        source_ref: resolved.source_ref,
    })
}

pub(crate) fn invalid_input_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide a JSON array or CSV obligations via path or stdin.".to_string(),
            format!("Run `{INPUT_HELP_COMMAND}` to confirm accepted obligation fields."),
        ],
    )
    .with_input_help()
}
