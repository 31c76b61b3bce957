use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const INPUT_HELP_COMMAND: &str = "payplan periods --help";
pub(crate) const INPUT_HELP_SECTION_TITLE: &str = "Obligation Input";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_input_help(self) -> Self {
        self.with_input_help_data(json!({}))
    }

    pub fn with_input_help_data(self, data: Value) -> Self {
        self.with_data(merge_input_help_data(data))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `payplan {cmd} --help` for usage."),
            None => "Run `payplan --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_input_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide obligations as a JSON array of objects or as CSV with a header row."
                    .to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to review accepted fields."),
            ],
        )
        .with_input_help_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn input_schema_mismatch(missing_fields: Vec<String>, actual_headers: Vec<String>) -> Self {
        Self::new(
            "input_schema_mismatch",
            "CSV headers do not include every required obligation field.",
            vec![
                "Include an `amount` and a `cadence` column (legacy names such as `price` or `frequency` also work)."
                    .to_string(),
                format!("Run `{INPUT_HELP_COMMAND}` to review accepted fields."),
            ],
        )
        .with_input_help_data(json!({
            "missing_fields": missing_fields,
            "actual_headers": actual_headers,
        }))
    }

    pub fn source_unreadable(source: &str, detail: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Could not read obligations from `{source}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Or pipe obligations on stdin and pass `-` as the path.".to_string(),
            ],
        )
        .with_input_help_data(json!({
            "source": source,
        }))
    }

    pub fn invalid_reference_date(field_name: &str, command: &str) -> Self {
        Self::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

fn merge_input_help_data(mut data: Value) -> Value {
    if !data.is_object() {
        data = json!({});
    }

    if let Some(object) = data.as_object_mut() {
        object.insert(
            "help_command".to_string(),
            Value::String(INPUT_HELP_COMMAND.to_string()),
        );
        object.insert(
            "help_section_title".to_string(),
            Value::String(INPUT_HELP_SECTION_TITLE.to_string()),
        );
    }

    data
}

pub type ClientResult<T> = Result<T, ClientError>;
