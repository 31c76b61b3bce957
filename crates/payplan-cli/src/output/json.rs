use std::io;

use payplan_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::{Value, json};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "periods" | "months" | "cadence" => envelope_json(&success.command, &success.data),
        "export" => render_export_json(&success.data),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let mut payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    if let Some(data) = &error.data {
        payload["error"]["data"] = data.clone();
    }
    serialize_json_pretty(&payload)
}

fn envelope_json(command: &str, data: &Value) -> Value {
    json!({
        "ok": true,
        "command": command,
        "version": JSON_VERSION,
        "data": data.clone()
    })
}

fn render_export_json(data: &Value) -> Value {
    json!({
        "ok": true,
        "command": "export",
        "version": JSON_VERSION,
        "settings": data.get("settings").cloned().unwrap_or(Value::Null),
        "rows": data.get("rows").cloned().unwrap_or_else(|| json!([])),
    })
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use payplan_client::{ClientError, SuccessEnvelope};
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    fn parse(text: &str) -> Value {
        serde_json::from_str::<Value>(text).unwrap_or(Value::Null)
    }

    #[test]
    fn plan_commands_use_structured_envelope() {
        let rendered = render_success_json(&success("periods", json!({"periods": []})));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let value = parse(&text);
            assert_eq!(value["ok"], Value::Bool(true));
            assert_eq!(value["command"], "periods");
            assert_eq!(value["version"], "v1");
            assert!(value["data"]["periods"].is_array());
        }
    }

    #[test]
    fn export_json_lifts_rows_to_top_level() {
        let rendered = render_success_json(&success(
            "export",
            json!({"settings": {"pay_day": "thursday"}, "columns": [], "rows": [{"pay_date": "2026-10-22"}]}),
        ));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let value = parse(&text);
            assert_eq!(value["rows"][0]["pay_date"], "2026-10-22");
            assert!(value.get("columns").is_none());
        }
    }

    #[test]
    fn error_json_uses_universal_shape() {
        let error = ClientError::invalid_input_format("nope", "ndjson");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let value = parse(&text);
            assert_eq!(value["error"]["code"], "invalid_argument");
            assert_eq!(value["error"]["data"]["received_format"], "ndjson");
            assert!(value.get("ok").is_none());
        }
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(render_success_json(&success("dash", json!({}))).is_err());
    }
}
