use payplan_client::ClientError;
use serde_json::Value;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    if let Some(missing) = missing_fields(error) {
        lines.push(format!("  Missing:  {missing}"));
    }

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn missing_fields(error: &ClientError) -> Option<String> {
    let fields = error
        .data
        .as_ref()?
        .get("missing_fields")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<&str>>();
    if fields.is_empty() {
        return None;
    }
    Some(fields.join(", "))
}
