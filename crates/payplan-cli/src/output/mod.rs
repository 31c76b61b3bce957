mod error_text;
mod export_csv;
mod format;
mod json;
mod mode;
mod plan_text;

use std::io;

use payplan_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::{write_stdout_line, write_stdout_text};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Text => write_stdout_line(&render_text_success(success)?),
        OutputMode::Json => write_stdout_line(&json::render_success_json(success)?),
        OutputMode::Csv => write_stdout_text(&export_csv::render_export_csv(&success.data)?),
    }
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text | OutputMode::Csv => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "periods" => plan_text::render_periods(&success.data),
        "months" => plan_text::render_months(&success.data),
        "cadence" => plan_text::render_cadence(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
