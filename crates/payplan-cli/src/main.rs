mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use payplan_client::ClientError;
use stdout_io::write_stdout_text;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PAYPLAN_LOG";

const ROOT_HELP: &str = "payplan - pay-period allocation calculator

Usage:
  payplan <command>

Start here:
  payplan periods subs.json
  payplan months subs.json
  payplan periods --help
";

const TOP_LEVEL_HELP: &str = "payplan - pay-period allocation calculator

USAGE: payplan <command> [<path>] [flags]

Plan your paychecks:
  payplan periods <path>                  Group upcoming bills into pay periods
  payplan months <path>                   Monthly totals and five-pay-day months
  payplan export <path>                   One CSV row per pay period

Check your input:
  payplan cadence \"every 3 months\"        Show how a billing cadence is understood
  payplan periods --help                  Accepted obligation fields and formats

Common flags:
  --pay-day <day>        Weekday paychecks arrive (default thursday)
  --biweekly             Paychecks every other week
  --periods <n>          Pay periods to lay out (default 8)
  --buffer <percent>     Safety margin on the set-aside (default 10)
  --months <n>           Months to roll up (default 3)
  --today <YYYY-MM-DD>   Plan as of another date
  --json                 Machine-readable output

Pass `-` as <path> or pipe JSON/CSV on stdin to read obligations from stdin.
";

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return handle_parse_error(&err, &raw_args),
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = %error.code, "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn handle_parse_error(err: &clap::Error, raw_args: &[String]) -> Result<ExitCode, ExitCode> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let text = if is_top_level_help_request(raw_args) {
                TOP_LEVEL_HELP.to_string()
            } else {
                err.to_string()
            };
            if write_stdout_text(&text).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::DisplayVersion => {
            if write_stdout_text(&err.to_string()).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let command_hint = command_from_args(raw_args);
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint);
            let mode = infer_requested_output_mode(raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(ExitCode::from(1))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing usage and "For more information" lines so the
/// "What to do next" block is the only guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    let first = raw_args.get(1)?;
    match first.as_str() {
        "periods" => Some("periods"),
        "months" => Some("months"),
        "export" => Some("export"),
        "cadence" => Some("cadence"),
        _ => None,
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}
