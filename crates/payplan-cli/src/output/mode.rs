use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
    Csv,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Export { plan } => {
            if plan.json {
                OutputMode::Json
            } else {
                OutputMode::Csv
            }
        }
        Commands::Periods { plan } | Commands::Months { plan } => json_or_text(plan.json),
        Commands::Cadence { json, .. } => json_or_text(*json),
    }
}

fn json_or_text(json: bool) -> OutputMode {
    if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}
