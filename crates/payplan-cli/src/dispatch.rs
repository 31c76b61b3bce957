use chrono::{Local, NaiveDate};
use payplan_client::commands;
use payplan_client::commands::common::PlanRunOptions;
use payplan_client::schedule::date::parse_reference_date;
use payplan_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, PlanArgs};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Periods { plan } => {
            commands::periods::run_with_options(plan_options(plan, "periods")?)
        }
        Commands::Months { plan } => {
            commands::months::run_with_options(plan_options(plan, "months")?)
        }
        Commands::Export { plan } => {
            commands::export::run_with_options(plan_options(plan, "export")?)
        }
        Commands::Cadence { text, .. } => commands::cadence::run(text),
    }
}

fn plan_options(plan: &PlanArgs, command: &str) -> ClientResult<PlanRunOptions> {
    let today = reference_date(plan, command)?;
    tracing::debug!(command, today = %today, "dispatching plan command");
    Ok(PlanRunOptions::new(plan.path.as_deref(), plan.overrides(), today))
}

fn reference_date(plan: &PlanArgs, command: &str) -> ClientResult<NaiveDate> {
    match &plan.today {
        Some(value) => parse_reference_date(value.as_str(), command),
        None => Ok(Local::now().date_naive()),
    }
}
