use chrono::{NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use payplan_client::schedule::date::parse_weekday;
use payplan_client::settings::PlanOverrides;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|index| bytes[*index].is_ascii_digit());
    if !shaped {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_pay_day(value: &str) -> Result<Weekday, String> {
    parse_weekday(value).ok_or_else(|| {
        "pay day must be a weekday name such as thursday or thu".to_string()
    })
}

/// Extended help shown after `payplan periods --help`.
pub const OBLIGATION_INPUT_AFTER_HELP: &str = "\
Obligation Input:
  <path> is a JSON array of obligation objects or a CSV file with a header row.
  Use `-` as the path to read stdin explicitly, or pipe input with no path.

  JSON example:
  [
    {
      \"id\": \"netflix\",
      \"name\": \"Netflix\",
      \"amount\": 15.99,
      \"cadence\": \"monthly\",
      \"next_due\": \"2026-10-22\",
      \"status\": \"active\",
      \"category\": \"streaming\"
    }
  ]

  CSV example:
  id,name,amount,cadence,next_due,status,category
  netflix,Netflix,15.99,monthly,2026-10-22,active,streaming

Field rules:
  amount (required):    non-negative number; `$` and thousands separators are stripped
  cadence (required):   daily, weekly, monthly, quarterly or yearly
                        (run `payplan cadence <text>` to check a spelling)
  next_due (optional):  YYYY-MM-DD; rows without one count toward totals only
  status (optional):    active (default), cancelled or watchlist
  id, name, category:   optional labels

  Legacy names are accepted: price/cost for amount, frequency/billing_cycle/
  billingCycle/cycle for cadence, nextDueDate/next_billing_date/due_date for
  next_due, state for status, tag for category, title/service for name.

Environment:
  PAYPLAN_PAY_DAY, PAYPLAN_BUFFER_PERCENT, PAYPLAN_PERIODS, PAYPLAN_MONTHS
  supply defaults beneath explicit flags. PAYPLAN_LOG sets the log filter.
";

#[derive(Debug, Parser)]
#[command(
    name = "payplan",
    version,
    about = "pay-period allocation calculator",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Obligations file (JSON array or CSV); `-` reads stdin
    pub path: Option<String>,
    /// Weekday paychecks arrive on (default thursday)
    #[arg(long, value_parser = parse_pay_day)]
    pub pay_day: Option<Weekday>,
    /// Paychecks arrive every other week
    #[arg(long)]
    pub biweekly: bool,
    /// Number of pay periods to lay out (1-104)
    #[arg(long)]
    pub periods: Option<usize>,
    /// Safety margin added to the weekly set-aside, in percent (0-100)
    #[arg(long)]
    pub buffer: Option<f64>,
    /// Number of calendar months to roll up (1-24)
    #[arg(long)]
    pub months: Option<usize>,
    /// When today is a pay day, start with the following pay day instead
    #[arg(long)]
    pub skip_today_pay_day: bool,
    /// Reference date instead of the local clock (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<IsoDate>,
    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn overrides(&self) -> PlanOverrides {
        PlanOverrides {
            pay_day: self.pay_day,
            biweekly: self.biweekly,
            periods: self.periods,
            buffer_percent: self.buffer,
            months: self.months,
            skip_today_anchor: self.skip_today_pay_day,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group upcoming obligations into pay periods and compare each to the set-aside
    #[command(after_help = OBLIGATION_INPUT_AFTER_HELP)]
    Periods {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Roll the monthly total across calendar months and flag five-pay-day months
    #[command(after_help = OBLIGATION_INPUT_AFTER_HELP)]
    Months {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Write one CSV row per pay period
    #[command(after_help = OBLIGATION_INPUT_AFTER_HELP)]
    Export {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Show how a billing cadence spelling is understood
    Cadence {
        /// Free-text cadence, such as "Annual" or "every 3 months"
        text: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use clap::error::ErrorKind;

    use super::{Commands, parse_from, parse_iso_date, parse_pay_day};

    #[test]
    fn parses_plan_flags_into_overrides() {
        let parsed = parse_from([
            "payplan",
            "periods",
            "subs.json",
            "--pay-day",
            "Fri",
            "--biweekly",
            "--periods",
            "6",
            "--buffer",
            "12.5",
            "--today",
            "2026-10-19",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let Commands::Periods { plan } = cli.command else {
                panic!("expected periods command");
            };
            assert_eq!(plan.path.as_deref(), Some("subs.json"));
            assert!(plan.json);
            assert_eq!(plan.today.as_ref().map(|date| date.as_str()), Some("2026-10-19"));

            let overrides = plan.overrides();
            assert_eq!(overrides.pay_day, Some(Weekday::Fri));
            assert!(overrides.biweekly);
            assert_eq!(overrides.periods, Some(6));
            assert_eq!(overrides.buffer_percent, Some(12.5));
            assert_eq!(overrides.months, None);
        }
    }

    #[test]
    fn parses_every_subcommand() {
        let cases: [&[&str]; 5] = [
            &["payplan", "periods"],
            &["payplan", "months", "-", "--months", "6"],
            &["payplan", "export", "subs.csv", "--skip-today-pay-day"],
            &["payplan", "cadence", "every 3 months"],
            &["payplan", "cadence", "annual", "--json"],
        ];
        for case in cases {
            assert!(parse_from(case).is_ok());
        }
    }

    #[test]
    fn rejects_invalid_flag_values() {
        let bad_day = parse_from(["payplan", "periods", "--pay-day", "payday"]);
        assert!(bad_day.is_err());
        if let Err(error) = bad_day {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }

        let bad_date = parse_from(["payplan", "months", "--today", "2026-02-30"]);
        assert!(bad_date.is_err());

        let missing_text = parse_from(["payplan", "cadence"]);
        assert!(missing_text.is_err());
    }

    #[test]
    fn date_parser_distinguishes_shape_from_calendar_errors() {
        assert!(parse_iso_date("2026-10-19").is_ok());
        assert_eq!(
            parse_iso_date("10/19/2026"),
            Err("date must use YYYY-MM-DD format".to_string())
        );
        assert_eq!(
            parse_iso_date("2026-13-01"),
            Err("date must use valid calendar values".to_string())
        );
    }

    #[test]
    fn pay_day_parser_accepts_short_and_long_names() {
        assert_eq!(parse_pay_day("thursday"), Ok(Weekday::Thu));
        assert_eq!(parse_pay_day("MON"), Ok(Weekday::Mon));
        assert!(parse_pay_day("someday").is_err());
    }
}
