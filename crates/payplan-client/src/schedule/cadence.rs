use serde::Serialize;

/// Weeks used to spread an annualized total across paychecks.
///
/// A flat 52-week year drops roughly one day per year (two in leap years);
/// the smoothed figure absorbs that drift.
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Flat month length for daily obligations, not calendar-accurate.
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Cadence {
    pub const ALL: [Cadence; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Multiplier that converts one charge into its monthly equivalent.
    pub fn monthly_factor(self) -> f64 {
        match self {
            Self::Daily => DAYS_PER_MONTH,
            Self::Weekly => WEEKS_PER_YEAR / MONTHS_PER_YEAR,
            Self::Monthly => 1.0,
            Self::Quarterly => 1.0 / 3.0,
            Self::Yearly => 1.0 / MONTHS_PER_YEAR,
        }
    }

    pub fn monthly_equivalent(self, amount: f64) -> f64 {
        match self {
            Self::Daily => amount * DAYS_PER_MONTH,
            Self::Weekly => amount * WEEKS_PER_YEAR / MONTHS_PER_YEAR,
            Self::Monthly => amount,
            Self::Quarterly => amount / 3.0,
            Self::Yearly => amount / MONTHS_PER_YEAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceMatch {
    Recognized(Cadence),
    Unrecognized,
}

impl CadenceMatch {
    pub fn cadence(self) -> Option<Cadence> {
        match self {
            Self::Recognized(cadence) => Some(cadence),
            Self::Unrecognized => None,
        }
    }
}

/// Maps a free-text billing cadence onto the fixed enumeration.
///
/// Matching ignores case and treats `-`, `_` and runs of whitespace as a
/// single space. Spellings outside the table are `Unrecognized`; there is no
/// fallback cadence.
pub fn normalize_cadence(raw: &str) -> CadenceMatch {
    let key = cadence_key(raw);
    let cadence = match key.as_str() {
        "daily" | "day" | "every day" | "per day" => Cadence::Daily,
        "weekly" | "week" | "every week" | "per week" => Cadence::Weekly,
        "monthly" | "month" | "every month" | "per month" | "mo" => Cadence::Monthly,
        "quarterly" | "quarter" | "every quarter" | "every 3 months" | "every three months" => {
            Cadence::Quarterly
        }
        "yearly" | "year" | "annual" | "annually" | "every year" | "per year"
        | "every 12 months" | "yr" => Cadence::Yearly,
        _ => return CadenceMatch::Unrecognized,
    };
    CadenceMatch::Recognized(cadence)
}

fn cadence_key(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
