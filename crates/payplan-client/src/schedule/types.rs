use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule::cadence::Cadence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObligationStatus {
    Active,
    Cancelled,
    Watchlist,
}

impl ObligationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Watchlist => "watchlist",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "watchlist" | "watch list" | "watching" => Some(Self::Watchlist),
            _ => None,
        }
    }
}

/// A recurring subscription or bill.
///
/// `next_due` is `None` when the source row had no due date or one that did
/// not parse; such obligations still count toward monthly totals but are
/// never placed in a period.
#[derive(Debug, Clone, PartialEq)]
pub struct Obligation {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub cadence: Cadence,
    pub next_due: Option<NaiveDate>,
    pub status: ObligationStatus,
    pub category: Option<String>,
}

impl Obligation {
    pub fn is_active(&self) -> bool {
        self.status == ObligationStatus::Active
    }

    pub fn monthly_equivalent(&self) -> f64 {
        self.cadence.monthly_equivalent(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::ObligationStatus;

    #[test]
    fn status_parsing_accepts_both_spellings_of_cancelled() {
        assert_eq!(
            ObligationStatus::parse("Canceled"),
            Some(ObligationStatus::Cancelled)
        );
        assert_eq!(
            ObligationStatus::parse("cancelled"),
            Some(ObligationStatus::Cancelled)
        );
        assert_eq!(
            ObligationStatus::parse(" WATCHLIST "),
            Some(ObligationStatus::Watchlist)
        );
        assert_eq!(ObligationStatus::parse("paused"), None);
    }
}
