use chrono::Weekday;

pub const DEFAULT_PAY_DAY: Weekday = Weekday::Thu;
pub const DEFAULT_PERIOD_COUNT: usize = 8;
pub const DEFAULT_BUFFER_PERCENT: f64 = 10.0;
pub const DEFAULT_MONTH_COUNT: usize = 3;

pub const MIN_PERIOD_COUNT: usize = 1;
pub const MAX_PERIOD_COUNT: usize = 104;
pub const MIN_BUFFER_PERCENT: f64 = 0.0;
pub const MAX_BUFFER_PERCENT: f64 = 100.0;
pub const MIN_MONTH_COUNT: usize = 1;
pub const MAX_MONTH_COUNT: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayCadence {
    Weekly,
    Biweekly,
}

impl PayCadence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
        }
    }

    pub const fn period_days(self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 14,
        }
    }

    pub const fn weeks_per_period(self) -> f64 {
        match self {
            Self::Weekly => 1.0,
            Self::Biweekly => 2.0,
        }
    }
}

/// How the first upcoming pay day is chosen when today is already a pay day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodayAnchorRule {
    /// Today is the next pay day; the first period ends yesterday.
    CountsAsNext,
    /// The next pay day is one period after today.
    SkipToFollowing,
}

impl TodayAnchorRule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CountsAsNext => "counts_as_next",
            Self::SkipToFollowing => "skip_to_following",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanConfig {
    pub pay_day: Weekday,
    pub pay_cadence: PayCadence,
    pub period_count: usize,
    pub buffer_percent: f64,
    pub month_count: usize,
    pub today_rule: TodayAnchorRule,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            pay_day: DEFAULT_PAY_DAY,
            pay_cadence: PayCadence::Weekly,
            period_count: DEFAULT_PERIOD_COUNT,
            buffer_percent: DEFAULT_BUFFER_PERCENT,
            month_count: DEFAULT_MONTH_COUNT,
            today_rule: TodayAnchorRule::CountsAsNext,
        }
    }
}

impl PlanConfig {
    /// Pulls every scalar into its supported range. A non-finite buffer
    /// becomes the default.
    pub fn clamped(self) -> Self {
        let buffer_percent = if self.buffer_percent.is_finite() {
            self.buffer_percent
                .clamp(MIN_BUFFER_PERCENT, MAX_BUFFER_PERCENT)
        } else {
            DEFAULT_BUFFER_PERCENT
        };

        Self {
            period_count: self.period_count.clamp(MIN_PERIOD_COUNT, MAX_PERIOD_COUNT),
            buffer_percent,
            month_count: self.month_count.clamp(MIN_MONTH_COUNT, MAX_MONTH_COUNT),
            ..self
        }
    }
}
