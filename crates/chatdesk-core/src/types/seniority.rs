//! Agent seniority tiers and their concurrency multipliers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Seniority tier of an agent.
///
/// The declaration order is also the assignment search order: new
/// sessions go to the cheapest tier with free capacity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    /// Junior agent.
    Junior,
    /// Mid-level agent.
    Mid,
    /// Senior agent.
    Senior,
    /// Team lead. Splits time with management duties, so carries a lower
    /// multiplier than a senior.
    TeamLead,
}

impl Seniority {
    /// All tiers in assignment search order.
    pub const ALL: [Seniority; 4] = [Self::Junior, Self::Mid, Self::Senior, Self::TeamLead];

    /// Concurrency multiplier in tenths (Junior 0.4, Mid 0.6, Senior 0.8,
    /// TeamLead 0.5). Kept integral so `floor(base * multiplier)` is exact.
    pub fn multiplier_tenths(&self) -> u32 {
        match self {
            Self::Junior => 4,
            Self::Mid => 6,
            Self::Senior => 8,
            Self::TeamLead => 5,
        }
    }

    /// Concurrency multiplier as a fraction.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.multiplier_tenths()) / 10.0
    }

    /// `floor(base * multiplier)`. Widened to `u64` so no `u32` base overflows.
    pub fn max_concurrency(&self, base: u32) -> usize {
        let cap = u64::from(base) * u64::from(self.multiplier_tenths()) / 10;
        usize::try_from(cap).unwrap_or(usize::MAX)
    }

    /// Position of the tier in [`Seniority::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Junior => 0,
            Self::Mid => 1,
            Self::Senior => 2,
            Self::TeamLead => 3,
        }
    }

    /// Return the tier as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::TeamLead => "team_lead",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "junior" => Ok(Self::Junior),
            "mid" | "mid_level" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            "team_lead" | "teamlead" => Ok(Self::TeamLead),
            other => Err(AppError::configuration(format!(
                "unknown seniority '{other}'"
            ))),
        }
    }
}
