// Surge Pricing Oracle - Type Definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Parse Errors ───────────────────────────────────────────────────────────

/// Errors from parsing category labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCategoryError {
    #[error("unknown time block: {0:?}")]
    UnknownTimeBlock(String),
    #[error("unknown weather: {0:?}")]
    UnknownWeather(String),
}

// ─── Time Block ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeBlock {
    Morning,
    Day,
    Evening,
    Night,
}

impl Default for TimeBlock {
    fn default() -> Self { TimeBlock::Day }
}

impl TimeBlock {
    pub const ALL: [TimeBlock; 4] = [Self::Morning, Self::Day, Self::Evening, Self::Night];

    /// Additive surge contribution for this part of the day.
    pub fn adjustment(&self) -> f64 {
        match self {
            Self::Morning => 0.10,
            Self::Day => 0.00,
            Self::Evening => 0.20,
            Self::Night => 0.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Day => "DAY",
            Self::Evening => "EVENING",
            Self::Night => "NIGHT",
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBlock {
    type Err = ParseCategoryError;

    /// Labels are matched exactly (uppercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseCategoryError::UnknownTimeBlock(s.to_string()))
    }
}

// ─── Weather ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weather {
    Clear,
    Rain,
}

impl Default for Weather {
    fn default() -> Self { Weather::Clear }
}

impl Weather {
    pub const ALL: [Weather; 2] = [Self::Clear, Self::Rain];

    pub fn adjustment(&self) -> f64 {
        match self {
            Self::Clear => 0.00,
            Self::Rain => 0.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::Rain => "RAIN",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| ParseCategoryError::UnknownWeather(s.to_string()))
    }
}

// ─── Market Condition ───────────────────────────────────────────────────────

/// Outcome of the demand/driver decision chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarketCondition {
    /// Demand ≥ 4 with at most 2 drivers.
    Severe,
    /// Demand ≥ 3 with at most 3 drivers.
    Elevated,
    /// Demand ≤ 2 with at least 4 drivers (discount).
    Soft,
    Neutral,
}

impl MarketCondition {
    /// First matching rule wins. Order matters: (4, 3) is Elevated, since
    /// Severe needs drivers ≤ 2.
    pub fn from_counts(demand: i32, drivers: i32) -> Self {
        if demand >= 4 && drivers <= 2 {
            Self::Severe
        } else if demand >= 3 && drivers <= 3 {
            Self::Elevated
        } else if demand <= 2 && drivers >= 4 {
            Self::Soft
        } else {
            Self::Neutral
        }
    }

    pub fn adjustment(&self) -> f64 {
        match self {
            Self::Severe => 0.40,
            Self::Elevated => 0.25,
            Self::Soft => -0.10,
            Self::Neutral => 0.00,
        }
    }
}

// ─── Surge Class ────────────────────────────────────────────────────────────

/// Lower bound of the Moderate Surge tier (inclusive).
pub const MODERATE_THRESHOLD: f64 = 1.20;
/// Lower bound of the High Surge tier (inclusive).
pub const HIGH_THRESHOLD: f64 = 1.60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurgeClass {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Moderate Surge")]
    Moderate,
    #[serde(rename = "High Surge")]
    High,
}

impl SurgeClass {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier < MODERATE_THRESHOLD {
            Self::Normal
        } else if multiplier < HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Moderate => "Moderate Surge",
            Self::High => "High Surge",
        }
    }

    /// Rider-facing advice for this tier.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Normal => "Normal demand - book now.",
            Self::Moderate => "Moderate surge - book if you are in a hurry.",
            Self::High => "High surge - consider waiting 10 minutes.",
        }
    }
}

impl fmt::Display for SurgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
