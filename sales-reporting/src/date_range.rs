//! Reporting windows.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date window for scoping reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// Whether `date` falls inside the window, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Preset reporting windows offered by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl RangePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangePreset::OneDay => "1d",
            RangePreset::OneWeek => "1w",
            RangePreset::OneMonth => "1m",
            RangePreset::ThreeMonths => "3m",
            RangePreset::SixMonths => "6m",
            RangePreset::OneYear => "1y",
        }
    }

    /// Unrecognized codes fall back to the one-month default window.
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "1d" => RangePreset::OneDay,
            "1w" => RangePreset::OneWeek,
            "3m" => RangePreset::ThreeMonths,
            "6m" => RangePreset::SixMonths,
            "1y" => RangePreset::OneYear,
            _ => RangePreset::OneMonth,
        }
    }

    /// Window ending at `today`. Month and year presets use calendar
    /// arithmetic, so subtracting from a long month clamps to the end of
    /// a short one (Mar 31 minus one month starts Feb 28).
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let from = match self {
            RangePreset::OneDay => today,
            RangePreset::OneWeek => today - Days::new(7),
            RangePreset::OneMonth => today - Months::new(1),
            RangePreset::ThreeMonths => today - Months::new(3),
            RangePreset::SixMonths => today - Months::new(6),
            RangePreset::OneYear => today - Months::new(12),
        };
        DateRange { from, to: today }
    }
}
