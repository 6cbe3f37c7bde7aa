use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which time-of-day curve a series follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesDomain {
    Occupancy,
    Environmental,
    Energy,
}

impl SeriesDomain {
    pub const ALL: [SeriesDomain; 3] = [Self::Occupancy, Self::Environmental, Self::Energy];

    /// Subscription key under which the poller publishes this domain.
    pub fn topic(&self) -> &'static str {
        match self {
            Self::Occupancy => "occupancy",
            Self::Environmental => "environmental",
            Self::Energy => "energy",
        }
    }
}

impl fmt::Display for SeriesDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.topic())
    }
}

/// One generated hour: a baseline-plus-jitter value, a domain-specific
/// secondary value and a synthetic forecast close to the actual value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    /// `"HH:00"` label of the hour.
    pub hour: String,
    pub hour_of_day: u32,
    pub primary: f64,
    pub secondary: f64,
    pub predicted: f64,
}

/// `"HH:00"` label for an hour of day.
pub fn hour_label(hour_of_day: u32) -> String {
    format!("{:02}:00", hour_of_day % 24)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyPoint {
    pub hour: String,
    /// Percentage of the office in use, `[5, 100]`.
    pub occupancy: f64,
    /// Office headcount capacity.
    pub capacity: u32,
    /// `occupancy / 100`, the ratio the status classification works on.
    pub utilization: f64,
    pub predicted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPoint {
    pub hour: String,
    /// °C, unclamped.
    pub temperature: f64,
    /// %, `[0, 100]`.
    pub humidity: f64,
    /// ppm.
    pub co2: f64,
    /// dB.
    pub noise: f64,
    /// `[0, 100]`.
    pub comfort: f64,
    pub predicted_temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    pub hour: String,
    /// kWh.
    pub consumption: f64,
    /// Tariff-weighted cost of the hour.
    pub cost: f64,
    /// `[0, 100]`.
    pub efficiency: f64,
    pub predicted: f64,
}

/// Reporting window requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(format!(
                "unknown time range {other:?} (expected today/week/month/quarter/year)"
            )),
        }
    }
}
