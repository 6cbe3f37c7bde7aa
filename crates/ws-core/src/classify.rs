//! Classification rules shared by every snapshot builder and catalog.
//!
//! Views must never re-derive these cutoffs locally: a utilization, a
//! confidence or an environmental reading always maps to the same label no
//! matter which dataset it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpaceStatus
// ---------------------------------------------------------------------------

/// Utilization above this ratio is overutilized.
pub const OVERUTILIZED_ABOVE: f64 = 0.8;
/// Utilization above this ratio (and not over the upper cutoff) is optimal.
pub const OPTIMAL_ABOVE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceStatus {
    Underutilized,
    Optimal,
    Overutilized,
}

impl SpaceStatus {
    /// Classify a `current / capacity` ratio.
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization > OVERUTILIZED_ABOVE {
            Self::Overutilized
        } else if utilization > OPTIMAL_ABOVE {
            Self::Optimal
        } else {
            Self::Underutilized
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underutilized => "underutilized",
            Self::Optimal => "optimal",
            Self::Overutilized => "overutilized",
        }
    }
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpaceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "underutilized" => Ok(Self::Underutilized),
            "optimal" => Ok(Self::Optimal),
            "overutilized" => Ok(Self::Overutilized),
            other => Err(format!("unknown space status {other:?}")),
        }
    }
}

/// `current / capacity`, with an empty space reading as zero.
pub fn utilization(current: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        0.0
    } else {
        f64::from(current) / f64::from(capacity)
    }
}

// ---------------------------------------------------------------------------
// ConfidenceTier
// ---------------------------------------------------------------------------

pub const GOOD_CONFIDENCE: f64 = 0.8;
pub const FAIR_CONFIDENCE: f64 = 0.6;

/// Qualitative band of a fixture's `confidence`, rendered by views as a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Poor,
    Fair,
    Good,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= GOOD_CONFIDENCE {
            Self::Good
        } else if confidence >= FAIR_CONFIDENCE {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Colour name used by dashboard badges.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Fair => "yellow",
            Self::Poor => "red",
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Contribution of one issue to a space's total conflict severity.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown severity {other:?}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Environmental comfort
// ---------------------------------------------------------------------------

/// Comfort and crowding thresholds used by conflict detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentLimits {
    pub occupancy_warning: f64,
    pub occupancy_critical: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
    pub co2_max: f64,
    pub noise_max: f64,
}

impl EnvironmentLimits {
    pub const STANDARD: Self = Self {
        occupancy_warning: 0.85,
        occupancy_critical: 0.95,
        temperature_min: 20.0,
        temperature_max: 26.0,
        humidity_min: 30.0,
        humidity_max: 70.0,
        co2_max: 1000.0,
        noise_max: 70.0,
    };

    pub fn temperature_ok(&self, celsius: f64) -> bool {
        (self.temperature_min..=self.temperature_max).contains(&celsius)
    }

    pub fn humidity_ok(&self, percent: f64) -> bool {
        (self.humidity_min..=self.humidity_max).contains(&percent)
    }
}

impl Default for EnvironmentLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Environmental comfort score in `[0, 100]`.
///
/// Starts at 100 and subtracts a penalty for each reading outside its comfort
/// band: temperature outside 20–26 °C, humidity outside 30–70 %, CO₂ above
/// 1000 ppm and noise above 50 dB.
pub fn comfort_score(temperature: f64, humidity: f64, co2: f64, noise: f64) -> f64 {
    let mut score = 100.0;

    if !(20.0..=26.0).contains(&temperature) {
        score -= (temperature - 23.0).abs() * 5.0;
    }
    if humidity < 30.0 {
        score -= (30.0 - humidity) * 0.5;
    } else if humidity > 70.0 {
        score -= (humidity - 70.0) * 0.3;
    }
    if co2 > 1000.0 {
        score -= (co2 - 1000.0) * 0.02;
    }
    if noise > 50.0 {
        score -= (noise - 50.0) * 0.5;
    }

    f64::clamp(score, 0.0, 100.0)
}
