use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::EnergyPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCounters {
    pub total_spaces: u32,
    pub total_employees: u32,
    pub active_alerts: u32,
    pub avg_occupancy: f64,
    pub energy_efficiency: f64,
    pub cost_per_sqft: f64,
    pub sustainability_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub occupancy: TrendDirection,
    pub energy: TrendDirection,
    pub cost: TrendDirection,
    pub efficiency: TrendDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub employees_present: u32,
    pub meeting_rooms_booked: u32,
    pub energy_consumption: f64,
    pub cost_savings_today: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub summary: SummaryCounters,
    pub trends: Trends,
    pub quick_stats: QuickStats,
    pub last_updated: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Energy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyForecast {
    pub timestamp: DateTime<Utc>,
    pub hour_of_day: u32,
    pub predicted_consumption: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyAverage {
    pub hour_of_day: u32,
    pub average_consumption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    /// Five hours with the highest average consumption, highest first.
    pub peak_hours: Vec<u32>,
    /// Five hours with the lowest average consumption, lowest first.
    pub off_peak_hours: Vec<u32>,
    /// Share of consumption falling in the tariff peak window.
    pub peak_share: f64,
    pub avg_cost_per_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAction {
    pub horizon: String,
    pub title: String,
    pub description: String,
    pub expected_savings: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSavingsPotential {
    pub immediate: f64,
    pub medium_term: f64,
    pub long_term: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDashboard {
    pub current_consumption: f64,
    pub daily_average: f64,
    pub daily_total: f64,
    pub cost_today: f64,
    pub hourly: Vec<EnergyPoint>,
    pub predictions: Vec<EnergyForecast>,
    pub hourly_pattern: Vec<HourlyAverage>,
    pub analysis: EnergyAnalysis,
    pub actions: Vec<EnergyAction>,
    pub cost_savings_potential: CostSavingsPotential,
}
