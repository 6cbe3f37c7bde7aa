//! "AI" fixture records: recommendations, anomalies, optimisations, alerts and
//! conflicts. None of them come from a model; they are catalog entries with
//! per-call jitter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{ConfidenceTier, Severity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub space_type: String,
    pub action: String,
    pub reason: String,
    pub expected_impact: String,
    pub confidence: f64,
    pub confidence_tier: ConfidenceTier,
    pub potential_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub metric: String,
    pub description: String,
    pub severity: Severity,
    pub detected_at: DateTime<Utc>,
    pub confidence: f64,
    pub confidence_tier: ConfidenceTier,
    pub potential_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub implementation_effort: String,
    pub priority: u8,
    pub confidence: f64,
    pub confidence_tier: ConfidenceTier,
    pub potential_savings: f64,
}

/// Seven-day utilization forecast point of the space optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationForecast {
    pub day: String,
    pub predicted_utilization: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceOptimizerReport {
    pub model_name: String,
    pub accuracy: f64,
    pub recommendations: Vec<Recommendation>,
    pub anomalies: Vec<Anomaly>,
    pub forecast: Vec<UtilizationForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPredictorReport {
    pub model_name: String,
    pub accuracy: f64,
    pub forecast: Vec<super::dashboard::EnergyForecast>,
    pub optimizations: Vec<Optimization>,
    pub total_potential_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPredictions {
    pub space_optimizer: SpaceOptimizerReport,
    pub energy_predictor: EnergyPredictorReport,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub affected_spaces: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertFilter {
    pub severity: Option<Severity>,
    pub resolved: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMetadata {
    pub total_alerts: usize,
    pub unresolved_count: usize,
    pub critical_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPage {
    pub alerts: Vec<Alert>,
    pub metadata: AlertMetadata,
}

impl AlertPage {
    pub fn new(alerts: Vec<Alert>) -> Self {
        let metadata = AlertMetadata {
            total_alerts: alerts.len(),
            unresolved_count: alerts.iter().filter(|a| !a.resolved).count(),
            critical_count: alerts
                .iter()
                .filter(|a| a.severity == Severity::Critical)
                .count(),
        };
        Self { alerts, metadata }
    }
}

// ---------------------------------------------------------------------------
// Conflicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictIssue {
    /// Machine-readable kind, e.g. `critical_overcrowding`.
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceConflict {
    pub space_id: u32,
    pub space_name: String,
    pub conflicts: Vec<ConflictIssue>,
    /// Sum of the issue severity weights.
    pub total_severity: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl SpaceConflict {
    /// Note applied when a resolution is requested without one.
    pub const DEFAULT_RESOLUTION: &'static str = "Manually resolved";

    pub fn resolve(&mut self, note: impl Into<String>) {
        self.resolved = true;
        self.resolution = Some(note.into());
    }
}


#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn resolving_records_the_note() {
        let mut conflict = SpaceConflict {
            space_id: 4,
            space_name: "Desk Pod D-04".into(),
            conflicts: Vec::new(),
            total_severity: 0,
            timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            resolved: false,
            resolution: None,
        };
        conflict.resolve(SpaceConflict::DEFAULT_RESOLUTION);
        assert!(conflict.resolved);
        assert_eq!(conflict.resolution.as_deref(), Some("Manually resolved"));
    }

    #[test]
    fn resolution_fields_default_when_absent() {
        let json = r#"{"space_id":1,"space_name":"x","conflicts":[],"total_severity":0,
            "timestamp":"2026-03-02T09:00:00Z"}"#;
        let conflict: SpaceConflict = serde_json::from_str(json).unwrap();
        assert!(!conflict.resolved);
        assert_eq!(conflict.resolution, None);
    }
}
