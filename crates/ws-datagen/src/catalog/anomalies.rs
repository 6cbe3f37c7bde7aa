use chrono::{DateTime, Duration, Utc};
use ws_core::classify::{ConfidenceTier, Severity};
use ws_core::model::Anomaly;

use super::{jitter_confidence, jitter_savings};
use crate::random::RandomSource;

struct Entry {
    metric: &'static str,
    description: &'static str,
    severity: Severity,
    hours_ago: i64,
    confidence: f64,
    savings: f64,
}

const CATALOG: [Entry; 5] = [
    Entry {
        metric: "energy",
        description: "Consumption 35% above baseline at 02:00",
        severity: Severity::High,
        hours_ago: 3,
        confidence: 0.91,
        savings: 3_200.0,
    },
    Entry {
        metric: "occupancy",
        description: "Meeting Room M-04 booked but empty for three consecutive slots",
        severity: Severity::Medium,
        hours_ago: 5,
        confidence: 0.78,
        savings: 900.0,
    },
    Entry {
        metric: "environmental",
        description: "CO2 above 1000 ppm in the collaboration hub",
        severity: Severity::High,
        hours_ago: 1,
        confidence: 0.84,
        savings: 0.0,
    },
    Entry {
        metric: "hvac",
        description: "HVAC running in an unoccupied zone after hours",
        severity: Severity::Medium,
        hours_ago: 9,
        confidence: 0.69,
        savings: 1_500.0,
    },
    Entry {
        metric: "lighting",
        description: "Lighting on across floor 4 with zero occupancy",
        severity: Severity::Low,
        hours_ago: 12,
        confidence: 0.55,
        savings: 600.0,
    },
];

pub fn build_anomalies(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<Anomaly> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let confidence = jitter_confidence(e.confidence, rng);
            Anomaly {
                id: format!("ANOM_{:04}", i + 1),
                metric: e.metric.to_string(),
                description: e.description.to_string(),
                severity: e.severity,
                detected_at: now - Duration::hours(e.hours_ago),
                confidence,
                confidence_tier: ConfidenceTier::from_confidence(confidence),
                potential_savings: jitter_savings(e.savings, rng),
            }
        })
        .collect()
}
