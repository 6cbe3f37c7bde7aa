use chrono::{DateTime, Duration, Utc};
use ws_core::classify::Severity;
use ws_core::model::{Alert, AlertFilter, AlertPage};

use crate::constants::{ALERT_LIMIT_DEFAULT, ALERT_LIMIT_MAX, effective_limit};
use crate::random::RandomSource;

/// Share of alerts already resolved when the catalog is drawn.
const RESOLVED_SHARE: f64 = 0.3;

struct Entry {
    severity: Severity,
    title: &'static str,
    description: &'static str,
    spaces: &'static [&'static str],
}

const CATALOG: [Entry; 4] = [
    Entry {
        severity: Severity::Critical,
        title: "HVAC system failure",
        description: "Air conditioning unit offline in zone A",
        spaces: &["ZONE_A_01", "ZONE_A_02", "ZONE_A_03"],
    },
    Entry {
        severity: Severity::High,
        title: "High energy consumption",
        description: "Energy usage 25% above normal levels",
        spaces: &["FLOOR_3", "FLOOR_4"],
    },
    Entry {
        severity: Severity::Medium,
        title: "Low space utilization",
        description: "Meeting rooms showing consistent underutilization",
        spaces: &["MEETING_ROOM_A", "MEETING_ROOM_B"],
    },
    Entry {
        severity: Severity::Low,
        title: "Maintenance reminder",
        description: "Scheduled maintenance due for elevator systems",
        spaces: &["ELEVATOR_01", "ELEVATOR_02"],
    },
];

/// Every catalog alert with a fresh resolved flag and timestamp.
pub fn build_alerts(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<Alert> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, e)| Alert {
            alert_id: format!("ALERT_{:04}", i + 1),
            severity: e.severity,
            title: e.title.to_string(),
            description: e.description.to_string(),
            affected_spaces: e.spaces.iter().map(|s| (*s).to_string()).collect(),
            timestamp: now - Duration::hours(rng.int_range(1, 47)),
            resolved: rng.chance(RESOLVED_SHARE),
        })
        .collect()
}

/// Filter alerts and compute the page metadata over the returned alerts.
pub fn alert_page(alerts: Vec<Alert>, filter: &AlertFilter) -> AlertPage {
    let limit = effective_limit(filter.limit, ALERT_LIMIT_DEFAULT, ALERT_LIMIT_MAX);
    let alerts = alerts
        .into_iter()
        .filter(|a| filter.severity.is_none_or(|s| a.severity == s))
        .filter(|a| filter.resolved.is_none_or(|r| a.resolved == r))
        .take(limit)
        .collect();
    AlertPage::new(alerts)
}
