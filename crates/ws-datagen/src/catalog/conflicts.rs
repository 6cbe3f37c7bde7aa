//! Rule-based conflict detection over a space roster.

use chrono::{DateTime, Utc};
use ws_core::classify::{EnvironmentLimits, Severity};
use ws_core::model::{ConflictIssue, Space, SpaceConflict};

fn issue(kind: &str, severity: Severity, message: String, recommendation: &str) -> ConflictIssue {
    ConflictIssue {
        kind: kind.to_string(),
        severity,
        message,
        recommendation: recommendation.to_string(),
    }
}

fn space_issues(space: &Space, limits: &EnvironmentLimits) -> Vec<ConflictIssue> {
    let mut issues = Vec::new();
    let env = &space.environment;

    if space.utilization > limits.occupancy_critical {
        issues.push(issue(
            "critical_overcrowding",
            Severity::High,
            format!("Critical overcrowding: {:.1}% of capacity", space.utilization * 100.0),
            "Redirect bookings to alternate spaces immediately",
        ));
    } else if space.utilization > limits.occupancy_warning {
        issues.push(issue(
            "overcrowding_warning",
            Severity::Medium,
            format!("High occupancy: {:.1}% of capacity", space.utilization * 100.0),
            "Prepare alternate spaces",
        ));
    }

    if !limits.temperature_ok(env.temperature) {
        issues.push(issue(
            "temperature_issue",
            Severity::Medium,
            format!("Temperature out of comfort range: {:.1}°C", env.temperature),
            "Adjust HVAC setpoints",
        ));
    }
    if !limits.humidity_ok(env.humidity) {
        issues.push(issue(
            "humidity_issue",
            Severity::Low,
            format!("Humidity out of range: {:.0}%", env.humidity),
            "Adjust the humidification system",
        ));
    }
    if env.co2 > limits.co2_max {
        issues.push(issue(
            "air_quality_issue",
            Severity::High,
            format!("High CO2 level: {:.0} ppm", env.co2),
            "Increase ventilation immediately",
        ));
    }
    if env.noise > limits.noise_max {
        issues.push(issue(
            "noise_issue",
            Severity::Medium,
            format!("High noise level: {:.0} dB", env.noise),
            "Apply noise reduction measures",
        ));
    }

    issues
}

/// Spaces with at least one issue, highest total severity first. Spaces of
/// equal severity keep roster order.
pub fn detect_conflicts(
    spaces: &[Space],
    limits: &EnvironmentLimits,
    now: DateTime<Utc>,
) -> Vec<SpaceConflict> {
    let mut conflicts: Vec<SpaceConflict> = spaces
        .iter()
        .filter_map(|space| {
            let issues = space_issues(space, limits);
            if issues.is_empty() {
                return None;
            }
            Some(SpaceConflict {
                space_id: space.id,
                space_name: space.name.clone(),
                total_severity: issues.iter().map(|i| i.severity.weight()).sum(),
                conflicts: issues,
                timestamp: now,
                resolved: false,
                resolution: None,
            })
        })
        .collect();
    conflicts.sort_by(|a, b| b.total_severity.cmp(&a.total_severity));
    conflicts
}
