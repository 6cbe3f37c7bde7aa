//! Energy series and the energy dashboard built around it.

use chrono::{DateTime, Duration, Timelike, Utc};
use ws_core::model::{
    CostSavingsPotential, EnergyAction, EnergyAnalysis, EnergyDashboard, EnergyForecast,
    EnergyPoint, HourlyAverage, SeriesDomain,
};

use crate::constants::{ANNUAL_ENERGY_COST, PEAK_WINDOW, SERIES_HOURS};
use crate::random::RandomSource;
use crate::series::{SeriesProfile, baseline, generate_series, window_hours};

/// Consumption at which the efficiency score bottoms out near 70.
const PEAK_REFERENCE_KWH: f64 = 220.0;
/// Days of history averaged into the hourly pattern.
const PATTERN_DAYS: usize = 7;
const PATTERN_HOURS: usize = 5;

/// Efficiency score of an hour, falling as consumption approaches the
/// daily peak.
fn efficiency(consumption: f64, rng: &mut dyn RandomSource) -> f64 {
    (95.0 - 25.0 * consumption / PEAK_REFERENCE_KWH + rng.jitter(3.0)).clamp(0.0, 100.0)
}

/// 24 hourly energy points ending at `now`.
pub fn build_energy_points(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<EnergyPoint> {
    generate_series(SeriesDomain::Energy, now, SERIES_HOURS, rng)
        .into_iter()
        .map(|r| EnergyPoint {
            efficiency: efficiency(r.primary, rng),
            hour: r.hour,
            consumption: r.primary,
            cost: r.secondary,
            predicted: r.predicted,
        })
        .collect()
}

/// Forecast for the `hours` hours following `now`.
pub fn forecast_energy(
    now: DateTime<Utc>,
    hours: usize,
    rng: &mut dyn RandomSource,
) -> Vec<EnergyForecast> {
    let profile = SeriesProfile::of(SeriesDomain::Energy);
    let (lo, hi) = profile.clamp.unwrap_or((0.0, f64::MAX));
    (1..=hours as i64)
        .map(|ahead| {
            let timestamp = now + Duration::hours(ahead);
            let hour_of_day = timestamp.hour();
            let predicted = baseline(SeriesDomain::Energy, hour_of_day) + rng.jitter(profile.jitter);
            EnergyForecast {
                timestamp,
                hour_of_day,
                predicted_consumption: predicted.clamp(lo, hi),
                confidence: (0.85 + rng.jitter(0.05)).clamp(0.0, 1.0),
            }
        })
        .collect()
}

/// Average consumption per hour of day over a simulated week.
fn hourly_pattern(rng: &mut dyn RandomSource) -> Vec<HourlyAverage> {
    let profile = SeriesProfile::of(SeriesDomain::Energy);
    (0..24)
        .map(|hour| {
            let sum: f64 = (0..PATTERN_DAYS)
                .map(|_| baseline(SeriesDomain::Energy, hour) + rng.jitter(profile.jitter))
                .sum();
            HourlyAverage {
                hour_of_day: hour,
                average_consumption: sum / PATTERN_DAYS as f64,
            }
        })
        .collect()
}

/// `hours` holds the hour of day of each entry in `hourly`.
fn analyse(pattern: &[HourlyAverage], hourly: &[EnergyPoint], hours: &[u32]) -> EnergyAnalysis {
    let mut ranked: Vec<&HourlyAverage> = pattern.iter().collect();
    ranked.sort_by(|a, b| b.average_consumption.total_cmp(&a.average_consumption));
    let peak_hours = ranked.iter().take(PATTERN_HOURS).map(|h| h.hour_of_day).collect();
    let off_peak_hours = ranked
        .iter()
        .rev()
        .take(PATTERN_HOURS)
        .map(|h| h.hour_of_day)
        .collect();

    let total: f64 = hourly.iter().map(|p| p.consumption).sum();
    let cost: f64 = hourly.iter().map(|p| p.cost).sum();
    let in_peak: f64 = hourly
        .iter()
        .zip(hours)
        .filter(|(_, hour)| (PEAK_WINDOW.0..PEAK_WINDOW.1).contains(*hour))
        .map(|(p, _)| p.consumption)
        .sum();

    EnergyAnalysis {
        peak_hours,
        off_peak_hours,
        peak_share: if total > 0.0 { in_peak / total } else { 0.0 },
        avg_cost_per_kwh: if total > 0.0 { cost / total } else { 0.0 },
    }
}

fn action_plan(analysis: &EnergyAnalysis) -> Vec<EnergyAction> {
    let peak = analysis
        .peak_hours
        .iter()
        .map(|h| format!("{h:02}:00"))
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        EnergyAction {
            horizon: "immediate".into(),
            title: "Load shifting".into(),
            description: format!("Move non-critical loads away from the peak hours {peak}"),
            expected_savings: "15-25% of peak demand charges".into(),
        },
        EnergyAction {
            horizon: "medium_term".into(),
            title: "Occupancy-based control".into(),
            description: "Drive lighting and HVAC from occupancy sensors".into(),
            expected_savings: "20-30% of lighting and HVAC cost".into(),
        },
        EnergyAction {
            horizon: "medium_term".into(),
            title: "Energy management system".into(),
            description: "Real-time monitoring with automated demand response".into(),
            expected_savings: "25-35% overall".into(),
        },
        EnergyAction {
            horizon: "long_term".into(),
            title: "Rooftop solar with storage".into(),
            description: "Offset daytime grid draw with on-site generation".into(),
            expected_savings: "40-60% of the electricity bill".into(),
        },
    ]
}

/// Full energy dashboard: the last 24 hours, the next 24 hours, the weekly
/// hourly pattern with its peak analysis and a savings plan.
pub fn build_energy_dashboard(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> EnergyDashboard {
    let hourly = build_energy_points(now, rng);
    let predictions = forecast_energy(now, SERIES_HOURS, rng);
    let hourly_pattern = hourly_pattern(rng);
    let analysis = analyse(&hourly_pattern, &hourly, &window_hours(now, hourly.len()));
    let actions = action_plan(&analysis);

    let daily_total: f64 = hourly.iter().map(|p| p.consumption).sum();
    let cost_today: f64 = hourly.iter().map(|p| p.cost).sum();

    EnergyDashboard {
        current_consumption: hourly.last().map(|p| p.consumption).unwrap_or(0.0),
        daily_average: if hourly.is_empty() {
            0.0
        } else {
            daily_total / hourly.len() as f64
        },
        daily_total,
        cost_today,
        hourly,
        predictions,
        hourly_pattern,
        analysis,
        actions,
        cost_savings_potential: CostSavingsPotential {
            immediate: ANNUAL_ENERGY_COST * 0.15,
            medium_term: ANNUAL_ENERGY_COST * 0.30,
            long_term: ANNUAL_ENERGY_COST * 0.50,
        },
    }
}
