use chrono::{DateTime, Utc};
use ws_core::model::{DashboardSummary, QuickStats, SummaryCounters, TrendDirection, Trends};

use super::round1;
use crate::constants::{EMPLOYEE_COUNT, MEETING_ROOM_COUNT, OFFICE_CAPACITY, TOTAL_SPACES};
use crate::random::RandomSource;

const DIRECTIONS: [TrendDirection; 3] = [
    TrendDirection::Increasing,
    TrendDirection::Decreasing,
    TrendDirection::Stable,
];

fn direction(rng: &mut dyn RandomSource) -> TrendDirection {
    DIRECTIONS[rng.index(DIRECTIONS.len())]
}

/// Headline counters, trend arrows and quick stats for the landing page.
pub fn build_summary(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> DashboardSummary {
    DashboardSummary {
        summary: SummaryCounters {
            total_spaces: TOTAL_SPACES,
            total_employees: EMPLOYEE_COUNT,
            active_alerts: rng.int_range(5, 15) as u32,
            avg_occupancy: round1(rng.uniform(70.0, 85.0)),
            energy_efficiency: round1(rng.uniform(80.0, 95.0)),
            cost_per_sqft: round1(rng.uniform(40.0, 60.0)),
            sustainability_score: round1(rng.uniform(75.0, 90.0)),
        },
        trends: Trends {
            occupancy: direction(rng),
            energy: direction(rng),
            cost: direction(rng),
            efficiency: direction(rng),
        },
        quick_stats: QuickStats {
            employees_present: rng.int_range(100, i64::from(OFFICE_CAPACITY)) as u32,
            meeting_rooms_booked: rng.int_range(8, i64::from(MEETING_ROOM_COUNT)) as u32,
            energy_consumption: round1(rng.uniform(80.0, 120.0)),
            cost_savings_today: rng.int_range(5_000, 15_000) as f64,
        },
        last_updated: now,
    }
}
