use chrono::{DateTime, Utc};
use ws_core::model::{OccupancyPoint, SeriesDomain};

use crate::constants::{OFFICE_CAPACITY, SERIES_HOURS};
use crate::random::RandomSource;
use crate::series::generate_series;

/// 24 hourly occupancy points ending at `now`.
pub fn build_occupancy(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<OccupancyPoint> {
    generate_series(SeriesDomain::Occupancy, now, SERIES_HOURS, rng)
        .into_iter()
        .map(|r| OccupancyPoint {
            hour: r.hour,
            occupancy: r.primary,
            capacity: OFFICE_CAPACITY,
            utilization: r.primary / 100.0,
            predicted: r.predicted,
        })
        .collect()
}
