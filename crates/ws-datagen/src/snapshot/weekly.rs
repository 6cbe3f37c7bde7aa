use ws_core::model::{WEEKDAYS, WeeklyTrendPoint};

use crate::random::RandomSource;

/// Mon..Sun trend. The weekend utilization range sits entirely below the
/// weekday range.
pub fn build_weekly_trend(rng: &mut dyn RandomSource) -> Vec<WeeklyTrendPoint> {
    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let weekend = i >= 5;
            let (utilization, efficiency) = if weekend {
                (rng.uniform(15.0, 40.0), rng.uniform(55.0, 80.0))
            } else {
                (rng.uniform(60.0, 90.0), rng.uniform(70.0, 95.0))
            };
            WeeklyTrendPoint {
                day: (*day).to_string(),
                utilization,
                efficiency,
                satisfaction: rng.uniform(70.0, 100.0),
            }
        })
        .collect()
}
