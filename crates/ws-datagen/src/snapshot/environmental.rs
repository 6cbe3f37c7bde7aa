use chrono::{DateTime, Utc};
use ws_core::classify::comfort_score;
use ws_core::model::{EnvironmentalPoint, SeriesDomain};

use crate::constants::SERIES_HOURS;
use crate::random::RandomSource;
use crate::series::{baseline, generate_series};

/// 24 hourly environmental points ending at `now`.
///
/// CO₂ and noise follow the occupancy baseline of the same hour so that a
/// busy afternoon reads as stuffier and louder than the night.
pub fn build_environmental(
    now: DateTime<Utc>,
    rng: &mut dyn RandomSource,
) -> Vec<EnvironmentalPoint> {
    generate_series(SeriesDomain::Environmental, now, SERIES_HOURS, rng)
        .into_iter()
        .map(|r| {
            let people = baseline(SeriesDomain::Occupancy, r.hour_of_day);
            let co2 = (400.0 + 6.0 * people + rng.jitter(25.0)).max(350.0);
            let noise = (30.0 + 0.35 * people + rng.jitter(3.0)).max(0.0);
            EnvironmentalPoint {
                comfort: comfort_score(r.primary, r.secondary, co2, noise),
                hour: r.hour,
                temperature: r.primary,
                humidity: r.secondary,
                co2,
                noise,
                predicted_temperature: r.predicted,
            }
        })
        .collect()
}
