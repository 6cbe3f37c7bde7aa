//! Hourly time-series generator.
//!
//! Each domain has a deterministic diurnal baseline. A reading is the
//! baseline plus bounded uniform noise, clamped to the domain range; the
//! "predicted" value is the reading plus half that noise again.

use std::f64::consts::PI;

use chrono::{DateTime, Timelike, Utc};
use ws_core::model::{HourlyReading, SeriesDomain, hour_label};

use crate::constants::{OFF_PEAK_TARIFF, OFFICE_CAPACITY, PEAK_TARIFF, PEAK_WINDOW};
use crate::random::RandomSource;

/// Noise amplitude and clamp range of a domain's primary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesProfile {
    pub jitter: f64,
    pub clamp: Option<(f64, f64)>,
}

impl SeriesProfile {
    pub fn of(domain: SeriesDomain) -> Self {
        match domain {
            SeriesDomain::Occupancy => Self {
                jitter: 5.0,
                clamp: Some((5.0, 100.0)),
            },
            SeriesDomain::Environmental => Self {
                jitter: 0.8,
                clamp: None,
            },
            SeriesDomain::Energy => Self {
                jitter: 8.0,
                clamp: Some((10.0, 1000.0)),
            },
        }
    }

    fn bound(&self, value: f64) -> f64 {
        match self.clamp {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }
}

/// Noise-free primary value of `domain` at `hour` (0–23).
pub fn baseline(domain: SeriesDomain, hour: u32) -> f64 {
    let h = f64::from(hour);
    match domain {
        SeriesDomain::Occupancy => match hour {
            8..=18 => 30.0 + 60.0 * (PI * (h - 8.0) / 10.0).sin(),
            19..=22 => 15.0,
            _ => 8.0,
        },
        // Coldest at 06:00, warmest at 18:00.
        SeriesDomain::Environmental => 22.0 - 3.0 * (2.0 * PI * (h - 6.0) / 24.0).cos(),
        SeriesDomain::Energy => match hour {
            8..=18 => 120.0 + 100.0 * (PI * (h - 8.0) / 10.0).sin(),
            19..=22 => 90.0,
            _ => 60.0,
        },
    }
}

/// Price per kWh at `hour`.
pub fn tariff(hour: u32) -> f64 {
    if (PEAK_WINDOW.0..PEAK_WINDOW.1).contains(&hour) {
        PEAK_TARIFF
    } else {
        OFF_PEAK_TARIFF
    }
}

/// Relative humidity implied by a temperature reading, before noise.
pub fn humidity_baseline(temperature: f64) -> f64 {
    75.0 - 1.2 * temperature
}

/// One reading for `hour`, drawn around the domain baseline.
pub fn reading_at(domain: SeriesDomain, hour: u32, rng: &mut dyn RandomSource) -> HourlyReading {
    let profile = SeriesProfile::of(domain);
    let primary = profile.bound(baseline(domain, hour) + rng.jitter(profile.jitter));
    let predicted = profile.bound(primary + rng.jitter(profile.jitter / 2.0));
    let secondary = match domain {
        SeriesDomain::Occupancy => f64::from(OFFICE_CAPACITY),
        SeriesDomain::Environmental => {
            (humidity_baseline(primary) + rng.jitter(3.0)).clamp(0.0, 100.0)
        }
        SeriesDomain::Energy => primary * tariff(hour),
    };

    HourlyReading {
        hour: hour_label(hour),
        hour_of_day: hour,
        primary,
        secondary,
        predicted,
    }
}

/// Hours of day covered by the `hour_count`-long window ending at `now`,
/// oldest first.
pub fn window_hours(now: DateTime<Utc>, hour_count: usize) -> Vec<u32> {
    let current = i64::from(now.hour());
    (0..hour_count as i64)
        .map(|i| (current - (hour_count as i64 - 1 - i)).rem_euclid(24) as u32)
        .collect()
}

/// Generate `hour_count` hourly readings ending at the hour containing `now`.
pub fn generate_series(
    domain: SeriesDomain,
    now: DateTime<Utc>,
    hour_count: usize,
    rng: &mut dyn RandomSource,
) -> Vec<HourlyReading> {
    window_hours(now, hour_count)
        .into_iter()
        .map(|hour| reading_at(domain, hour, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::random::{ConstantSource, SeededSource};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 12, hour, 17, 0).unwrap()
    }

    #[test]
    fn test_series_has_24_readings_in_order() {
        let mut rng = SeededSource::from_seed(42);
        for domain in SeriesDomain::ALL {
            let series = generate_series(domain, at(10), 24, &mut rng);
            assert_eq!(series.len(), 24);
            for pair in series.windows(2) {
                assert_eq!((pair[0].hour_of_day + 1) % 24, pair[1].hour_of_day);
            }
            assert_eq!(series.last().unwrap().hour, "10:00");
            assert_eq!(series.first().unwrap().hour, "11:00");
        }
    }

    #[test]
    fn test_window_wraps_midnight() {
        let hours = window_hours(at(1), 4);
        assert_eq!(hours, vec![22, 23, 0, 1]);
    }

    #[test]
    fn test_occupancy_baseline_shape() {
        assert_eq!(baseline(SeriesDomain::Occupancy, 3), 8.0);
        assert_eq!(baseline(SeriesDomain::Occupancy, 20), 15.0);
        assert!((baseline(SeriesDomain::Occupancy, 13) - 90.0).abs() < 1e-9);
        assert!((baseline(SeriesDomain::Occupancy, 8) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_trough_at_six() {
        let t6 = baseline(SeriesDomain::Environmental, 6);
        assert!((t6 - 19.0).abs() < 1e-9);
        for h in 0..24 {
            assert!(baseline(SeriesDomain::Environmental, h) >= t6 - 1e-9);
        }
    }

    #[test]
    fn test_midpoint_source_yields_baseline() {
        let mut rng = ConstantSource::MIDPOINT;
        let series = generate_series(SeriesDomain::Energy, at(13), 24, &mut rng);
        for r in &series {
            assert_eq!(r.primary, baseline(SeriesDomain::Energy, r.hour_of_day));
            assert_eq!(r.predicted, r.primary);
            assert_eq!(r.secondary, r.primary * tariff(r.hour_of_day));
        }
    }

    #[test]
    fn test_values_stay_clamped() {
        let mut low = ConstantSource(0.0);
        let mut high = ConstantSource(1.0);
        for h in 0..24 {
            let r = reading_at(SeriesDomain::Occupancy, h, &mut low);
            assert!(r.primary >= 5.0 && r.predicted >= 5.0);
            let r = reading_at(SeriesDomain::Occupancy, h, &mut high);
            assert!(r.primary <= 100.0 && r.predicted <= 100.0);
            let r = reading_at(SeriesDomain::Environmental, h, &mut high);
            assert!((0.0..=100.0).contains(&r.secondary));
        }
    }

    #[test]
    fn test_occupancy_secondary_is_capacity() {
        let mut rng = SeededSource::from_seed(5);
        let series = generate_series(SeriesDomain::Occupancy, at(9), 24, &mut rng);
        assert!(series.iter().all(|r| r.secondary == 150.0));
    }

    #[test]
    fn test_tariff_window() {
        assert_eq!(tariff(8), OFF_PEAK_TARIFF);
        assert_eq!(tariff(9), PEAK_TARIFF);
        assert_eq!(tariff(16), PEAK_TARIFF);
        assert_eq!(tariff(17), OFF_PEAK_TARIFF);
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate_series(
            SeriesDomain::Environmental,
            at(12),
            24,
            &mut SeededSource::from_seed(42),
        );
        let b = generate_series(
            SeriesDomain::Environmental,
            at(12),
            24,
            &mut SeededSource::from_seed(42),
        );
        assert_eq!(a, b);
    }
}
