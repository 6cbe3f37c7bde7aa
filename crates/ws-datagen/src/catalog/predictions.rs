use chrono::{DateTime, Datelike, Duration, Utc};
use ws_core::model::{
    AiPredictions, EnergyPredictorReport, SpaceOptimizerReport, UtilizationForecast, WEEKDAYS,
};

use super::{build_anomalies, build_optimizations, build_recommendations, jitter_confidence};
use crate::constants::SERIES_HOURS;
use crate::random::RandomSource;
use crate::snapshot::forecast_energy;

const SPACE_MODEL: &str = "LSTM_Space_Predictor_v2.1";
const ENERGY_MODEL: &str = "Ensemble_Energy_Predictor_v1.4";
const FORECAST_DAYS: i64 = 7;

fn utilization_forecast(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> Vec<UtilizationForecast> {
    (1..=FORECAST_DAYS)
        .map(|ahead| {
            let weekday = (now + Duration::days(ahead)).weekday().num_days_from_monday() as usize;
            let predicted_utilization = if weekday >= 5 {
                rng.uniform(15.0, 40.0)
            } else {
                rng.uniform(60.0, 90.0)
            };
            UtilizationForecast {
                day: WEEKDAYS[weekday].to_string(),
                predicted_utilization,
                confidence: jitter_confidence(0.82, rng),
            }
        })
        .collect()
}

/// Output of the two "models" shown on the AI insights page.
pub fn build_ai_predictions(now: DateTime<Utc>, rng: &mut dyn RandomSource) -> AiPredictions {
    let space_optimizer = SpaceOptimizerReport {
        model_name: SPACE_MODEL.to_string(),
        accuracy: jitter_confidence(0.87, rng),
        recommendations: build_recommendations(rng),
        anomalies: build_anomalies(now, rng),
        forecast: utilization_forecast(now, rng),
    };

    let optimizations = build_optimizations(Some("energy"), rng);
    let energy_predictor = EnergyPredictorReport {
        model_name: ENERGY_MODEL.to_string(),
        accuracy: jitter_confidence(0.91, rng),
        forecast: forecast_energy(now, SERIES_HOURS, rng),
        total_potential_savings: optimizations.iter().map(|o| o.potential_savings).sum(),
        optimizations,
    };

    AiPredictions {
        space_optimizer,
        energy_predictor,
    }
}
