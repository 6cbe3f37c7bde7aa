//! Stateful entry point owning the random source.
//!
//! The gateway keeps one `Generator` behind a lock; everything it returns is
//! freshly built, so the only shared state is the RNG stream itself.

use chrono::{DateTime, Utc};
use ws_core::CoreResult;
use ws_core::model::{
    ActivityFilter, AiPredictions, Alert, DashboardSummary, Employee, EnergyDashboard, EnergyPoint,
    EnvironmentalPoint, ExportedReport, HourlyReading, OccupancyPoint, ReportFormat,
    SeriesDomain, Space, SpaceTypeAggregate, TimeRange, UserActivityPage,
    WeeklyTrendPoint, ZoneCell,
};

use crate::constants::SERIES_HOURS;
use crate::random::{RandomSource, SeededSource};
use crate::{catalog, series, snapshot};

pub struct Generator {
    rng: Box<dyn RandomSource>,
}

impl Generator {
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Seeded from `seed` when given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(SeededSource::from_config(seed))
    }

    pub fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    pub fn series(&mut self, domain: SeriesDomain, now: DateTime<Utc>) -> Vec<HourlyReading> {
        series::generate_series(domain, now, SERIES_HOURS, self.rng.as_mut())
    }

    pub fn occupancy(&mut self, now: DateTime<Utc>) -> Vec<OccupancyPoint> {
        snapshot::build_occupancy(now, self.rng.as_mut())
    }

    pub fn environmental(&mut self, now: DateTime<Utc>) -> Vec<EnvironmentalPoint> {
        snapshot::build_environmental(now, self.rng.as_mut())
    }

    pub fn energy(&mut self, now: DateTime<Utc>) -> Vec<EnergyPoint> {
        snapshot::build_energy_points(now, self.rng.as_mut())
    }

    pub fn energy_dashboard(&mut self, now: DateTime<Utc>) -> EnergyDashboard {
        snapshot::build_energy_dashboard(now, self.rng.as_mut())
    }

    pub fn space_aggregates(&mut self) -> Vec<SpaceTypeAggregate> {
        snapshot::build_space_aggregates(self.rng.as_mut())
    }

    pub fn spaces(&mut self) -> Vec<Space> {
        snapshot::build_spaces(self.rng.as_mut())
    }

    pub fn employees(&mut self) -> Vec<Employee> {
        snapshot::build_employees(self.rng.as_mut())
    }

    pub fn zone_grid(&mut self) -> Vec<ZoneCell> {
        snapshot::build_zone_grid(self.rng.as_mut())
    }

    pub fn weekly_trend(&mut self) -> Vec<WeeklyTrendPoint> {
        snapshot::build_weekly_trend(self.rng.as_mut())
    }

    pub fn summary(&mut self, now: DateTime<Utc>) -> DashboardSummary {
        snapshot::build_summary(now, self.rng.as_mut())
    }

    pub fn ai_predictions(&mut self, now: DateTime<Utc>) -> AiPredictions {
        catalog::build_ai_predictions(now, self.rng.as_mut())
    }

    pub fn alerts(&mut self, now: DateTime<Utc>) -> Vec<Alert> {
        catalog::build_alerts(now, self.rng.as_mut())
    }

    pub fn user_activity(
        &mut self,
        now: DateTime<Utc>,
        range: TimeRange,
        filter: &ActivityFilter,
    ) -> UserActivityPage {
        snapshot::build_user_activity(now, range, filter, self.rng.as_mut())
    }

    pub fn export(
        &mut self,
        kind: &str,
        range: TimeRange,
        format: ReportFormat,
        now: DateTime<Utc>,
    ) -> CoreResult<ExportedReport> {
        snapshot::build_export(kind, range, format, now, self.rng.as_mut())
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}
