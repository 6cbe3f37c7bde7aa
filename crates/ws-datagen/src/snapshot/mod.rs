//! One builder per dataset a view displays.
//!
//! Builders are pure functions of `now` and a [`RandomSource`]: they never
//! cache, so two calls always produce two independent snapshots.
//!
//! [`RandomSource`]: crate::random::RandomSource

pub mod activity;
pub mod employees;
pub mod energy;
pub mod environmental;
pub mod export;
pub mod occupancy;
pub mod spaces;
pub mod summary;
pub mod weekly;
pub mod zones;

#[cfg(test)]
mod tests;

pub use activity::build_user_activity;
pub use employees::{build_employees, employee_page};
pub use energy::{build_energy_dashboard, build_energy_points, forecast_energy};
pub use environmental::build_environmental;
pub use export::build_export;
pub use occupancy::build_occupancy;
pub use spaces::{build_space_aggregates, build_spaces, space_page};
pub use summary::build_summary;
pub use weekly::build_weekly_trend;
pub use zones::build_zone_grid;

/// Apply `keep` then `limit`, returning the kept items and the match count
/// before truncation.
pub(crate) fn paginate<T>(
    items: impl IntoIterator<Item = T>,
    keep: impl Fn(&T) -> bool,
    limit: usize,
) -> (Vec<T>, usize) {
    let mut matched: Vec<T> = items.into_iter().filter(|item| keep(item)).collect();
    let total = matched.len();
    matched.truncate(limit);
    (matched, total)
}

/// Round to one decimal place, the precision the dashboard cards show.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
