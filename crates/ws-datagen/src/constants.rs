//! Fixed dimensions of the simulated office.

pub const DESK_COUNT: u32 = 60;
pub const HOT_SEAT_COUNT: u32 = 30;
pub const MEETING_ROOM_COUNT: u32 = 15;
pub const TOTAL_SPACES: u32 = DESK_COUNT + HOT_SEAT_COUNT + MEETING_ROOM_COUNT;

pub const EMPLOYEE_COUNT: u32 = 150;
/// Headcount the occupancy series is measured against.
pub const OFFICE_CAPACITY: u32 = 150;

pub const ZONE_ROWS: u32 = 8;
pub const ZONE_COLS: u32 = 12;
/// Columns from here on are the hot-desk block.
pub const HOTDESK_FIRST_COL: u32 = 8;

pub const SERIES_HOURS: usize = 24;

pub const EMPLOYEE_LIMIT_DEFAULT: usize = 50;
pub const EMPLOYEE_LIMIT_MAX: usize = EMPLOYEE_COUNT as usize;
pub const SPACE_LIMIT_DEFAULT: usize = 20;
pub const SPACE_LIMIT_MAX: usize = TOTAL_SPACES as usize;
pub const ALERT_LIMIT_DEFAULT: usize = 10;
pub const ALERT_LIMIT_MAX: usize = 50;
pub const ACTIVITY_LIMIT_DEFAULT: usize = 100;
pub const ACTIVITY_LIMIT_MAX: usize = 500;
/// Distinct users the activity feed cycles through.
pub const ACTIVITY_USERS: usize = 50;
pub const ACTIVITY_MEAN_AGE_HOURS: f64 = 2.0;

/// Electricity tariff (per kWh) inside the peak window.
pub const PEAK_TARIFF: f64 = 12.5;
pub const OFF_PEAK_TARIFF: f64 = 8.0;
/// Peak tariff window, `[start, end)` hours of day.
pub const PEAK_WINDOW: (u32, u32) = (9, 17);
/// Annual energy bill the savings estimates are scaled from.
pub const ANNUAL_ENERGY_COST: f64 = 1_200_000.0;

/// Effective limit for a roster request: `None` falls back to the default,
/// larger values are capped, zero is raised to one.
pub fn effective_limit(requested: Option<usize>, default: usize, max: usize) -> usize {
    requested.unwrap_or(default).clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_counts_add_up() {
        assert_eq!(TOTAL_SPACES, 105);
    }

    #[test]
    fn limits_are_clamped() {
        assert_eq!(effective_limit(None, 50, 150), 50);
        assert_eq!(effective_limit(Some(500), 50, 150), 150);
        assert_eq!(effective_limit(Some(0), 50, 150), 1);
        assert_eq!(effective_limit(Some(7), 50, 150), 7);
    }
}
