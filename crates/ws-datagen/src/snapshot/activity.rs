//! Badge and booking events for the user-activity feed.

use chrono::{DateTime, Duration, Utc};
use ws_core::model::{ActivityFilter, ActivityType, TimeRange, UserActivity, UserActivityPage};

use super::employees::DEPARTMENTS;
use crate::constants::{
    ACTIVITY_LIMIT_DEFAULT, ACTIVITY_LIMIT_MAX, ACTIVITY_MEAN_AGE_HOURS, ACTIVITY_USERS,
    effective_limit,
};
use crate::random::RandomSource;

pub const ACTIVITY_LOCATIONS: [&str; 6] = [
    "FLOOR_1",
    "FLOOR_2",
    "FLOOR_3",
    "MEETING_ROOM_A",
    "CAFETERIA",
    "LOBBY",
];

/// Exponentially distributed age: recent events are the most likely.
fn event_age(rng: &mut dyn RandomSource) -> Duration {
    let hours = -ACTIVITY_MEAN_AGE_HOURS * (1.0 - rng.next_unit()).ln();
    Duration::milliseconds((hours * 3_600_000.0) as i64)
}

/// `limit` events cycling through fifty users, newest first. `range` is
/// echoed in the metadata only.
pub fn build_user_activity(
    now: DateTime<Utc>,
    range: TimeRange,
    filter: &ActivityFilter,
    rng: &mut dyn RandomSource,
) -> UserActivityPage {
    let limit = effective_limit(filter.limit, ACTIVITY_LIMIT_DEFAULT, ACTIVITY_LIMIT_MAX);
    let mut activities: Vec<UserActivity> = (0..limit)
        .map(|i| {
            let department = match &filter.department {
                Some(dept) => dept.clone(),
                None => DEPARTMENTS[rng.index(DEPARTMENTS.len())].to_string(),
            };
            let activity_type = ActivityType::ALL[rng.index(ActivityType::ALL.len())];
            let location = ACTIVITY_LOCATIONS[rng.index(ACTIVITY_LOCATIONS.len())].to_string();
            let timestamp = now - event_age(rng);
            let duration_minutes = activity_type
                .has_duration()
                .then(|| rng.int_range(30, 480) as u32);
            UserActivity {
                user_id: format!("USER_{:03}", i % ACTIVITY_USERS),
                department,
                activity_type,
                timestamp,
                location,
                duration_minutes,
            }
        })
        .collect();
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    UserActivityPage::new(activities, range)
}
