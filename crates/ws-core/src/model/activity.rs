//! Badge and booking events of the user-activity feed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    BadgeIn,
    BadgeOut,
    MeetingCheckin,
    DeskBooking,
    RoomBooking,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        Self::BadgeIn,
        Self::BadgeOut,
        Self::MeetingCheckin,
        Self::DeskBooking,
        Self::RoomBooking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadgeIn => "badge_in",
            Self::BadgeOut => "badge_out",
            Self::MeetingCheckin => "meeting_checkin",
            Self::DeskBooking => "desk_booking",
            Self::RoomBooking => "room_booking",
        }
    }

    /// Only check-ins and desk bookings last for a while.
    pub fn has_duration(&self) -> bool {
        matches!(self, Self::MeetingCheckin | Self::DeskBooking)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    /// `USER_000` .. `USER_049`.
    pub user_id: String,
    pub department: String,
    pub activity_type: ActivityType,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    /// Present only when the activity type has a duration.
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFilter {
    /// Every event is attributed to this department when set.
    pub department: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetadata {
    pub total_activities: usize,
    pub unique_users: usize,
    pub time_range: TimeRange,
    /// Mean over the events that carry a duration; `None` when none do.
    pub avg_duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityPage {
    /// Newest first.
    pub activities: Vec<UserActivity>,
    pub metadata: ActivityMetadata,
}

impl UserActivityPage {
    pub fn new(activities: Vec<UserActivity>, time_range: TimeRange) -> Self {
        let mut users: Vec<&str> = activities.iter().map(|a| a.user_id.as_str()).collect();
        users.sort_unstable();
        users.dedup();

        let durations: Vec<f64> = activities
            .iter()
            .filter_map(|a| a.duration_minutes.map(f64::from))
            .collect();
        let avg_duration_minutes = (!durations.is_empty()).then(|| {
            let mean = durations.iter().sum::<f64>() / durations.len() as f64;
            (mean * 10.0).round() / 10.0
        });

        let metadata = ActivityMetadata {
            total_activities: activities.len(),
            unique_users: users.len(),
            time_range,
            avg_duration_minutes,
        };
        Self {
            activities,
            metadata,
        }
    }
}
