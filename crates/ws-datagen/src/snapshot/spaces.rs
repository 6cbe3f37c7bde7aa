//! Space roster and the per-category utilization overview.

use std::collections::BTreeSet;

use ws_core::classify::{SpaceStatus, utilization};
use ws_core::model::{
    EnvironmentReading, Space, SpaceFilter, SpaceKind, SpacePage, SpaceTypeAggregate,
};

use super::paginate;
use crate::constants::{
    DESK_COUNT, HOT_SEAT_COUNT, MEETING_ROOM_COUNT, SPACE_LIMIT_DEFAULT, SPACE_LIMIT_MAX,
    effective_limit,
};
use crate::random::RandomSource;

pub const SPACE_CATEGORIES: [&str; 4] =
    ["Open Desks", "Meeting Rooms", "Quiet Zones", "Collaborative Areas"];

/// Utilization of the four space categories. `current` never exceeds
/// `capacity`.
pub fn build_space_aggregates(rng: &mut dyn RandomSource) -> Vec<SpaceTypeAggregate> {
    SPACE_CATEGORIES
        .iter()
        .map(|name| {
            let capacity = rng.int_range(50, 80) as u32;
            let current = rng.int_range(10, i64::from(capacity)) as u32;
            let u = utilization(current, capacity);
            SpaceTypeAggregate {
                name: (*name).to_string(),
                current,
                capacity,
                utilization: u,
                efficiency: rng.uniform(60.0, 100.0),
                status: SpaceStatus::from_utilization(u),
            }
        })
        .collect()
}

struct KindProfile {
    kind: SpaceKind,
    count: u32,
    prefix: &'static str,
    capacity: (i64, i64),
    amenities: &'static [&'static str],
}

const PROFILES: [KindProfile; 3] = [
    KindProfile {
        kind: SpaceKind::Desk,
        count: DESK_COUNT,
        prefix: "Desk Pod D",
        capacity: (2, 6),
        amenities: &["wifi", "monitor", "power", "locker"],
    },
    KindProfile {
        kind: SpaceKind::HotSeat,
        count: HOT_SEAT_COUNT,
        prefix: "Hot Seat Zone H",
        capacity: (4, 12),
        amenities: &["wifi", "power", "coffee", "locker"],
    },
    KindProfile {
        kind: SpaceKind::MeetingRoom,
        count: MEETING_ROOM_COUNT,
        prefix: "Meeting Room M",
        capacity: (4, 16),
        amenities: &["projector", "whiteboard", "video_conf", "wifi"],
    },
];

fn build_space(
    id: u32,
    ordinal: u32,
    profile: &KindProfile,
    rng: &mut dyn RandomSource,
) -> Space {
    let capacity = rng.int_range(profile.capacity.0, profile.capacity.1) as u32;
    let current = rng.int_range(0, i64::from(capacity)) as u32;
    let u = utilization(current, capacity);

    // Every space keeps its first amenity; the rest are optional.
    let mut amenities = BTreeSet::new();
    for (i, amenity) in profile.amenities.iter().enumerate() {
        if i == 0 || rng.chance(0.6) {
            amenities.insert((*amenity).to_string());
        }
    }

    let people = f64::from(current);
    Space {
        id,
        name: format!("{}-{:02}", profile.prefix, ordinal + 1),
        kind: profile.kind,
        floor: ordinal % 5 + 1,
        capacity,
        current,
        utilization: u,
        efficiency: rng.uniform(60.0, 100.0),
        status: SpaceStatus::from_utilization(u),
        environment: EnvironmentReading {
            temperature: rng.uniform(20.0, 28.0),
            humidity: rng.uniform(35.0, 72.0),
            co2: 420.0 + 45.0 * people + rng.jitter(60.0),
            noise: rng.uniform(30.0, 55.0) + 1.2 * people,
            air_quality: rng.uniform(70.0, 100.0),
        },
        amenities,
        bookings: rng.int_range(0, 9) as u32,
        rating: 3.5 + 1.5 * rng.next_unit(),
    }
}

/// The full roster: desks, then hot seats, then meeting rooms, with ids
/// `1..=105` in that order.
pub fn build_spaces(rng: &mut dyn RandomSource) -> Vec<Space> {
    let mut spaces = Vec::new();
    let mut id = 1;
    for profile in &PROFILES {
        for ordinal in 0..profile.count {
            spaces.push(build_space(id, ordinal, profile, rng));
            id += 1;
        }
    }
    spaces
}

/// Filter and truncate a roster. `total` counts every match.
pub fn space_page(spaces: Vec<Space>, filter: &SpaceFilter) -> SpacePage {
    let limit = effective_limit(filter.limit, SPACE_LIMIT_DEFAULT, SPACE_LIMIT_MAX);
    let (spaces, total) = paginate(spaces, |s| filter.matches(s), limit);
    SpacePage { spaces, total }
}
