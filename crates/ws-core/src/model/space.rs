use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::SpaceStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceKind {
    Desk,
    HotSeat,
    MeetingRoom,
}

impl SpaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desk => "desk",
            Self::HotSeat => "hot_seat",
            Self::MeetingRoom => "meeting_room",
        }
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "desk" => Ok(Self::Desk),
            "hot_seat" => Ok(Self::HotSeat),
            "meeting_room" => Ok(Self::MeetingRoom),
            other => Err(format!("unknown space kind {other:?}")),
        }
    }
}

/// Environmental sub-readings of a single space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub noise: f64,
    pub air_quality: f64,
}

impl EnvironmentReading {
    /// Reading of an empty room with the HVAC at its setpoints.
    pub const IDLE: Self = Self {
        temperature: 22.0,
        humidity: 45.0,
        co2: 420.0,
        noise: 35.0,
        air_quality: 95.0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: u32,
    pub name: String,
    pub kind: SpaceKind,
    pub floor: u32,
    pub capacity: u32,
    /// Never exceeds `capacity`.
    pub current: u32,
    pub utilization: f64,
    pub efficiency: f64,
    pub status: SpaceStatus,
    pub environment: EnvironmentReading,
    pub amenities: BTreeSet<String>,
    pub bookings: u32,
    pub rating: f64,
}

impl Space {
    /// A freshly added space: nobody in it, no bookings, no rating yet.
    pub fn vacant(id: u32, name: String, kind: SpaceKind, floor: u32, capacity: u32) -> Self {
        Self {
            id,
            name,
            kind,
            floor,
            capacity,
            current: 0,
            utilization: 0.0,
            efficiency: 0.0,
            status: SpaceStatus::from_utilization(0.0),
            environment: EnvironmentReading::IDLE,
            amenities: BTreeSet::new(),
            bookings: 0,
            rating: 0.0,
        }
    }
}

/// Payload of the add-space form. `floor` defaults to the ground floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSpace {
    pub name: String,
    pub kind: Option<SpaceKind>,
    pub floor: Option<u32>,
    pub capacity: u32,
}

impl NewSpace {
    /// Names of required fields left blank. A zero capacity counts as blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.kind.is_none() {
            missing.push("kind");
        }
        if self.capacity == 0 {
            missing.push("capacity");
        }
        missing
    }
}

/// Utilization of one space category, as shown on the overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTypeAggregate {
    pub name: String,
    pub current: u32,
    pub capacity: u32,
    pub utilization: f64,
    pub efficiency: f64,
    pub status: SpaceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceFilter {
    /// Case-insensitive substring of the name or kind.
    pub search: Option<String>,
    pub status_filter: Option<SpaceStatus>,
    pub limit: Option<usize>,
}

impl SpaceFilter {
    pub fn matches(&self, space: &Space) -> bool {
        if let Some(status) = self.status_filter
            && space.status != status
        {
            return false;
        }
        match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                space.name.to_lowercase().contains(&needle)
                    || space.kind.as_str().contains(&needle)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacePage {
    pub spaces: Vec<Space>,
    /// Matches before `limit` was applied.
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_space_reports_blank_fields() {
        let form = NewSpace {
            name: "  ".into(),
            ..NewSpace::default()
        };
        assert_eq!(form.missing_fields(), vec!["name", "kind", "capacity"]);

        let form = NewSpace {
            name: "Focus Room".into(),
            kind: Some(SpaceKind::MeetingRoom),
            floor: None,
            capacity: 6,
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn vacant_space_is_empty_and_underutilized() {
        let space = Space::vacant(106, "Focus Room".into(), SpaceKind::MeetingRoom, 3, 6);
        assert_eq!(space.current, 0);
        assert_eq!(space.utilization, 0.0);
        assert_eq!(space.status, SpaceStatus::Underutilized);
        assert!(space.amenities.is_empty());
    }

    #[test]
    fn kind_parses_both_spellings() {
        assert_eq!("hot-seat".parse::<SpaceKind>(), Ok(SpaceKind::HotSeat));
        assert_eq!("Meeting_Room".parse::<SpaceKind>(), Ok(SpaceKind::MeetingRoom));
        assert!("sofa".parse::<SpaceKind>().is_err());
    }

    #[test]
    fn new_space_deserializes_with_defaults() {
        let form: NewSpace =
            serde_json::from_str(r#"{"name":"Quiet Pod","kind":"desk","capacity":2}"#).unwrap();
        assert_eq!(form.kind, Some(SpaceKind::Desk));
        assert_eq!(form.floor, None);
    }
}
