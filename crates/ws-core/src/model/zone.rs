use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Free,
    Assigned,
    Occupied,
    Hotdesk,
}

/// One cell of the floor-plan occupancy grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCell {
    /// `"row-col"`.
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub status: ZoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    pub temperature: f64,
}
