use serde::{Deserialize, Serialize};

/// Day labels in trend order; the last two are the weekend.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    pub day: String,
    pub utilization: f64,
    pub efficiency: f64,
    pub satisfaction: f64,
}

impl WeeklyTrendPoint {
    pub fn is_weekend(&self) -> bool {
        self.day == "Sat" || self.day == "Sun"
    }
}
