use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{data, timestamp}` response shape shared by the snapshot calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T, timestamp: DateTime<Utc>) -> Self {
        Self { data, timestamp }
    }
}

/// `{success, record, message}` response shape of roster mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse<T> {
    pub success: bool,
    pub record: T,
    pub message: String,
}

impl<T> MutationResponse<T> {
    pub fn ok(record: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            record,
            message: message.into(),
        }
    }
}
