use serde::{Deserialize, Serialize};

pub const READING_STORED: &str = "reading stored";

/// Body returned by `POST /api/reading`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_id: Option<String>,
}

impl BridgeResponse {
    pub fn stored(reading_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(READING_STORED.to_string()),
            error: None,
            reading_id: Some(reading_id.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            reading_id: None,
        }
    }
}

/// Body returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
