//! HTTP response envelopes.

use crate::models::WeatherRecord;
use serde::{Deserialize, Serialize};

/// Successful response envelope: a message plus the fetched weather records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub data: Vec<WeatherRecord>,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>, data: Vec<WeatherRecord>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response model for the health check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
