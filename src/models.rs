use serde::{Deserialize, Serialize};

/// Request payload for the process endpoint, as sent by the browser extension
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub product_title: String,
    #[serde(default)]
    pub product_info: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

/// Response envelope for the process endpoint.
///
/// Exactly one shape is ever produced: `{success: true, result, platform}`
/// or `{success: false, error}`. The constructors are the only way to build
/// one, which keeps the two shapes from mixing.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResponse {
    pub fn ok(result: String, platform: String) -> Self {
        Self {
            success: true,
            result: Some(result),
            platform: Some(platform),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            result: None,
            platform: None,
            error: Some(error),
        }
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Backend is running".to_string(),
        }
    }
}

impl ProcessRequest {
    /// Validates that the query is not empty or just whitespace
    pub fn is_valid(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
