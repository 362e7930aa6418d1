use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetRewardProgressRequest {
    /// Cumulative reward points; must not be negative
    pub points: i64,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetFloodForecastRequest {
    /// Seed for a reproducible forecast
    #[serde(default)]
    pub seed: Option<u64>,
    /// RFC 3339 anchor instant for the first point, defaults to the current time
    #[serde(default)]
    pub now: Option<String>,
}
