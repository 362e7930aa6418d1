use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::constants::SERVER_NAME;
use crate::flood::{generate_forecast, FloodRiskData};
use crate::formatters::{format_flood_forecast, format_reward_levels, format_reward_progress};
use crate::models::{GetFloodForecastRequest, GetRewardProgressRequest};
use crate::rewards::RewardProgress;

/// River watch service that handles MCP requests
#[derive(Clone)]
pub struct RiverWatch {
    rng: Arc<Mutex<ChaCha8Rng>>,
    tool_router: ToolRouter<Self>,
}

impl RiverWatch {
    /// Creates a new service; unseeded forecasts draw from one shared generator
    pub fn new(config: &Config) -> Self {
        let rng = match config.forecast_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            rng: Arc::new(Mutex::new(rng)),
            tool_router: Self::tool_router(),
        }
    }

    /// Generates a forecast for a request, anchored at the requested instant
    /// or at the current time
    fn build_forecast(&self, request: &GetFloodForecastRequest) -> Result<FloodRiskData, McpError> {
        let now = parse_anchor(request.now.as_deref())?;

        let data = match request.seed {
            Some(seed) => generate_forecast(now, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => {
                let mut rng = self.rng.lock().map_err(|_| {
                    McpError::internal_error("forecast generator lock poisoned", None)
                })?;
                generate_forecast(now, &mut *rng)
            }
        };

        tracing::debug!(
            "Forecast anchored at {}: current risk {}, peak risk {}, status {}",
            now,
            data.current_risk,
            data.max_risk,
            data.status.as_str()
        );
        Ok(data)
    }
}

/// Parses an optional RFC 3339 anchor; absent means the current time
fn parse_anchor(raw: Option<&str>) -> Result<DateTime<Utc>, McpError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|anchor| anchor.with_timezone(&Utc))
            .map_err(|e| {
                tracing::warn!("Rejected forecast anchor {:?}: {}", raw, e);
                McpError::invalid_params(
                    format!("`now` must be an RFC 3339 timestamp, got {:?}: {}", raw, e),
                    None,
                )
            }),
        None => Ok(Utc::now()),
    }
}

/// Serializes a tool result as pretty JSON for machine consumers
fn json_content<T: Serialize>(value: &T) -> Result<Content, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    Ok(Content::text(json))
}

#[tool_handler]
impl ServerHandler for RiverWatch {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Smart River Watch companion service. Reports reward level progress for a \
                points balance and produces a synthetic 48-hour flood risk forecast."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl RiverWatch {
    /// Gets the reward level and progress for a points balance
    #[tool(description = "Get the reward level for a cumulative points balance, the progress towards the next level as a percentage, and the points still needed. Points must be zero or more.")]
    async fn get_reward_progress(
        &self,
        Parameters(request): Parameters<GetRewardProgressRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting reward progress for {} points", request.points);

        let points = u64::try_from(request.points).map_err(|_| {
            tracing::warn!("Rejected negative points balance: {}", request.points);
            McpError::invalid_params(
                format!("points must not be negative, got {}", request.points),
                None,
            )
        })?;

        let progress = RewardProgress::for_points(points);
        tracing::debug!(
            "{} points is {} ({:.1}% to next)",
            points,
            progress.level.as_str(),
            progress.progress_percent
        );

        Ok(CallToolResult::success(vec![
            Content::text(format_reward_progress(&progress)),
            json_content(&progress)?,
        ]))
    }

    /// Lists the reward tiers and their point ranges
    #[tool(description = "List the reward levels (bronze, silver, gold, platinum) and the points range of each.")]
    async fn list_reward_levels(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Listing reward levels");

        Ok(CallToolResult::success(vec![Content::text(format_reward_levels())]))
    }

    /// Generates a 48-hour flood risk forecast
    #[tool(description = "Get a synthetic 48-hour flood risk forecast: 12 points at 4-hour steps with risk level (0-100), water level (m) and rainfall (mm), plus current risk, peak risk and an overall status (low, moderate, high). Optionally pass `seed` for a reproducible forecast and `now` (RFC 3339) to anchor the first point.")]
    async fn get_flood_forecast(
        &self,
        Parameters(request): Parameters<GetFloodForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting flood forecast (seed: {:?}, anchor: {:?})",
            request.seed,
            request.now
        );

        let data = self.build_forecast(&request)?;

        Ok(CallToolResult::success(vec![
            Content::text(format_flood_forecast(&data)),
            json_content(&data)?,
        ]))
    }
}
