/// Server name reported to MCP clients
pub const SERVER_NAME: &str = "river-watch";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "river_watch_mcp=info";

/// Environment variable holding the seed for the shared forecast generator
pub const SEED_ENV_VAR: &str = "RIVER_WATCH_SEED";

// ============================================================================
// Reward tiers
// ============================================================================

pub const SILVER_MIN_POINTS: u64 = 500;
pub const GOLD_MIN_POINTS: u64 = 1_500;
pub const PLATINUM_MIN_POINTS: u64 = 5_000;

// ============================================================================
// Flood forecast shape
// ============================================================================

/// Number of samples in one forecast (48 hours at 4-hour steps)
pub const FORECAST_POINTS: usize = 12;

pub const FORECAST_STEP_HOURS: i64 = 4;

/// Points before this index get a relative "+Nh" label
pub const RELATIVE_LABEL_LIMIT: usize = 6;

/// chrono format for labels past the relative window
pub const DATE_LABEL_FORMAT: &str = "%b %-d, %H:%M";

pub const BASE_RISK: f64 = 25.0;
pub const RISK_AMPLITUDE: f64 = 20.0;
pub const RISK_FREQUENCY: f64 = 0.5;
pub const RISK_NOISE: f64 = 7.5;

pub const MIN_WATER_LEVEL_M: f64 = 2.0;
pub const WATER_LEVEL_SPAN_M: f64 = 2.5;

/// Rainfall is drawn on a 0.1 mm grid below this bound
pub const MAX_RAINFALL_MM: f64 = 20.0;

pub const HIGH_RISK_THRESHOLD: u8 = 70;
pub const MODERATE_RISK_THRESHOLD: u8 = 40;
