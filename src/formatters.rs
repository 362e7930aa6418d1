use crate::flood::FloodRiskData;
use crate::rewards::{RewardLevel, RewardProgress};

/// Formats a points balance and its tier progress into a human-readable string
pub fn format_reward_progress(progress: &RewardProgress) -> String {
    let mut output = format!(
        "Reward Progress:\n\n  Points: {}\n  Level: {}\n",
        progress.points,
        progress.level.display_name()
    );
    match progress.next_level {
        Some(next) => output.push_str(&format!(
            "  Next Level: {}\n  Progress: {:.1}%\n  Points Needed: {}\n",
            next.display_name(),
            progress.progress_percent,
            progress.points_to_next
        )),
        None => output.push_str("  Top level reached.\n"),
    }
    output
}

/// Formats the reward tier table
pub fn format_reward_levels() -> String {
    let mut output = String::from("Reward Levels:\n\n");
    for level in RewardLevel::ALL {
        let range = match level.max_points() {
            Some(max) => format!("{} - {} points", level.min_points(), max - 1),
            None => format!("{}+ points", level.min_points()),
        };
        output.push_str(&format!(
            "  {} ({}): {}\n",
            level.display_name(),
            level.as_str(),
            range
        ));
    }
    output
}

/// Formats a flood forecast into a human-readable string
pub fn format_flood_forecast(data: &FloodRiskData) -> String {
    let mut output = format!(
        "Flood Risk Forecast:\n\n  Status: {}\n  Current Risk: {}%\n  Peak Risk: {}%\n\n",
        data.status.as_str().to_uppercase(),
        data.current_risk,
        data.max_risk
    );

    for point in &data.forecast {
        output.push_str(&format!(
            "{}:\n  Risk: {}%\n  Water Level: {:.1} m\n  Rainfall: {:.1} mm\n\n",
            point.label, point.risk_level, point.water_level, point.rainfall
        ));
    }
    output
}
