//! Reward level progression.
//!
//! Cumulative points map onto four ordered tiers. Each tier owns the
//! half-open range `[min_points, next tier's min_points)`; platinum is
//! unbounded. Points are unsigned, so every value lands in exactly one tier.

use serde::{Deserialize, Serialize};

use crate::constants::{GOLD_MIN_POINTS, PLATINUM_MIN_POINTS, SILVER_MIN_POINTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl RewardLevel {
    /// All levels in ascending order
    pub const ALL: [RewardLevel; 4] = [
        RewardLevel::Bronze,
        RewardLevel::Silver,
        RewardLevel::Gold,
        RewardLevel::Platinum,
    ];

    /// Inclusive lower bound of the level's range
    pub fn min_points(self) -> u64 {
        match self {
            RewardLevel::Bronze => 0,
            RewardLevel::Silver => SILVER_MIN_POINTS,
            RewardLevel::Gold => GOLD_MIN_POINTS,
            RewardLevel::Platinum => PLATINUM_MIN_POINTS,
        }
    }

    /// Exclusive upper bound, `None` for the terminal level
    pub fn max_points(self) -> Option<u64> {
        self.next().map(RewardLevel::min_points)
    }

    pub fn contains(self, points: u64) -> bool {
        points >= self.min_points() && self.max_points().map_or(true, |max| points < max)
    }

    pub fn next(self) -> Option<RewardLevel> {
        match self {
            RewardLevel::Bronze => Some(RewardLevel::Silver),
            RewardLevel::Silver => Some(RewardLevel::Gold),
            RewardLevel::Gold => Some(RewardLevel::Platinum),
            RewardLevel::Platinum => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RewardLevel::Bronze => "bronze",
            RewardLevel::Silver => "silver",
            RewardLevel::Gold => "gold",
            RewardLevel::Platinum => "platinum",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RewardLevel::Bronze => "Bronze",
            RewardLevel::Silver => "Silver",
            RewardLevel::Gold => "Gold",
            RewardLevel::Platinum => "Platinum",
        }
    }
}

/// Returns the level whose range contains `points`.
pub fn level_of(points: u64) -> RewardLevel {
    RewardLevel::ALL
        .into_iter()
        .find(|level| level.contains(points))
        .unwrap_or(RewardLevel::Bronze)
}

/// Successor of `level` in tier order; platinum has none.
pub fn next_level(level: RewardLevel) -> Option<RewardLevel> {
    level.next()
}

/// Percentage of the way from the current level's minimum to the next
/// level's minimum, clamped to `[0, 100]`. Always 100 at platinum.
pub fn progress_to_next(points: u64) -> f64 {
    let level = level_of(points);
    match level.next() {
        Some(next) => {
            let floor = level.min_points();
            let span = (next.min_points() - floor) as f64;
            let earned = points.saturating_sub(floor) as f64;
            (earned / span * 100.0).clamp(0.0, 100.0)
        }
        None => 100.0,
    }
}

/// Points still needed to reach the next level; 0 at platinum.
pub fn points_to_next(points: u64) -> u64 {
    level_of(points)
        .next()
        .map_or(0, |next| next.min_points().saturating_sub(points))
}

/// Everything a profile screen shows about a points balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardProgress {
    pub points: u64,
    pub level: RewardLevel,
    pub next_level: Option<RewardLevel>,
    pub progress_percent: f64,
    pub points_to_next: u64,
}

impl RewardProgress {
    pub fn for_points(points: u64) -> Self {
        let level = level_of(points);
        Self {
            points,
            level,
            next_level: next_level(level),
            progress_percent: progress_to_next(points),
            points_to_next: points_to_next(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Tier table ---------------------------------------------------------

    #[test]
    fn test_levels_partition_points() {
        let probes = (0..6_000u64).chain([10_000, 1_000_000, u64::MAX]);
        for points in probes {
            let matching: Vec<_> = RewardLevel::ALL
                .iter()
                .filter(|level| level.contains(points))
                .collect();
            assert_eq!(matching.len(), 1, "{} points matched {:?}", points, matching);
            assert_eq!(*matching[0], level_of(points));
        }
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        assert_eq!(level_of(499), RewardLevel::Bronze);
        assert_eq!(level_of(500), RewardLevel::Silver);
        assert_eq!(level_of(1_499), RewardLevel::Silver);
        assert_eq!(level_of(1_500), RewardLevel::Gold);
        assert_eq!(level_of(4_999), RewardLevel::Gold);
        assert_eq!(level_of(5_000), RewardLevel::Platinum);
    }

    #[test]
    fn test_levels_are_ordered_and_chained() {
        assert!(RewardLevel::Bronze < RewardLevel::Silver);
        assert!(RewardLevel::Gold < RewardLevel::Platinum);
        assert_eq!(next_level(RewardLevel::Bronze), Some(RewardLevel::Silver));
        assert_eq!(next_level(RewardLevel::Gold), Some(RewardLevel::Platinum));
        assert_eq!(next_level(RewardLevel::Platinum), None);
        assert_eq!(RewardLevel::Platinum.max_points(), None);
    }

    // --- Progress -----------------------------------------------------------

    #[test]
    fn test_progress_within_level() {
        assert_eq!(progress_to_next(0), 0.0);
        assert_eq!(progress_to_next(250), 50.0);
        assert_eq!(progress_to_next(1_000), 50.0);
        assert_eq!(progress_to_next(3_250), 50.0);
    }

    #[test]
    fn test_progress_is_monotonic_within_level_and_resets_on_crossing() {
        for level in RewardLevel::ALL.iter().filter(|l| l.next().is_some()) {
            let max = level.max_points().unwrap_or(0);
            let mut previous = -1.0;
            for points in level.min_points()..max {
                let progress = progress_to_next(points);
                assert!(progress >= previous, "{} points went backwards", points);
                assert!((0.0..=100.0).contains(&progress));
                previous = progress;
            }
            if level_of(max).next().is_some() {
                assert_eq!(progress_to_next(max), 0.0, "no reset at {}", max);
            }
        }
    }

    #[test]
    fn test_progress_is_full_at_platinum() {
        assert_eq!(progress_to_next(5_000), 100.0);
        assert_eq!(progress_to_next(123_456), 100.0);
    }

    #[test]
    fn test_points_to_next_closes_the_gap() {
        for points in 0..5_000u64 {
            let next = level_of(points).next().expect("below platinum");
            assert_eq!(points_to_next(points) + points, next.min_points());
        }
        assert_eq!(points_to_next(5_000), 0);
        assert_eq!(points_to_next(u64::MAX), 0);
    }

    #[test]
    fn test_reward_progress_summary() {
        let progress = RewardProgress::for_points(1_250);
        assert_eq!(progress.level, RewardLevel::Silver);
        assert_eq!(progress.next_level, Some(RewardLevel::Gold));
        assert_eq!(progress.points_to_next, 250);
        assert_eq!(progress.progress_percent, 75.0);
    }

    #[test]
    fn test_reward_progress_serializes_camel_case() {
        let json = serde_json::to_value(RewardProgress::for_points(5_200)).unwrap();
        assert_eq!(json["level"], "platinum");
        assert_eq!(json["nextLevel"], serde_json::Value::Null);
        assert_eq!(json["pointsToNext"], 0);
        assert_eq!(json["progressPercent"], 100.0);
    }
}
