//! Score trend and contact recency calculations.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ScorePoint;
use crate::enums::TrendDirection;

/// Window the trend compares against.
const TREND_WINDOW_DAYS: i64 = 7;

/// Movement of a lead's score over the recent window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreTrend {
    pub diff: i64,
    pub direction: TrendDirection,
}

/// Compare the latest score against the oldest entry inside the last seven
/// days, or against the oldest entry overall when none falls in the window.
///
/// Returns `None` with fewer than two history entries.
#[must_use]
pub fn score_trend(history: &[ScorePoint], now: DateTime<Utc>) -> Option<ScoreTrend> {
    if history.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&ScorePoint> = history.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let latest = sorted.first()?;
    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);
    let comparison = sorted
        .iter()
        .rev()
        .find(|p| p.date >= cutoff)
        .or_else(|| sorted.last())?;

    let diff = i64::from(latest.score) - i64::from(comparison.score);
    let direction = match diff.cmp(&0) {
        std::cmp::Ordering::Greater => TrendDirection::Up,
        std::cmp::Ordering::Less => TrendDirection::Down,
        std::cmp::Ordering::Equal => TrendDirection::Stable,
    };
    Some(ScoreTrend { diff, direction })
}

/// How recently a lead was contacted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Today,
    Fresh,
    Warm,
    Stale,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactRecency {
    pub days: i64,
    pub label: String,
    pub freshness: Freshness,
}

/// Bucket the distance between `contacted` and `now` in whole days
/// (rounded up, absolute).
#[must_use]
pub fn contact_recency(contacted: NaiveDate, now: DateTime<Utc>) -> ContactRecency {
    let contacted_at = contacted.and_hms_opt(0, 0, 0).map_or(now, |dt| dt.and_utc());
    let elapsed_secs = (now - contacted_at).num_seconds().abs();
    let days = (elapsed_secs + 86_399) / 86_400;

    let (label, freshness) = match days {
        0 => ("Today".to_string(), Freshness::Today),
        1..=3 => (format!("{days}d ago"), Freshness::Fresh),
        4..=14 => (format!("{days}d ago"), Freshness::Warm),
        31.. => (format!("{}mo ago", days / 30), Freshness::Stale),
        _ => (format!("{days}d ago"), Freshness::Stale),
    };

    ContactRecency {
        days,
        label,
        freshness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn point(now: DateTime<Utc>, days_ago: i64, score: u32) -> ScorePoint {
        ScorePoint {
            date: now - Duration::days(days_ago),
            score,
        }
    }

    #[test]
    fn trend_needs_two_points() {
        let now = Utc::now();
        assert_eq!(score_trend(&[], now), None);
        assert_eq!(score_trend(&[point(now, 0, 50)], now), None);
    }

    #[test]
    fn trend_uses_oldest_point_inside_window() {
        let now = Utc::now();
        // 40 is outside the window, 42 is the oldest inside it.
        let history = vec![point(now, 8, 40), point(now, 4, 42), point(now, 0, 45)];
        let trend = score_trend(&history, now).unwrap();
        assert_eq!(trend.diff, 3);
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn trend_falls_back_to_oldest_overall() {
        let now = Utc::now();
        let history = vec![point(now, 20, 90), point(now, 10, 70)];
        let trend = score_trend(&history, now).unwrap();
        assert_eq!(trend.diff, -20);
        assert_eq!(trend.direction, TrendDirection::Down);
    }

    #[test]
    fn trend_ignores_insertion_order() {
        let now = Utc::now();
        let history = vec![point(now, 0, 72), point(now, 10, 85), point(now, 3, 75)];
        let trend = score_trend(&history, now).unwrap();
        assert_eq!(trend.diff, -3);
    }

    #[test]
    fn trend_stable_when_equal() {
        let now = Utc::now();
        let history = vec![point(now, 2, 60), point(now, 1, 60)];
        assert_eq!(
            score_trend(&history, now).unwrap().direction,
            TrendDirection::Stable
        );
    }

    #[rstest]
    #[case(0, "Today", Freshness::Today)]
    #[case(2, "2d ago", Freshness::Fresh)]
    #[case(10, "10d ago", Freshness::Warm)]
    #[case(20, "20d ago", Freshness::Stale)]
    #[case(65, "2mo ago", Freshness::Stale)]
    fn recency_buckets(#[case] days_ago: i64, #[case] label: &str, #[case] freshness: Freshness) {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let contacted = (now - Duration::days(days_ago)).date_naive();
        let recency = contact_recency(contacted, now);
        assert_eq!(recency.label, label);
        assert_eq!(recency.freshness, freshness);
    }
}
