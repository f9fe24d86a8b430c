//! Shared data-model types for the leaderboard REST API.
//!
//! # Deserialization strategy
//!
//! The API is a thin layer over SQL, so field types drift: aggregate scores
//! arrive as strings, counts as numbers, and optional columns may be missing or
//! `null`. Every record therefore uses `#[serde(default)]` and the lenient
//! number helpers from [`crate::utils`]; a missing field renders as zero/empty
//! instead of failing the whole scene.

use crate::utils::{lenient_f64, lenient_i64, lenient_u64};
use serde::{Deserialize, Deserializer, Serialize};

// ── REST: Kiosk configuration ──────────────────────────────────────────────────

/// Branding, theme and timing served by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KioskConfig {
    pub bar_name: String,
    pub logo_url: String,
    pub display: DisplayConfig,
    pub api: ApiConfig,
    pub theme: ThemeConfig,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            bar_name: "Pinball Leaderboard".to_string(),
            logo_url: "/static/logo.png".to_string(),
            display: DisplayConfig::default(),
            api: ApiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Seconds each scene stays on screen.
    pub scene_duration: u64,
    /// Cross-fade length in milliseconds.
    pub transition_speed: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scene_duration: 60,
            transition_speed: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Milliseconds between background refreshes of the current scene.
    pub refresh_interval: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 300_000,
        }
    }
}

/// Five CSS-style hex colours. Parsed into egui colours by [`crate::ui::theme`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#ff6b35".to_string(),
            secondary_color: "#f7931e".to_string(),
            background_color: "#1a1a2e".to_string(),
            text_color: "#ffffff".to_string(),
            accent_color: "#00d9ff".to_string(),
        }
    }
}

// ── REST: Leaderboards ─────────────────────────────────────────────────────────

/// Rank movement reported by the top-10 endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    /// `"stable"`, `"neutral"` and anything else the server invents.
    #[default]
    #[serde(other)]
    Neutral,
}

/// `null` reads as [`Trend::Neutral`] like a missing field does.
fn trend_or_neutral<'de, D>(deserializer: D) -> Result<Trend, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Trend>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One entry of `GET /api/leaderboard/top10`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RankedPlayer {
    #[serde(deserialize_with = "lenient_u64")]
    pub rank: u64,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub games_played: u64,
    #[serde(deserialize_with = "trend_or_neutral")]
    pub trend: Trend,
    #[serde(deserialize_with = "lenient_i64")]
    pub trend_positions: i64,
}

/// One entry of `GET /api/leaderboard/full`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RosterEntry {
    #[serde(deserialize_with = "lenient_u64")]
    pub rank: u64,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
}

// ── REST: Games & activity ─────────────────────────────────────────────────────

/// Highest score on one machine, from `GET /api/game-champions`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameChampion {
    /// Machine name.
    pub name: String,
    pub champion: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
}

/// A recent game play, from `GET /api/recent-activity`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub player: String,
    pub game: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub minutes_ago: i64,
    pub is_personal_best: bool,
}

/// League-wide aggregates from `GET /api/statistics`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Statistics {
    #[serde(deserialize_with = "lenient_u64")]
    pub total_games_this_week: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_games_this_month: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub active_players: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub average_score: f64,
    pub most_popular_game: String,
    pub busiest_day: String,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_games_this_week: 0,
            total_games_this_month: 0,
            active_players: 0,
            average_score: 0.0,
            most_popular_game: "N/A".to_string(),
            busiest_day: "N/A".to_string(),
        }
    }
}

// ── REST: Health ───────────────────────────────────────────────────────────────

/// `GET /api/health` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Health {
    pub status: String,
    pub database: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_missing_fields_fall_back_to_defaults() {
        let cfg: KioskConfig = serde_json::from_value(json!({
            "bar_name": "The Silver Ball",
            "display": { "scene_duration": 30 },
            "theme": { "primary_color": "#123456" }
        }))
        .unwrap();

        assert_eq!(cfg.bar_name, "The Silver Ball");
        assert_eq!(cfg.logo_url, "/static/logo.png");
        assert_eq!(cfg.display.scene_duration, 30);
        assert_eq!(cfg.display.transition_speed, 800);
        assert_eq!(cfg.api.refresh_interval, 300_000);
        assert_eq!(cfg.theme.primary_color, "#123456");
        assert_eq!(cfg.theme.accent_color, "#00d9ff");
    }

    #[test]
    fn top10_parses_trends() {
        let players: Vec<RankedPlayer> = serde_json::from_value(json!([
            { "rank": 1, "name": "Mike", "score": 50000000, "games_played": 120, "trend": "up", "trend_positions": 2 },
            { "rank": 2, "name": "Sarah", "score": "48000000", "games_played": 0, "trend": "stable", "trend_positions": 0 },
            { "rank": 3, "name": "John", "score": 1, "trend": "neutral" },
            { "rank": 4, "name": "Emma", "score": 1, "trend": "down", "trend_positions": 5 }
        ]))
        .unwrap();

        assert_eq!(players[0].trend, Trend::Up);
        assert_eq!(players[1].trend, Trend::Neutral);
        assert_eq!(players[1].score, 48_000_000.0);
        assert_eq!(players[2].trend, Trend::Neutral);
        assert_eq!(players[2].games_played, 0);
        assert_eq!(players[3].trend, Trend::Down);
        assert_eq!(players[3].trend_positions, 5);
    }

    #[test]
    fn null_trend_reads_as_neutral() {
        let players: Vec<RankedPlayer> = serde_json::from_value(json!([
            { "rank": 1, "name": "Mike", "score": 10, "trend": null, "trend_positions": null },
            { "rank": 2, "name": "Sarah", "score": 5, "trend": "up", "trend_positions": 1 }
        ]))
        .unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].trend, Trend::Neutral);
        assert_eq!(players[0].trend_positions, 0);
        assert_eq!(players[1].trend, Trend::Up);
    }

    #[test]
    fn statistics_accepts_decimal_string_average() {
        let stats: Statistics = serde_json::from_value(json!({
            "total_games_this_week": 42,
            "total_games_this_month": 180,
            "active_players": 23,
            "average_score": "15234567",
            "most_popular_game": "Medieval Madness",
            "busiest_day": "Friday"
        }))
        .unwrap();

        assert_eq!(stats.average_score, 15_234_567.0);
        assert_eq!(stats.busiest_day, "Friday");
    }

    #[test]
    fn statistics_empty_object_reads_as_not_available() {
        let stats: Statistics = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.most_popular_game, "N/A");
    }

    #[test]
    fn activity_minutes_are_floored() {
        let a: Activity = serde_json::from_value(json!({
            "player": "Lisa", "game": "Twilight Zone", "score": 2300000,
            "minutes_ago": 95.7, "is_personal_best": true
        }))
        .unwrap();
        assert_eq!(a.minutes_ago, 95);
        assert!(a.is_personal_best);
    }
}
