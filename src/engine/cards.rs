//! Pure view-models: one card or row per API record, with every string
//! already formatted. The egui views only lay these out.

use crate::engine::format::{format_score, format_time_ago};
use crate::types::{Activity, GameChampion, RankedPlayer, RosterEntry, Statistics, Trend};

/// Only the newest activities fit on the feed.
pub const ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a zero-based list position.
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub rank: String,
    pub name: String,
    pub score: String,
    pub games: String,
    pub trend: Trend,
    pub trend_text: String,
    pub medal: Option<Medal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionCard {
    pub game: String,
    pub champion: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub player: String,
    pub time_ago: String,
    pub game: String,
    pub score: String,
    pub personal_best: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub rank: String,
    pub name: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// `↑`, `↓` or `•`, followed by the number of places moved when non-zero.
pub fn trend_text(trend: Trend, positions: i64) -> String {
    let icon = match trend {
        Trend::Up => '↑',
        Trend::Down => '↓',
        Trend::Neutral => '•',
    };
    if positions > 0 {
        format!("{icon}{positions}")
    } else {
        icon.to_string()
    }
}

pub fn player_cards(players: &[RankedPlayer]) -> Vec<PlayerCard> {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| PlayerCard {
            rank: p.rank.to_string(),
            name: p.name.clone(),
            score: format_score(p.score),
            games: format!("{} games", p.games_played),
            trend: p.trend,
            trend_text: trend_text(p.trend, p.trend_positions),
            medal: Medal::for_position(i),
        })
        .collect()
}

pub fn champion_cards(champions: &[GameChampion]) -> Vec<ChampionCard> {
    champions
        .iter()
        .map(|c| ChampionCard {
            game: c.name.clone(),
            champion: c.champion.clone(),
            score: format_score(c.score),
        })
        .collect()
}

pub fn activity_items(activities: &[Activity]) -> Vec<ActivityItem> {
    activities
        .iter()
        .take(ACTIVITY_LIMIT)
        .map(|a| ActivityItem {
            player: a.player.clone(),
            time_ago: format_time_ago(a.minutes_ago),
            game: a.game.clone(),
            score: format_score(a.score),
            personal_best: a.is_personal_best,
        })
        .collect()
}

pub fn roster_rows(entries: &[RosterEntry]) -> Vec<RosterRow> {
    entries
        .iter()
        .map(|e| RosterRow {
            rank: format!("#{}", e.rank),
            name: e.name.clone(),
            score: format_score(e.score),
        })
        .collect()
}

pub fn stat_cards(stats: &Statistics) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Games This Week",
            value: stats.total_games_this_week.to_string(),
        },
        StatCard {
            label: "Games This Month",
            value: stats.total_games_this_month.to_string(),
        },
        StatCard {
            label: "Active Players",
            value: stats.active_players.to_string(),
        },
        StatCard {
            label: "Average Score",
            value: format_score(stats.average_score),
        },
        StatCard {
            label: "Most Popular",
            value: stats.most_popular_game.clone(),
        },
        StatCard {
            label: "Busiest Day",
            value: stats.busiest_day.clone(),
        },
    ]
}
