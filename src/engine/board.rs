//! Last successfully fetched content of every scene.
//!
//! A failed fetch never reaches the board, so a scene keeps whatever it showed
//! before (or stays empty on first load).

use crate::engine::scene::SceneId;
use crate::types::{Activity, GameChampion, RankedPlayer, RosterEntry, Statistics};

/// A parsed response for exactly one scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneData {
    Top10(Vec<RankedPlayer>),
    Champions(Vec<GameChampion>),
    Activity(Vec<Activity>),
    Roster(Vec<RosterEntry>),
    Statistics(Statistics),
}

impl SceneData {
    pub fn scene(&self) -> SceneId {
        match self {
            SceneData::Top10(_) => SceneId::Top10,
            SceneData::Champions(_) => SceneId::Champions,
            SceneData::Activity(_) => SceneId::Activity,
            SceneData::Roster(_) => SceneId::Roster,
            SceneData::Statistics(_) => SceneId::Statistics,
        }
    }

    /// Number of records, for logging.
    pub fn record_count(&self) -> usize {
        match self {
            SceneData::Top10(v) => v.len(),
            SceneData::Champions(v) => v.len(),
            SceneData::Activity(v) => v.len(),
            SceneData::Roster(v) => v.len(),
            SceneData::Statistics(_) => 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct SceneBoard {
    pub top10: Vec<RankedPlayer>,
    pub champions: Vec<GameChampion>,
    pub activity: Vec<Activity>,
    pub roster: Vec<RosterEntry>,
    pub statistics: Option<Statistics>,
    /// Wall-clock time of the last applied update, `HH:MM AM/PM`.
    pub last_updated: Option<String>,
    /// Bumped on every [`SceneBoard::apply`]; views rebuild cards when it moves.
    pub revision: u64,
}

impl SceneBoard {
    /// Replace one scene's content wholesale.
    pub fn apply(&mut self, data: SceneData, stamp: String) {
        match data {
            SceneData::Top10(v) => self.top10 = v,
            SceneData::Champions(v) => self.champions = v,
            SceneData::Activity(v) => self.activity = v,
            SceneData::Roster(v) => self.roster = v,
            SceneData::Statistics(s) => self.statistics = Some(s),
        }
        self.last_updated = Some(stamp);
        self.revision += 1;
    }

    pub fn is_empty(&self, scene: SceneId) -> bool {
        match scene {
            SceneId::Top10 => self.top10.is_empty(),
            SceneId::Champions => self.champions.is_empty(),
            SceneId::Activity => self.activity.is_empty(),
            SceneId::Roster => self.roster.is_empty(),
            SceneId::Statistics => self.statistics.is_none(),
        }
    }
}
