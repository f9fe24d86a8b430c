//! The fixed, cyclic list of scenes shown by the kiosk.

use std::fmt;

/// One full-screen display mode. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Top10,
    Champions,
    Activity,
    Roster,
    Statistics,
}

impl SceneId {
    pub const ALL: [SceneId; 5] = [
        SceneId::Top10,
        SceneId::Champions,
        SceneId::Activity,
        SceneId::Roster,
        SceneId::Statistics,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Scene at `index` (wraps, so any index is valid).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn index(self) -> usize {
        match self {
            SceneId::Top10 => 0,
            SceneId::Champions => 1,
            SceneId::Activity => 2,
            SceneId::Roster => 3,
            SceneId::Statistics => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneId::Top10 => "Top 10",
            SceneId::Champions => "Game Champions",
            SceneId::Activity => "Recent Activity",
            SceneId::Roster => "Full Roster",
            SceneId::Statistics => "Statistics",
        }
    }

    /// API path that feeds this scene.
    pub fn endpoint(self) -> &'static str {
        match self {
            SceneId::Top10 => "/api/leaderboard/top10",
            SceneId::Champions => "/api/game-champions",
            SceneId::Activity => "/api/recent-activity",
            SceneId::Roster => "/api/leaderboard/full",
            SceneId::Statistics => "/api/statistics",
        }
    }

    /// Whether the scene lays out a list long enough to need auto-scroll.
    pub fn scrolls(self) -> bool {
        matches!(
            self,
            SceneId::Champions | SceneId::Activity | SceneId::Roster
        )
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
