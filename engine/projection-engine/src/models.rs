use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Provider-assigned player identifier
pub type PlayerId = u32;

/// Provider-assigned team identifier
pub type TeamId = u32;

/// Counting statistics carried through the projection pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stat {
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
    Fg3m,
    Fga,
    Fgm,
    Fta,
    Ftm,
}

impl Stat {
    /// Every counting stat, in report order
    pub const ALL: [Stat; 11] = [
        Stat::Pts,
        Stat::Reb,
        Stat::Ast,
        Stat::Stl,
        Stat::Blk,
        Stat::Tov,
        Stat::Fg3m,
        Stat::Fga,
        Stat::Fgm,
        Stat::Fta,
        Stat::Ftm,
    ];

    /// Box-score label (e.g. "PTS", "FG3M")
    pub fn label(self) -> &'static str {
        match self {
            Stat::Pts => "PTS",
            Stat::Reb => "REB",
            Stat::Ast => "AST",
            Stat::Stl => "STL",
            Stat::Blk => "BLK",
            Stat::Tov => "TOV",
            Stat::Fg3m => "FG3M",
            Stat::Fga => "FGA",
            Stat::Fgm => "FGM",
            Stat::Fta => "FTA",
            Stat::Ftm => "FTM",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One game's box-score line for a player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct GameRecord {
    pub fgm: u32,
    pub fga: u32,
    pub ftm: u32,
    pub fta: u32,
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub tov: u32,
    pub fg3m: u32,
}

impl GameRecord {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Pts => self.pts,
            Stat::Reb => self.reb,
            Stat::Ast => self.ast,
            Stat::Stl => self.stl,
            Stat::Blk => self.blk,
            Stat::Tov => self.tov,
            Stat::Fg3m => self.fg3m,
            Stat::Fga => self.fga,
            Stat::Fgm => self.fgm,
            Stat::Fta => self.fta,
            Stat::Ftm => self.ftm,
        }
    }
}

/// Real-valued counting stats (per-game means, weekly projections or roster sums)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StatLine {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub fg3m: f64,
    pub fga: f64,
    pub fgm: f64,
    pub fta: f64,
    pub ftm: f64,
}

impl StatLine {
    /// Build a line by evaluating `f` once per stat
    pub fn from_fn(mut f: impl FnMut(Stat) -> f64) -> Self {
        let mut line = Self::default();
        for stat in Stat::ALL {
            *line.get_mut(stat) = f(stat);
        }
        line
    }

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Pts => self.pts,
            Stat::Reb => self.reb,
            Stat::Ast => self.ast,
            Stat::Stl => self.stl,
            Stat::Blk => self.blk,
            Stat::Tov => self.tov,
            Stat::Fg3m => self.fg3m,
            Stat::Fga => self.fga,
            Stat::Fgm => self.fgm,
            Stat::Fta => self.fta,
            Stat::Ftm => self.ftm,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Pts => &mut self.pts,
            Stat::Reb => &mut self.reb,
            Stat::Ast => &mut self.ast,
            Stat::Stl => &mut self.stl,
            Stat::Blk => &mut self.blk,
            Stat::Tov => &mut self.tov,
            Stat::Fg3m => &mut self.fg3m,
            Stat::Fga => &mut self.fga,
            Stat::Fgm => &mut self.fgm,
            Stat::Fta => &mut self.fta,
            Stat::Ftm => &mut self.ftm,
        }
    }

    /// Field-goal percentage implied by this line's makes and attempts
    pub fn fg_pct(&self) -> f64 {
        shooting_pct(self.fgm, self.fga)
    }

    /// Free-throw percentage implied by this line's makes and attempts
    pub fn ft_pct(&self) -> f64 {
        shooting_pct(self.ftm, self.fta)
    }
}

impl From<&GameRecord> for StatLine {
    fn from(record: &GameRecord) -> Self {
        StatLine::from_fn(|stat| f64::from(record.get(stat)))
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(self, rhs: StatLine) -> StatLine {
        StatLine::from_fn(|stat| self.get(stat) + rhs.get(stat))
    }
}

impl AddAssign for StatLine {
    fn add_assign(&mut self, rhs: StatLine) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for StatLine {
    type Output = StatLine;

    fn mul(self, factor: f64) -> StatLine {
        StatLine::from_fn(|stat| self.get(stat) * factor)
    }
}

/// makes / attempts * 100, or 0 when there were no attempts
pub fn shooting_pct(makes: f64, attempts: f64) -> f64 {
    if attempts > 0.0 {
        makes / attempts * 100.0
    } else {
        0.0
    }
}

/// Per-game season averages with accurate season shooting percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAverages {
    pub per_game: StatLine,
    /// sum(FGM) / sum(FGA) * 100 over the season
    pub fg_pct: f64,
    /// sum(FTM) / sum(FTA) * 100 over the season
    pub ft_pct: f64,
    /// Number of game records the averages were computed from
    pub games_played: usize,
}

/// A player's expected totals for one week
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedTotals {
    pub totals: StatLine,
    /// Carried over from the season averages; percentages do not scale
    pub fg_pct: f64,
    pub ft_pct: f64,
    /// Games the projection was scaled by
    pub games: u32,
}

/// Summed projections for a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTotals {
    /// Summed counting stats, including the raw makes and attempts
    pub totals: StatLine,
    /// Recomputed from summed FGM / FGA
    pub fg_pct: f64,
    /// Recomputed from summed FTM / FTA
    pub ft_pct: f64,
    pub player_count: usize,
}

impl AggregatedTotals {
    /// True when no players contributed to the totals
    pub fn is_empty(&self) -> bool {
        self.player_count == 0
    }
}
