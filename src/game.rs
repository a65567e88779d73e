/// Where a game was played, relative to the winning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Home,
    Away,
    Neutral,
}

impl Location {
    pub fn parse(raw: &str) -> Option<Location> {
        match raw.trim() {
            "H" => Some(Location::Home),
            "A" => Some(Location::Away),
            "N" => Some(Location::Neutral),
            _ => None,
        }
    }

    /// The same venue seen from the other side.
    pub fn flipped(self) -> Location {
        match self {
            Location::Home => Location::Away,
            Location::Away => Location::Home,
            Location::Neutral => Location::Neutral,
        }
    }

    /// Numeric encoding from the reference side's perspective:
    /// home 1, away -1, neutral 0.
    pub fn signed(self) -> i8 {
        match self {
            Location::Home => 1,
            Location::Away => -1,
            Location::Neutral => 0,
        }
    }
}

/// One side's counting stats from a raw box score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxLine {
    pub fgm: f64,
    pub fga: f64,
    pub fgm3: f64,
    pub fga3: f64,
    pub ftm: f64,
    pub fta: f64,
    pub off_reb: f64,
    pub def_reb: f64,
    pub ast: f64,
    pub to: f64,
    pub stl: f64,
    pub blk: f64,
    pub pf: f64,
}

impl BoxLine {
    pub const COLUMNS: [&'static str; 13] = [
        "FGM", "FGA", "FGM3", "FGA3", "FTM", "FTA", "OR", "DR", "Ast", "TO", "Stl", "Blk", "PF",
    ];

    pub fn values(&self) -> [f64; 13] {
        [
            self.fgm,
            self.fga,
            self.fgm3,
            self.fga3,
            self.ftm,
            self.fta,
            self.off_reb,
            self.def_reb,
            self.ast,
            self.to,
            self.stl,
            self.blk,
            self.pf,
        ]
    }

    /// Points implied by the made shots: two per field goal, one extra per
    /// three, one per free throw.
    pub fn points(&self) -> f64 {
        2.0 * self.fgm + self.fgm3 + self.ftm
    }
}

/// One completed game as loaded from a results file, still oriented
/// winner/loser the way the source records it.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub season: i32,
    pub day_num: i32,
    pub w_team_id: u32,
    pub w_score: i32,
    pub l_team_id: u32,
    pub l_score: i32,
    /// Relative to the winner.
    pub location: Location,
    pub num_ot: i32,
    /// Winner and loser box lines. `None` when the source row had
    /// unparseable stat cells; the game still symmetrizes on ids and scores,
    /// its derived stats just stay missing.
    pub boxes: Option<(BoxLine, BoxLine)>,
}
