use std::collections::HashMap;

use serde::Deserialize;

use crate::season_stats::SeasonKey;
use crate::team_identity::TeamNameIndex;

/// One row of the scraped efficiency-rating table, still keyed by the
/// source's free-text team name. Header names follow the scraper output.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRating {
    #[serde(rename = "Season")]
    pub season: i32,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Rk")]
    pub rank: Option<f64>,
    #[serde(rename = "AdjEM")]
    pub adj_em: Option<f64>,
    #[serde(rename = "AdjO")]
    pub adj_o: Option<f64>,
    #[serde(rename = "AdjD")]
    pub adj_d: Option<f64>,
    #[serde(rename = "AdjT")]
    pub adj_t: Option<f64>,
    #[serde(rename = "Luck")]
    pub luck: Option<f64>,
    #[serde(rename = "Strength of Schedule_AdjEM")]
    pub sos_adj_em: Option<f64>,
    #[serde(rename = "Strength of Schedule_OppO")]
    pub sos_opp_o: Option<f64>,
    #[serde(rename = "Strength of Schedule_OppD")]
    pub sos_opp_d: Option<f64>,
    #[serde(rename = "NCSOS_AdjEM")]
    pub ncsos_adj_em: Option<f64>,
}

/// The rating metrics once the team identity is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingLine {
    pub rank: Option<f64>,
    pub adj_em: Option<f64>,
    pub adj_o: Option<f64>,
    pub adj_d: Option<f64>,
    pub adj_t: Option<f64>,
    pub luck: Option<f64>,
    pub sos_adj_em: Option<f64>,
    pub sos_opp_o: Option<f64>,
    pub sos_opp_d: Option<f64>,
    pub ncsos_adj_em: Option<f64>,
}

impl RatingLine {
    pub const COLUMNS: [&'static str; 10] = [
        "Rk",
        "AdjEM",
        "AdjO",
        "AdjD",
        "AdjT",
        "Luck",
        "SOS_AdjEM",
        "SOS_OppO",
        "SOS_OppD",
        "NCSOS_AdjEM",
    ];

    pub fn values(&self) -> [Option<f64>; 10] {
        [
            self.rank,
            self.adj_em,
            self.adj_o,
            self.adj_d,
            self.adj_t,
            self.luck,
            self.sos_adj_em,
            self.sos_opp_o,
            self.sos_opp_d,
            self.ncsos_adj_em,
        ]
    }

    fn from_raw(raw: &RawRating) -> RatingLine {
        RatingLine {
            rank: raw.rank,
            adj_em: raw.adj_em,
            adj_o: raw.adj_o,
            adj_d: raw.adj_d,
            adj_t: raw.adj_t,
            luck: raw.luck,
            sos_adj_em: raw.sos_adj_em,
            sos_opp_o: raw.sos_opp_o,
            sos_opp_d: raw.sos_opp_d,
            ncsos_adj_em: raw.ncsos_adj_em,
        }
    }
}

/// Rating lines keyed by (season, resolved team id), plus how many source
/// rows failed identity resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRatings {
    pub by_team: HashMap<SeasonKey, RatingLine>,
    pub unresolved: usize,
}

/// Attaches stable team ids to the scraped rows. Unmatched names are
/// counted and logged, never guessed; their rows carry no id and drop out
/// of the identity-keyed joins.
pub fn resolve_ratings(raw: &[RawRating], names: &TeamNameIndex) -> ResolvedRatings {
    let mut out = ResolvedRatings::default();
    for row in raw {
        match names.resolve(&row.team) {
            Some(team_id) => {
                out.by_team
                    .insert((row.season, team_id), RatingLine::from_raw(row));
            }
            None => {
                log::debug!("unresolved rating name {:?} (season {})", row.team, row.season);
                out.unresolved += 1;
            }
        }
    }
    if out.unresolved > 0 {
        log::debug!("{} missing team ids in rating table", out.unresolved);
    }
    out
}
