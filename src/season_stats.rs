use std::collections::HashMap;

use crate::symmetrize::{OrientedGame, SIDE_STAT_COUNT, Side};

/// Key for every per-team derived table: (season, team id).
pub type SeasonKey = (i32, u32);

/// Running mean that skips missing samples instead of counting them as zero.
#[derive(Debug, Clone, Copy, Default)]
struct MeanAcc {
    sum: f64,
    count: u32,
}

impl MeanAcc {
    fn push(&mut self, sample: Option<f64>) {
        if let Some(v) = sample {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// Season-long averages for one team: its own production and what it allowed
/// its opponents, column-for-column.
#[derive(Debug, Clone)]
pub struct SeasonAverages {
    pub games: u32,
    pub own: [Option<f64>; SIDE_STAT_COUNT],
    pub opponent: [Option<f64>; SIDE_STAT_COUNT],
}

#[derive(Debug, Clone)]
struct SeasonAcc {
    games: u32,
    own: [MeanAcc; SIDE_STAT_COUNT],
    opponent: [MeanAcc; SIDE_STAT_COUNT],
}

impl Default for SeasonAcc {
    fn default() -> Self {
        Self {
            games: 0,
            own: [MeanAcc::default(); SIDE_STAT_COUNT],
            opponent: [MeanAcc::default(); SIDE_STAT_COUNT],
        }
    }
}

/// Groups oriented regular-season rows by (season, Team1) and averages each
/// stat column. Because every game appears in both orientations, grouping on
/// the Team1 side alone covers every team's full schedule; the Team2 side of
/// the same rows supplies the opponent-allowed flavor.
pub fn season_averages(rows: &[OrientedGame]) -> HashMap<SeasonKey, SeasonAverages> {
    let mut acc: HashMap<SeasonKey, SeasonAcc> = HashMap::new();
    for row in rows {
        let entry = acc.entry((row.season, row.t1_team_id)).or_default();
        entry.games += 1;
        for (slot, v) in entry.own.iter_mut().zip(row.side_values(Side::T1)) {
            slot.push(v);
        }
        for (slot, v) in entry.opponent.iter_mut().zip(row.side_values(Side::T2)) {
            slot.push(v);
        }
    }

    acc.into_iter()
        .map(|(key, a)| {
            (
                key,
                SeasonAverages {
                    games: a.games,
                    own: a.own.map(|m| m.mean()),
                    opponent: a.opponent.map(|m| m.mean()),
                },
            )
        })
        .collect()
}
