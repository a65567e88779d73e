use std::collections::HashMap;

use crate::season_stats::SeasonKey;
use crate::symmetrize::OrientedGame;

/// Day numbers beyond this point count toward the late-season form window,
/// roughly the final two weeks of a ~132-day regular season.
pub const LATE_SEASON_CUTOFF: i32 = 118;

/// Fraction of late-season games each (season, team) won, judged from the
/// team's own orientation row (`point_diff > 0`). Teams with no qualifying
/// games are absent from the map, which downstream treats as missing.
pub fn win_ratios(rows: &[OrientedGame]) -> HashMap<SeasonKey, f64> {
    let mut tallies: HashMap<SeasonKey, (u32, u32)> = HashMap::new();
    for row in rows {
        if row.day_num <= LATE_SEASON_CUTOFF {
            continue;
        }
        let (wins, games) = tallies.entry((row.season, row.t1_team_id)).or_default();
        *games += 1;
        if row.point_diff > 0 {
            *wins += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(key, (wins, games))| (key, f64::from(wins) / f64::from(games)))
        .collect()
}
