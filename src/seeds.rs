use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::season_stats::SeasonKey;

/// One row of the tournament seeds file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRow {
    #[serde(rename = "Season")]
    pub season: i32,
    #[serde(rename = "Seed")]
    pub seed: String,
    #[serde(rename = "TeamID")]
    pub team_id: u32,
}

/// Extracts the numeric rank from a seed code like "W01" or "X16a": the two
/// characters after the region letter, ignoring any play-in suffix. A code
/// without a two-digit rank is a hard contract violation.
pub fn parse_seed_rank(code: &str) -> Result<u8> {
    let digits = code
        .get(1..3)
        .ok_or_else(|| anyhow!("seed code {code:?} is too short for a two-digit rank"))?;
    digits
        .parse::<u8>()
        .with_context(|| format!("seed code {code:?} has a non-numeric rank"))
}

/// Seed rank per (season, team). Fails fast on the first invalid code.
pub fn seed_ranks(rows: &[SeedRow]) -> Result<HashMap<SeasonKey, u8>> {
    let mut out = HashMap::with_capacity(rows.len());
    for row in rows {
        let rank = parse_seed_rank(&row.seed)
            .with_context(|| format!("season {} team {}", row.season, row.team_id))?;
        out.insert((row.season, row.team_id), rank);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_play_in_codes() {
        assert_eq!(parse_seed_rank("W01").unwrap(), 1);
        assert_eq!(parse_seed_rank("X16a").unwrap(), 16);
        assert_eq!(parse_seed_rank("Z11b").unwrap(), 11);
    }

    #[test]
    fn rejects_single_digit_and_garbage() {
        assert!(parse_seed_rank("Y1").is_err());
        assert!(parse_seed_rank("W").is_err());
        assert!(parse_seed_rank("Wxy").is_err());
    }

    #[test]
    fn seed_ranks_keys_by_season_and_team() {
        let rows = vec![
            SeedRow {
                season: 2021,
                seed: "W01".to_string(),
                team_id: 1104,
            },
            SeedRow {
                season: 2021,
                seed: "X16a".to_string(),
                team_id: 1202,
            },
        ];
        let ranks = seed_ranks(&rows).unwrap();
        assert_eq!(ranks.get(&(2021, 1104)), Some(&1));
        assert_eq!(ranks.get(&(2021, 1202)), Some(&16));
    }
}
