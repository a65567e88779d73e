use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use csv::StringRecord;
use serde::de::DeserializeOwned;

use crate::game::{BoxLine, GameRecord, Location};
use crate::ratings::RawRating;
use crate::seeds::SeedRow;
use crate::team_identity::{SpellingRow, TeamRow};

const BOX_SUFFIXES: [&str; 13] = [
    "FGM", "FGA", "FGM3", "FGA3", "FTM", "FTA", "OR", "DR", "Ast", "TO", "Stl", "Blk", "PF",
];

/// Result of loading one results file: the usable games plus how many source
/// rows were degraded or dropped on the way in.
#[derive(Debug, Clone, Default)]
pub struct GameLoadReport {
    pub games: Vec<GameRecord>,
    pub malformed_rows: usize,
}

struct GameColumns {
    season: usize,
    day_num: usize,
    w_team: usize,
    w_score: usize,
    l_team: usize,
    l_score: usize,
    location: usize,
    num_ot: usize,
    w_box: [usize; 13],
    l_box: [usize; 13],
}

impl GameColumns {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<GameColumns> {
        let find = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                anyhow!("{}: missing required column {name}", path.display())
            })
        };
        let mut w_box = [0usize; 13];
        let mut l_box = [0usize; 13];
        for (i, suffix) in BOX_SUFFIXES.iter().enumerate() {
            w_box[i] = find(&format!("W{suffix}"))?;
            l_box[i] = find(&format!("L{suffix}"))?;
        }
        Ok(GameColumns {
            season: find("Season")?,
            day_num: find("DayNum")?,
            w_team: find("WTeamID")?,
            w_score: find("WScore")?,
            l_team: find("LTeamID")?,
            l_score: find("LScore")?,
            location: find("WLoc")?,
            num_ot: find("NumOT")?,
            w_box,
            l_box,
        })
    }
}

/// Loads a detailed-results file. Header-indexed so one bad cell degrades
/// one row: unparseable identity fields drop the row, unparseable box cells
/// keep the game but leave its box lines (and so its derived stats) missing.
/// A missing column is structural and aborts.
pub fn load_game_records(path: &Path) -> Result<GameLoadReport> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open results file {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .clone();
    let cols = GameColumns::from_headers(&headers, path)?;

    let mut report = GameLoadReport::default();
    for (idx, record) in rdr.records().enumerate() {
        let line = idx + 2; // header is line 1
        let record = match record {
            Ok(rec) => rec,
            Err(err) => {
                log::warn!("{}:{line}: unreadable row: {err}", path.display());
                report.malformed_rows += 1;
                continue;
            }
        };

        let identity = (
            field::<i32>(&record, cols.season),
            field::<i32>(&record, cols.day_num),
            field::<u32>(&record, cols.w_team),
            field::<i32>(&record, cols.w_score),
            field::<u32>(&record, cols.l_team),
            field::<i32>(&record, cols.l_score),
            record.get(cols.location).and_then(Location::parse),
            field::<i32>(&record, cols.num_ot),
        );
        let (
            Some(season),
            Some(day_num),
            Some(w_team_id),
            Some(w_score),
            Some(l_team_id),
            Some(l_score),
            Some(location),
            Some(num_ot),
        ) = identity
        else {
            log::warn!("{}:{line}: dropping row with malformed keys", path.display());
            report.malformed_rows += 1;
            continue;
        };

        let boxes = match (
            parse_box(&record, &cols.w_box),
            parse_box(&record, &cols.l_box),
        ) {
            (Some(w), Some(l)) => Some((w, l)),
            _ => {
                log::warn!(
                    "{}:{line}: season {season} day {day_num} {w_team_id} vs {l_team_id}: \
                     malformed box score, derived stats will be missing",
                    path.display()
                );
                report.malformed_rows += 1;
                None
            }
        };

        report.games.push(GameRecord {
            season,
            day_num,
            w_team_id,
            w_score,
            l_team_id,
            l_score,
            location,
            num_ot,
            boxes,
        });
    }
    Ok(report)
}

fn field<T: FromStr>(record: &StringRecord, idx: usize) -> Option<T> {
    record.get(idx)?.trim().parse::<T>().ok()
}

fn parse_box(record: &StringRecord, cols: &[usize; 13]) -> Option<BoxLine> {
    let mut vals = [0.0f64; 13];
    for (slot, idx) in vals.iter_mut().zip(cols) {
        *slot = field::<f64>(record, *idx)?;
    }
    let [fgm, fga, fgm3, fga3, ftm, fta, off_reb, def_reb, ast, to, stl, blk, pf] = vals;
    Some(BoxLine {
        fgm,
        fga,
        fgm3,
        fga3,
        ftm,
        fta,
        off_reb,
        def_reb,
        ast,
        to,
        stl,
        blk,
        pf,
    })
}

/// Serde-backed loader for the reference tables. Missing required columns
/// abort; individual undecodable rows are warned about and skipped, with the
/// skip count returned alongside the rows.
fn load_rows<T: DeserializeOwned>(
    path: &Path,
    required: &[&str],
    label: &str,
) -> Result<(Vec<T>, usize)> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {label} file {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .clone();
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            bail!("{}: missing required column {col}", path.display());
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (idx, row) in rdr.deserialize::<T>().enumerate() {
        match row {
            Ok(row) => rows.push(row),
            Err(err) => {
                log::warn!("{}:{}: skipping {label} row: {err}", path.display(), idx + 2);
                skipped += 1;
            }
        }
    }
    Ok((rows, skipped))
}

pub fn load_seed_rows(path: &Path) -> Result<(Vec<SeedRow>, usize)> {
    load_rows(path, &["Season", "Seed", "TeamID"], "seeds")
}

pub fn load_team_rows(path: &Path) -> Result<(Vec<TeamRow>, usize)> {
    load_rows(path, &["TeamID", "TeamName"], "teams")
}

pub fn load_spelling_rows(path: &Path) -> Result<(Vec<SpellingRow>, usize)> {
    load_rows(path, &["TeamID", "TeamNameSpelling"], "team spellings")
}

pub fn load_rating_rows(path: &Path) -> Result<(Vec<RawRating>, usize)> {
    load_rows(path, &["Season", "Team"], "ratings")
}
