use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::advanced_stats::AdvancedLine;
use crate::game::BoxLine;
use crate::ratings::RatingLine;
use crate::season_stats::{SeasonAverages, SeasonKey};
use crate::symmetrize::{OrientedGame, Side, side_columns};

/// Every derived table the assembler joins onto the tournament rows.
pub struct FeatureTables<'a> {
    pub season: &'a HashMap<SeasonKey, SeasonAverages>,
    pub form: &'a HashMap<SeasonKey, f64>,
    pub ratings: &'a HashMap<SeasonKey, RatingLine>,
    pub seeds: &'a HashMap<SeasonKey, u8>,
}

/// Output header, fixed across runs so reruns on unchanged inputs are
/// byte-identical.
static HEADER: Lazy<Vec<String>> = Lazy::new(|| {
    let mut cols: Vec<String> = [
        "Season", "DayNum", "NumOT", "Location", "T1_TeamID", "T2_TeamID", "T1_Score", "T2_Score",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    for side in ["T1", "T2"] {
        for name in BoxLine::COLUMNS {
            cols.push(format!("{side}_{name}"));
        }
        for name in AdvancedLine::COLUMNS {
            cols.push(format!("{side}_{name}"));
        }
    }
    cols.push("PointDiff".to_string());

    for side in ["T1", "T2"] {
        for name in side_columns() {
            cols.push(format!("{side}_{name}_mean"));
        }
        for name in side_columns() {
            cols.push(format!("{side}_opponent_{name}_mean"));
        }
    }

    cols.push("T1_win_ratio_14d".to_string());
    cols.push("T2_win_ratio_14d".to_string());

    for side in ["T1", "T2"] {
        for name in RatingLine::COLUMNS {
            cols.push(format!("{side}_{name}"));
        }
    }

    cols.push("T1_seed".to_string());
    cols.push("T2_seed".to_string());
    cols.push("SeedDiff".to_string());
    cols
});

pub fn header() -> &'static [String] {
    &HEADER
}

/// Left-joins every feature group onto the symmetrized tournament rows and
/// writes the wide table. Rows are anchored on the tournament games: a team
/// with no aggregate, form, rating, or seed entry keeps that group's cells
/// empty instead of losing the row. Returns the number of rows written.
pub fn write_feature_table(
    path: &Path,
    tourney_rows: &[OrientedGame],
    tables: &FeatureTables<'_>,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    writer
        .write_record(HEADER.iter())
        .context("write output header")?;

    let mut record: Vec<String> = Vec::with_capacity(HEADER.len());
    for row in tourney_rows {
        record.clear();
        push_row(&mut record, row, tables);
        debug_assert_eq!(record.len(), HEADER.len());
        writer
            .write_record(record.iter())
            .context("write feature row")?;
    }
    writer.flush().context("flush output file")?;
    Ok(tourney_rows.len())
}

fn push_row(record: &mut Vec<String>, row: &OrientedGame, tables: &FeatureTables<'_>) {
    record.push(row.season.to_string());
    record.push(row.day_num.to_string());
    record.push(row.num_ot.to_string());
    record.push(row.location.to_string());
    record.push(row.t1_team_id.to_string());
    record.push(row.t2_team_id.to_string());
    record.push(row.t1_score.to_string());
    record.push(row.t2_score.to_string());

    for side in [Side::T1, Side::T2] {
        let (box_line, adv) = match side {
            Side::T1 => (&row.t1_box, &row.t1_adv),
            Side::T2 => (&row.t2_box, &row.t2_adv),
        };
        match box_line {
            Some(b) => record.extend(b.values().map(fmt_f64)),
            None => record.extend(std::iter::repeat_n(String::new(), BoxLine::COLUMNS.len())),
        }
        record.extend(adv.values().map(fmt_opt));
    }
    record.push(row.point_diff.to_string());

    for team_id in [row.t1_team_id, row.t2_team_id] {
        match tables.season.get(&(row.season, team_id)) {
            Some(avg) => {
                record.extend(avg.own.iter().copied().map(fmt_opt));
                record.extend(avg.opponent.iter().copied().map(fmt_opt));
            }
            None => record.extend(std::iter::repeat_n(String::new(), 2 * avg_width())),
        }
    }

    for team_id in [row.t1_team_id, row.t2_team_id] {
        record.push(fmt_opt(tables.form.get(&(row.season, team_id)).copied()));
    }

    for team_id in [row.t1_team_id, row.t2_team_id] {
        match tables.ratings.get(&(row.season, team_id)) {
            Some(line) => record.extend(line.values().map(fmt_opt)),
            None => record.extend(std::iter::repeat_n(String::new(), RatingLine::COLUMNS.len())),
        }
    }

    let t1_seed = tables.seeds.get(&(row.season, row.t1_team_id)).copied();
    let t2_seed = tables.seeds.get(&(row.season, row.t2_team_id)).copied();
    record.push(t1_seed.map(|s| s.to_string()).unwrap_or_default());
    record.push(t2_seed.map(|s| s.to_string()).unwrap_or_default());
    let seed_diff = match (t1_seed, t2_seed) {
        (Some(a), Some(b)) => (i32::from(a) - i32::from(b)).to_string(),
        _ => String::new(),
    };
    record.push(seed_diff);
}

fn avg_width() -> usize {
    crate::symmetrize::SIDE_STAT_COUNT
}

fn fmt_f64(v: f64) -> String {
    // Plain Display keeps integers terse and stays deterministic run to run.
    v.to_string()
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt_f64).unwrap_or_default()
}
