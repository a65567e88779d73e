use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::assemble::{FeatureTables, write_feature_table};
use crate::dataset;
use crate::ratings::resolve_ratings;
use crate::recent_form::win_ratios;
use crate::season_stats::season_averages;
use crate::seeds::seed_ranks;
use crate::symmetrize::symmetrize;
use crate::team_identity::TeamNameIndex;

/// Paths to the five input files and the output table.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub regular_results: PathBuf,
    pub tourney_results: PathBuf,
    pub seeds: PathBuf,
    pub teams: PathBuf,
    pub spellings: PathBuf,
    pub ratings: PathBuf,
    pub output: PathBuf,
}

impl PipelineConfig {
    /// Standard layout under one data directory: competition files under
    /// `external/`, the scraped rating table under `raw/`, output under
    /// `processed/`.
    pub fn from_data_dir(dir: &Path) -> PipelineConfig {
        let external = dir.join("external");
        PipelineConfig {
            regular_results: external.join("MRegularSeasonDetailedResults.csv"),
            tourney_results: external.join("MNCAATourneyDetailedResults.csv"),
            seeds: external.join("MNCAATourneySeeds.csv"),
            teams: external.join("MTeams.csv"),
            spellings: external.join("MTeamSpellings.csv"),
            ratings: dir.join("raw").join("kenpom.csv"),
            output: dir.join("processed").join("tourney_data.csv"),
        }
    }
}

/// End-of-run diagnostics, returned rather than kept in global state so runs
/// compose and test in isolation.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub regular_games: usize,
    pub tourney_games: usize,
    pub malformed_rows: usize,
    pub season_teams: usize,
    pub form_teams: usize,
    pub seed_teams: usize,
    pub rating_teams: usize,
    pub unresolved_names: usize,
    pub feature_rows: usize,
    pub output: PathBuf,
}

/// Runs the whole feature pipeline: load, derive, symmetrize, aggregate,
/// resolve, join, write. One pass, no retained state between runs.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    log::info!("building features");
    let mut malformed_rows = 0usize;

    let regular = dataset::load_game_records(&config.regular_results)
        .context("load regular-season results")?;
    let tourney =
        dataset::load_game_records(&config.tourney_results).context("load tournament results")?;
    malformed_rows += regular.malformed_rows + tourney.malformed_rows;

    let regular_rows = symmetrize(&regular.games);
    let tourney_rows = symmetrize(&tourney.games);
    log::info!(
        "symmetrized {} regular-season and {} tournament rows",
        regular_rows.len(),
        tourney_rows.len()
    );

    let season = season_averages(&regular_rows);
    let form = win_ratios(&regular_rows);

    let (seed_rows, seeds_skipped) = dataset::load_seed_rows(&config.seeds)?;
    malformed_rows += seeds_skipped;
    let seeds = seed_ranks(&seed_rows).context("parse tournament seeds")?;

    let (team_rows, teams_skipped) = dataset::load_team_rows(&config.teams)?;
    let (spelling_rows, spellings_skipped) = dataset::load_spelling_rows(&config.spellings)?;
    malformed_rows += teams_skipped + spellings_skipped;
    let names = TeamNameIndex::build(&team_rows, &spelling_rows);
    log::debug!("team name index holds {} spellings", names.len());

    let (rating_rows, ratings_skipped) = dataset::load_rating_rows(&config.ratings)?;
    malformed_rows += ratings_skipped;
    let resolved = resolve_ratings(&rating_rows, &names);

    if let Some(parent) = config.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let tables = FeatureTables {
        season: &season,
        form: &form,
        ratings: &resolved.by_team,
        seeds: &seeds,
    };
    let feature_rows = write_feature_table(&config.output, &tourney_rows, &tables)?;
    log::info!(
        "wrote {feature_rows} feature rows to {}",
        config.output.display()
    );

    Ok(PipelineReport {
        regular_games: regular.games.len(),
        tourney_games: tourney.games.len(),
        malformed_rows,
        season_teams: season.len(),
        form_teams: form.len(),
        seed_teams: seeds.len(),
        rating_teams: resolved.by_team.len(),
        unresolved_names: resolved.unresolved,
        feature_rows,
        output: config.output.clone(),
    })
}
