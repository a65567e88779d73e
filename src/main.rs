use std::path::PathBuf;

use anyhow::Result;

use ncaam_features::pipeline::{self, PipelineConfig};

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = parse_path_arg("--data-dir").unwrap_or_else(|| PathBuf::from("data"));
    let mut config = PipelineConfig::from_data_dir(&data_dir);
    if let Some(out) = parse_path_arg("--out") {
        config.output = out;
    }

    let report = pipeline::run(&config)?;

    println!("Feature build complete");
    println!("Output: {}", report.output.display());
    println!(
        "Games: {} regular season, {} tournament",
        report.regular_games, report.tourney_games
    );
    println!("Feature rows written: {}", report.feature_rows);
    println!(
        "Season aggregates: {} teams, late-season form: {} teams",
        report.season_teams, report.form_teams
    );
    println!(
        "Ratings resolved: {} teams ({} names unresolved)",
        report.rating_teams, report.unresolved_names
    );
    println!("Seeds: {} teams", report.seed_teams);
    if report.malformed_rows > 0 {
        println!("Malformed input rows: {}", report.malformed_rows);
    }

    Ok(())
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let prefix = format!("{flag}=");
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}
