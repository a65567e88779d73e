//! Feature engineering for NCAA tournament games: derives advanced
//! per-game stats from raw box scores, symmetrizes winner/loser records,
//! aggregates season and late-season form, resolves externally scraped
//! team names, and assembles one wide feature table per tournament game.

pub mod advanced_stats;
pub mod assemble;
pub mod dataset;
pub mod game;
pub mod pipeline;
pub mod ratings;
pub mod recent_form;
pub mod season_stats;
pub mod seeds;
pub mod symmetrize;
pub mod team_identity;
