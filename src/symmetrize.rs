use crate::advanced_stats::{AdvancedLine, advanced_lines};
use crate::game::{BoxLine, GameRecord};

/// Which side of an oriented row a caller wants stats for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    T1,
    T2,
}

/// One game seen from a fixed Team1 perspective. Every raw record expands
/// into exactly two of these, mirror images of each other.
#[derive(Debug, Clone)]
pub struct OrientedGame {
    pub season: i32,
    pub day_num: i32,
    pub num_ot: i32,
    /// Venue sign from Team1's perspective: 1 home, -1 away, 0 neutral.
    pub location: i8,
    pub t1_team_id: u32,
    pub t2_team_id: u32,
    pub t1_score: i32,
    pub t2_score: i32,
    pub t1_box: Option<BoxLine>,
    pub t2_box: Option<BoxLine>,
    pub t1_adv: AdvancedLine,
    pub t2_adv: AdvancedLine,
    /// Always `t1_score - t2_score`.
    pub point_diff: i32,
}

/// Number of per-side stat columns: score, 13 box stats, 13 advanced
/// metrics, and the side-perspective point differential.
pub const SIDE_STAT_COUNT: usize = 28;

/// Stat column names for one side, in the order `side_values` returns them.
pub fn side_columns() -> [&'static str; SIDE_STAT_COUNT] {
    let mut out = [""; SIDE_STAT_COUNT];
    out[0] = "Score";
    out[1..14].copy_from_slice(&BoxLine::COLUMNS);
    out[14..27].copy_from_slice(&AdvancedLine::COLUMNS);
    out[27] = "PointDiff";
    out
}

impl OrientedGame {
    /// The 28 stat values for one side of this row. Box columns are missing
    /// when the raw row was malformed; advanced columns additionally go
    /// missing on zero denominators.
    pub fn side_values(&self, side: Side) -> [Option<f64>; SIDE_STAT_COUNT] {
        let (score, box_line, adv, diff) = match side {
            Side::T1 => (self.t1_score, &self.t1_box, &self.t1_adv, self.point_diff),
            Side::T2 => (self.t2_score, &self.t2_box, &self.t2_adv, -self.point_diff),
        };
        let mut out = [None; SIDE_STAT_COUNT];
        out[0] = Some(f64::from(score));
        if let Some(b) = box_line {
            for (slot, v) in out[1..14].iter_mut().zip(b.values()) {
                *slot = Some(v);
            }
        }
        for (slot, v) in out[14..27].iter_mut().zip(adv.values()) {
            *slot = v;
        }
        out[27] = Some(f64::from(diff));
        out
    }
}

/// Expands one winner/loser record into its two Team1-perspective
/// orientations. The first element keeps the winner as Team1 with the venue
/// as recorded; the second swaps the sides and flips home/away.
pub fn orient(game: &GameRecord) -> [OrientedGame; 2] {
    let (w_adv, l_adv) = match &game.boxes {
        Some((w, l)) => advanced_lines(w, l),
        None => (AdvancedLine::missing(), AdvancedLine::missing()),
    };
    let (w_box, l_box) = match &game.boxes {
        Some((w, l)) => (Some(*w), Some(*l)),
        None => (None, None),
    };

    let winner_first = OrientedGame {
        season: game.season,
        day_num: game.day_num,
        num_ot: game.num_ot,
        location: game.location.signed(),
        t1_team_id: game.w_team_id,
        t2_team_id: game.l_team_id,
        t1_score: game.w_score,
        t2_score: game.l_score,
        t1_box: w_box,
        t2_box: l_box,
        t1_adv: w_adv,
        t2_adv: l_adv,
        point_diff: game.w_score - game.l_score,
    };
    let loser_first = OrientedGame {
        location: game.location.flipped().signed(),
        t1_team_id: game.l_team_id,
        t2_team_id: game.w_team_id,
        t1_score: game.l_score,
        t2_score: game.w_score,
        t1_box: l_box,
        t2_box: w_box,
        t1_adv: l_adv,
        t2_adv: w_adv,
        point_diff: game.l_score - game.w_score,
        ..winner_first.clone()
    };
    [winner_first, loser_first]
}

/// Symmetrizes a batch, keeping the two orientations of each game adjacent
/// so output order is stable across runs.
pub fn symmetrize(games: &[GameRecord]) -> Vec<OrientedGame> {
    let mut out = Vec::with_capacity(games.len() * 2);
    for game in games {
        out.extend(orient(game));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Location;

    fn sample_game() -> GameRecord {
        let w = BoxLine {
            fgm: 28.0,
            fga: 60.0,
            fgm3: 6.0,
            fga3: 20.0,
            ftm: 13.0,
            fta: 18.0,
            off_reb: 11.0,
            def_reb: 24.0,
            ast: 15.0,
            to: 9.0,
            stl: 7.0,
            blk: 4.0,
            pf: 16.0,
        };
        let l = BoxLine {
            fgm: 24.0,
            fga: 63.0,
            fgm3: 5.0,
            fga3: 22.0,
            ftm: 7.0,
            fta: 11.0,
            off_reb: 9.0,
            def_reb: 20.0,
            ast: 12.0,
            to: 13.0,
            stl: 5.0,
            blk: 2.0,
            pf: 19.0,
        };
        GameRecord {
            season: 2021,
            day_num: 33,
            w_team_id: 1104,
            w_score: 75,
            l_team_id: 1202,
            l_score: 60,
            location: Location::Home,
            num_ot: 0,
            boxes: Some((w, l)),
        }
    }

    #[test]
    fn orientations_are_mirror_images() {
        let [a, b] = orient(&sample_game());

        assert_eq!(a.t1_team_id, b.t2_team_id);
        assert_eq!(a.t2_team_id, b.t1_team_id);
        assert_eq!(a.location, -b.location);
        assert_eq!(a.point_diff, -b.point_diff);
        assert_eq!(a.t1_box, b.t2_box);
        assert_eq!(a.t2_box, b.t1_box);
        assert_eq!(a.t1_adv, b.t2_adv);
        assert_eq!(a.side_values(Side::T1), b.side_values(Side::T2));
    }

    #[test]
    fn point_diff_matches_scores_and_winner() {
        let [a, b] = orient(&sample_game());
        assert_eq!(a.point_diff, a.t1_score - a.t2_score);
        assert_eq!(b.point_diff, b.t1_score - b.t2_score);
        // Winner-as-Team1 row is the positive one.
        assert!(a.point_diff > 0);
        assert!(b.point_diff < 0);
    }

    #[test]
    fn neutral_location_survives_flip() {
        let mut game = sample_game();
        game.location = Location::Neutral;
        let [a, b] = orient(&game);
        assert_eq!(a.location, 0);
        assert_eq!(b.location, 0);
    }

    #[test]
    fn malformed_boxes_still_orient() {
        let mut game = sample_game();
        game.boxes = None;
        let [a, _] = orient(&game);
        assert_eq!(a.t1_box, None);
        assert_eq!(a.t1_adv, AdvancedLine::missing());
        assert_eq!(a.point_diff, 15);
        // Score and point diff stay present in the stat view.
        let vals = a.side_values(Side::T1);
        assert_eq!(vals[0], Some(75.0));
        assert_eq!(vals[27], Some(15.0));
        assert_eq!(vals[1], None);
    }

    #[test]
    fn symmetrize_doubles_and_keeps_pairs_adjacent() {
        let games = vec![sample_game(), sample_game()];
        let rows = symmetrize(&games);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].t1_team_id, rows[1].t2_team_id);
        assert_eq!(rows[2].t1_team_id, rows[3].t2_team_id);
    }
}
