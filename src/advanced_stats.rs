use crate::game::BoxLine;

/// Derived per-game efficiency metrics for one side. Every field is optional:
/// a zero denominator anywhere yields a missing value rather than an
/// infinity, and downstream means skip missing samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdvancedLine {
    pub pts: Option<f64>,
    pub possessions: Option<f64>,
    pub off_rtg: Option<f64>,
    pub def_rtg: Option<f64>,
    pub net_rtg: Option<f64>,
    pub ast_ratio: Option<f64>,
    pub to_ratio: Option<f64>,
    pub true_shooting: Option<f64>,
    pub efg_pct: Option<f64>,
    pub fta_rate: Option<f64>,
    pub off_reb_pct: Option<f64>,
    pub def_reb_pct: Option<f64>,
    pub total_reb_pct: Option<f64>,
}

impl AdvancedLine {
    pub const COLUMNS: [&'static str; 13] = [
        "Pts", "Pos", "OffRtg", "DefRtg", "NetRtg", "AstRatio", "TORatio", "TSPct", "eFGPct",
        "FTARate", "ORPct", "DRPct", "TRPct",
    ];

    /// All metrics missing, for games whose box score never parsed.
    pub fn missing() -> AdvancedLine {
        AdvancedLine::default()
    }

    pub fn values(&self) -> [Option<f64>; 13] {
        [
            self.pts,
            self.possessions,
            self.off_rtg,
            self.def_rtg,
            self.net_rtg,
            self.ast_ratio,
            self.to_ratio,
            self.true_shooting,
            self.efg_pct,
            self.fta_rate,
            self.off_reb_pct,
            self.def_reb_pct,
            self.total_reb_pct,
        ]
    }
}

/// Division that treats a zero denominator as a missing value instead of
/// producing an infinity or NaN.
pub fn ratio(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    let v = num / den;
    v.is_finite().then_some(v)
}

/// Computes both sides' advanced lines from one game's winner and loser box
/// scores. Purely row-wise; a side's defensive rating is the opponent's
/// offensive rating, net is the difference.
pub fn advanced_lines(winner: &BoxLine, loser: &BoxLine) -> (AdvancedLine, AdvancedLine) {
    let pos = shared_possessions(winner, loser);
    let w = side_line(winner, loser, pos);
    let l = side_line(loser, winner, pos);

    let w_net = match (w.off_rtg, l.off_rtg) {
        (Some(o), Some(d)) => Some(o - d),
        _ => None,
    };
    (
        AdvancedLine {
            def_rtg: l.off_rtg,
            net_rtg: w_net,
            ..w
        },
        AdvancedLine {
            def_rtg: w.off_rtg,
            net_rtg: w_net.map(|n| -n),
            ..l
        },
    )
}

/// Shared possession estimate: the average of each side's independent
/// estimate 0.96 * (FGA + TO + 0.44*FTA - OR).
fn shared_possessions(a: &BoxLine, b: &BoxLine) -> f64 {
    0.96 * ((a.fga + b.fga) + (a.to + b.to) + 0.44 * (a.fta + b.fta) - (a.off_reb + b.off_reb))
        / 2.0
}

fn side_line(own: &BoxLine, opp: &BoxLine, pos: f64) -> AdvancedLine {
    let pts = own.points();
    let play_denom = own.fga + 0.44 * own.fta + own.ast + own.to;
    AdvancedLine {
        pts: Some(pts),
        possessions: Some(pos),
        off_rtg: ratio(100.0 * pts, pos),
        def_rtg: None,
        net_rtg: None,
        ast_ratio: ratio(100.0 * own.ast, play_denom),
        to_ratio: ratio(100.0 * own.to, play_denom),
        true_shooting: ratio(100.0 * pts, 2.0 * (own.fga + 0.44 * own.fta)),
        efg_pct: ratio(own.fgm + 0.5 * own.fgm3, own.fga),
        fta_rate: ratio(own.fta, own.fga),
        off_reb_pct: ratio(own.off_reb, own.off_reb + opp.def_reb),
        def_reb_pct: ratio(own.def_reb, own.def_reb + opp.off_reb),
        total_reb_pct: ratio(
            own.off_reb + own.def_reb,
            own.off_reb + own.def_reb + opp.off_reb + opp.def_reb,
        ),
    }
}
