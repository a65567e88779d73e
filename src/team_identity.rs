use std::collections::HashMap;

use serde::Deserialize;

/// One row of the canonical team table.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "TeamID")]
    pub team_id: u32,
    #[serde(rename = "TeamName")]
    pub team_name: String,
}

/// One row of the alias spellings table; many spellings map to one team.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellingRow {
    #[serde(rename = "TeamID")]
    pub team_id: u32,
    #[serde(rename = "TeamNameSpelling")]
    pub spelling: String,
}

/// Ordered literal fixes for externally sourced spellings that the general
/// normalization passes cannot reconcile with the canonical table. Applied
/// in sequence after normalization; later rules see earlier rules' output,
/// and new entries are additive.
static NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("ut rio grande valley", "texas rio grande valley"),
    ("texas a&m corpus chris", "a&m corpus chris"),
    ("southwest missouri state", "sw missouri state"),
    ("texas a&m corpus christi", "a&m corpus christi"),
    ("cal st. bakersfield", "cal state bakersfield"),
    ("st. francis pa", "st francis pa"),
    ("troy state", "troy"),
];

/// Normalizes a free-text name from the external rating feed: lowercase,
/// drop embedded digits (rating sites append seeds to names), expand a
/// trailing " st"/" st." to " state", drop parentheses and asterisks, turn
/// hyphens into spaces, then run the literal correction table.
pub fn normalize_external_name(raw: &str) -> String {
    let mut name = raw.to_lowercase();
    name = strip_digits(&name);
    name = expand_trailing_st(&name);
    name.retain(|c| !matches!(c, '(' | ')' | '*'));
    name = name.replace('-', " ");
    for (from, to) in NAME_CORRECTIONS {
        name = name.replace(from, to);
    }
    name.trim().to_string()
}

/// Canonical and alias names only need the cheap half of the pipeline.
fn normalize_reference_name(raw: &str) -> String {
    raw.to_lowercase().replace('-', " ").trim().to_string()
}

/// Removes every digit along with one space directly before it, so
/// "gonzaga 1" and "tcu2" both lose their rank suffix cleanly.
fn strip_digits(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_digit() {
            if out.ends_with(' ') {
                out.pop();
            }
            continue;
        }
        out.push(ch);
    }
    out
}

fn expand_trailing_st(name: &str) -> String {
    if let Some(stem) = name
        .strip_suffix(" st.")
        .or_else(|| name.strip_suffix(" st"))
    {
        return format!("{stem} state");
    }
    name.to_string()
}

/// Normalized-name lookup over the canonical team list plus the alias table.
/// Season-independent: a spelling resolves to the same team id every year.
#[derive(Debug, Clone, Default)]
pub struct TeamNameIndex {
    by_name: HashMap<String, u32>,
}

impl TeamNameIndex {
    pub fn build(teams: &[TeamRow], spellings: &[SpellingRow]) -> TeamNameIndex {
        let mut by_name = HashMap::with_capacity(teams.len() + spellings.len());
        for team in teams {
            by_name.insert(normalize_reference_name(&team.team_name), team.team_id);
        }
        for row in spellings {
            // Canonical names win over aliases on collision.
            by_name
                .entry(normalize_reference_name(&row.spelling))
                .or_insert(row.team_id);
        }
        TeamNameIndex { by_name }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolves a free-text external name to a team id, or `None` when no
    /// normalized spelling matches. The caller counts misses; resolution
    /// never guesses.
    pub fn resolve(&self, raw_name: &str) -> Option<u32> {
        self.by_name.get(&normalize_external_name(raw_name)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TeamNameIndex {
        let teams = vec![
            TeamRow {
                team_id: 1394,
                team_name: "TAM C. Christi".to_string(),
            },
            TeamRow {
                team_id: 1112,
                team_name: "Arizona".to_string(),
            },
            TeamRow {
                team_id: 1413,
                team_name: "UAB".to_string(),
            },
        ];
        let spellings = vec![
            SpellingRow {
                team_id: 1394,
                spelling: "a&m-corpus chris".to_string(),
            },
            SpellingRow {
                team_id: 1413,
                spelling: "alabama-birmingham".to_string(),
            },
        ];
        TeamNameIndex::build(&teams, &spellings)
    }

    #[test]
    fn digits_and_decorations_are_stripped() {
        assert_eq!(normalize_external_name("Gonzaga 1"), "gonzaga");
        assert_eq!(normalize_external_name("Duke2"), "duke");
        assert_eq!(normalize_external_name("Purdue* (NCAA)"), "purdue ncaa");
    }

    #[test]
    fn trailing_st_becomes_state() {
        assert_eq!(normalize_external_name("Michigan St."), "michigan state");
        assert_eq!(normalize_external_name("Ohio St"), "ohio state");
        // Mid-string "st." is left for the correction table.
        assert_eq!(
            normalize_external_name("Cal St. Bakersfield"),
            "cal state bakersfield"
        );
    }

    #[test]
    fn corrections_chain_in_order() {
        // The shorter corpus-chris rule fires first; the alias table carries
        // the resulting spelling.
        assert_eq!(
            normalize_external_name("Texas A&M Corpus Chris"),
            "a&m corpus chris"
        );
        assert_eq!(normalize_external_name("Troy State"), "troy");
        assert_eq!(
            normalize_external_name("UT Rio Grande Valley"),
            "texas rio grande valley"
        );
    }

    #[test]
    fn resolves_via_alias_table() {
        let idx = index();
        assert_eq!(idx.resolve("Texas A&M Corpus Chris 12"), Some(1394));
        assert_eq!(idx.resolve("Alabama-Birmingham"), Some(1413));
        assert_eq!(idx.resolve("Arizona 1"), Some(1112));
        assert_eq!(idx.resolve("Nowhere Tech"), None);
    }
}
