//! Fixture descriptions of the form `M<number> - <team A> vs <team B>`

use serde::{Deserialize, Serialize};

const TEAM_SEPARATOR: &str = " vs ";
const NUMBER_SEPARATOR: &str = " - ";

/// The two sides of a scheduled match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchTeams {
    pub home: String,
    pub away: String,
}

impl MatchTeams {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self { home: home.into(), away: away.into() }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

/// Extract both team names from a fixture description
///
/// The `M<number> - ` prefix must start the text. When the team part holds
/// more than one `" vs "`, the home side runs up to the last one. Returns
/// `None` for anything else, including a side that is blank after trimming.
pub fn parse_match_teams(description: &str) -> Option<MatchTeams> {
    let line = description.lines().next()?;

    let rest = line.strip_prefix('M')?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let body = rest[digits..].strip_prefix(NUMBER_SEPARATOR)?;

    let (idx, _) = body
        .rmatch_indices(TEAM_SEPARATOR)
        .find(|(idx, _)| *idx > 0 && idx + TEAM_SEPARATOR.len() < body.len())?;

    let home = body[..idx].trim();
    let away = body[idx + TEAM_SEPARATOR.len()..].trim();
    if home.is_empty() || away.is_empty() {
        return None;
    }

    Some(MatchTeams::new(home, away))
}
