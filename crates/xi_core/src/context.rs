//! Loaded schedule and roster, plus the best-XI entry point
//!
//! A `DataContext` is built once at startup and never mutated, so it can be
//! shared by reference (or behind an `Arc`) between concurrent requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SelectionError};
use crate::fixture::{parse_match_teams, MatchTeams};
use crate::models::{Lineup, Player, SelectionRequest};
use crate::roster::players_for_match;
use crate::selector::select_lineup;

/// Result of a best-XI request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestXi {
    #[serde(rename = "match")]
    pub match_description: String,
    pub teams: MatchTeams,
    pub best_xi: Lineup,
}

#[derive(Debug, Clone, Default)]
pub struct DataContext {
    schedule: Vec<String>,
    roster: Vec<Player>,
}

impl DataContext {
    pub fn new(schedule: Vec<String>, roster: Vec<Player>) -> Self {
        info!(matches = schedule.len(), players = roster.len(), "data context ready");
        Self { schedule, roster }
    }

    /// Match descriptions in schedule order
    pub fn matches(&self) -> &[String] {
        &self.schedule
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn match_description(&self, index: usize) -> Result<&str> {
        self.schedule
            .get(index)
            .map(String::as_str)
            .ok_or(SelectionError::MatchNotFound { index, available: self.schedule.len() })
    }

    pub fn match_teams(&self, index: usize) -> Result<MatchTeams> {
        let description = self.match_description(index)?;
        parse_match_teams(description)
            .ok_or_else(|| SelectionError::UnparsableMatch { description: description.to_string() })
    }

    /// Every roster entry for both sides of a match, in roster order
    pub fn match_players(&self, index: usize) -> Result<(MatchTeams, Vec<&Player>)> {
        let teams = self.match_teams(index)?;
        let players = players_for_match(&self.roster, &teams);
        Ok((teams, players))
    }

    /// Resolve the match at `index` and pick its best XI
    pub fn best_xi(&self, index: usize, request: &SelectionRequest) -> Result<BestXi> {
        let (teams, players) = self.match_players(index)?;

        debug!(
            index,
            home = %teams.home,
            away = %teams.away,
            candidates = players.len(),
            risk = %request.risk,
            ranking = %request.ranking,
            "selecting best XI"
        );

        let lineup = select_lineup(&players, request);

        Ok(BestXi {
            match_description: self.schedule[index].clone(),
            teams,
            best_xi: lineup,
        })
    }
}
