use serde::{Deserialize, Serialize};

use super::player::Player;
use super::quota::QuotaTable;

/// Selected players in pick order: must-include first, then Low, Medium, High fills
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    pub players: Vec<Player>,
}

impl Lineup {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.players.iter().any(|p| p.full_name == full_name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.full_name.as_str()).collect()
    }

    /// How many selected players fall in each risk tier
    pub fn tier_counts(&self) -> QuotaTable {
        let mut counts = QuotaTable::default();
        for player in &self.players {
            counts.increment(player.risk);
        }
        counts
    }

    pub fn total_points(&self) -> f64 {
        self.players.iter().map(|p| p.total_points).sum()
    }
}

impl<'a> IntoIterator for &'a Lineup {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
