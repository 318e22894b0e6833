use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceParseError;

/// Score volatility label attached to every player
///
/// Declaration order is the order tiers are filled in a lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// All tiers in fill order
    pub fn all() -> &'static [RiskTier] {
        &[RiskTier::Low, RiskTier::Medium, RiskTier::High]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RiskTier {
    type Err = PreferenceParseError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "medium" => Ok(RiskTier::Medium),
            "high" => Ok(RiskTier::High),
            _ => Err(PreferenceParseError::UnknownRiskTier(s.trim().to_string())),
        }
    }
}

/// One season of fantasy data for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub full_name: String,
    pub team: String,
    pub position: String,
    pub risk: RiskTier,
    pub consistency: f64,
    pub upside: f64,
    pub season: String,
    pub total_points: f64,
}

impl Player {
    pub fn new(
        full_name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
        risk: RiskTier,
        season: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            team: team.into(),
            position: position.into(),
            risk,
            consistency: 0.0,
            upside: 0.0,
            season: season.into(),
            total_points: 0.0,
        }
    }

    /// Builder-style setter for the three ranking scores
    pub fn with_scores(mut self, consistency: f64, upside: f64, total_points: f64) -> Self {
        self.consistency = consistency;
        self.upside = upside;
        self.total_points = total_points;
        self
    }
}
