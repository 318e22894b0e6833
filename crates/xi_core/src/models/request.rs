use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceParseError;

/// Requested risk profile, selects the quota table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskPreference {
    #[default]
    Low,
    Medium,
    High,
}

impl FromStr for RiskPreference {
    type Err = PreferenceParseError;

    /// Empty input means the default profile
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "low" | "default" => Ok(RiskPreference::Low),
            "medium" => Ok(RiskPreference::Medium),
            "high" => Ok(RiskPreference::High),
            _ => Err(PreferenceParseError::UnknownRiskPreference(s.trim().to_string())),
        }
    }
}

impl fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskPreference::Low => "low",
            RiskPreference::Medium => "medium",
            RiskPreference::High => "high",
        };
        f.pad(name)
    }
}

/// Score used to rank players inside a risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPreference {
    Consistency,
    Upside,
    #[default]
    #[serde(rename = "points")]
    TotalPoints,
}

impl FromStr for RankingPreference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consistency" => Ok(RankingPreference::Consistency),
            "upside" => Ok(RankingPreference::Upside),
            "" | "points" | "total_fp" | "default" => Ok(RankingPreference::TotalPoints),
            _ => Err(PreferenceParseError::UnknownRankingPreference(s.trim().to_string())),
        }
    }
}

impl fmt::Display for RankingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankingPreference::Consistency => "consistency",
            RankingPreference::Upside => "upside",
            RankingPreference::TotalPoints => "points",
        };
        f.pad(name)
    }
}

/// User preferences for one lineup request
///
/// Field names on the wire follow the request body consumed by the
/// serving layer (`must_include_players`, `risk_rating`, `team_preference`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(rename = "must_include_players", default)]
    pub must_include: BTreeSet<String>,
    #[serde(rename = "risk_rating", default, deserialize_with = "lenient_preference")]
    pub risk: RiskPreference,
    #[serde(rename = "team_preference", default, deserialize_with = "lenient_preference")]
    pub ranking: RankingPreference,
}

impl SelectionRequest {
    pub fn new(risk: RiskPreference, ranking: RankingPreference) -> Self {
        Self { must_include: BTreeSet::new(), risk, ranking }
    }

    pub fn must_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_include.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Unknown or missing preference strings fall back to the default
fn lenient_preference<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = PreferenceParseError> + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(T::default());
    };

    match raw.parse::<T>() {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("{e}, using default");
            Ok(T::default())
        }
    }
}
