//! Roster CSV → Vec<Player>
//!
//! Expected header (extra columns are ignored):
//! `fullName,Current_Team,position,Risk_Rating,Consistency,Upside_Potential,season,Total_FP`
//!
//! Every column is read as text first. Numeric columns that are empty or
//! malformed become `0.0` and are counted in [`ParseStats::defaulted_fields`];
//! a row with an unknown risk rating, no name, or fewer fields than the
//! header is skipped.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use xi_core::{Player, RiskTier};

/// Raw roster row, all fields as read from the file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterRecord {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "Current_Team")]
    pub team: String,
    pub position: String,
    #[serde(rename = "Risk_Rating")]
    pub risk_rating: String,
    #[serde(rename = "Consistency")]
    pub consistency: String,
    #[serde(rename = "Upside_Potential")]
    pub upside: String,
    pub season: String,
    #[serde(rename = "Total_FP")]
    pub total_points: String,
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    pub defaulted_fields: u32,
}

/// Lenient float: surrounding whitespace ignored, anything unusable is 0.0
fn parse_score(raw: &str, column: &str, row: u32, stats: &mut ParseStats) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            stats.defaulted_fields += 1;
            if !raw.trim().is_empty() {
                warn!("Line {} - Invalid {} value: '{}', using 0", row, column, raw.trim());
            }
            0.0
        }
    }
}

impl RosterRecord {
    /// Validate and convert one row; `Err` carries the reason the row is skipped
    fn into_player(self, row: u32, stats: &mut ParseStats) -> std::result::Result<Player, String> {
        let full_name = self.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err("missing fullName".to_string());
        }

        let risk: RiskTier = self.risk_rating.parse().map_err(|e| format!("{e}"))?;

        let consistency = parse_score(&self.consistency, "Consistency", row, stats);
        let upside = parse_score(&self.upside, "Upside_Potential", row, stats);
        let total_points = parse_score(&self.total_points, "Total_FP", row, stats);

        Ok(Player::new(
            full_name,
            self.team.trim(),
            self.position.trim(),
            risk,
            self.season.trim(),
        )
        .with_scores(consistency, upside, total_points))
    }
}

/// Parse roster CSV from any reader
///
/// # Returns
///
/// * `Ok((players, stats))` - players in file order
/// * `Err` - unreadable header, or not a single usable row
pub fn parse_roster_reader<R: Read>(reader: R) -> Result<(Vec<Player>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader.headers().context("Failed to read roster CSV header")?;

    let mut players = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.deserialize::<RosterRecord>() {
        stats.total_rows += 1;
        let row = stats.total_rows;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.failed += 1;
                warn!("Line {} - CSV parse error: {}", row, e);
                continue;
            }
        };

        match record.into_player(row, &mut stats) {
            Ok(player) => {
                players.push(player);
                stats.parsed += 1;
            }
            Err(reason) => {
                stats.failed += 1;
                warn!("Line {} - {}, skipping", row, reason);
            }
        }
    }

    if stats.parsed == 0 {
        anyhow::bail!("No valid players parsed from roster CSV ({} rows)", stats.total_rows);
    }

    Ok((players, stats))
}

/// Load roster CSV file
pub fn load_roster(csv_path: &Path) -> Result<(Vec<Player>, ParseStats)> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open roster CSV: {}", csv_path.display()))?;

    let (players, stats) = parse_roster_reader(file)
        .with_context(|| format!("Failed to parse roster CSV: {}", csv_path.display()))?;

    info!(
        "Parsed {} players (failed: {}, defaulted fields: {}, total rows: {})",
        stats.parsed, stats.failed, stats.defaulted_fields, stats.total_rows
    );

    Ok((players, stats))
}
