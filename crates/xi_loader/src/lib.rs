//! XI Loader Library
//!
//! Schedule text + roster CSV → immutable `DataContext`

pub mod roster_csv;
pub mod schedule;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use xi_core::{DataContext, SelectionRequest};

pub use roster_csv::{load_roster, parse_roster_reader, ParseStats, RosterRecord};
pub use schedule::{load_schedule, parse_schedule};

/// Default schedule file, relative to the working directory
pub const DEFAULT_SCHEDULE_PATH: &str = "IPL_2025_Schedule.txt";

/// Default roster file, relative to the working directory
pub const DEFAULT_ROSTER_PATH: &str = "IPL_FantasyData.csv";

/// Env var overriding the schedule path
pub const SCHEDULE_PATH_ENV: &str = "XI_SCHEDULE_PATH";

/// Env var overriding the roster path
pub const ROSTER_PATH_ENV: &str = "XI_ROSTER_PATH";

/// Load both data sources into a `DataContext`
///
/// # Arguments
///
/// * `schedule_path` - match list, one description per line
/// * `roster_path` - roster CSV
///
/// # Returns
///
/// The data context and the roster parse statistics
pub fn load_context(schedule_path: &Path, roster_path: &Path) -> Result<(DataContext, ParseStats)> {
    let schedule = load_schedule(schedule_path)?;
    let (players, stats) = load_roster(roster_path)?;

    Ok((DataContext::new(schedule, players), stats))
}

/// Read a JSON selection request document
pub fn load_request(path: &Path) -> Result<SelectionRequest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;

    parse_request(&text).with_context(|| format!("Invalid request JSON: {}", path.display()))
}

pub fn parse_request(json: &str) -> Result<SelectionRequest> {
    Ok(serde_json::from_str(json)?)
}
