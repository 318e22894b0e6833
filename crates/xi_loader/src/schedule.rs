use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// One match description per line, trimmed, blank lines dropped
pub fn parse_schedule(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_schedule(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;

    let schedule = parse_schedule(&text);
    info!("Loaded {} matches from {}", schedule.len(), path.display());

    Ok(schedule)
}
