//! # xi_core - Fantasy XI Lineup Selection
//!
//! Picks an 11-player fantasy lineup for a scheduled match from a roster of
//! player records, using fixed risk-tier quotas, must-include players and a
//! ranking preference.
//!
//! ## Features
//! - Pure, deterministic selection (same inputs = same lineup)
//! - Closed enums for risk tiers and preferences
//! - Immutable `DataContext` instead of global state
//! - JSON response envelope for serving layers

pub mod api;
pub mod context;
pub mod error;
pub mod fixture;
pub mod models;
pub mod roster;
pub mod selector;

pub use api::{ApiError, ApiResponse, API_VERSION};
pub use context::{BestXi, DataContext};
pub use error::{ErrorKind, PreferenceParseError, Result, SelectionError};
pub use fixture::{parse_match_teams, MatchTeams};
pub use models::{
    Lineup, Player, QuotaTable, RankingPreference, RiskPreference, RiskTier, SelectionRequest,
    LINEUP_SIZE,
};
pub use roster::{players_for_match, players_for_teams};
pub use selector::{ranking_score, select_lineup, CURRENT_SEASON};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
