use serde::Serialize;
use thiserror::Error;

/// Failures of the best-XI entry point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Match not found: index {index} (schedule has {available} matches)")]
    MatchNotFound { index: usize, available: usize },

    #[error("Invalid match format: '{description}'")]
    UnparsableMatch { description: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Client-facing classification of a [`SelectionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl ErrorKind {
    /// HTTP status a serving layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadRequest => 400,
            ErrorKind::Internal => 500,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl SelectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SelectionError::MatchNotFound { .. } => ErrorKind::NotFound,
            SelectionError::UnparsableMatch { .. } => ErrorKind::BadRequest,
            SelectionError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Rejected enum text at the ingestion or request boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceParseError {
    #[error("Unknown risk tier: '{0}'")]
    UnknownRiskTier(String),

    #[error("Unknown risk preference: '{0}'")]
    UnknownRiskPreference(String),

    #[error("Unknown ranking preference: '{0}'")]
    UnknownRankingPreference(String),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
