pub mod lineup;
pub mod player;
pub mod quota;
pub mod request;

pub use lineup::Lineup;
pub use player::{Player, RiskTier};
pub use quota::{QuotaTable, LINEUP_SIZE};
pub use request::{RankingPreference, RiskPreference, SelectionRequest};
