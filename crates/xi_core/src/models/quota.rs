use serde::{Deserialize, Serialize};

use super::player::RiskTier;
use super::request::RiskPreference;

/// Lineup size every quota table adds up to
pub const LINEUP_SIZE: usize = 11;

/// Number of lineup slots reserved per risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuotaTable {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl QuotaTable {
    pub const fn new(low: usize, medium: usize, high: usize) -> Self {
        Self { low, medium, high }
    }

    /// Fixed distribution for a risk profile
    pub fn for_preference(preference: RiskPreference) -> Self {
        match preference {
            RiskPreference::Low => Self::new(6, 3, 2),
            RiskPreference::Medium => Self::new(5, 4, 2),
            RiskPreference::High => Self::new(4, 3, 4),
        }
    }

    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }

    fn slot_mut(&mut self, tier: RiskTier) -> &mut usize {
        match tier {
            RiskTier::Low => &mut self.low,
            RiskTier::Medium => &mut self.medium,
            RiskTier::High => &mut self.high,
        }
    }

    /// Release one slot of `tier`, never below zero
    pub fn decrement(&mut self, tier: RiskTier) {
        let slot = self.slot_mut(tier);
        *slot = slot.saturating_sub(1);
    }

    pub fn increment(&mut self, tier: RiskTier) {
        *self.slot_mut(tier) += 1;
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}
