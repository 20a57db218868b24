//! Game configuration.
//!
//! Starting balances plus the bet presets and credit packages offered by the
//! presentation layer. Every field has a default, so a partial JSON document
//! only overrides what it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credits a new session starts with.
pub const DEFAULT_STARTING_CREDITS: i64 = 100;

/// Bet a new session starts with.
pub const DEFAULT_STARTING_BET: i64 = 1;

/// Bet presets offered to the player.
pub const DEFAULT_BET_OPTIONS: [i64; 3] = [1, 5, 10];

/// Credit packages the player can add.
pub const DEFAULT_CREDIT_PACKAGES: [i64; 6] = [10, 25, 50, 100, 250, 500];

/// Configuration for a slot machine session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_credits: i64,
    pub starting_bet: i64,
    pub bet_options: Vec<i64>,
    pub credit_packages: Vec<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
            starting_bet: DEFAULT_STARTING_BET,
            bet_options: DEFAULT_BET_OPTIONS.to_vec(),
            credit_packages: DEFAULT_CREDIT_PACKAGES.to_vec(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the game cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_credits < 0 {
            return Err(ConfigError::NegativeStartingCredits(self.starting_credits));
        }
        if self.starting_bet <= 0 {
            return Err(ConfigError::NonPositiveStartingBet(self.starting_bet));
        }
        if self.bet_options.is_empty() {
            return Err(ConfigError::NoBetOptions);
        }
        if let Some(&bad) = self.bet_options.iter().find(|&&b| b <= 0) {
            return Err(ConfigError::NonPositiveBetOption(bad));
        }
        if self.credit_packages.is_empty() {
            return Err(ConfigError::NoCreditPackages);
        }
        if let Some(&bad) = self.credit_packages.iter().find(|&&c| c <= 0) {
            return Err(ConfigError::NonPositiveCreditPackage(bad));
        }
        Ok(())
    }

    /// Bet preset at `index`, if any.
    pub fn bet_option(&self, index: usize) -> Option<i64> {
        self.bet_options.get(index).copied()
    }

    /// Credit package at `index`, if any.
    pub fn credit_package(&self, index: usize) -> Option<i64> {
        self.credit_packages.get(index).copied()
    }
}

/// Config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Starting credits cannot be negative (got {0})")]
    NegativeStartingCredits(i64),
    #[error("Starting bet must be positive (got {0})")]
    NonPositiveStartingBet(i64),
    #[error("At least one bet option is required")]
    NoBetOptions,
    #[error("Bet options must be positive (got {0})")]
    NonPositiveBetOption(i64),
    #[error("At least one credit package is required")]
    NoCreditPackages,
    #[error("Credit packages must be positive (got {0})")]
    NonPositiveCreditPackage(i64),
}
