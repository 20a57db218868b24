//! Game engine.
//!
//! Owns one [`SlotState`] and a [`SymbolSource`], runs rounds, and queues
//! [`GameEvent`]s for the presentation layer (sounds, popups, redraws).
//!
//! # Round
//!
//! ```text
//! idle ──start_check──▶ perform_spin ──▶ totals updated ──▶ idle
//!   │                                          │
//!   └── NoCredits / InsufficientCredits        └── CreditsDepleted (balance 0)
//! ```

use std::collections::VecDeque;

use thiserror::Error;
use tracing::debug;

use super::config::GameConfig;
use super::machine::{winning_symbol, SlotState, REEL_COUNT};
use super::rng::{RandomSymbols, SymbolSource};
use super::symbol::Symbol;

/// Events kept before the oldest undrained ones are dropped.
pub const MAX_PENDING_EVENTS: usize = 64;

/// Why a round cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartBlocker {
    /// Balance is empty; the player should add credits.
    #[error("No credits left")]
    NoCredits,
    /// Balance does not cover the current bet, or is negative.
    #[error("Not enough credits")]
    InsufficientCredits,
}

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Unknown bet option {0}")]
    UnknownBetOption(usize),
    #[error("Unknown credit package {0}")]
    UnknownCreditPackage(usize),
}

/// Result of one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub symbols: [Symbol; REEL_COUNT],
    pub won: bool,
    /// Amount added to the win total (0 on a loss).
    pub payout: i64,
}

impl SpinOutcome {
    pub fn winning_symbol(&self) -> Option<Symbol> {
        if self.won {
            winning_symbol(&self.symbols)
        } else {
            None
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "symbols": self.symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            "won": self.won,
            "payout": self.payout
        })
    }
}

/// Notifications emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CreditsAdded { amount: i64, credit_total: i64 },
    BetChanged { bet_amount: i64 },
    SpinCompleted {
        outcome: SpinOutcome,
        credit_total: i64,
        win_total: i64,
    },
    /// Balance hit zero after a spin.
    CreditsDepleted,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditsAdded { .. } => "credits_added",
            Self::BetChanged { .. } => "bet_changed",
            Self::SpinCompleted { .. } => "spin_completed",
            Self::CreditsDepleted => "credits_depleted",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({ "type": self.as_str() });
        match self {
            Self::CreditsAdded {
                amount,
                credit_total,
            } => {
                obj["amount"] = serde_json::json!(amount);
                obj["credit_total"] = serde_json::json!(credit_total);
            }
            Self::BetChanged { bet_amount } => {
                obj["bet_amount"] = serde_json::json!(bet_amount);
            }
            Self::SpinCompleted {
                outcome,
                credit_total,
                win_total,
            } => {
                obj["outcome"] = outcome.to_json();
                obj["credit_total"] = serde_json::json!(credit_total);
                obj["win_total"] = serde_json::json!(win_total);
            }
            Self::CreditsDepleted => {}
        }
        obj
    }
}

/// Runs slot machine rounds for a single session.
#[derive(Debug, Clone)]
pub struct GameEngine<S = RandomSymbols> {
    slot: SlotState,
    config: GameConfig,
    source: S,
    events: VecDeque<GameEvent>,
}

impl GameEngine<RandomSymbols> {
    /// Default config, symbols drawn from an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_source(RandomSymbols::from_entropy())
    }
}

impl Default for GameEngine<RandomSymbols> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SymbolSource> GameEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self::with_config(GameConfig::default(), source)
    }

    pub fn with_config(config: GameConfig, source: S) -> Self {
        Self {
            slot: SlotState::from_config(&config),
            config,
            source,
            events: VecDeque::new(),
        }
    }

    /// Current credit/bet/win snapshot.
    pub fn slot_state(&self) -> &SlotState {
        &self.slot
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check both start gates, reporting which one failed.
    ///
    /// Only an exactly empty balance is `NoCredits`; a negative balance left
    /// by an ungated spin is `InsufficientCredits`.
    pub fn start_check(&self) -> Result<(), StartBlocker> {
        let credits = self.slot.credit_total();
        if credits == 0 {
            return Err(StartBlocker::NoCredits);
        }
        if credits < 0 || !self.slot.can_spin() {
            return Err(StartBlocker::InsufficientCredits);
        }
        Ok(())
    }

    pub fn can_start_game(&self) -> bool {
        self.start_check().is_ok()
    }

    /// Draw three symbols and resolve the bet.
    ///
    /// Not gated: callers check [`GameEngine::can_start_game`] first, or the
    /// credit total may go negative.
    pub fn perform_spin(&mut self) -> SpinOutcome {
        let symbols: [Symbol; REEL_COUNT] = std::array::from_fn(|_| self.source.draw());
        let payout = self.slot.settle_spin(&symbols);

        let outcome = SpinOutcome {
            symbols,
            won: payout.is_some(),
            payout: payout.unwrap_or(0),
        };

        debug!(
            symbols = ?outcome.symbols,
            won = outcome.won,
            payout = outcome.payout,
            credits = self.slot.credit_total(),
            "spin resolved"
        );

        self.push_event(GameEvent::SpinCompleted {
            outcome,
            credit_total: self.slot.credit_total(),
            win_total: self.slot.win_total(),
        });
        if self.needs_credits() {
            self.push_event(GameEvent::CreditsDepleted);
        }

        outcome
    }

    pub fn add_credits(&mut self, amount: i64) {
        self.slot.add_credits(amount);
        debug!(amount, credits = self.slot.credit_total(), "credits added");
        self.push_event(GameEvent::CreditsAdded {
            amount,
            credit_total: self.slot.credit_total(),
        });
    }

    pub fn set_bet_amount(&mut self, amount: i64) {
        self.slot.set_bet_amount(amount);
        debug!(bet = amount, "bet changed");
        self.push_event(GameEvent::BetChanged { bet_amount: amount });
    }

    /// Apply the configured bet preset at `index`.
    pub fn select_bet_option(&mut self, index: usize) -> Result<i64, GameError> {
        let amount = self
            .config
            .bet_option(index)
            .ok_or(GameError::UnknownBetOption(index))?;
        self.set_bet_amount(amount);
        Ok(amount)
    }

    /// Add the configured credit package at `index`.
    pub fn purchase_credit_package(&mut self, index: usize) -> Result<i64, GameError> {
        let amount = self
            .config
            .credit_package(index)
            .ok_or(GameError::UnknownCreditPackage(index))?;
        self.add_credits(amount);
        Ok(amount)
    }

    /// True when the balance is exactly zero.
    pub fn needs_credits(&self) -> bool {
        self.slot.credit_total() == 0
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "state": self.slot.to_json(),
            "can_start": self.can_start_game(),
            "bet_options": self.config.bet_options,
            "credit_packages": self.config.credit_packages
        })
    }
}
