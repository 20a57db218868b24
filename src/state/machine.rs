//! Slot machine economy state.
//!
//! Tracks the player's bet, spendable credits and cumulative winnings for one
//! session. All arithmetic is permissive: nothing here clamps the credit
//! total, so callers gate spins with [`SlotState::can_spin`] first.

use std::collections::HashSet;

use tracing::warn;

use super::config::GameConfig;
use super::symbol::Symbol;

/// Number of reels in a spin.
pub const REEL_COUNT: usize = 3;

/// Credit, bet and winnings snapshot for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    bet_amount: i64,
    credit_total: i64,
    win_total: i64,
}

impl Default for SlotState {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl SlotState {
    /// Create a state with the default bet (1) and credits (100).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            bet_amount: config.starting_bet,
            credit_total: config.starting_credits,
            win_total: 0,
        }
    }

    pub fn bet_amount(&self) -> i64 {
        self.bet_amount
    }

    pub fn credit_total(&self) -> i64 {
        self.credit_total
    }

    pub fn win_total(&self) -> i64 {
        self.win_total
    }

    /// Whether the current bet is covered by the credit total.
    pub fn can_spin(&self) -> bool {
        self.bet_amount <= self.credit_total
    }

    /// Add to the credit total. Any amount is accepted, including negatives.
    ///
    /// # Panics
    ///
    /// Overflowing `i64` panics in debug builds.
    pub fn add_credits(&mut self, amount: i64) {
        self.credit_total += amount;
    }

    pub fn remove_credits(&mut self, amount: i64) {
        self.credit_total -= amount;
    }

    /// Charge the current bet against the credit total.
    pub fn subtract_bet_from_credits(&mut self) {
        self.credit_total -= self.bet_amount;
    }

    /// Replace the bet. No bounds are enforced here.
    pub fn set_bet_amount(&mut self, amount: i64) {
        self.bet_amount = amount;
    }

    /// Payout for a draw at the current bet, or `None` if it loses.
    ///
    /// # Panics
    ///
    /// `bet * multiplier` overflowing `i64` panics in debug builds.
    pub fn payout_for(&self, results: &[Symbol; REEL_COUNT]) -> Option<i64> {
        winning_symbol(results).map(|symbol| self.bet_amount * symbol.multiplier())
    }

    /// Resolve a spin.
    ///
    /// The bet is always charged, even when the draw loses or the bet was not
    /// covered. A draw wins when all three symbols are identical; the win
    /// total then grows by `bet * multiplier`.
    pub fn evaluate_spin(&mut self, results: &[Symbol; REEL_COUNT]) -> bool {
        self.settle_spin(results).is_some()
    }

    /// Resolve a spin like [`SlotState::evaluate_spin`], returning the amount
    /// added to the win total on a win.
    pub fn settle_spin(&mut self, results: &[Symbol; REEL_COUNT]) -> Option<i64> {
        if !self.can_spin() {
            warn!(
                bet = self.bet_amount,
                credits = self.credit_total,
                "evaluating spin with insufficient credits"
            );
        }

        self.subtract_bet_from_credits();

        let payout = self.payout_for(results)?;
        self.win_total += payout;
        Some(payout)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "bet_amount": self.bet_amount,
            "credit_total": self.credit_total,
            "win_total": self.win_total,
            "can_spin": self.can_spin()
        })
    }
}

/// The symbol shared by every reel, if the draw is a match.
pub fn winning_symbol(results: &[Symbol; REEL_COUNT]) -> Option<Symbol> {
    let distinct: HashSet<&Symbol> = results.iter().collect();
    if distinct.len() == 1 {
        Some(results[0])
    } else {
        None
    }
}
