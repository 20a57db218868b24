//! State management module for the Diamond slot machine.
//!
//! This module provides the core state types:
//!
//! - `symbol` - Reel symbols and payout multipliers
//! - `machine` - Credit/bet/win economy (`SlotState`)
//! - `rng` - Injected symbol sources (random, seeded, scripted)
//! - `engine` - Round orchestration and outbound events (`GameEngine`)
//! - `session` - Per-session isolation and idle expiry
//! - `config` - Starting balances, bet presets, credit packages
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     SessionManager                        │
//! │                                                           │
//! │   session_id → Session ─┬─ GameEngine ─┬─ SlotState       │
//! │                         │              ├─ SymbolSource    │
//! │                         │              └─ GameEvent queue │
//! │                         └─ timestamps, spin count         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use diamond_slots_state::state::{GameEngine, StartBlocker};
//!
//! let mut engine = GameEngine::new();
//! match engine.start_check() {
//!     Ok(()) => {
//!         let outcome = engine.perform_spin();
//!         render(outcome.symbols, outcome.won);
//!     }
//!     Err(StartBlocker::NoCredits) => prompt_add_credits(),
//!     Err(StartBlocker::InsufficientCredits) => show_message("Not enough credits!"),
//! }
//! for event in engine.drain_events() {
//!     play_sound_for(&event);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod machine;
pub mod rng;
pub mod session;
pub mod symbol;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use engine::{
    GameEngine, GameError, GameEvent, SpinOutcome, StartBlocker, MAX_PENDING_EVENTS,
};
pub use machine::{winning_symbol, SlotState, REEL_COUNT};
pub use rng::{FixedSymbols, RandomSymbols, SymbolSource};
pub use session::{Session, SessionError, SessionManager};
pub use symbol::Symbol;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_round_trip() {
        let script = vec![
            Symbol::Diamond,
            Symbol::Diamond,
            Symbol::Diamond,
            Symbol::Cherry,
            Symbol::Lemon,
            Symbol::Seven,
        ];
        let mut engine = GameEngine::with_source(FixedSymbols::new(script).unwrap());

        assert!(engine.can_start_game());
        let won = engine.perform_spin();
        assert!(won.won);

        assert!(engine.can_start_game());
        let lost = engine.perform_spin();
        assert!(!lost.won);

        let state = engine.slot_state();
        assert_eq!(state.credit_total(), 98);
        assert_eq!(state.win_total(), 25);
        assert_eq!(state.bet_amount(), 1);
    }
}
