//! Diamond Slots State Library
//!
//! This crate provides the game-state core for a three-reel slot machine.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Slot State** - Credit total, bet amount and cumulative winnings, with
//!   permissive arithmetic and a boolean spin gate.
//!
//! - **Game Engine** - Runs a round: checks eligibility, draws three symbols
//!   from an injected source, resolves the bet and queues events.
//!
//! - **Sessions** - One engine per player session, indexed by ID, with idle
//!   expiry.
//!
//! # Design Principles
//!
//! 1. **Gates, not errors** - Eligibility is a query the caller checks before
//!    spinning. An ungated spin still charges the bet.
//!
//! 2. **Injected randomness** - Draws come from a `SymbolSource`, so seeded or
//!    scripted sources give exact win/loss sequences.
//!
//! 3. **No presentation** - No rendering, audio or animation. The engine emits
//!    events and the caller reacts to them.
//!
//! # Example
//!
//! ```rust
//! use diamond_slots_state::state::{FixedSymbols, GameEngine, GameEvent, Symbol};
//!
//! let source = FixedSymbols::new(vec![Symbol::Diamond]).unwrap();
//! let mut engine = GameEngine::with_source(source);
//!
//! assert!(engine.can_start_game());
//! let outcome = engine.perform_spin();
//!
//! assert!(outcome.won);
//! assert_eq!(outcome.payout, 25);
//! assert_eq!(engine.slot_state().credit_total(), 99);
//! assert_eq!(engine.slot_state().win_total(), 25);
//!
//! let events = engine.drain_events();
//! assert!(matches!(events[0], GameEvent::SpinCompleted { .. }));
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
