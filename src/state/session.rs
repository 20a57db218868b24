//! Session management.
//!
//! Each session owns its own [`GameEngine`]; nothing is shared between
//! sessions. The manager only indexes them by ID and expires idle ones.

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

use super::config::GameConfig;
use super::engine::{GameEngine, GameEvent, SpinOutcome};
use super::rng::RandomSymbols;

/// A single player's game session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session ID
    pub id: String,

    pub engine: GameEngine<RandomSymbols>,

    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last time the session was accessed for play
    pub last_active_at: chrono::DateTime<chrono::Utc>,

    /// Spins played in this session
    pub spins: u64,
}

impl Session {
    pub fn new(id: String, engine: GameEngine<RandomSymbols>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id,
            engine,
            created_at: now,
            last_active_at: now,
            spins: 0,
        }
    }

    /// Mark activity now.
    pub fn touch(&mut self) {
        self.last_active_at = chrono::Utc::now();
    }

    /// Spin and count it.
    pub fn spin(&mut self) -> SpinOutcome {
        self.touch();
        self.spins += 1;
        self.engine.perform_spin()
    }

    /// Take the engine's queued events for this session.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.engine.drain_events()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "session_id": self.id,
            "engine": self.engine.to_json(),
            "spins": self.spins,
            "created_at": self.created_at.to_rfc3339(),
            "last_active_at": self.last_active_at.to_rfc3339()
        })
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session {0} already exists")]
    AlreadyExists(String),
    #[error("Session {0} not found")]
    NotFound(String),
}

/// Session manager - tracks all live sessions.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, Session>,
    config: GameConfig,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager whose new sessions start from `config`.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Start a session with an entropy-seeded engine.
    pub fn create(&mut self, id: &str) -> Result<&mut Session, SessionError> {
        self.insert(id, RandomSymbols::from_entropy())
    }

    /// Start a session whose draws are reproducible from `seed`.
    pub fn create_seeded(&mut self, id: &str, seed: u64) -> Result<&mut Session, SessionError> {
        self.insert(id, RandomSymbols::seeded(seed))
    }

    fn insert(&mut self, id: &str, source: RandomSymbols) -> Result<&mut Session, SessionError> {
        if self.sessions.contains_key(id) {
            return Err(SessionError::AlreadyExists(id.to_string()));
        }

        let engine = GameEngine::with_config(self.config.clone(), source);
        info!(session = id, "session created");
        Ok(self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| Session::new(id.to_string(), engine)))
    }

    /// Get a session.
    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Get a mutable session, marking it active.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Session, SessionError> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        session.touch();
        Ok(session)
    }

    /// End a session.
    pub fn remove(&mut self, id: &str) -> Option<Session> {
        let session = self.sessions.remove(id)?;
        info!(session = id, spins = session.spins, "session ended");
        Some(session)
    }

    /// Remove sessions idle for longer than `max_idle`.
    pub fn cleanup_idle(&mut self, max_idle: chrono::Duration) -> Vec<String> {
        let cutoff = chrono::Utc::now() - max_idle;
        let idle: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.last_active_at < cutoff)
            .map(|(id, _)| id.clone())
            .collect();

        for id in &idle {
            self.remove(id);
        }

        idle
    }

    /// Session count.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut manager = SessionManager::new();
        manager.create("alice").unwrap();

        assert_eq!(manager.count(), 1);
        let session = manager.get("alice").unwrap();
        assert_eq!(session.id, "alice");
        assert_eq!(session.engine.slot_state().credit_total(), 100);
        assert_eq!(session.spins, 0);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut manager = SessionManager::new();
        manager.create("alice").unwrap();

        let result = manager.create_seeded("alice", 1);
        assert!(matches!(result, Err(SessionError::AlreadyExists(id)) if id == "alice"));
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut manager = SessionManager::new();
        manager.create_seeded("a", 1).unwrap();
        manager.create_seeded("b", 1).unwrap();

        {
            let a = manager.get_mut("a").unwrap();
            a.engine.set_bet_amount(10);
            a.spin();
            a.spin();
        }

        let a = manager.get("a").unwrap();
        let b = manager.get("b").unwrap();
        assert_eq!(a.spins, 2);
        assert_eq!(a.engine.slot_state().credit_total(), 80);
        assert_eq!(b.spins, 0);
        assert_eq!(b.engine.slot_state().credit_total(), 100);
        assert_eq!(b.engine.slot_state().bet_amount(), 1);
    }

    #[test]
    fn test_config_applies_to_new_sessions() {
        let config = GameConfig {
            starting_credits: 10,
            ..GameConfig::default()
        };
        let mut manager = SessionManager::with_config(config);
        let session = manager.create("c").unwrap();
        assert_eq!(session.engine.slot_state().credit_total(), 10);
    }

    #[test]
    fn test_missing_session() {
        let mut manager = SessionManager::new();
        assert!(manager.get("ghost").is_none());
        assert_eq!(
            manager.get_mut("ghost").unwrap_err(),
            SessionError::NotFound("ghost".to_string())
        );
        assert!(manager.remove("ghost").is_none());
    }

    #[test]
    fn test_pending_events_stay_bounded() {
        use crate::state::engine::MAX_PENDING_EVENTS;

        let mut manager = SessionManager::new();
        let session = manager.create_seeded("long", 5).unwrap();
        session.engine.add_credits(1_000_000);
        for _ in 0..10_000 {
            session.spin();
        }
        assert_eq!(session.spins, 10_000);
        assert!(session.engine.pending_event_count() <= MAX_PENDING_EVENTS);

        let events = session.drain_events();
        assert!(!events.is_empty());
        assert!(events.len() <= MAX_PENDING_EVENTS);
        assert_eq!(session.engine.pending_event_count(), 0);
    }

    #[test]
    fn test_cleanup_idle() {
        let mut manager = SessionManager::new();
        manager.create("stale").unwrap();
        manager.create("fresh").unwrap();

        if let Some(s) = manager.sessions.get_mut("stale") {
            s.last_active_at = chrono::Utc::now() - chrono::Duration::minutes(30);
        }

        let removed = manager.cleanup_idle(chrono::Duration::minutes(10));
        assert_eq!(removed, vec!["stale".to_string()]);
        assert!(manager.get("stale").is_none());
        assert!(manager.get("fresh").is_some());
    }

    #[test]
    fn test_session_json() {
        let mut manager = SessionManager::new();
        let session = manager.create_seeded("j", 3).unwrap();
        session.spin();
        let json = session.to_json();
        assert_eq!(json["session_id"], "j");
        assert_eq!(json["spins"], 1);
        assert_eq!(json["engine"]["state"]["credit_total"], 99);
    }
}
