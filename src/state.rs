//! Application state: the in-memory session store and the coffee regeneration timer.
//!
//! This module owns:
//!   - every `GameSession`, keyed by session id
//!   - the loaded `GameConfig` (or defaults)
//!
//! Sessions are only mutated under the write lock, so each one has exactly one writer at a time.

use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, info, instrument};

use crate::config::{load_game_config_from_env, GameConfig};
use crate::domain::Selection;
use crate::error::{GameError, Result};
use crate::session::{GameSession, SessionSnapshot};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<String, GameSession>>>,
    pub config: GameConfig,
}

impl AppState {
    /// Build state from env: load config (defaults when absent or invalid).
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_game_config_from_env().unwrap_or_default();
        info!(
            target: "vibequest_backend",
            coffee_tick_ms = config.timer.coffee_tick_ms,
            min_answer_chars = config.verification.min_answer_chars,
            "Game config ready"
        );
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), config }
    }

    #[instrument(level = "info", skip(self))]
    pub async fn create_session(&self, selection: Option<Selection>) -> SessionSnapshot {
        let session = GameSession::new(&self.config, selection);
        let snapshot = session.snapshot();
        self.sessions.write().await.insert(session.id.clone(), session);
        info!(target: "session", id = %snapshot.id, selected = selection.is_some(), "Session created");
        snapshot
    }

    /// Run `f` against one session under the write lock. Counts as activity for idle eviction.
    pub async fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut GameSession) -> Result<T>) -> Result<T> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or_else(|| GameError::SessionNotFound(id.to_string()))?;
        session.touch();
        f(session)
    }

    #[instrument(level = "info", skip(self))]
    pub async fn remove_session(&self, id: &str) -> Result<()> {
        self.sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))?;
        info!(target: "session", %id, "Session deleted");
        Ok(())
    }

    /// Drop sessions idle for at least `max_idle`. Returns how many were dropped.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.idle_for() < max_idle);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(target: "session", evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }

    /// Run `f` against one session under the read lock.
    pub async fn read_session<T>(&self, id: &str, f: impl FnOnce(&GameSession) -> T) -> Result<T> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(id).ok_or_else(|| GameError::SessionNotFound(id.to_string()))?;
        Ok(f(session))
    }

    /// One regeneration tick for every session.
    pub async fn tick_coffee(&self) {
        let mut sessions = self.sessions.write().await;
        for session in sessions.values_mut() {
            session.tick_coffee();
        }
        debug!(target: "session", count = sessions.len(), "Coffee tick");
    }

    /// Spawn the interval task that drives `tick_coffee` and idle eviction.
    pub fn spawn_coffee_timer(self: &Arc<Self>) -> JoinHandle<()> {
        let state = Arc::clone(self);
        let period = Duration::from_millis(state.config.timer.coffee_tick_ms.max(1));
        let max_idle = match state.config.timer.session_idle_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Some(max_idle) = max_idle {
                    state.evict_idle(max_idle).await;
                }
                state.tick_coffee().await;
            }
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_found_by_id() {
        let state = AppState::default();
        let snap = state.create_session(Some(Selection::default())).await;
        let coffee = state.read_session(&snap.id, |s| s.resources().coffee).await.unwrap();
        assert_eq!(coffee, 50);
        assert_eq!(
            state.read_session("missing", |_| ()).await.unwrap_err(),
            GameError::SessionNotFound("missing".into())
        );
    }

    #[tokio::test]
    async fn coffee_tick_reaches_every_session() {
        let state = AppState::default();
        let a = state.create_session(None).await;
        let b = state.create_session(Some(Selection::default())).await;
        for _ in 0..3 {
            state.tick_coffee().await;
        }
        for id in [a.id, b.id] {
            assert_eq!(state.read_session(&id, |s| s.resources().coffee).await.unwrap(), 53);
        }
    }

    #[tokio::test]
    async fn removed_sessions_are_gone() {
        let state = AppState::default();
        let snap = state.create_session(None).await;
        state.remove_session(&snap.id).await.unwrap();
        assert!(state.sessions.read().await.is_empty());
        assert_eq!(
            state.remove_session(&snap.id).await.unwrap_err(),
            GameError::SessionNotFound(snap.id.clone())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn only_idle_sessions_are_evicted() {
        let state = AppState::default();
        let stale = state.create_session(None).await;
        let active = state.create_session(Some(Selection::default())).await;

        tokio::time::advance(Duration::from_secs(10)).await;
        state.with_session(&active.id, |s| Ok(s.snapshot())).await.unwrap();

        assert_eq!(state.evict_idle(Duration::from_secs(5)).await, 1);
        assert!(state.read_session(&stale.id, |_| ()).await.is_err());
        assert!(state.read_session(&active.id, |_| ()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_evicts_idle_sessions() {
        let mut config = GameConfig::default();
        config.timer.coffee_tick_ms = 100;
        config.timer.session_idle_secs = 1;
        let state = Arc::new(AppState::with_config(config));
        state.create_session(None).await;
        let handle = state.spawn_coffee_timer();
        tokio::time::sleep(Duration::from_millis(1250)).await;
        handle.abort();
        assert!(state.sessions.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_ticks_on_interval() {
        let mut config = GameConfig::default();
        config.timer.coffee_tick_ms = 100;
        let state = Arc::new(AppState::with_config(config));
        let snap = state.create_session(None).await;
        let handle = state.spawn_coffee_timer();
        tokio::time::sleep(Duration::from_millis(350)).await;
        handle.abort();
        let coffee = state.read_session(&snap.id, |s| s.resources().coffee).await.unwrap();
        assert_eq!(coffee, 53);
    }
}
