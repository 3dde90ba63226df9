//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{Session, SessionError, SessionManagerPort};
use crate::application::task::{SubmissionState, TaskConfig};

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 修改会话并刷新活跃时间
    fn update<F>(&self, id: &str, f: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut Session),
    {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        f(&mut session);
        session.last_activity = Utc::now();
        Ok(())
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let session_id = session.id.clone();
        if self.sessions.contains_key(&session_id) {
            return Err(SessionError::AlreadyExists(session_id));
        }
        self.sessions.insert(session_id.clone(), session);
        tracing::info!(session_id = %session_id, "Session created");
        Ok(session_id)
    }

    fn get(&self, id: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn save_task_config(&self, id: &str, config: TaskConfig) -> Result<(), SessionError> {
        let kind = config.kind;
        self.update(id, |session| {
            session.tasks.insert(kind, config);
        })?;
        tracing::debug!(session_id = %id, task = %kind, "Task config saved");
        Ok(())
    }

    fn save_submission(&self, id: &str, state: SubmissionState) -> Result<(), SessionError> {
        self.update(id, |session| session.submission = state)
    }

    fn set_wide_layout(&self, id: &str, wide: bool) -> Result<(), SessionError> {
        self.update(id, |session| session.wide_layout = wide)?;
        tracing::debug!(session_id = %id, wide = wide, "Session layout updated");
        Ok(())
    }

    fn close(&self, id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|_| {
                tracing::info!(session_id = %id, "Session closed");
            })
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        let timeout = chrono::Duration::seconds(idle_timeout_secs as i64);

        self.sessions
            .iter()
            .filter_map(|entry| {
                let elapsed = now - entry.last_activity;
                if elapsed > timeout {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect()
    }

    fn list_all(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}
