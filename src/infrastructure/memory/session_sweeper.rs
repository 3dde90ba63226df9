//! Session Sweeper - 定期关闭空闲会话

use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;

use crate::application::ports::SessionManagerPort;

pub struct SessionSweeper {
    session_manager: Arc<dyn SessionManagerPort>,
    expire_secs: u64,
    interval_secs: u64,
}

impl SessionSweeper {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        expire_secs: u64,
        interval_secs: u64,
    ) -> Self {
        Self {
            session_manager,
            expire_secs,
            interval_secs,
        }
    }

    /// 关闭所有过期会话，返回关闭的数量
    pub fn sweep_once(&self) -> usize {
        self.session_manager
            .get_expired_sessions(self.expire_secs)
            .iter()
            .filter(|id| self.session_manager.close(id).is_ok())
            .count()
    }

    pub async fn run(self) {
        let mut ticker = interval(Duration::from_secs(self.interval_secs.max(1)));

        loop {
            ticker.tick().await;
            let closed = self.sweep_once();
            if closed > 0 {
                tracing::info!(
                    closed = closed,
                    remaining = self.session_manager.list_all().len(),
                    "Expired sessions swept"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Session;
    use crate::infrastructure::memory::InMemorySessionManager;

    #[test]
    fn test_sweep_once_closes_idle_sessions() {
        let manager = Arc::new(InMemorySessionManager::new());
        let mut idle = Session::new();
        idle.last_activity = chrono::Utc::now() - chrono::Duration::seconds(3600);
        let idle_id = manager.create(idle).unwrap();
        let active_id = manager.create(Session::new()).unwrap();

        let sweeper = SessionSweeper::new(manager.clone(), 60, 600);
        assert_eq!(sweeper.sweep_once(), 1);
        assert!(manager.get(&idle_id).is_err());
        assert!(manager.get(&active_id).is_ok());
        assert_eq!(sweeper.sweep_once(), 0);
    }
}
