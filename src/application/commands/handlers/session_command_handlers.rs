//! Session Command Handlers

use std::sync::Arc;

use crate::application::commands::session_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{Session, SessionManagerPort};

/// OpenSession Handler - 创建新会话
pub struct OpenSessionHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl OpenSessionHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: OpenSessionCommand,
    ) -> Result<OpenSessionResponse, ApplicationError> {
        let session = Session {
            wide_layout: cmd.wide_layout,
            ..Session::new()
        };
        let session_id = self.session_manager.create(session)?;

        tracing::info!(
            session_id = %session_id,
            wide_layout = cmd.wide_layout,
            "Session opened"
        );

        Ok(OpenSessionResponse {
            session_id,
            wide_layout: cmd.wide_layout,
        })
    }
}

/// CloseSession Handler
pub struct CloseSessionHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl CloseSessionHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: CloseSessionCommand,
    ) -> Result<CloseSessionResponse, ApplicationError> {
        self.session_manager.close(&cmd.session_id)?;

        Ok(CloseSessionResponse {
            session_id: cmd.session_id,
        })
    }
}
