//! hfserve - HuggingFace Inference API 任务服务
//!
//! - Domain: task/ (种类、校验、请求、整形)
//! - Application: task, commands, queries, ports
//! - Infrastructure: http, memory, adapters

use std::sync::Arc;

use hfserve::application::{RequestHeaders, TaskFactory};
use hfserve::config::{bearer_token, load_config, print_config, AppConfig};
use hfserve::infrastructure::adapters::{HttpInferenceClient, HttpInferenceClientConfig};
use hfserve::infrastructure::http::{AppState, HttpServer, ServerConfig};
use hfserve::infrastructure::memory::{InMemorySessionManager, SessionSweeper};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},hfserve={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("hfserve {}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 没有 token 无法调用推理 API
    let token = bearer_token(&config)?;

    let engine = Arc::new(
        HttpInferenceClient::new(
            HttpInferenceClientConfig::default().with_timeout(config.inference.timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("Failed to build inference client: {}", e))?,
    );

    let factory = Arc::new(TaskFactory::new(
        config.inference.api_root.clone(),
        RequestHeaders::bearer(&token),
        config.task.limits(),
    ));

    let session_manager = Arc::new(InMemorySessionManager::new());

    // 启动过期会话清理
    let sweeper = SessionSweeper::new(
        session_manager.clone(),
        config.session.expire_secs,
        config.session.sweep_interval_secs,
    );
    tokio::spawn(sweeper.run());

    let state = AppState::new(session_manager, engine, factory);
    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        Arc::new(state),
    );

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
