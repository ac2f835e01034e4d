//! Web服务模块
//!
//! 提供 HTTP API 接口、文档服务和前端静态文件

use color_eyre::eyre::Context;
use color_eyre::Result;
use database::{DatabasePool, ProjectRepository};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

use services::{ProjectService, ProjectServiceTrait};

/// 应用共享状态
///
/// 服务通过构造函数注入，路由函数只依赖 [`ProjectServiceTrait`]
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait>,
}

impl AppState {
    pub fn new(project_service: Arc<dyn ProjectServiceTrait>) -> Self {
        Self { project_service }
    }
}

/// 启动 Web 服务
///
/// `pool` 是进程唯一的存储句柄，在这里注入到仓库和服务中。
/// 收到 `shutdown_rx` 的信号后停止接收新连接，等待处理中的请求完成。
pub async fn start_web_service(config: Arc<AppConfig>, pool: DatabasePool, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let project_repository = Arc::new(ProjectRepository::new(pool));
    let shared_state = AppState::new(Arc::new(ProjectService::new(project_repository)));

    let router = routes::create_app_router(shared_state, &config.static_dir);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);
    info!("📁 前端静态文件目录: {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Can not bind {}", config.bind_addr))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
