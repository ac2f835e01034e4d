use color_eyre::eyre::Context;
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 默认info级别，可通过 RUST_LOG 调整
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    // 建表失败时直接退出，不对外提供服务
    let pool = database::initialize_database(&config)
        .await
        .context("Initialize SQLite database")?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        info!("📴 收到关闭信号");
        if shutdown_tx.send(true).is_err() {
            warn!("⚠️ Web Service 已经退出");
        }
    });

    web_service::start_web_service(config, pool.clone(), shutdown_rx).await?;

    pool.close().await;
    info!("👋 服务已退出");

    Ok(())
}

/// 等待 Ctrl-C 或者 SIGTERM
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ 监听 Ctrl-C 失败: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("⚠️ 监听 SIGTERM 失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
