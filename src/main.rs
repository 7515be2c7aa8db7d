use std::time::Duration;

use product_ingest::{
    config,
    infrastructure::{Logger, SqliteConnector},
    router, AppState,
};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (app_config, source) = config::load_config()?;
    app_config.validate()?;

    let _log_guard = Logger::init(&app_config.logging)?;
    config::log_config_source(source.as_deref());

    let connector = SqliteConnector::new(&app_config.database.url)?;
    info!("数据库地址: {}", app_config.database.url);

    let app = router(
        AppState::new(connector),
        Duration::from_secs(app_config.http.timeout_seconds),
    );

    let addr = app_config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("产品录入服务启动成功，监听地址: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C 信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM 信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("收到 Ctrl+C 信号，正在关闭"),
        _ = terminate => info!("收到 SIGTERM 信号，正在关闭"),
    }
}
