use std::net::SocketAddr;

use anyhow::{Context, Result};
use cron_echo_api::create_app;
use cron_echo_config::AppConfig;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::info;

/// 已绑定端口、等待运行的HTTP服务
pub struct Application {
    config: AppConfig,
    listener: TcpListener,
}

impl Application {
    /// 按配置绑定监听地址
    pub async fn bind(config: AppConfig) -> Result<Self> {
        let bind_address = config.server.bind_address();
        let listener = TcpListener::bind(&bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {bind_address}"))?;

        Ok(Self { config, listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().context("获取监听地址失败")
    }

    /// 运行直到收到关闭信号，处理中的请求会被允许完成
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let addr = self.local_addr()?;
        let app = create_app(&self.config.server);

        log_startup_banner(addr);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API服务器收到关闭信号");
            })
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }
}

fn log_startup_banner(addr: SocketAddr) {
    let port = addr.port();
    info!("Cron Expression API 服务器已启动");
    info!("服务地址: http://localhost:{port}");
    info!("API文档: http://localhost:{port}");
    info!("健康检查: http://localhost:{port}/health");
    info!("POST端点: http://localhost:{port}/api/cron");
    info!("{}", "=".repeat(60));
}
