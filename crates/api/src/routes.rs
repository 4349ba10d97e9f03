use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{cron::submit_cron, health::health_check, root::root_handler};

/// 创建API路由
pub fn create_routes() -> Router {
    Router::new()
        // 文档
        .route("/", get(root_handler))
        // 健康检查
        .route("/health", get(health_check))
        .route("/api/cron", post(submit_cron))
}
