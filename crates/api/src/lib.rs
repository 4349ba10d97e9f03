//! # Cron Echo API
//!
//! 接收Cron表达式的HTTP接口。只做结构校验（5到6个以空白分隔的字段），
//! 记录日志后回显表达式，不解析字段含义，也不调度任何任务。
//!
//! ## 架构设计
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        Cron Echo API                           │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Routes  │  Handlers  │  Validation  │  Processor  │  Error    │
//! │  (路由)   │  (处理器)   │  (字段数校验)  │  (日志回显)   │  (错误响应) │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## API 端点
//!
//! - `GET /` - 静态API文档与示例表达式
//! - `GET /health` - 健康检查
//! - `POST /api/cron` - 提交Cron表达式，请求体 `{"cronExpression": "0 0 * * *"}`
//!
//! ## 响应状态
//!
//! | 状态码 | 场景 |
//! |--------|------|
//! | 200 | 表达式字段数为5或6 |
//! | 400 | 缺少 `cronExpression`（含非JSON的Content-Type）、字段数错误或JSON语法错误 |
//! | 500 | `cronExpression` 不是字符串，或处理器panic |
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use cron_echo_api::create_app;
//! use cron_echo_config::ServerConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::default();
//! let app = create_app(&config);
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ```bash
//! curl -X POST http://localhost:3000/api/cron \
//!   -H "Content-Type: application/json" \
//!   -d '{"cronExpression": "0 9 * * 1-5"}'
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod processor;
pub mod response;
pub mod routes;
pub mod validation;

use axum::Router;
use cron_echo_config::ServerConfig;
use tower::ServiceBuilder;

use middleware::{catch_panic_layer, cors_layer, request_logging, trace_layer};
use routes::create_routes;

pub use error::{ApiError, ApiResult};
pub use validation::{CronSubmission, CronValidationError, FieldLayout};

/// 创建完整的API应用
pub fn create_app(config: &ServerConfig) -> Router {
    create_routes().layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(cors_layer(config.cors_enabled))
            .layer(axum::middleware::from_fn(request_logging))
            .layer(catch_panic_layer()),
    )
}
