use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::validation::CronValidationError;

/// 缺少字段时返回的示例表达式
pub const EXAMPLE_EXPRESSION: &str = "0 0 * * *";
/// 字段数错误时返回的格式说明
pub const FORMAT_EXAMPLE: &str = "0 0 * * * (minute hour day month weekday)";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] CronValidationError),

    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(CronValidationError::Missing) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "example": { "cronExpression": EXAMPLE_EXPRESSION }
                }),
            ),
            ApiError::Validation(CronValidationError::FieldCount { received, .. }) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "received": received,
                    "example": FORMAT_EXAMPLE
                }),
            ),
            ApiError::MalformedBody(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid JSON body",
                    "message": err.to_string()
                }),
            ),
            ApiError::Internal(message) => {
                error!("处理Cron表达式时发生错误: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
