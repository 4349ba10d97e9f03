use axum::Json;
use serde_json::{json, Value};

use crate::error::EXAMPLE_EXPRESSION;

/// 常用Cron表达式示例 (描述, 表达式)
pub const EXAMPLE_SCHEDULES: [(&str, &str); 5] = [
    ("Every minute", "* * * * *"),
    ("Daily at midnight", "0 0 * * *"),
    ("Every hour", "0 * * * *"),
    ("Every Sunday at 2 AM", "0 2 * * 0"),
    ("Every weekday at 9 AM", "0 9 * * 1-5"),
];

/// 根路径处理器 - 返回静态API文档
pub async fn root_handler() -> Json<Value> {
    Json(api_documentation())
}

pub fn api_documentation() -> Value {
    let examples: serde_json::Map<String, Value> = EXAMPLE_SCHEDULES
        .iter()
        .map(|(name, expr)| (name.to_string(), Value::from(*expr)))
        .collect();

    json!({
        "message": "Cron Expression API",
        "endpoints": {
            "POST /api/cron": {
                "description": "Accept cron job expressions",
                "body": {
                    "cronExpression": "string (required) - e.g., \"0 0 * * *\""
                },
                "example": {
                    "cronExpression": EXAMPLE_EXPRESSION
                }
            },
            "GET /health": {
                "description": "Health check endpoint"
            }
        },
        "examples": examples
    })
}
