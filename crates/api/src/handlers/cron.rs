use axum::{
    body::Bytes,
    http::{header, HeaderMap},
    Json,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::processor::process_cron_expression;
use crate::response::CronProcessedResponse;
use crate::validation::{CronSubmission, CronValidationError};

/// 请求体中携带表达式的字段名
pub const EXPRESSION_FIELD: &str = "cronExpression";

/// 接收Cron表达式
///
/// 只有JSON类型的请求体会被解析；其他Content-Type和空请求体都等同于 `{}`。
pub async fn submit_cron(
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<CronProcessedResponse>> {
    let payload = if has_json_content_type(&headers) {
        parse_body(&body)?
    } else {
        debug!("请求体不是JSON类型，按空对象处理");
        Value::Object(serde_json::Map::new())
    };
    let expression = expression_from_body(&payload)?;

    let submission = CronSubmission::parse(expression).inspect_err(|e| {
        warn!("Cron表达式校验失败: {}", e);
    })?;

    Ok(Json(process_cron_expression(&submission)))
}

/// `application/json` 或 `application/*+json`，忽略参数和大小写
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn parse_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!("请求体不是合法的JSON: {}", e);
        ApiError::MalformedBody(e)
    })
}

/// 取出 `cronExpression` 字段
///
/// `null`、`false`、`0` 和空字符串都视为缺失；其他非字符串值属于
/// 无法处理的请求，返回内部错误。
pub fn expression_from_body(body: &Value) -> ApiResult<&str> {
    match body.get(EXPRESSION_FIELD) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            Err(CronValidationError::Missing.into())
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            Err(CronValidationError::Missing.into())
        }
        Some(Value::String(s)) if s.is_empty() => Err(CronValidationError::Missing.into()),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ApiError::Internal(format!(
            "{EXPRESSION_FIELD} must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
