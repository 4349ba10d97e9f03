use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// `POST /api/cron` 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CronProcessedResponse {
    pub success: bool,
    pub message: String,
    pub expression: String,
    pub processed_at: String,
}

/// `GET /health` 响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// ISO-8601 UTC时间，毫秒精度，以 `Z` 结尾
pub fn iso_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
