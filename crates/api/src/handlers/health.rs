use axum::Json;
use chrono::Utc;

use crate::response::{iso_timestamp, HealthResponse};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Cron Expression API is running".to_string(),
        timestamp: iso_timestamp(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.0;
        assert_eq!(response.status, "OK");
        assert_eq!(response.message, "Cron Expression API is running");
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
