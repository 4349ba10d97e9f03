use chrono::Utc;
use tracing::{debug, info};

use crate::response::{iso_timestamp, CronProcessedResponse};
use crate::validation::CronSubmission;

pub const SUCCESS_MESSAGE: &str = "Cron expression processed successfully";

const SEPARATOR_WIDTH: usize = 50;

/// 处理已通过校验的Cron表达式
///
/// 目前只记录日志并回显表达式，不做调度。
pub fn process_cron_expression(submission: &CronSubmission) -> CronProcessedResponse {
    let processed_at = iso_timestamp(Utc::now());
    let separator = "=".repeat(SEPARATOR_WIDTH);

    info!("{separator}");
    info!("收到Cron表达式:");
    info!("   表达式: {}", submission.expression());
    info!("   时间戳: {}", processed_at);
    info!("{separator}");
    debug!(
        field_count = submission.field_count(),
        layout = ?submission.layout(),
        "Cron表达式字段解析完成"
    );

    CronProcessedResponse {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        expression: submission.expression().to_string(),
        processed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_echoes_expression() {
        let submission = CronSubmission::parse("0 2 * * 0").unwrap();
        let response = process_cron_expression(&submission);

        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
        assert_eq!(response.expression, "0 2 * * 0");
        assert!(chrono::DateTime::parse_from_rfc3339(&response.processed_at).is_ok());
        assert!(response.processed_at.ends_with('Z'));
    }
}
