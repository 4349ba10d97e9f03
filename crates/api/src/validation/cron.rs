use thiserror::Error;

/// 最少字段数（分 时 日 月 周）
pub const MIN_FIELDS: usize = 5;
/// 最多字段数（额外的秒或年字段）
pub const MAX_FIELDS: usize = 6;

/// 按字段数区分的表达式布局，仅用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// 5个字段
    Standard,
    /// 6个字段
    Extended,
}

/// 字段分隔符，与ECMAScript正则 `\s` 的字符集一致
///
/// 和 `char::is_whitespace` 相比多了U+FEFF，少了U+0085。
fn is_field_separator(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn split_fields(expression: &str) -> impl Iterator<Item = &str> {
    expression
        .split(is_field_separator)
        .filter(|field| !field.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronValidationError {
    #[error("Missing cronExpression in request body")]
    Missing,

    #[error("Invalid cron expression format. Expected 5-6 parts.")]
    FieldCount { received: String, count: usize },
}

/// 通过结构校验的Cron表达式
///
/// 只能经由 [`CronSubmission::parse`] 构造，因此字段数总在
/// [`MIN_FIELDS`]..=[`MAX_FIELDS`] 之间。字段内容不做任何检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSubmission {
    expression: String,
    field_count: usize,
}

impl CronSubmission {
    pub fn parse(expression: impl Into<String>) -> Result<Self, CronValidationError> {
        let expression = expression.into();
        if expression.is_empty() {
            return Err(CronValidationError::Missing);
        }

        let field_count = split_fields(&expression).count();
        if !(MIN_FIELDS..=MAX_FIELDS).contains(&field_count) {
            return Err(CronValidationError::FieldCount {
                received: expression,
                count: field_count,
            });
        }

        Ok(Self {
            expression,
            field_count,
        })
    }

    /// 调用方提交的原始文本，未做trim
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        split_fields(&self.expression)
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn layout(&self) -> FieldLayout {
        if self.field_count == MAX_FIELDS {
            FieldLayout::Extended
        } else {
            FieldLayout::Standard
        }
    }
}
