pub mod cron;

pub use cron::{CronSubmission, CronValidationError, FieldLayout, MAX_FIELDS, MIN_FIELDS};
