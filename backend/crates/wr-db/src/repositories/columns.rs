use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(table: &'static str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(table, format!("bad id '{value}': {e}")))
}

#[track_caller]
pub(crate) fn parse_timestamp(table: &'static str, seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbError::decode(table, format!("timestamp out of range: {seconds}")))
}
