//! Date parsing and formatting for loan dates.
//!
//! Loan dates are stored as `YYYY-MM-DD HH:MM:SS` text. Request bodies may
//! carry a bare date, a space- or `T`-separated datetime, or RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::DomainError;

pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DomainError> {
    let input = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }

    Err(DomainError::Validation(format!("Invalid date '{}'", input)))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}

/// `#[serde(serialize_with)]` helpers emitting the storage format.
pub mod storage {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_datetime(dt))
    }

    pub fn serialize_option<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_some(&super::format_datetime(dt)),
            None => s.serialize_none(),
        }
    }
}
