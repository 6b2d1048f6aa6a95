//! JSON date values.
//!
//! Dates travel as `YYYY-MM-DD HH:mm:ss.SSS` with an optional trailing `Z`
//! marking UTC. The marker is remembered so a parsed date formats back to
//! the exact string it came from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use std::fmt;

use crate::types::{Error, Result};

const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const UTC_MARKER: char = 'Z';

/// Length of `YYYY-MM-DD HH:mm:ss.SSS` without zone marker.
const TIMESTAMP_LEN: usize = 23;

/// Date value of a data object field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonDate {
    value: NaiveDateTime,
    utc: bool,
}

impl JsonDate {
    /// Parse a full timestamp or a date-only value (`YYYY-MM-DD`, midnight).
    ///
    /// Dates have millisecond precision: further fractional digits are
    /// accepted but truncated.
    pub fn parse(text: &str) -> Result<Self> {
        let (body, utc) = split_marker(text);
        if let Ok(value) = NaiveDateTime::parse_from_str(body, TIMESTAMP_PARSE_FORMAT) {
            return Ok(Self {
                value: value.trunc_subsecs(3),
                utc,
            });
        }
        NaiveDate::parse_from_str(body, DATE_FORMAT)
            .map(|date| Self {
                value: date.and_time(chrono::NaiveTime::MIN),
                utc,
            })
            .map_err(|e| Error::invalid_value(format!("'{}' is not a JSON date: {}", text, e)))
    }

    /// Strict check used for undeclared values: only the full
    /// millisecond timestamp form counts as a date.
    pub fn looks_like_timestamp(text: &str) -> bool {
        let (body, _) = split_marker(text);
        let bytes = body.as_bytes();
        if bytes.len() != TIMESTAMP_LEN {
            return false;
        }
        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            19 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
        shape_ok && NaiveDateTime::parse_from_str(body, TIMESTAMP_PARSE_FORMAT).is_ok()
    }

    pub fn from_utc(value: DateTime<Utc>) -> Self {
        Self {
            value: value.naive_utc(),
            utc: true,
        }
    }

    /// Date without zone marker (interpreted by the consumer's local zone).
    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self { value, utc: false }
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.value
    }

    pub fn is_utc(&self) -> bool {
        self.utc
    }

    /// The instant, if the date carries the UTC marker.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.utc.then(|| self.value.and_utc())
    }

    /// Wire representation, always with three fractional digits.
    pub fn format(&self) -> String {
        let mut text = self.value.format(TIMESTAMP_FORMAT).to_string();
        if self.utc {
            text.push(UTC_MARKER);
        }
        text
    }
}

impl fmt::Display for JsonDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn split_marker(text: &str) -> (&str, bool) {
    match text.strip_suffix(UTC_MARKER) {
        Some(body) => (body, true),
        None => (text, false),
    }
}
