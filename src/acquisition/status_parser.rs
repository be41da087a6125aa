//! Telemetry status line parser.
//!
//! A status line carries 8 positional fields separated by a configurable
//! delimiter pattern (`\|` in production logs):
//!
//! ```text
//! 20180101 23:01:38.001|1000|101|98|25|20|102.9|TSTAT
//! ^timestamp            ^id  ^rh ^yh ^yl ^rl ^value ^kind
//! ```
//!
//! Field order is fixed: timestamp, satellite id, red high limit, yellow
//! high limit, yellow low limit, red low limit, value, component kind.
//! Numeric fields are trimmed of surrounding whitespace; the component
//! kind token is matched exactly.

use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::types::{ComponentKind, ComponentLimits, StatusReading, ValidationError};

/// Timestamp format used by the telemetry logs, interpreted as UTC.
const TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M:%S%.3f";

/// Errors raised while turning one telemetry line into a status reading.
///
/// Every failure mode collapses into this one type so the pipeline can
/// skip a bad line with a single diagnostic.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid delimiter pattern: {0}")]
    Delimiter(#[from] regex::Error),

    #[error("bad timestamp {text:?}: {source}")]
    Timestamp {
        text: String,
        source: chrono::ParseError,
    },

    #[error("bad {field} field {text:?}: {source}")]
    IntField {
        field: &'static str,
        text: String,
        source: ParseIntError,
    },

    #[error("bad value field {text:?}: {source}")]
    FloatField {
        text: String,
        source: ParseFloatError,
    },

    #[error("unknown component kind {0:?}")]
    UnknownComponent(String),

    #[error("invalid status record: {0}")]
    Validation(#[from] ValidationError),
}

/// Parses telemetry log lines into validated [`StatusReading`]s.
///
/// The delimiter is treated as a regex pattern, so callers supplying a
/// literal metacharacter (like `|`) must escape it themselves.
pub struct StatusParser {
    delimiter: Regex,
}

impl StatusParser {
    /// Create a parser for the given delimiter pattern.
    pub fn new(delimiter: &str) -> Result<Self, ParseError> {
        Ok(Self {
            delimiter: Regex::new(delimiter)?,
        })
    }

    /// Parse one telemetry line into a status reading.
    ///
    /// Fields are consumed strictly in positional order. A missing
    /// trailing field leaves its attribute at the default (zero / unset),
    /// which the validating constructors then reject; no partial reading
    /// is ever returned.
    pub fn parse(&self, line: &str) -> Result<StatusReading, ParseError> {
        let mut fields = self.delimiter.split(line);

        let timestamp = fields.next().map(parse_timestamp).transpose()?;
        let satellite_id = next_int(&mut fields, "satellite id")?;
        let red_high = next_int(&mut fields, "red high limit")?;
        let yellow_high = next_int(&mut fields, "yellow high limit")?;
        let yellow_low = next_int(&mut fields, "yellow low limit")?;
        let red_low = next_int(&mut fields, "red low limit")?;
        let value = match fields.next() {
            Some(text) => text.trim().parse::<f64>().map_err(|source| {
                ParseError::FloatField {
                    text: text.to_string(),
                    source,
                }
            })?,
            None => 0.0,
        };
        let kind = fields
            .next()
            .map(|token| {
                ComponentKind::from_token(token)
                    .ok_or_else(|| ParseError::UnknownComponent(token.to_string()))
            })
            .transpose()?;

        let limits = ComponentLimits::new(
            kind.ok_or(ValidationError::MissingField("component kind"))?,
            red_high,
            red_low,
            yellow_high,
            yellow_low,
        )?;
        let reading = StatusReading::new(
            satellite_id,
            limits,
            value,
            timestamp.ok_or(ValidationError::MissingField("timestamp"))?,
        )?;

        Ok(reading)
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ParseError::Timestamp {
            text: text.to_string(),
            source,
        })
}

/// Consume the next field as a trimmed integer, defaulting to zero when
/// the field is absent.
fn next_int<'a, T>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError> + Default,
{
    match fields.next() {
        Some(text) => text.trim().parse().map_err(|source| ParseError::IntField {
            field,
            text: text.to_string(),
            source,
        }),
        None => Ok(T::default()),
    }
}
