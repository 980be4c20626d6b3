// used to normalize times down to whole seconds
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use tracing::{error, warn};

use crate::classify::is_n_tuple;
use crate::datatype::{Content, DataKind, RawContent};
use crate::error::{MetaleafError, Result};

/// The single gate through which all content passes before it is accepted
/// into a typed value.
///
/// The declared kind is trusted over the input's own shape; the job here is
/// narrow validation plus light normalization (integer prefix truncation,
/// dropping time components, whole-second times), not interpretation.
/// Empty input is a documented warning case, not a rejection: terminology
/// placeholders carry no concrete value yet.
///
/// Note the boolean asymmetry: a string that is not a case-insensitive
/// `true` coerces to `false` instead of being rejected.
pub fn coerce(raw: &RawContent, kind: DataKind) -> Result<Content> {
    if raw.is_empty() {
        warn!("value should not be empty except for terminologies");
        return Ok(Content::Empty);
    }
    match kind {
        DataKind::Int => match raw {
            RawContent::Int(i) => Ok(Content::Int(*i)),
            // numeric types narrow via truncation, not rounding
            RawContent::Float(x) => Ok(Content::Int(*x as i64)),
            RawContent::Text(s) => {
                let prefix = match s.find(['.', ',']) {
                    Some(at) => &s[..at],
                    None => s.as_str(),
                };
                prefix.parse::<i64>().map(Content::Int).map_err(|_| {
                    malformed(format!("cannot parse '{}' as an integer", s))
                })
            }
            _ => Err(reject(raw, kind)),
        },
        DataKind::Float => match raw {
            RawContent::Float(x) => Ok(Content::Float(*x)),
            RawContent::Int(i) => Ok(Content::Float(*i as f64)),
            RawContent::Text(s) => s.parse::<f64>().map(Content::Float).map_err(|_| {
                malformed(format!("cannot parse '{}' as a float", s))
            }),
            _ => Err(reject(raw, kind)),
        },
        DataKind::String | DataKind::Text => match raw {
            RawContent::Text(s) => Ok(Content::Text(s.clone())),
            RawContent::Char(c) => Ok(Content::Text(c.to_string())),
            _ => Err(reject(raw, kind)),
        },
        DataKind::NTuple => match raw {
            RawContent::Text(s) if is_n_tuple(s) => parse_n_tuple(s),
            RawContent::Text(s) => Err(malformed(format!(
                "'{}' does not match the n-tuple definition",
                s
            ))),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Date => match raw {
            RawContent::Date(d) => Ok(Content::Date(*d)),
            // drop the time component
            RawContent::Datetime(dt) => Ok(Content::Date(dt.date())),
            RawContent::Text(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Content::Date)
                .map_err(|_| malformed(format!("cannot parse '{}' as a date", s))),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Time => match raw {
            RawContent::Time(t) => Ok(Content::Time(whole_seconds(*t))),
            RawContent::Datetime(dt) => Ok(Content::Time(whole_seconds(dt.time()))),
            RawContent::Text(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
                .map(Content::Time)
                .map_err(|_| malformed(format!("cannot parse '{}' as a time", s))),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Datetime => match raw {
            RawContent::Datetime(dt) => Ok(Content::Datetime(
                dt.with_nanosecond(0).unwrap_or(*dt),
            )),
            RawContent::Text(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map(Content::Datetime)
                .map_err(|_| malformed(format!("cannot parse '{}' as a datetime", s))),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Boolean => match raw {
            RawContent::Boolean(b) => Ok(Content::Boolean(*b)),
            // anything but a literal true yields false, never a rejection
            RawContent::Text(s) => Ok(Content::Boolean(s.eq_ignore_ascii_case("true"))),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Url => match raw {
            RawContent::Url(u) => Ok(Content::Url(u.clone())),
            RawContent::Text(s) => url::Url::parse(s)
                .map(Content::Url)
                .map_err(|_| malformed(format!("cannot parse '{}' as an absolute URL", s))),
            _ => Err(reject(raw, kind)),
        },
        // the raw reference passes through here; reading and encoding the
        // file is a separate step owned by the codec
        DataKind::Binary => match raw {
            RawContent::Text(s) => Ok(Content::Binary(s.clone())),
            RawContent::Url(u) => Ok(Content::Binary(u.to_string())),
            RawContent::File(p) => Ok(Content::Binary(p.display().to_string())),
            _ => Err(reject(raw, kind)),
        },
        DataKind::Person => match raw {
            RawContent::Text(s) => Ok(Content::Text(s.clone())),
            _ => Err(reject(raw, kind)),
        },
    }
}

/// The universal fallback for declared types outside the vocabulary: the
/// content is carried over unchanged into its natural canonical variant.
pub fn passthrough(raw: &RawContent) -> Content {
    match raw {
        RawContent::Text(s) => Content::Text(s.clone()),
        RawContent::Char(c) => Content::Text(c.to_string()),
        RawContent::Int(i) => Content::Int(*i),
        RawContent::Float(x) => Content::Float(*x),
        RawContent::Boolean(b) => Content::Boolean(*b),
        RawContent::Date(d) => Content::Date(*d),
        RawContent::Time(t) => Content::Time(*t),
        RawContent::Datetime(dt) => Content::Datetime(*dt),
        RawContent::Url(u) => Content::Url(u.clone()),
        RawContent::File(p) => Content::Binary(p.display().to_string()),
    }
}

fn parse_n_tuple(s: &str) -> Result<Content> {
    let mut parts = s.split(';');
    let a = parts.next().unwrap_or_default();
    let b = parts.next().unwrap_or_default();
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => Ok(Content::NTuple(a, b)),
        _ => Err(malformed(format!("n-tuple '{}' is out of range", s))),
    }
}

fn whole_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

fn reject(raw: &RawContent, kind: DataKind) -> MetaleafError {
    error!(
        found = raw.kind_name(),
        requested = kind.as_str(),
        "cannot convert content to requested type"
    );
    MetaleafError::Conversion {
        found: raw.kind_name(),
        requested: kind.as_str(),
    }
}

fn malformed(message: String) -> MetaleafError {
    error!("{}", message);
    MetaleafError::Malformed(message)
}
