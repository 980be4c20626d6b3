// used for the canonical temporal representations
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
// parsed absolute URLs are a canonical content type of their own
use url::Url;

// used to print out readable forms of content
use std::fmt;
use std::path::PathBuf;

/// The fixed vocabulary of value types.
///
/// Declared types arrive as free text and are parsed once at the boundary
/// with [`DataKind::parse`]; everything downstream dispatches exhaustively
/// on this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    String,
    Text,
    Int,
    Float,
    Boolean,
    Date,
    Time,
    Datetime,
    NTuple,
    Url,
    Binary,
    Person,
}

impl DataKind {
    /// Parses a declared type tag, case-insensitively. The numeric and
    /// boolean families match by prefix (`int*`, `float*`, `bool*`), the
    /// rest exactly. Returns `None` for tags outside the vocabulary, which
    /// callers handle as the fall-back-to-string branch.
    pub fn parse(tag: &str) -> Option<DataKind> {
        let tag = tag.trim().to_lowercase();
        if tag.starts_with("int") {
            return Some(DataKind::Int);
        }
        if tag.starts_with("float") {
            return Some(DataKind::Float);
        }
        if tag.starts_with("bool") {
            return Some(DataKind::Boolean);
        }
        match tag.as_str() {
            "string" => Some(DataKind::String),
            "text" => Some(DataKind::Text),
            "date" => Some(DataKind::Date),
            "time" => Some(DataKind::Time),
            "datetime" => Some(DataKind::Datetime),
            "n-tuple" => Some(DataKind::NTuple),
            "url" => Some(DataKind::Url),
            "binary" => Some(DataKind::Binary),
            "person" => Some(DataKind::Person),
            _ => None,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::String => "string",
            DataKind::Text => "text",
            DataKind::Int => "int",
            DataKind::Float => "float",
            DataKind::Boolean => "boolean",
            DataKind::Date => "date",
            DataKind::Time => "time",
            DataKind::Datetime => "datetime",
            DataKind::NTuple => "n-tuple",
            DataKind::Url => "url",
            DataKind::Binary => "binary",
            DataKind::Person => "person",
        }
    }
}
impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- Content -------------
/// Canonical content, produced only by the coercion engine.
///
/// Each variant is the in-memory form a payload takes once it has passed
/// the gate for its declared kind. `Empty` is the documented degenerate
/// case for terminology placeholders. For `Binary`, the string holds the
/// encoded representation once encoding has run, otherwise the raw
/// reference that coercion passed through.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Datetime(NaiveDateTime),
    NTuple(i64, i64),
    Url(Url),
    Binary(String),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Text(s) => s.is_empty(),
            Content::Binary(s) => s.is_empty(),
            _ => false,
        }
    }
}
impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Content::Empty => Ok(()),
            Content::Text(s) => write!(f, "{}", s),
            Content::Int(i) => write!(f, "{}", i),
            Content::Float(x) => write!(f, "{}", x),
            Content::Boolean(b) => write!(f, "{}", b),
            Content::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Content::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            Content::Datetime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Content::NTuple(a, b) => write!(f, "{};{}", a, b),
            Content::Url(u) => write!(f, "{}", u),
            Content::Binary(s) => write!(f, "{}", s),
        }
    }
}

// ------------- RawContent -------------
/// Loosely-typed input as it arrives from a caller, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawContent {
    Text(String),
    Char(char),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Datetime(NaiveDateTime),
    Url(Url),
    File(PathBuf),
}

impl RawContent {
    /// The input's own shape, used in rejection messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawContent::Text(_) => "String",
            RawContent::Char(_) => "Char",
            RawContent::Int(_) => "Int",
            RawContent::Float(_) => "Float",
            RawContent::Boolean(_) => "Boolean",
            RawContent::Date(_) => "Date",
            RawContent::Time(_) => "Time",
            RawContent::Datetime(_) => "Datetime",
            RawContent::Url(_) => "Url",
            RawContent::File(_) => "File",
        }
    }
    /// Guesses the vocabulary kind from the input's shape alone. Advisory,
    /// for callers that have content but no declared type.
    pub fn infer_kind(&self) -> DataKind {
        match self {
            RawContent::Text(_) => DataKind::String,
            RawContent::Char(_) => DataKind::String,
            RawContent::Int(_) => DataKind::Int,
            RawContent::Float(_) => DataKind::Float,
            RawContent::Boolean(_) => DataKind::Boolean,
            RawContent::Date(_) => DataKind::Date,
            RawContent::Time(_) => DataKind::Time,
            RawContent::Datetime(_) => DataKind::Datetime,
            RawContent::Url(_) => DataKind::Url,
            RawContent::File(_) => DataKind::Binary,
        }
    }
    /// True when the input renders to an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            RawContent::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}
impl fmt::Display for RawContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RawContent::Text(s) => write!(f, "{}", s),
            RawContent::Char(c) => write!(f, "{}", c),
            RawContent::Int(i) => write!(f, "{}", i),
            RawContent::Float(x) => write!(f, "{}", x),
            RawContent::Boolean(b) => write!(f, "{}", b),
            RawContent::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            RawContent::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            RawContent::Datetime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            RawContent::Url(u) => write!(f, "{}", u),
            RawContent::File(p) => write!(f, "{}", p.display()),
        }
    }
}

impl From<&str> for RawContent {
    fn from(s: &str) -> Self { RawContent::Text(s.to_owned()) }
}
impl From<String> for RawContent {
    fn from(s: String) -> Self { RawContent::Text(s) }
}
impl From<char> for RawContent {
    fn from(c: char) -> Self { RawContent::Char(c) }
}
impl From<i64> for RawContent {
    fn from(i: i64) -> Self { RawContent::Int(i) }
}
impl From<f64> for RawContent {
    fn from(x: f64) -> Self { RawContent::Float(x) }
}
impl From<bool> for RawContent {
    fn from(b: bool) -> Self { RawContent::Boolean(b) }
}
impl From<NaiveDate> for RawContent {
    fn from(d: NaiveDate) -> Self { RawContent::Date(d) }
}
impl From<NaiveTime> for RawContent {
    fn from(t: NaiveTime) -> Self { RawContent::Time(t) }
}
impl From<NaiveDateTime> for RawContent {
    fn from(dt: NaiveDateTime) -> Self { RawContent::Datetime(dt) }
}
impl From<Url> for RawContent {
    fn from(u: Url) -> Self { RawContent::Url(u) }
}
impl From<PathBuf> for RawContent {
    fn from(p: PathBuf) -> Self { RawContent::File(p) }
}
