
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaleafError {
    #[error("Could not create value: a type must be given and must not be empty")]
    MissingType,
    #[error("Cannot convert {found} content to requested type: {requested}")]
    Conversion { found: &'static str, requested: &'static str },
    #[error("Malformed content: {0}")]
    Malformed(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, MetaleafError>;

// Helper conversions
impl From<std::io::Error> for MetaleafError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
impl From<base64::DecodeError> for MetaleafError {
    fn from(e: base64::DecodeError) -> Self { Self::Encoding(e.to_string()) }
}
