use std::fs;
use std::path::Path;

// reversible text-safe encoding of raw file bytes
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use tracing::{error, info};
use url::Url;

use crate::datatype::RawContent;
use crate::error::{MetaleafError, Result};

/// Name of the encoding algorithm stamped on values with encoded content.
pub const ENCODER: &str = "Base64";

/// A successfully encoded local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Base64 text of the file's raw bytes.
    pub data: String,
    /// `CRC32$<decimal>` over the encoded bytes, not the raw bytes, so it
    /// verifies the encoded representation.
    pub checksum: String,
    /// Base name of the source file.
    pub filename: String,
}

/// Outcome of resolving and encoding a binary reference.
///
/// Failure is deliberately absorbed here: an unresolvable or unreadable
/// reference degrades the owning value to empty content instead of aborting
/// its construction. The explicit variant lets callers tell "no file,
/// content taken as already encoded" apart from "encoding failed".
#[derive(Debug)]
pub enum Encoded {
    /// The reference was a readable local file; bytes were encoded.
    File(EncodedPayload),
    /// The string was not a `file:` URI and is carried over unchanged.
    Inline(String),
    /// Resolution or reading failed; the diagnostic has been logged.
    Failed,
}

/// Resolves a binary reference (string, URL, or file path) and encodes the
/// referenced file's bytes.
pub fn encode(reference: &RawContent) -> Encoded {
    info!(content = %reference, "encoding binary content");
    match reference {
        RawContent::Text(s) => match file_from_uri(s) {
            Some(path) => encode_file(&path),
            // not a file URI: taken as pre-encoded inline content
            None => Encoded::Inline(s.clone()),
        },
        RawContent::Url(u) => match u.to_file_path() {
            Ok(path) => encode_file(&path),
            Err(_) => {
                error!(url = %u, "could not resolve the URL to a local file");
                Encoded::Failed
            }
        },
        RawContent::File(p) => encode_file(p),
        other => {
            error!(found = other.kind_name(), "cannot resolve a file from this content");
            Encoded::Failed
        }
    }
}

fn file_from_uri(s: &str) -> Option<std::path::PathBuf> {
    let url = Url::parse(s).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

fn encode_file(path: &Path) -> Encoded {
    match read_file_bytes(path) {
        Ok(bytes) => {
            let data = STANDARD.encode(&bytes);
            let checksum = format!("CRC32${}", crc32fast::hash(data.as_bytes()));
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Encoded::File(EncodedPayload {
                data,
                checksum,
                filename,
            })
        }
        Err(e) => {
            error!(error = %e, "an error occurred during encoding");
            Encoded::Failed
        }
    }
}

/// Reads a file fully into memory, bounded by the addressable payload size.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let length = fs::metadata(path)?.len();
    if length > u32::MAX as u64 {
        return Err(MetaleafError::Io(format!(
            "file exceeds max encodable size: {}",
            u32::MAX
        )));
    }
    let bytes = fs::read(path)?;
    if (bytes.len() as u64) < length {
        return Err(MetaleafError::Io(format!(
            "could not completely read file {}",
            path.display()
        )));
    }
    Ok(bytes)
}

/// The exact inverse of the encoding step.
pub fn decode(content: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(content)?)
}

/// Decodes base64 content and writes the raw bytes to the given file.
pub fn write_binary(content: &str, out_file: &Path) -> Result<()> {
    let bytes = decode(content)?;
    fs::write(out_file, bytes)?;
    Ok(())
}
