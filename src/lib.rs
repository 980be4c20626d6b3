//! Metaleaf – one typed metadata value, the leaf node of a metadata tree.
//!
//! A [`value::Value`] carries a canonical content payload plus optional
//! descriptive attributes (unit, uncertainty, type, filename, definition,
//! reference, encoder, checksum), where:
//! * A [`datatype::DataKind`] is the fixed vocabulary of value types.
//! * A [`datatype::RawContent`] is loosely-typed input as callers supply it.
//! * A [`datatype::Content`] is the canonical tagged form content takes once
//!   it has passed the coercion gate.
//!
//! ## Modules
//! * [`datatype`] – the type vocabulary and the raw/canonical content unions.
//! * [`coerce`] – the coercion engine: the single gate through which all
//!   content passes before being accepted into a typed value.
//! * [`classify`] – an ordered heuristic battery guessing a plausible type
//!   for an untyped string; advisory, never authoritative.
//! * [`codec`] – base64 encoding of binary payloads referenced by path, URL
//!   or URI, with CRC32 integrity checksums, and the decode-and-write
//!   reverse path.
//! * [`value`] – the value record itself, its construction pipeline and
//!   terminology reconciliation.
//! * [`error`] – the crate-wide error taxonomy.
//!
//! ## Coercion
//! The declared type is always trusted over inferred structure. A declared
//! type outside the vocabulary falls back to `string` with a logged notice;
//! content incompatible with a recognized type rejects construction; empty
//! content is accepted with a warning, supporting terminology placeholder
//! entries that carry no concrete value yet.
//!
//! ## Binary content
//! Content declared `binary` that references a local file is read, base64
//! encoded, and stamped with a `CRC32$<decimal>` checksum over the encoded
//! bytes. Encoding failure degrades to an empty value with a diagnostic
//! instead of aborting construction.
//!
//! ## Quick Start
//! ```
//! use metaleaf::value::Value;
//! use metaleaf::datatype::Content;
//! use metaleaf::classify::{classify, Guess};
//! let v = Value::with_unit("12.7", "int", "mV").unwrap();
//! assert_eq!(*v.content(), Content::Int(12));
//! assert_eq!(v.to_string(), "12 mV");
//! assert_eq!(classify("2021-05-01 12:30:00"), Guess::Datetime);
//! ```

pub mod classify;
pub mod codec;
pub mod coerce;
pub mod datatype;
pub mod error;
pub mod value;
