// used to print out readable forms of a value
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::codec::{self, Encoded};
use crate::coerce::{coerce, passthrough};
use crate::datatype::{Content, DataKind, RawContent};
use crate::error::{MetaleafError, Result};

/// Non-owning back-reference to the property that holds a value in the
/// metadata tree. The value's lifetime is subordinate to its container, so
/// this is an identifier, never an ownership edge.
pub type PropertyId = u64;

/// An authoritative type and unit for a named property, supplied by an
/// external terminology and consulted for reconciliation.
#[derive(Debug, Clone)]
pub struct Terminology {
    kind: DataKind,
    unit: String,
}
impl Terminology {
    pub fn new(kind: DataKind, unit: &str) -> Self {
        Self {
            kind,
            unit: unit.to_owned(),
        }
    }
    pub fn kind(&self) -> DataKind {
        self.kind
    }
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// One typed metadata value: a canonical content payload plus optional
/// descriptive attributes.
///
/// A value is created exactly once through the coercion pipeline; the
/// content's canonical kind is fixed at creation. The descriptive fields
/// are empty strings when unset, never an absent marker, which keeps
/// downstream handling uniform. They may be updated later by the owning
/// container.
#[derive(Debug, Clone)]
pub struct Value {
    content: Content,
    kind: DataKind,
    unit: String,
    uncertainty: String,
    filename: String,
    definition: String,
    reference: String,
    encoder: String,
    checksum: String,
    property: Option<PropertyId>,
}

impl Value {
    /// Creates a value from content and a mandatory declared type.
    pub fn new(content: impl Into<RawContent>, declared_type: &str) -> Result<Value> {
        Self::with_details(content, declared_type, None, None, None, None, None)
    }

    pub fn with_unit(
        content: impl Into<RawContent>,
        declared_type: &str,
        unit: &str,
    ) -> Result<Value> {
        Self::with_details(content, declared_type, Some(unit), None, None, None, None)
    }

    /// Creates a value carrying all possible information. Any descriptive
    /// argument may be omitted; the declared type may not.
    ///
    /// A declared type outside the vocabulary is not a failure: the value
    /// is handled as a string and a notice is logged. Content incompatible
    /// with a recognized declared type aborts construction. If the type is
    /// `binary`, the referenced file is read and encoded here, stamping
    /// checksum, encoder and filename; encoding failure degrades to an
    /// empty value rather than an error.
    pub fn with_details(
        content: impl Into<RawContent>,
        declared_type: &str,
        unit: Option<&str>,
        uncertainty: Option<&str>,
        filename: Option<&str>,
        definition: Option<&str>,
        reference: Option<&str>,
    ) -> Result<Value> {
        if declared_type.trim().is_empty() {
            return Err(MetaleafError::MissingType);
        }
        let raw = content.into();
        let (kind, coerced) = match DataKind::parse(declared_type) {
            Some(kind) => (kind, coerce(&raw, kind)?),
            None => {
                warn!(declared = declared_type, "type unknown, handling as 'string'");
                (DataKind::String, passthrough(&raw))
            }
        };
        if coerced.is_empty() {
            warn!("value should not be empty except for terminologies");
        }
        let mut value = Value {
            content: coerced,
            kind,
            unit: unwrap_or_empty(unit),
            uncertainty: unwrap_or_empty(uncertainty),
            filename: unwrap_or_empty(filename),
            definition: unwrap_or_empty(definition),
            reference: unwrap_or_empty(reference),
            encoder: String::new(),
            checksum: String::new(),
            property: None,
        };
        if kind == DataKind::Binary {
            match codec::encode(&raw) {
                Encoded::File(payload) => {
                    value.content = Content::Binary(payload.data);
                    value.checksum = payload.checksum;
                    value.encoder = codec::ENCODER.to_owned();
                    // an explicitly supplied filename wins over the stamped one
                    if value.filename.is_empty() {
                        value.filename = payload.filename;
                    }
                }
                Encoded::Inline(data) => {
                    value.content = Content::Binary(data);
                }
                Encoded::Failed => {
                    value.content = Content::Empty;
                }
            }
        }
        Ok(value)
    }

    /// Returns whether or not the value is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Compares only the rendered content of two values, not their type,
    /// definition or other descriptive fields.
    pub fn equal_content(&self, other: &Value) -> bool {
        self.content.to_string() == other.content.to_string()
    }

    /// Validates this value against a terminology. A conflicting type or
    /// unit is logged but the value's own is kept; a missing unit adopts
    /// the terminology's.
    pub fn reconcile(&mut self, terminology: &Terminology) {
        if self.kind != terminology.kind() {
            warn!(
                value_type = %self.kind,
                terminology_type = %terminology.kind(),
                "value type does not match the terminology, keeping the provided type"
            );
        }
        if self.unit.is_empty() {
            if !terminology.unit().is_empty() {
                self.unit = terminology.unit().to_owned();
                info!(unit = %self.unit, "added unit information from the terminology");
            }
        } else if !self.unit.eq_ignore_ascii_case(terminology.unit()) {
            warn!(
                value_unit = %self.unit,
                terminology_unit = %terminology.unit(),
                "value unit does not match the terminology, keeping the provided unit"
            );
        }
    }

    /// Decodes this value's base64 content and writes the raw bytes to the
    /// given file.
    pub fn write_binary(&self, out_file: &Path) -> Result<()> {
        match &self.content {
            Content::Binary(data) => codec::write_binary(data, out_file),
            _ => Err(MetaleafError::Encoding(
                "value does not hold binary content".to_owned(),
            )),
        }
    }

    // It's intentional to encapsulate the fields and only expose getters,
    // because the content's canonical kind is fixed at creation.
    pub fn content(&self) -> &Content {
        &self.content
    }
    pub fn kind(&self) -> DataKind {
        self.kind
    }
    pub fn unit(&self) -> &str {
        &self.unit
    }
    pub fn uncertainty(&self) -> &str {
        &self.uncertainty
    }
    pub fn filename(&self) -> &str {
        &self.filename
    }
    pub fn definition(&self) -> &str {
        &self.definition
    }
    pub fn reference(&self) -> &str {
        &self.reference
    }
    pub fn encoder(&self) -> &str {
        &self.encoder
    }
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
    pub fn property(&self) -> Option<PropertyId> {
        self.property
    }

    pub fn set_unit(&mut self, unit: &str) {
        self.unit = unit.to_owned();
    }
    pub fn set_uncertainty(&mut self, uncertainty: &str) {
        self.uncertainty = uncertainty.to_owned();
    }
    pub fn set_filename(&mut self, filename: &str) {
        self.filename = filename.to_owned();
    }
    pub fn set_definition(&mut self, definition: &str) {
        self.definition = definition.to_owned();
    }
    pub fn set_reference(&mut self, reference: &str) {
        self.reference = reference.to_owned();
    }
    pub fn set_checksum(&mut self, checksum: &str) {
        self.checksum = checksum.to_owned();
    }
    pub fn set_property(&mut self, property: PropertyId) {
        self.property = Some(property);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = self.content.to_string();
        if !self.uncertainty.is_empty() {
            s = s + "+-" + &self.uncertainty;
        }
        if !self.unit.is_empty() {
            s = s + " " + &self.unit;
        }
        write!(f, "{}", s)
    }
}

fn unwrap_or_empty(s: Option<&str>) -> String {
    s.map(str::to_owned).unwrap_or_default()
}
