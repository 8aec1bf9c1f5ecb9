use thiserror::Error;

use crate::envelope::TypeTag;

/// The single violation that terminated a validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is not JSON, or does not have the envelope shape.
    #[error("failed to decode envelope: {0}")]
    EnvelopeDecode(String),

    /// A top-level key other than `schema` or `document`.
    #[error("unrecognized envelope key: {0}")]
    UnrecognizedEnvelopeKey(String),

    /// A key other than `type` or `required` inside a schema property.
    #[error("unrecognized key '{key}' in schema property '{field}'")]
    UnrecognizedPropertyKey { field: String, key: String },

    #[error("required key is missing: {0}")]
    MissingRequiredKey(String),

    /// A document field that the schema does not declare.
    #[error("unexpected key: {0}")]
    UnexpectedKey(String),

    /// Type enforcement is on and the property has no `type` tag.
    #[error("missing type: {0}")]
    MissingType(String),

    /// Carries the offending tag, not the field name.
    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("unexpected type for '{field}': expected {expected}")]
    UnexpectedType { field: String, expected: TypeTag },
}

impl ValidationError {
    /// Stable snake_case code for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EnvelopeDecode(_) => "envelope_decode",
            Self::UnrecognizedEnvelopeKey(_) => "unrecognized_envelope_key",
            Self::UnrecognizedPropertyKey { .. } => "unrecognized_property_key",
            Self::MissingRequiredKey(_) => "missing_required_key",
            Self::UnexpectedKey(_) => "unexpected_key",
            Self::MissingType(_) => "missing_type",
            Self::InvalidType(_) => "invalid_type",
            Self::UnexpectedType { .. } => "unexpected_type",
        }
    }

    /// True for failures raised before the schema and document passes run.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::EnvelopeDecode(_)
                | Self::UnrecognizedEnvelopeKey(_)
                | Self::UnrecognizedPropertyKey { .. }
        )
    }
}
