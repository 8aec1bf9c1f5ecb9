//! Schema and document passes.
//!
//! The schema pass runs to completion before the document pass starts.
//! Within each pass fields are visited in lexicographic order and the first
//! violation is returned.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::ValidateOptions;
use crate::envelope::{Envelope, TypeTag};
use crate::error::ValidationError;

/// Decode `input` and validate it.
///
/// When `force_type_validation` is false, an empty `type` tag disables type
/// checking for that field. A non-empty tag is always checked.
pub fn validate(input: &[u8], force_type_validation: bool) -> Result<(), ValidationError> {
    validate_with(
        input,
        &ValidateOptions {
            force_type_validation,
        },
    )
}

/// Decode `input` and validate it with explicit options.
pub fn validate_with(input: &[u8], options: &ValidateOptions) -> Result<(), ValidationError> {
    let result =
        Envelope::from_slice(input).and_then(|envelope| validate_envelope(&envelope, options));
    if let Err(err) = &result {
        debug!(kind = err.kind(), "envelope rejected: {err}");
    }
    result
}

/// Validate an already decoded envelope.
pub fn validate_envelope(
    envelope: &Envelope,
    options: &ValidateOptions,
) -> Result<(), ValidationError> {
    debug!(
        schema_fields = envelope.schema.len(),
        document_fields = envelope.document.len(),
        force_type_validation = options.force_type_validation,
        "validating envelope"
    );

    let tags = check_schema(envelope, options)?;
    check_document(envelope, &tags)
}

/// Resolved tag per schema field; `None` means unconstrained.
type ResolvedTags<'a> = BTreeMap<&'a str, Option<TypeTag>>;

fn check_schema<'a>(
    envelope: &'a Envelope,
    options: &ValidateOptions,
) -> Result<ResolvedTags<'a>, ValidationError> {
    let mut tags = BTreeMap::new();

    for (field, property) in &envelope.schema {
        if property.required && !envelope.document.contains_key(field) {
            return Err(ValidationError::MissingRequiredKey(field.clone()));
        }

        let tag = match property.tag() {
            Some(raw) => Some(raw.parse::<TypeTag>()?),
            None if options.force_type_validation => {
                return Err(ValidationError::MissingType(field.clone()));
            }
            None => None,
        };
        tags.insert(field.as_str(), tag);
    }

    Ok(tags)
}

fn check_document(envelope: &Envelope, tags: &ResolvedTags<'_>) -> Result<(), ValidationError> {
    for (field, value) in &envelope.document {
        let tag = tags
            .get(field.as_str())
            .ok_or_else(|| ValidationError::UnexpectedKey(field.clone()))?;

        if let Some(tag) = tag {
            if !tag.matches(value) {
                debug!(field = %field, expected = %tag, actual = value.kind(), "type mismatch");
                return Err(ValidationError::UnexpectedType {
                    field: field.clone(),
                    expected: *tag,
                });
            }
        }
    }

    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
