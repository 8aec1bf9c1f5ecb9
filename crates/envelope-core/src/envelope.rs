//! Envelope wire types and the decode front end.
//!
//! Decoding is all-or-nothing: [`Envelope::from_slice`] either returns a
//! fully built envelope or the first decode failure. Unknown keys are
//! reported with their own error variants rather than as a generic parse
//! failure.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::error::ValidationError;

const SCHEMA_KEY: &str = "schema";
const DOCUMENT_KEY: &str = "document";

/// Keys accepted inside a schema property object.
const PROPERTY_KEYS: [&str; 2] = ["type", "required"];

/// A recognized scalar type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    /// Matches any JSON number, integral or not.
    Integer,
    Boolean,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
        }
    }

    /// Whether `value` conforms to this tag. [`FieldValue::Other`] never does.
    pub fn matches(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (TypeTag::String, FieldValue::String(_))
                | (TypeTag::Integer, FieldValue::Number(_))
                | (TypeTag::Boolean, FieldValue::Bool(_))
        )
    }
}

impl FromStr for TypeTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(TypeTag::String),
            "integer" => Ok(TypeTag::Integer),
            "boolean" => Ok(TypeTag::Boolean),
            other => Err(ValidationError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded document value, classified by runtime kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Number(Number),
    /// Arrays, objects and null.
    Other(Value),
}

impl FieldValue {
    /// JSON kind name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Other(Value::Array(_)) => "array",
            FieldValue::Other(Value::Object(_)) => "object",
            FieldValue::Other(_) => "null",
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n),
            other => FieldValue::Other(other),
        }
    }
}

/// Per-field schema metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SchemaProperty {
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl SchemaProperty {
    /// The declared tag, with an absent tag and `""` both reported as `None`.
    pub fn tag(&self) -> Option<&str> {
        self.type_tag.as_deref().filter(|t| !t.is_empty())
    }

    fn from_value(field: &str, value: Value) -> Result<Self, ValidationError> {
        if let Value::Object(map) = &value {
            if let Some(key) = map.keys().find(|k| !PROPERTY_KEYS.contains(&k.as_str())) {
                return Err(ValidationError::UnrecognizedPropertyKey {
                    field: field.to_string(),
                    key: key.clone(),
                });
            }
        }
        serde_json::from_value(value).map_err(|e| {
            ValidationError::EnvelopeDecode(format!("schema property '{field}': {e}"))
        })
    }
}

/// A schema and the document to check against it.
///
/// Both maps iterate in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub schema: BTreeMap<String, SchemaProperty>,
    pub document: BTreeMap<String, FieldValue>,
}

impl Envelope {
    /// Decode an envelope from raw JSON bytes.
    ///
    /// An absent or `null` `schema`/`document` decodes as an empty map.
    pub fn from_slice(input: &[u8]) -> Result<Self, ValidationError> {
        let mut root: Map<String, Value> = serde_json::from_slice(input)
            .map_err(|e| ValidationError::EnvelopeDecode(e.to_string()))?;

        if let Some(key) = root
            .keys()
            .find(|k| k.as_str() != SCHEMA_KEY && k.as_str() != DOCUMENT_KEY)
        {
            return Err(ValidationError::UnrecognizedEnvelopeKey(key.clone()));
        }

        let schema = match root.remove(SCHEMA_KEY) {
            Some(value) => decode_schema(value)?,
            None => BTreeMap::new(),
        };
        let document = match root.remove(DOCUMENT_KEY) {
            Some(value) => decode_section::<FieldValue>(DOCUMENT_KEY, value)?,
            None => BTreeMap::new(),
        };

        Ok(Self { schema, document })
    }
}

fn decode_schema(value: Value) -> Result<BTreeMap<String, SchemaProperty>, ValidationError> {
    decode_section::<Value>(SCHEMA_KEY, value)?
        .into_iter()
        .map(|(field, raw)| {
            let property = SchemaProperty::from_value(&field, raw)?;
            Ok((field, property))
        })
        .collect()
}

fn decode_section<T>(name: &str, value: Value) -> Result<BTreeMap<String, T>, ValidationError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value::<Option<BTreeMap<String, T>>>(value)
        .map(Option::unwrap_or_default)
        .map_err(|e| ValidationError::EnvelopeDecode(format!("{name}: {e}")))
}
