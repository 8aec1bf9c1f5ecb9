//! # envelope-core
//!
//! Validates a flat JSON document against a schema carried in the same
//! payload:
//!
//! ```json
//! {
//!   "schema":   { "key1": { "type": "string", "required": true } },
//!   "document": { "key1": "value" }
//! }
//! ```
//!
//! A schema property may declare a `type` tag (`"string"`, `"integer"` or
//! `"boolean"`) and a `required` flag. The document is closed-world: every
//! document key must be declared in the schema.
//!
//! Validation stops at the first violation. Fields are visited in
//! lexicographic order, schema pass before document pass, so the reported
//! violation is reproducible when several exist.
//!
//! ```
//! use envelope_core::{validate, ValidationError};
//!
//! let input = br#"{"schema": {"key1": {"required": true}}, "document": {}}"#;
//! assert_eq!(
//!     validate(input, false),
//!     Err(ValidationError::MissingRequiredKey("key1".into()))
//! );
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod validate;

pub use config::ValidateOptions;
pub use envelope::{Envelope, FieldValue, SchemaProperty, TypeTag};
pub use error::ValidationError;
pub use validate::{validate, validate_envelope, validate_with};
