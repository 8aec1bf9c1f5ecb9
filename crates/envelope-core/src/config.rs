//! Validation options.

use serde::{Deserialize, Serialize};

/// Options controlling a validation call.
///
/// Hosts can embed this in their own configuration; every field has a
/// default, so `{}` deserializes to [`ValidateOptions::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// When false, `type` tags are advisory: an absent or empty tag never
    /// fails and the field's value is not checked. When true, every schema
    /// property must carry a recognized tag and every document value must
    /// match it.
    pub force_type_validation: bool,
}

impl ValidateOptions {
    /// Options with type enforcement turned on.
    pub fn strict() -> Self {
        Self {
            force_type_validation: true,
        }
    }
}
