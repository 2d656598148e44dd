// Copyright 2025 Cowboy AI, LLC.

//! Location code value object

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// United Nations location code identifying a port or terminal
///
/// The code is opaque to the rest of the domain: only equality is relied
/// upon. Codes are uppercased on construction so that `"usnyc"` and
/// `"USNYC"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct UnLocode(String);

impl UnLocode {
    /// Create a location code from its string form
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Get the underlying code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UnLocode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
