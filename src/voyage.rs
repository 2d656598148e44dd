// Copyright 2025 Cowboy AI, LLC.

//! Voyage identifier value object

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a scheduled carrier movement
///
/// Opaque to the domain; legs and handling events are matched on equality
/// of voyage numbers, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct VoyageNumber(String);

impl VoyageNumber {
    /// Create a voyage number from its string form
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Get the underlying number
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoyageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoyageNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}
