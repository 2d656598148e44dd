// Copyright 2025 Cowboy AI, LLC.

//! Tracking identifiers and their minting

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Globally unique identifier assigned to a cargo at booking
///
/// The domain treats the identifier as an opaque uppercase string with no
/// internal structure. It never changes over the cargo's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TrackingId(String);

impl TrackingId {
    /// Create a tracking identifier from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_uppercase())
    }

    /// Get the underlying identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Capability for minting tracking identifiers
///
/// Abstracting the generator behind a single method lets tests substitute
/// a deterministic sequence where production uses random UUIDs.
pub trait TrackingIdGenerator: Send + Sync {
    /// Mint the next identifier
    fn next_id(&self) -> TrackingId;
}

/// Production generator backed by random UUIDs
///
/// Takes the first dash-separated segment of an uppercase v4 UUID, which
/// yields a short uppercase alphanumeric identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTrackingIdGenerator;

impl TrackingIdGenerator for UuidTrackingIdGenerator {
    fn next_id(&self) -> TrackingId {
        let raw = Uuid::new_v4().to_string().to_uppercase();
        let segment = raw.split('-').next().unwrap_or_default();
        TrackingId::new(segment)
    }
}

/// Deterministic generator for tests
///
/// Produces `PREFIX0`, `PREFIX1`, ... in order.
#[derive(Debug, Default)]
pub struct SequenceTrackingIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceTrackingIdGenerator {
    /// Create a generator with the given identifier prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl TrackingIdGenerator for SequenceTrackingIdGenerator {
    fn next_id(&self) -> TrackingId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        TrackingId::new(format!("{}{n}", self.prefix))
    }
}
