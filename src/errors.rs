// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
///
/// Unusual shipment states (unrouted, misrouted, cargo on no voyage) are
/// not errors. They are represented by `RoutingStatus` and
/// `TransportStatus` values; this enum covers genuine failures only.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// No cargo is stored under the given tracking identifier
    #[error("unknown cargo: {tracking_id}")]
    UnknownCargo {
        /// Identifier that was searched for
        tracking_id: String,
    },

    /// A leg that loads and unloads at the same location
    #[error("leg on voyage {voyage} loads and unloads at the same location {location}")]
    DegenerateLeg {
        /// Voyage the leg is scheduled on
        voyage: String,
        /// The offending location code
        location: String,
    },

    /// Consecutive legs that do not join up into one continuous route
    #[error("discontinuous itinerary: leg {index} loads at {found}, expected {expected}")]
    DiscontinuousItinerary {
        /// Zero-based index of the offending leg
        index: usize,
        /// Unload location of the preceding leg
        expected: String,
        /// Load location actually found
        found: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
