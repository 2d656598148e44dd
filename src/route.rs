// Copyright 2025 Cowboy AI, LLC.

//! Route specification: the business request an itinerary must satisfy

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::itinerary::Itinerary;
use crate::location::UnLocode;

/// Origin, destination and arrival deadline requested for a cargo
///
/// Immutable once constructed; re-routing replaces the whole
/// specification rather than editing it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteSpecification {
    /// Where the cargo enters the network
    pub origin: UnLocode,
    /// Where the cargo is to be delivered
    pub destination: UnLocode,
    /// Latest acceptable arrival time at the destination
    pub arrival_deadline: DateTime<Utc>,
}

impl RouteSpecification {
    /// Create a route specification
    pub fn new(origin: UnLocode, destination: UnLocode, arrival_deadline: DateTime<Utc>) -> Self {
        Self {
            origin,
            destination,
            arrival_deadline,
        }
    }

    /// Whether the itinerary actually routes the cargo from this
    /// specification's origin to its destination
    ///
    /// An empty itinerary never satisfies. Leg-to-leg continuity is already
    /// guaranteed by the `Itinerary` invariant, so checking the endpoints
    /// is sufficient.
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        itinerary.initial_departure_location() == Some(&self.origin)
            && itinerary.final_arrival_location() == Some(&self.destination)
    }
}
