// Copyright 2025 Cowboy AI, LLC.

//! Planned physical route as an ordered sequence of legs

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::handling::{HandlingActivityType, HandlingEvent};
use crate::location::UnLocode;
use crate::voyage::VoyageNumber;

/// One scheduled transport segment of an itinerary, on a single voyage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Leg {
    /// Voyage this leg is scheduled on
    pub voyage_number: VoyageNumber,
    /// Where the cargo is loaded
    pub load_location: UnLocode,
    /// Where the cargo is unloaded
    pub unload_location: UnLocode,
    /// Scheduled load time
    pub load_time: DateTime<Utc>,
    /// Scheduled unload time
    pub unload_time: DateTime<Utc>,
}

impl Leg {
    /// Create a leg, rejecting one that loads and unloads at the same location
    pub fn new(
        voyage_number: VoyageNumber,
        load_location: UnLocode,
        unload_location: UnLocode,
        load_time: DateTime<Utc>,
        unload_time: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if load_location == unload_location {
            return Err(DomainError::DegenerateLeg {
                voyage: voyage_number.to_string(),
                location: load_location.to_string(),
            });
        }
        Ok(Self {
            voyage_number,
            load_location,
            unload_location,
            load_time,
            unload_time,
        })
    }
}

/// The realized physical route assigned to a cargo
///
/// An empty itinerary is the legitimate "not yet routed" state, not an
/// error. The continuity invariant (every leg loads where its predecessor
/// unloaded) is enforced here at construction; status derivation assumes
/// it holds and does not re-validate on every access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// An empty itinerary: the cargo has not been routed yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an itinerary from legs, enforcing the continuity invariant
    pub fn new(legs: Vec<Leg>) -> DomainResult<Self> {
        for (index, pair) in legs.windows(2).enumerate() {
            if pair[1].load_location != pair[0].unload_location {
                return Err(DomainError::DiscontinuousItinerary {
                    index: index + 1,
                    expected: pair[0].unload_location.to_string(),
                    found: pair[1].load_location.to_string(),
                });
            }
        }
        Ok(Self { legs })
    }

    /// Legs in travel order
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Whether the itinerary has no legs
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// First leg's load location, or `None` when unrouted
    pub fn initial_departure_location(&self) -> Option<&UnLocode> {
        self.legs.first().map(|leg| &leg.load_location)
    }

    /// Last leg's unload location, or `None` when unrouted
    pub fn final_arrival_location(&self) -> Option<&UnLocode> {
        self.legs.last().map(|leg| &leg.unload_location)
    }

    /// Scheduled unload time of the final leg, or `None` when unrouted
    pub fn final_arrival_time(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(|leg| leg.unload_time)
    }

    /// Whether a handling event is consistent with this route
    ///
    /// An empty itinerary expects no handling at all. Load and unload
    /// events must match some leg's location and voyage number; receive
    /// and claim are tied to the route's endpoints; customs inspection may
    /// happen at any location the route touches.
    pub fn is_expected(&self, event: &HandlingEvent) -> bool {
        if self.legs.is_empty() {
            return false;
        }
        match event.activity {
            HandlingActivityType::Receive => {
                self.initial_departure_location() == Some(&event.location)
            }
            HandlingActivityType::Load => self.legs.iter().any(|leg| {
                leg.load_location == event.location
                    && event.voyage.as_ref() == Some(&leg.voyage_number)
            }),
            HandlingActivityType::Unload => self.legs.iter().any(|leg| {
                leg.unload_location == event.location
                    && event.voyage.as_ref() == Some(&leg.voyage_number)
            }),
            HandlingActivityType::Claim => self.final_arrival_location() == Some(&event.location),
            HandlingActivityType::Customs => self.legs.iter().any(|leg| {
                leg.load_location == event.location || leg.unload_location == event.location
            }),
        }
    }
}
